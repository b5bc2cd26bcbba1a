//! Pending-task domain models and DTOs.

use chrono::NaiveDate;
use secretaria_core::{ListFilter, contains_ci};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::enums::TaskStatus;
use crate::ids::{StudentId, TaskId};

/// A pending task assigned to a student, from `/atividades-pendentes/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingTask {
    pub id: TaskId,
    #[serde(rename = "aluno_nome", default)]
    pub student_name: Option<String>,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    #[serde(rename = "data_limite")]
    pub due_date: NaiveDate,
    pub status: TaskStatus,
    /// Read-only; stamped by the backend on creation.
    #[serde(rename = "data_criacao", default)]
    pub created_at: Option<NaiveDate>,
}

impl PendingTask {
    pub fn is_open(&self) -> bool {
        self.status != TaskStatus::Completed
    }
}

/// DTO for assigning a task.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateTaskDto {
    #[serde(rename = "aluno")]
    pub student: StudentId,
    #[serde(rename = "titulo")]
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[serde(rename = "descricao", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "data_limite")]
    pub due_date: NaiveDate,
    pub status: TaskStatus,
}

/// Client-side filter criteria for the task list.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub title: Option<String>,
    pub student_name: Option<String>,
    pub status: Option<TaskStatus>,
}

impl ListFilter<PendingTask> for TaskFilter {
    fn is_empty(&self) -> bool {
        self.title.is_none() && self.student_name.is_none() && self.status.is_none()
    }

    fn matches(&self, record: &PendingTask) -> bool {
        self.title
            .as_deref()
            .is_none_or(|needle| contains_ci(&record.title, needle))
            && self.student_name.as_deref().is_none_or(|needle| {
                record
                    .student_name
                    .as_deref()
                    .is_some_and(|name| contains_ci(name, needle))
            })
            && self.status.is_none_or(|status| record.status == status)
    }
}
