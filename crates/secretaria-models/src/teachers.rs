//! Teacher domain models and DTOs.

use chrono::NaiveDate;
use secretaria_core::{ListFilter, contains_ci};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::enums::Subject;
use crate::ids::TeacherId;
use crate::students::validate_cpf;

/// A teacher, as returned by the `/professores/` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    pub id: TeacherId,
    #[serde(rename = "name_professor")]
    pub name: String,
    #[serde(rename = "phone_number_professor", default)]
    pub phone: Option<String>,
    #[serde(rename = "email_professor")]
    pub email: String,
    #[serde(rename = "cpf_professor")]
    pub cpf: String,
    #[serde(rename = "birthday_professor", default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(rename = "matricula", default)]
    pub registration: Option<String>,
    #[serde(rename = "disciplina")]
    pub subject: Subject,
    /// Read-only display label for the subject code.
    #[serde(rename = "disciplina_label", default)]
    pub subject_label: Option<String>,
}

/// DTO for registering a new teacher.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateTeacherDto {
    #[serde(rename = "name_professor")]
    #[validate(length(min = 1, max = 150))]
    pub name: String,
    #[serde(rename = "phone_number_professor", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "email_professor")]
    #[validate(email)]
    pub email: String,
    #[serde(rename = "cpf_professor")]
    #[validate(custom(function = validate_cpf))]
    pub cpf: String,
    #[serde(rename = "birthday_professor", skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(rename = "matricula", skip_serializing_if = "Option::is_none")]
    pub registration: Option<String>,
    #[serde(rename = "disciplina")]
    pub subject: Subject,
}

/// Client-side filter criteria for the teacher list.
#[derive(Debug, Clone, Default)]
pub struct TeacherFilter {
    pub name: Option<String>,
    pub subject: Option<Subject>,
}

impl ListFilter<Teacher> for TeacherFilter {
    fn is_empty(&self) -> bool {
        self.name.is_none() && self.subject.is_none()
    }

    fn matches(&self, record: &Teacher) -> bool {
        self.name
            .as_deref()
            .is_none_or(|needle| contains_ci(&record.name, needle))
            && self.subject.is_none_or(|subject| record.subject == subject)
    }
}
