//! Disciplinary record models and DTOs.
//!
//! Two subtypes with distinct reason vocabularies: a warning covers a single
//! date, a suspension covers a date range. Both always belong to exactly one
//! student.

use chrono::NaiveDate;
use secretaria_core::{ListFilter, contains_ci};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::enums::{SuspensionReason, WarningReason};
use crate::ids::{StudentId, SuspensionId, WarningId};

/// A written warning, as returned by the `/advertencias/` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Warning {
    pub id: WarningId,
    #[serde(rename = "aluno_nome", default)]
    pub student_name: Option<String>,
    #[serde(rename = "data")]
    pub date: NaiveDate,
    #[serde(rename = "motivo")]
    pub reason: WarningReason,
    #[serde(rename = "observacao", default)]
    pub notes: Option<String>,
}

/// A suspension, as returned by the `/suspensoes/` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suspension {
    pub id: SuspensionId,
    #[serde(rename = "aluno_nome", default)]
    pub student_name: Option<String>,
    #[serde(rename = "data_inicio")]
    pub start_date: NaiveDate,
    #[serde(rename = "data_fim")]
    pub end_date: NaiveDate,
    #[serde(rename = "motivo")]
    pub reason: SuspensionReason,
    #[serde(rename = "observacao", default)]
    pub notes: Option<String>,
}

/// DTO for issuing a warning.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateWarningDto {
    #[serde(rename = "aluno")]
    pub student: StudentId,
    #[serde(rename = "data")]
    pub date: NaiveDate,
    #[serde(rename = "motivo")]
    pub reason: WarningReason,
    #[serde(rename = "observacao", skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 1000))]
    pub notes: Option<String>,
}

/// DTO for issuing a suspension.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateSuspensionDto {
    #[serde(rename = "aluno")]
    pub student: StudentId,
    #[serde(rename = "data_inicio")]
    pub start_date: NaiveDate,
    #[serde(rename = "data_fim")]
    pub end_date: NaiveDate,
    #[serde(rename = "motivo")]
    pub reason: SuspensionReason,
    #[serde(rename = "observacao", skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 1000))]
    pub notes: Option<String>,
}

/// A student's disciplinary history merges both collections.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "tipo")]
pub enum DisciplinaryRecord {
    #[serde(rename = "Advertencia")]
    Warning(Warning),
    #[serde(rename = "Suspensao")]
    Suspension(Suspension),
}

impl DisciplinaryRecord {
    pub fn student_name(&self) -> Option<&str> {
        match self {
            Self::Warning(w) => w.student_name.as_deref(),
            Self::Suspension(s) => s.student_name.as_deref(),
        }
    }

    /// Date the record takes effect; the start date for suspensions.
    pub fn effective_date(&self) -> NaiveDate {
        match self {
            Self::Warning(w) => w.date,
            Self::Suspension(s) => s.start_date,
        }
    }

    pub fn reason_label(&self) -> &'static str {
        match self {
            Self::Warning(w) => w.reason.label(),
            Self::Suspension(s) => s.reason.label(),
        }
    }
}

/// Merge a student's warnings and suspensions into one history, newest first.
pub fn merge_history(warnings: Vec<Warning>, suspensions: Vec<Suspension>) -> Vec<DisciplinaryRecord> {
    let mut history: Vec<DisciplinaryRecord> = warnings
        .into_iter()
        .map(DisciplinaryRecord::Warning)
        .chain(suspensions.into_iter().map(DisciplinaryRecord::Suspension))
        .collect();
    history.sort_by(|a, b| b.effective_date().cmp(&a.effective_date()));
    history
}

/// Client-side filter criteria for warning lists.
#[derive(Debug, Clone, Default)]
pub struct WarningFilter {
    pub student_name: Option<String>,
    pub reason: Option<WarningReason>,
}

impl ListFilter<Warning> for WarningFilter {
    fn is_empty(&self) -> bool {
        self.student_name.is_none() && self.reason.is_none()
    }

    fn matches(&self, record: &Warning) -> bool {
        self.student_name.as_deref().is_none_or(|needle| {
            record
                .student_name
                .as_deref()
                .is_some_and(|name| contains_ci(name, needle))
        }) && self.reason.is_none_or(|reason| record.reason == reason)
    }
}
