//! Guardian domain models and DTOs.
//!
//! A guardian may be referenced by many students; the student side holds the
//! reference, so nothing here points back at students.

use chrono::NaiveDate;
use secretaria_core::{ListFilter, contains_ci};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ids::GuardianId;
use crate::students::validate_cpf;

/// A guardian, as returned by the `/responsaveis/` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guardian {
    pub id: GuardianId,
    pub name: String,
    #[serde(rename = "phone_number", default)]
    pub phone: Option<String>,
    pub email: String,
    pub cpf: String,
    #[serde(rename = "birthday", default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub address: Option<String>,
}

/// DTO for registering a new guardian.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateGuardianDto {
    #[validate(length(min = 1, max = 150))]
    pub name: String,
    #[serde(rename = "phone_number", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[validate(email)]
    pub email: String,
    #[validate(custom(function = validate_cpf))]
    pub cpf: String,
    #[serde(rename = "birthday", skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Client-side filter criteria for the guardian list.
#[derive(Debug, Clone, Default)]
pub struct GuardianFilter {
    pub name: Option<String>,
    pub cpf: Option<String>,
}

impl ListFilter<Guardian> for GuardianFilter {
    fn is_empty(&self) -> bool {
        self.name.is_none() && self.cpf.is_none()
    }

    fn matches(&self, record: &Guardian) -> bool {
        self.name
            .as_deref()
            .is_none_or(|needle| contains_ci(&record.name, needle))
            && self
                .cpf
                .as_deref()
                .is_none_or(|needle| contains_ci(&record.cpf, needle))
    }
}
