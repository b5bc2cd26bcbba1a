//! Student domain models and DTOs.
//!
//! This module contains all data structures related to student management:
//! the student entity, create/update DTOs with validation, the client-side
//! filter criteria and the dropout overview derived from the student list.

use chrono::NaiveDate;
use secretaria_core::{ListFilter, contains_ci};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::enums::ClassGroup;
use crate::ids::{GuardianId, StudentId};

/// A student, as returned by the `/alunos/` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    #[serde(rename = "name_aluno")]
    pub name: String,
    #[serde(rename = "email_aluno")]
    pub email: String,
    #[serde(rename = "phone_number_aluno", default)]
    pub phone: Option<String>,
    #[serde(rename = "cpf_aluno")]
    pub cpf: String,
    #[serde(rename = "birthday_aluno", default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(rename = "class_choice", default)]
    pub class_group: Option<ClassGroup>,
    /// Enrollment month code, `"01"`–`"12"`.
    #[serde(rename = "month_choice", default)]
    pub enrollment_month: Option<String>,
    #[serde(rename = "ano_letivo", default)]
    pub academic_year: Option<i32>,
    #[serde(rename = "Responsavel", default)]
    pub guardian: Option<GuardianId>,
    /// Read-only; resolved by the backend from the guardian reference.
    #[serde(rename = "responsavel_nome", default)]
    pub guardian_name: Option<String>,
    #[serde(rename = "faltas_aluno", with = "secretaria_core::serde::null_as_zero", default)]
    pub absences: u32,
    #[serde(rename = "presencas_aluno", with = "secretaria_core::serde::null_as_zero", default)]
    pub presences: u32,
    #[serde(rename = "ativo", default = "default_active")]
    pub active: bool,
    #[serde(rename = "comentario_descritivo", default)]
    pub comment: Option<String>,
}

fn default_active() -> bool {
    true
}

impl Student {
    /// Total classes held for this student so far.
    pub fn classes_held(&self) -> u32 {
        self.presences + self.absences
    }
}

/// Validate a CPF: exactly 11 digits once punctuation is stripped.
pub fn validate_cpf(value: &str) -> Result<(), ValidationError> {
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() == 11 {
        Ok(())
    } else {
        Err(ValidationError::new("cpf").with_message("CPF must contain exactly 11 digits".into()))
    }
}

/// Validate an enrollment month code (`"01"`–`"12"`).
pub fn validate_month_code(value: &str) -> Result<(), ValidationError> {
    let valid = value.len() == 2 && matches!(value.parse::<u8>(), Ok(1..=12));
    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("month")
            .with_message("enrollment month must be a code from \"01\" to \"12\"".into()))
    }
}

/// DTO for enrolling a new student.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateStudentDto {
    #[serde(rename = "name_aluno")]
    #[validate(length(min = 1, max = 150))]
    pub name: String,
    #[serde(rename = "email_aluno")]
    #[validate(email)]
    pub email: String,
    #[serde(rename = "phone_number_aluno", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "cpf_aluno")]
    #[validate(custom(function = validate_cpf))]
    pub cpf: String,
    #[serde(rename = "birthday_aluno", skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(rename = "class_choice", skip_serializing_if = "Option::is_none")]
    pub class_group: Option<ClassGroup>,
    #[serde(rename = "month_choice", skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = validate_month_code))]
    pub enrollment_month: Option<String>,
    #[serde(rename = "ano_letivo", skip_serializing_if = "Option::is_none")]
    pub academic_year: Option<i32>,
    #[serde(rename = "Responsavel", skip_serializing_if = "Option::is_none")]
    pub guardian: Option<GuardianId>,
    #[serde(rename = "faltas_aluno")]
    pub absences: u32,
    #[serde(rename = "presencas_aluno")]
    pub presences: u32,
    #[serde(rename = "ativo")]
    pub active: bool,
}

/// DTO for updating a student; only set fields are sent (PATCH semantics).
///
/// Which fields a caller may set depends on its role; the screen controller
/// checks the field mask before submitting.
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct UpdateStudentDto {
    #[serde(rename = "name_aluno", skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 150))]
    pub name: Option<String>,
    #[serde(rename = "email_aluno", skip_serializing_if = "Option::is_none")]
    #[validate(email)]
    pub email: Option<String>,
    #[serde(rename = "phone_number_aluno", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "birthday_aluno", skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(rename = "class_choice", skip_serializing_if = "Option::is_none")]
    pub class_group: Option<ClassGroup>,
    #[serde(rename = "month_choice", skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = validate_month_code))]
    pub enrollment_month: Option<String>,
    #[serde(rename = "ano_letivo", skip_serializing_if = "Option::is_none")]
    pub academic_year: Option<i32>,
    #[serde(rename = "Responsavel", skip_serializing_if = "Option::is_none")]
    pub guardian: Option<GuardianId>,
    #[serde(rename = "faltas_aluno", skip_serializing_if = "Option::is_none")]
    pub absences: Option<u32>,
    #[serde(rename = "presencas_aluno", skip_serializing_if = "Option::is_none")]
    pub presences: Option<u32>,
    #[serde(rename = "ativo", skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(rename = "comentario_descritivo", skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl UpdateStudentDto {
    /// Attendance-only update, the one edit an administrative assistant may
    /// perform.
    pub fn attendance(absences: u32, presences: u32) -> Self {
        Self {
            absences: Some(absences),
            presences: Some(presences),
            ..Self::default()
        }
    }

    /// Comment-only update, the one edit a teacher may perform.
    pub fn comment(text: impl Into<String>) -> Self {
        Self {
            comment: Some(text.into()),
            ..Self::default()
        }
    }

    /// Active-flag toggle used by the dropout overview.
    pub fn set_active(active: bool) -> Self {
        Self {
            active: Some(active),
            ..Self::default()
        }
    }
}

/// Client-side filter criteria for the student list.
#[derive(Debug, Clone, Default)]
pub struct StudentFilter {
    /// Case-insensitive substring on the student name.
    pub name: Option<String>,
    /// Case-insensitive substring on the CPF.
    pub cpf: Option<String>,
    /// Exact class/section code.
    pub class_group: Option<ClassGroup>,
    /// Exact active flag.
    pub active: Option<bool>,
}

impl ListFilter<Student> for StudentFilter {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.cpf.is_none()
            && self.class_group.is_none()
            && self.active.is_none()
    }

    fn matches(&self, record: &Student) -> bool {
        self.name
            .as_deref()
            .is_none_or(|needle| contains_ci(&record.name, needle))
            && self
                .cpf
                .as_deref()
                .is_none_or(|needle| contains_ci(&record.cpf, needle))
            && self
                .class_group
                .is_none_or(|group| record.class_group == Some(group))
            && self.active.is_none_or(|flag| record.active == flag)
    }
}

/// Derived counts for the dropout overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropoutSummary {
    pub total: usize,
    pub active: usize,
    pub evaded: usize,
}

/// Count active and evaded students over a loaded snapshot.
pub fn dropout_summary(students: &[Student]) -> DropoutSummary {
    let active = students.iter().filter(|s| s.active).count();
    DropoutSummary {
        total: students.len(),
        active,
        evaded: students.len() - active,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secretaria_core::apply_filter;

    pub(crate) fn sample_student(id: i64, name: &str, group: ClassGroup) -> Student {
        Student {
            id: StudentId::new(id),
            name: name.to_string(),
            email: format!("aluno{id}@escola.example"),
            phone: None,
            cpf: "52998224725".to_string(),
            birth_date: None,
            class_group: Some(group),
            enrollment_month: Some("02".to_string()),
            academic_year: Some(2025),
            guardian: None,
            guardian_name: None,
            absences: 4,
            presences: 36,
            active: true,
            comment: None,
        }
    }

    #[test]
    fn deserializes_wire_record() {
        let json = r#"{
            "id": 3,
            "name_aluno": "Maria Silva",
            "email_aluno": "maria@escola.example",
            "cpf_aluno": "52998224725",
            "class_choice": "2B",
            "month_choice": "03",
            "ano_letivo": 2025,
            "Responsavel": 9,
            "responsavel_nome": "José Silva",
            "faltas_aluno": null,
            "presencas_aluno": 12,
            "ativo": true,
            "comentario_descritivo": null
        }"#;
        let student: Student = serde_json::from_str(json).unwrap();
        assert_eq!(student.name, "Maria Silva");
        assert_eq!(student.class_group, Some(ClassGroup::SecondB));
        assert_eq!(student.guardian, Some(GuardianId::new(9)));
        assert_eq!(student.absences, 0);
        assert_eq!(student.presences, 12);
        assert!(student.active);
    }

    #[test]
    fn active_defaults_to_true_when_absent() {
        let json = r#"{
            "id": 1,
            "name_aluno": "A",
            "email_aluno": "a@escola.example",
            "cpf_aluno": "52998224725"
        }"#;
        let student: Student = serde_json::from_str(json).unwrap();
        assert!(student.active);
        assert_eq!(student.classes_held(), 0);
    }

    #[test]
    fn create_dto_rejects_bad_cpf_and_month() {
        let mut dto = CreateStudentDto {
            name: "João".to_string(),
            email: "joao@escola.example".to_string(),
            phone: None,
            cpf: "123".to_string(),
            birth_date: None,
            class_group: Some(ClassGroup::FirstA),
            enrollment_month: Some("13".to_string()),
            academic_year: None,
            guardian: None,
            absences: 0,
            presences: 0,
            active: true,
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("cpf"));
        assert!(errors.field_errors().contains_key("enrollment_month"));

        dto.cpf = "529.982.247-25".to_string();
        dto.enrollment_month = Some("02".to_string());
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn partial_update_serializes_only_set_fields() {
        let dto = UpdateStudentDto::attendance(5, 35);
        let json = serde_json::to_value(&dto).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["faltas_aluno"], 5);
        assert_eq!(object["presencas_aluno"], 35);

        let dto = UpdateStudentDto::comment("Boa evolução no bimestre.");
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(
            json.as_object().unwrap().keys().collect::<Vec<_>>(),
            vec!["comentario_descritivo"]
        );
    }

    #[test]
    fn filter_combines_name_and_class() {
        let students = vec![
            sample_student(1, "Maria Silva", ClassGroup::FirstA),
            sample_student(2, "Ana Maria", ClassGroup::SecondB),
            sample_student(3, "João Souza", ClassGroup::FirstA),
        ];
        let filter = StudentFilter {
            name: Some("maria".to_string()),
            class_group: Some(ClassGroup::FirstA),
            ..StudentFilter::default()
        };
        let view = apply_filter(&students, &filter);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].name, "Maria Silva");
    }

    #[test]
    fn dropout_summary_counts_evaded() {
        let mut students = vec![
            sample_student(1, "A", ClassGroup::FirstA),
            sample_student(2, "B", ClassGroup::FirstA),
            sample_student(3, "C", ClassGroup::FirstB),
        ];
        students[2].active = false;
        let summary = dropout_summary(&students);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.active, 2);
        assert_eq!(summary.evaded, 1);
    }
}
