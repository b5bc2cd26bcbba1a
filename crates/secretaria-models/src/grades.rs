//! Grade and term (bimester) domain models and DTOs.

use std::collections::BTreeMap;

use secretaria_core::{ListFilter, contains_ci};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::enums::Subject;
use crate::ids::{GradeId, StudentId, TermId};

/// An academic term, one of the four bimesters, from `/bimestres/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Term {
    pub id: TermId,
    /// Ordinal 1–4 within the academic year.
    #[serde(rename = "numero")]
    pub number: u8,
}

/// DTO for registering a term.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateTermDto {
    #[serde(rename = "numero")]
    #[validate(range(min = 1, max = 4))]
    pub number: u8,
}

/// A grade, as returned by the `/notas/` collection.
///
/// The student reference is write-only on the wire; list responses carry the
/// resolved name and the term's display label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grade {
    pub id: GradeId,
    #[serde(rename = "aluno_nome", default)]
    pub student_name: Option<String>,
    #[serde(rename = "bimestre")]
    pub term: TermId,
    #[serde(rename = "bimestre_numero", default)]
    pub term_label: Option<String>,
    #[serde(rename = "disciplina")]
    pub subject: Subject,
    /// Numeric value in [0, 10]; the backend serializes decimals as strings.
    #[serde(rename = "valor", with = "secretaria_core::serde::flexible_f64")]
    pub value: f64,
}

/// DTO for entering a grade.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateGradeDto {
    #[serde(rename = "aluno")]
    pub student: StudentId,
    #[serde(rename = "bimestre")]
    pub term: TermId,
    #[serde(rename = "disciplina")]
    pub subject: Subject,
    #[serde(rename = "valor")]
    #[validate(range(min = 0.0, max = 10.0))]
    pub value: f64,
}

/// Client-side filter criteria for the grade list.
#[derive(Debug, Clone, Default)]
pub struct GradeFilter {
    pub student_name: Option<String>,
    pub subject: Option<Subject>,
    pub term: Option<TermId>,
}

impl ListFilter<Grade> for GradeFilter {
    fn is_empty(&self) -> bool {
        self.student_name.is_none() && self.subject.is_none() && self.term.is_none()
    }

    fn matches(&self, record: &Grade) -> bool {
        self.student_name.as_deref().is_none_or(|needle| {
            record
                .student_name
                .as_deref()
                .is_some_and(|name| contains_ci(name, needle))
        }) && self.subject.is_none_or(|subject| record.subject == subject)
            && self.term.is_none_or(|term| record.term == term)
    }
}

/// Per-subject grade averages for the performance chart.
pub fn average_by_subject(grades: &[Grade]) -> BTreeMap<Subject, f64> {
    let mut sums: BTreeMap<Subject, (f64, usize)> = BTreeMap::new();
    for grade in grades {
        let entry = sums.entry(grade.subject).or_insert((0.0, 0));
        entry.0 += grade.value;
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(subject, (sum, count))| (subject, sum / count as f64))
        .collect()
}

/// The plain grade values, as fed to the approval computation.
pub fn grade_values(grades: &[Grade]) -> Vec<f64> {
    grades.iter().map(|grade| grade.value).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grade(id: i64, subject: Subject, value: f64) -> Grade {
        Grade {
            id: GradeId::new(id),
            student_name: Some("Maria Silva".to_string()),
            term: TermId::new(1),
            term_label: Some("1".to_string()),
            subject,
            value,
        }
    }

    #[test]
    fn deserializes_decimal_string_values() {
        let json = r#"{
            "id": 1,
            "aluno_nome": "Maria Silva",
            "bimestre": 2,
            "bimestre_numero": "2",
            "disciplina": "CN",
            "valor": "8.50"
        }"#;
        let parsed: Grade = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.value, 8.5);
        assert_eq!(parsed.subject, Subject::NaturalSciences);
    }

    #[test]
    fn create_dto_rejects_out_of_range_values() {
        let mut dto = CreateGradeDto {
            student: StudentId::new(1),
            term: TermId::new(1),
            subject: Subject::Mathematics,
            value: 10.5,
        };
        assert!(dto.validate().is_err());
        dto.value = 10.0;
        assert!(dto.validate().is_ok());
        dto.value = -0.1;
        assert!(dto.validate().is_err());
    }

    #[test]
    fn term_dto_bounds_the_ordinal() {
        assert!(CreateTermDto { number: 0 }.validate().is_err());
        assert!(CreateTermDto { number: 4 }.validate().is_ok());
        assert!(CreateTermDto { number: 5 }.validate().is_err());
    }

    #[test]
    fn averages_group_by_subject() {
        let grades = vec![
            grade(1, Subject::Mathematics, 8.0),
            grade(2, Subject::Mathematics, 6.0),
            grade(3, Subject::Languages, 9.0),
        ];
        let averages = average_by_subject(&grades);
        assert_eq!(averages[&Subject::Mathematics], 7.0);
        assert_eq!(averages[&Subject::Languages], 9.0);
    }

    #[test]
    fn grade_values_feed_the_standing_computation() {
        let grades = vec![grade(1, Subject::Mathematics, 8.0), grade(2, Subject::Languages, 9.0)];
        assert_eq!(grade_values(&grades), vec![8.0, 9.0]);
    }
}
