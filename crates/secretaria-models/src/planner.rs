//! Weekly lesson-plan domain models and DTOs.

use chrono::NaiveDate;
use secretaria_core::{ListFilter, contains_ci};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::enums::{ClassGroup, Shift, Subject};
use crate::ids::{PlanId, TeacherId};

/// A weekly lesson plan, from `/planejamentos-semanais/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyPlan {
    pub id: PlanId,
    #[serde(rename = "professor")]
    pub teacher: TeacherId,
    #[serde(rename = "professor_nome", default)]
    pub teacher_name: Option<String>,
    #[serde(rename = "turma")]
    pub class_group: ClassGroup,
    #[serde(rename = "disciplina")]
    pub subject: Subject,
    #[serde(rename = "data_aula")]
    pub lesson_date: NaiveDate,
    #[serde(rename = "turno")]
    pub shift: Shift,
    #[serde(rename = "conteudo", default)]
    pub content: Option<String>,
    #[serde(rename = "atividades", default)]
    pub activities: Option<String>,
    #[serde(rename = "recursos", default)]
    pub resources: Option<String>,
    #[serde(rename = "observacoes", default)]
    pub notes: Option<String>,
}

/// DTO for filing a lesson plan.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreatePlanDto {
    #[serde(rename = "professor")]
    pub teacher: TeacherId,
    #[serde(rename = "turma")]
    pub class_group: ClassGroup,
    #[serde(rename = "disciplina")]
    pub subject: Subject,
    #[serde(rename = "data_aula")]
    pub lesson_date: NaiveDate,
    #[serde(rename = "turno")]
    pub shift: Shift,
    #[serde(rename = "conteudo", skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 2000))]
    pub content: Option<String>,
    #[serde(rename = "atividades", skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 2000))]
    pub activities: Option<String>,
    #[serde(rename = "recursos", skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 1000))]
    pub resources: Option<String>,
    #[serde(rename = "observacoes", skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 1000))]
    pub notes: Option<String>,
}

/// Client-side filter criteria for the plan list.
#[derive(Debug, Clone, Default)]
pub struct PlanFilter {
    pub teacher_name: Option<String>,
    pub class_group: Option<ClassGroup>,
    pub subject: Option<Subject>,
}

impl ListFilter<WeeklyPlan> for PlanFilter {
    fn is_empty(&self) -> bool {
        self.teacher_name.is_none() && self.class_group.is_none() && self.subject.is_none()
    }

    fn matches(&self, record: &WeeklyPlan) -> bool {
        self.teacher_name.as_deref().is_none_or(|needle| {
            record
                .teacher_name
                .as_deref()
                .is_some_and(|name| contains_ci(name, needle))
        }) && self
            .class_group
            .is_none_or(|group| record.class_group == group)
            && self.subject.is_none_or(|subject| record.subject == subject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_record() {
        let json = r#"{
            "id": 8,
            "professor": 4,
            "professor_nome": "Carlos Lima",
            "turma": "3B",
            "disciplina": "MAT",
            "data_aula": "2025-06-03",
            "turno": "MANHA",
            "conteudo": "Funções quadráticas",
            "atividades": "Lista 12",
            "recursos": "Projetor",
            "observacoes": null
        }"#;
        let plan: WeeklyPlan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.class_group, ClassGroup::ThirdB);
        assert_eq!(plan.shift, Shift::Morning);
        assert!(plan.notes.is_none());
    }

    #[test]
    fn filter_matches_class_and_subject() {
        let plan: WeeklyPlan = serde_json::from_str(
            r#"{
                "id": 8,
                "professor": 4,
                "turma": "3B",
                "disciplina": "MAT",
                "data_aula": "2025-06-03",
                "turno": "TARDE"
            }"#,
        )
        .unwrap();
        let filter = PlanFilter {
            class_group: Some(ClassGroup::ThirdB),
            subject: Some(Subject::Mathematics),
            ..PlanFilter::default()
        };
        assert!(filter.matches(&plan));
    }
}
