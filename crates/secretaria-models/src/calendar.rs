//! Calendar event domain models and DTOs.

use chrono::NaiveDate;
use secretaria_core::{ListFilter, contains_ci};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::enums::EventKind;
use crate::ids::EventId;

/// A calendar event, as returned by `/eventos-calendario/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: EventId,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    #[serde(rename = "data")]
    pub date: NaiveDate,
    #[serde(rename = "tipo")]
    pub kind: EventKind,
}

/// DTO for publishing an event.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateEventDto {
    #[serde(rename = "titulo")]
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[serde(rename = "descricao", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "data")]
    pub date: NaiveDate,
    #[serde(rename = "tipo")]
    pub kind: EventKind,
}

/// Client-side filter criteria for the event list.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub title: Option<String>,
    pub kind: Option<EventKind>,
}

impl ListFilter<CalendarEvent> for EventFilter {
    fn is_empty(&self) -> bool {
        self.title.is_none() && self.kind.is_none()
    }

    fn matches(&self, record: &CalendarEvent) -> bool {
        self.title
            .as_deref()
            .is_none_or(|needle| contains_ci(&record.title, needle))
            && self.kind.is_none_or(|kind| record.kind == kind)
    }
}
