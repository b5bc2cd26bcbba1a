//! Room domain models and DTOs.

use secretaria_core::{ListFilter, contains_ci};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::enums::RoomKind;
use crate::ids::RoomId;

/// A physical room, as returned by the `/salas/` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "tipo")]
    pub kind: RoomKind,
    /// Read-only display label for the kind code.
    #[serde(rename = "tipo_display", default)]
    pub kind_label: Option<String>,
    #[serde(rename = "capacidade")]
    pub capacity: u32,
    /// Free-text resource list (projector, lab benches, ...).
    #[serde(rename = "recursos", default)]
    pub resources: Option<String>,
}

/// DTO for registering a room.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateRoomDto {
    #[serde(rename = "nome")]
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(rename = "tipo")]
    pub kind: RoomKind,
    #[serde(rename = "capacidade")]
    #[validate(range(min = 1))]
    pub capacity: u32,
    #[serde(rename = "recursos", skip_serializing_if = "Option::is_none")]
    pub resources: Option<String>,
}

/// Client-side filter criteria for the room list.
#[derive(Debug, Clone, Default)]
pub struct RoomFilter {
    pub name: Option<String>,
    pub kind: Option<RoomKind>,
}

impl ListFilter<Room> for RoomFilter {
    fn is_empty(&self) -> bool {
        self.name.is_none() && self.kind.is_none()
    }

    fn matches(&self, record: &Room) -> bool {
        self.name
            .as_deref()
            .is_none_or(|needle| contains_ci(&record.name, needle))
            && self.kind.is_none_or(|kind| record.kind == kind)
    }
}
