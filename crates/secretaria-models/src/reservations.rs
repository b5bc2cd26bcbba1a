//! Room reservation domain models and DTOs.
//!
//! The backend rejects overlapping reservations for the same room and date;
//! the client surfaces that conflict error as-is. The start/end ordering,
//! however, is checked locally before any request is sent.

use chrono::{NaiveDate, NaiveTime};
use secretaria_core::{ListFilter, contains_ci};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::ids::{ReservationId, RoomId, TeacherId};

/// A reservation, as returned by the `/reservas/` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: ReservationId,
    #[serde(rename = "professor", default)]
    pub teacher: Option<TeacherId>,
    #[serde(rename = "professor_nome", default)]
    pub teacher_name: Option<String>,
    #[serde(rename = "sala")]
    pub room: RoomId,
    #[serde(rename = "sala_nome", default)]
    pub room_name: Option<String>,
    #[serde(rename = "data")]
    pub date: NaiveDate,
    #[serde(rename = "horario_inicio", with = "secretaria_core::serde::hhmm")]
    pub start_time: NaiveTime,
    #[serde(rename = "horario_fim", with = "secretaria_core::serde::hhmm")]
    pub end_time: NaiveTime,
    #[serde(rename = "motivo", default)]
    pub purpose: Option<String>,
}

/// DTO for booking a room.
///
/// The teacher reference is optional: teachers book for themselves (the
/// backend fills it from the session), the secretary books on behalf of a
/// named teacher.
#[derive(Debug, Clone, Serialize, Validate)]
#[validate(schema(function = validate_time_order))]
pub struct CreateReservationDto {
    #[serde(rename = "professor", skip_serializing_if = "Option::is_none")]
    pub teacher: Option<TeacherId>,
    #[serde(rename = "sala")]
    pub room: RoomId,
    #[serde(rename = "data")]
    pub date: NaiveDate,
    #[serde(rename = "horario_inicio", with = "secretaria_core::serde::hhmm")]
    pub start_time: NaiveTime,
    #[serde(rename = "horario_fim", with = "secretaria_core::serde::hhmm")]
    pub end_time: NaiveTime,
    #[serde(rename = "motivo", skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 300))]
    pub purpose: Option<String>,
}

/// The end time must be strictly after the start time.
fn validate_time_order(dto: &CreateReservationDto) -> Result<(), ValidationError> {
    if dto.start_time < dto.end_time {
        Ok(())
    } else {
        Err(ValidationError::new("horario_fim")
            .with_message("the end time must be after the start time".into()))
    }
}

/// Client-side filter criteria for the reservation list.
#[derive(Debug, Clone, Default)]
pub struct ReservationFilter {
    pub room_name: Option<String>,
    pub date: Option<NaiveDate>,
}

impl ListFilter<Reservation> for ReservationFilter {
    fn is_empty(&self) -> bool {
        self.room_name.is_none() && self.date.is_none()
    }

    fn matches(&self, record: &Reservation) -> bool {
        self.room_name.as_deref().is_none_or(|needle| {
            record
                .room_name
                .as_deref()
                .is_some_and(|name| contains_ci(name, needle))
        }) && self.date.is_none_or(|date| record.date == date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(start: &str, end: &str) -> CreateReservationDto {
        CreateReservationDto {
            teacher: None,
            room: RoomId::new(1),
            date: "2025-06-02".parse().unwrap(),
            start_time: start.parse().unwrap(),
            end_time: end.parse().unwrap(),
            purpose: Some("Aula prática".to_string()),
        }
    }

    #[test]
    fn inverted_times_are_rejected_with_a_field_keyed_message() {
        let errors = dto("09:00:00", "08:00:00").validate().unwrap_err();
        let failure = secretaria_core::ValidationFailure::from(errors);
        assert_eq!(
            failure.field_errors["horario_fim"],
            vec!["the end time must be after the start time".to_string()]
        );
    }

    #[test]
    fn equal_times_are_rejected() {
        assert!(dto("09:00:00", "09:00:00").validate().is_err());
    }

    #[test]
    fn ordered_times_pass() {
        assert!(dto("08:00:00", "09:30:00").validate().is_ok());
    }

    #[test]
    fn deserializes_backend_time_format() {
        let json = r#"{
            "id": 3,
            "professor": 4,
            "professor_nome": "Carlos Lima",
            "sala": 1,
            "sala_nome": "Laboratório 2",
            "data": "2025-06-02",
            "horario_inicio": "08:00:00",
            "horario_fim": "09:40:00"
        }"#;
        let reservation: Reservation = serde_json::from_str(json).unwrap();
        assert_eq!(reservation.start_time.to_string(), "08:00:00");
        assert!(reservation.start_time < reservation.end_time);
    }

    #[test]
    fn payload_times_serialize_as_hhmm() {
        let json = serde_json::to_value(dto("08:00:00", "09:40:00")).unwrap();
        assert_eq!(json["horario_inicio"], "08:00");
        assert_eq!(json["horario_fim"], "09:40");
    }
}
