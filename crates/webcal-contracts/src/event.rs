// Event DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Confirmation text returned by `POST /event`
pub const EVENT_ADDED_MESSAGE: &str = "The event has been added!";

/// Confirmation text returned by `DELETE /event/{id}`
pub const EVENT_DELETED_MESSAGE: &str = "The event has been deleted!";

/// Error text for lookups of an unknown id
pub const EVENT_NOT_FOUND_MESSAGE: &str = "The event doesn't exist!";

/// A calendar record: a name on a date.
///
/// `date` serializes as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Event {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Meeting")]
    pub event: String,
    #[schema(value_type = String, format = Date, example = "2024-01-15")]
    pub date: NaiveDate,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.id, self.event, self.date)
    }
}

/// Request body for `POST /event`.
///
/// Both fields are optional at the wire level so that a missing field
/// surfaces as a validation error naming it, not as a generic decode error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateEventRequest {
    #[schema(example = "Meeting")]
    pub event: Option<String>,
    #[schema(example = "2024-01-15")]
    pub date: Option<String>,
}

/// Response for `POST /event`, echoing what was stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EventCreated {
    #[schema(example = "The event has been added!")]
    pub message: String,
    #[schema(example = "Meeting")]
    pub event: String,
    #[schema(value_type = String, format = Date, example = "2024-01-15")]
    pub date: NaiveDate,
}

impl EventCreated {
    pub fn new(event: String, date: NaiveDate) -> Self {
        Self {
            message: EVENT_ADDED_MESSAGE.to_string(),
            event,
            date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn test_event_serializes_date_as_iso() {
        let event = Event {
            id: 7,
            event: "Meeting".to_string(),
            date: jan_15(),
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": 7, "event": "Meeting", "date": "2024-01-15"})
        );
    }

    #[test]
    fn test_event_display() {
        let event = Event {
            id: 3,
            event: "Dentist".to_string(),
            date: jan_15(),
        };
        assert_eq!(event.to_string(), "3, Dentist, 2024-01-15");
    }

    #[test]
    fn test_event_created_echoes_input() {
        let created = EventCreated::new("Meeting".to_string(), jan_15());
        let value = serde_json::to_value(&created).unwrap();
        assert_eq!(value["message"], "The event has been added!");
        assert_eq!(value["event"], "Meeting");
        assert_eq!(value["date"], "2024-01-15");
    }

    #[test]
    fn test_create_event_request_missing_fields() {
        let req: CreateEventRequest = serde_json::from_str(r#"{"event": "Meeting"}"#).unwrap();
        assert_eq!(req.event.as_deref(), Some("Meeting"));
        assert_eq!(req.date, None);
    }
}
