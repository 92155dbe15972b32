// Common DTOs for public API
//
// Response bodies shared by several endpoints. The shapes follow the
// flask-restful conventions the API clients already depend on.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Plain confirmation or error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "The event has been deleted!")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of a 400 response: offending argument name mapped to its help text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldErrorResponse {
    pub message: BTreeMap<String, String>,
}

impl FieldErrorResponse {
    pub fn single(field: impl Into<String>, help: impl Into<String>) -> Self {
        let mut message = BTreeMap::new();
        message.insert(field.into(), help.into());
        Self { message }
    }
}

/// Health check payload
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_response_serialization() {
        let body = MessageResponse::new("The event has been deleted!");
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"message":"The event has been deleted!"}"#);
    }

    #[test]
    fn test_field_error_response_shape() {
        let body = FieldErrorResponse::single("event", "The event name is required!");
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["message"]["event"], "The event name is required!");
    }
}
