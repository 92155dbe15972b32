// API error type and its HTTP mapping
//
// Validation errors use the flask-restful body shape
// `{"message": {"<field>": "<help>"}}`; everything else is
// `{"message": "<text>"}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use webcal_contracts::{FieldErrorResponse, MessageResponse, EVENT_NOT_FOUND_MESSAGE};

#[derive(Debug, Error)]
pub enum ApiError {
    /// A request argument is missing or malformed
    #[error("{field}: {message}")]
    Validation {
        field: &'static str,
        message: &'static str,
    },

    /// The request body could not be decoded at all
    #[error("Malformed request body: {0}")]
    BadRequest(String),

    /// No event with the requested id
    #[error("The event doesn't exist!")]
    NotFound,

    /// Storage or other unexpected failure. Details are logged, never returned.
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn validation(field: &'static str, message: &'static str) -> Self {
        ApiError::Validation { field, message }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::Validation { field, message } => {
                (status, Json(FieldErrorResponse::single(field, message))).into_response()
            }
            ApiError::BadRequest(detail) => {
                (status, Json(MessageResponse::new(detail))).into_response()
            }
            ApiError::NotFound => {
                (status, Json(MessageResponse::new(EVENT_NOT_FOUND_MESSAGE))).into_response()
            }
            ApiError::Internal(err) => {
                tracing::error!("Internal server error: {:#}", err);
                (status, Json(MessageResponse::new("Internal server error"))).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_validation_error_body() {
        let (status, body) =
            body_json(ApiError::validation("event", "The event name is required!")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"]["event"], "The event name is required!");
    }

    #[tokio::test]
    async fn test_not_found_body() {
        let (status, body) = body_json(ApiError::NotFound).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "The event doesn't exist!");
    }

    #[tokio::test]
    async fn test_internal_error_does_not_leak_details() {
        let err = anyhow::anyhow!("error returned from database: no such table: events");
        let (status, body) = body_json(ApiError::Internal(err)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Internal server error");
        assert!(!body.to_string().contains("database"));
    }
}
