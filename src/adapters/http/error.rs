//! Error body shared by every endpoint.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::foundation::{ErrorCode, ValidationError};
use crate::ports::RecordStoreError;

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Client errors map to 400, everything else to 500.
pub(crate) fn error_response(code: ErrorCode, body: ErrorResponse) -> Response {
    let status = if code.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(body)).into_response()
}

pub(crate) fn validation_failure(error: ValidationError) -> Response {
    let code = ErrorCode::from(&error);
    error_response(code, ErrorResponse::new(code, error.to_string()))
}

// Store details stay in the logs; clients get a generic message.
pub(crate) fn storage_failure(error: RecordStoreError) -> Response {
    tracing::error!(error = %error, "record store failure");
    error_response(
        ErrorCode::StorageError,
        ErrorResponse::new(ErrorCode::StorageError, "Failed to access saved records"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_are_omitted_when_absent() {
        let json =
            serde_json::to_value(ErrorResponse::new(ErrorCode::EmptyField, "nope")).unwrap();
        assert_eq!(json["code"], "EMPTY_FIELD");
        assert!(json.get("details").is_none());
    }

    #[test]
    fn validation_maps_to_bad_request() {
        let response = validation_failure(ValidationError::empty_field("content"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn storage_maps_to_internal_error() {
        let response = storage_failure(RecordStoreError::IoError("disk full".into()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
