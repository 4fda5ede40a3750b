//! Uniform response envelope
//!
//! Every business-level outcome is wrapped in one of three shapes, always
//! with HTTP status 200: `{status:"success", data?}` for successful
//! operations, `{status:"failed", message, errors?}` for validation failures
//! and absent entities, and `{status:"error", message}` for unexpected
//! failures whose detail stays in the server logs. Only authentication
//! failures leave this scheme (401, empty body).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::user::FieldError;

pub const VALIDATION_FAILED: &str = "Validation failed. Please check your input.";
pub const USER_NOT_FOUND: &str = "User does not exist.";
pub const PASSWORD_MISMATCH: &str = "The current password does not match.";
pub const SYSTEM_ERROR: &str = "System error, please try again later.";

/// Successful API response
#[derive(Debug, Clone, Serialize)]
pub struct ResponseSuccess<T: Serialize> {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

impl<T: Serialize> ResponseSuccess<T> {
    pub fn new(data: T) -> Self {
        Self {
            status: "success",
            data: Some(data),
        }
    }
}

impl ResponseSuccess<()> {
    /// Success without a payload, serialized as `{"status":"success"}`
    pub fn empty() -> Self {
        Self {
            status: "success",
            data: None,
        }
    }
}

/// Failed API response for business-level rejections
#[derive(Debug, Clone, Serialize)]
pub struct ResponseFailed {
    status: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<FieldError>>,
}

impl ResponseFailed {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "failed",
            message: message.into(),
            errors: None,
        }
    }

    pub fn with_errors(message: impl Into<String>, errors: Vec<FieldError>) -> Self {
        Self {
            status: "failed",
            message: message.into(),
            errors: Some(errors),
        }
    }
}

/// Error API response for unexpected failures
#[derive(Debug, Clone, Serialize)]
pub struct ResponseError {
    status: &'static str,
    message: String,
}

impl ResponseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: message.into(),
        }
    }

    /// The generic envelope for unexpected failures; the underlying cause
    /// is logged server-side only
    pub fn system() -> Self {
        Self::new(SYSTEM_ERROR)
    }
}

impl<T: Serialize> IntoResponse for ResponseSuccess<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

impl IntoResponse for ResponseFailed {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

impl IntoResponse for ResponseError {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_with_data() {
        let response = ResponseSuccess::new(vec!["a", "b"]);
        let json = serde_json::to_string(&response).unwrap();

        assert_eq!(json, r#"{"status":"success","data":["a","b"]}"#);
    }

    #[test]
    fn test_success_empty_omits_data() {
        let json = serde_json::to_string(&ResponseSuccess::empty()).unwrap();
        assert_eq!(json, r#"{"status":"success"}"#);
    }

    #[test]
    fn test_failed_without_errors() {
        let json = serde_json::to_string(&ResponseFailed::new(USER_NOT_FOUND)).unwrap();
        assert_eq!(
            json,
            r#"{"status":"failed","message":"User does not exist."}"#
        );
    }

    #[test]
    fn test_failed_with_errors() {
        let errors = vec![FieldError {
            field: "name",
            message: "Name is empty".to_string(),
        }];
        let json =
            serde_json::to_string(&ResponseFailed::with_errors(VALIDATION_FAILED, errors))
                .unwrap();

        assert!(json.contains(r#""status":"failed""#));
        assert!(json.contains(r#""field":"name""#));
    }

    #[test]
    fn test_error_envelope() {
        let json = serde_json::to_string(&ResponseError::system()).unwrap();
        assert_eq!(
            json,
            r#"{"status":"error","message":"System error, please try again later."}"#
        );
    }
}
