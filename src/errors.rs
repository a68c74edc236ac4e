use std::fmt;

use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse
};
use derive_more::Display;
use serde::Serialize;
use validator::ValidationErrors;

#[derive(Debug)]
pub enum AppError {
    ValidationError(Vec<FieldError>),
    NotFound(String),
    InternalError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ValidationError(errors) => {
                let messages = errors.iter()
                    .map(|e| format!("{}:{}", e.field, e.message))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "validation error: {}", messages)
            }
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::InternalError(msg) => write!(f, "Internal server error: {}", msg)
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::ValidationError(errors) => {
                serde_json::json!({
                    "error": "Validation failed",
                    "details": errors
                })
            }
            _ => {
                serde_json::json!({"error": self.to_string()})
            }
        };
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let field_errors = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(|e| FieldError {
                    field: field.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| "Invalid value".to_string()),
                })
            })
            .collect();

        AppError::ValidationError(field_errors)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalError(err.to_string())
    }
}

#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Failures talking to the Sanity content lake.
///
/// Messages may embed URLs or headers from the transport layer and must go
/// through `sanitize_error` before they are logged or shown.
#[derive(Debug, Display)]
pub enum CmsError {
    #[display("Sanity not configured")]
    NotConfigured,

    #[display("Invalid Sanity endpoint: {_0}")]
    InvalidEndpoint(String),

    #[display("Request failed: {_0}")]
    Request(String),

    #[display("Request timed out: {_0}")]
    Timeout(String),

    #[display("Sanity API responded with {status}: {body}")]
    Status { status: u16, body: String },

    #[display("Invalid response payload: {_0}")]
    Decode(String),
}

impl std::error::Error for CmsError {}

impl CmsError {
    /// Whether another attempt could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            CmsError::Request(_) | CmsError::Timeout(_) => true,
            CmsError::Status { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for CmsError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            CmsError::Timeout(err.to_string())
        } else if err.is_decode() {
            CmsError::Decode(err.to_string())
        } else {
            CmsError::Request(err.to_string())
        }
    }
}

impl From<serde_json::Error> for CmsError {
    fn from(err: serde_json::Error) -> Self {
        CmsError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_and_throttling_are_retryable() {
        assert!(CmsError::Status { status: 503, body: String::new() }.is_retryable());
        assert!(CmsError::Status { status: 429, body: String::new() }.is_retryable());
        assert!(!CmsError::Status { status: 401, body: String::new() }.is_retryable());
        assert!(!CmsError::NotConfigured.is_retryable());
        assert!(CmsError::Timeout("10s".into()).is_retryable());
    }

    #[test]
    fn not_found_maps_to_404_json() {
        let err = AppError::NotFound("Blog post not found".into());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Not found: Blog post not found");
    }
}
