use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt;

use crate::models::ErrorResponse;

/// Longest accepted player name or season field
pub const MAX_FIELD_LEN: usize = 100;

/// Application error types
///
/// Bad player names and seasons are not errors here: they render as a chart
/// with an error title. These cover requests the server cannot answer at all.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request data
    ValidationError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let (error_code, message) = match self {
            AppError::ValidationError(msg) => ("validation_error", msg.clone()),
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: error_code.to_string(),
            message,
        })
    }
}

/// Validation functions
pub fn validate_query_field(field: &str, value: &str) -> Result<(), AppError> {
    let len = value.chars().count();
    if len > MAX_FIELD_LEN {
        return Err(AppError::ValidationError(format!(
            "{} must be at most {} characters, got {}",
            field, MAX_FIELD_LEN, len
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_query_field_valid() {
        assert!(validate_query_field("player", "").is_ok());
        assert!(validate_query_field("player", "LeBron James").is_ok());
        assert!(validate_query_field("season", &"9".repeat(MAX_FIELD_LEN)).is_ok());
    }

    #[test]
    fn test_validate_query_field_invalid() {
        let err = validate_query_field("player", &"x".repeat(MAX_FIELD_LEN + 1)).unwrap_err();
        assert!(err.to_string().contains("player"));
        assert!(err.to_string().contains("101"));
    }

    #[test]
    fn test_validate_counts_characters() {
        assert!(validate_query_field("player", &"č".repeat(MAX_FIELD_LEN)).is_ok());
    }

    #[test]
    fn test_error_display() {
        let err = AppError::ValidationError("test error".to_string());
        assert!(err.to_string().contains("Validation error"));
    }

    #[test]
    fn test_error_status_code() {
        assert_eq!(
            AppError::ValidationError("".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_error_response_body() {
        let err = AppError::ValidationError("season too long".to_string());
        let resp = err.error_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
