/*
[INPUT]:  Error sources (HTTP, controller API, serialization, session, references)
[OUTPUT]: Structured error types with status and retry hints
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

use crate::types::{ErrorBody, RefParseError};

/// Main error type for controller operations
#[derive(Error, Debug)]
pub enum AviError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Controller returned a non-2xx response
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Login was rejected or no usable session exists
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// A reference field could not be parsed
    #[error("Invalid reference: {0}")]
    InvalidReference(#[from] RefParseError),

    /// Lookup by name found nothing
    #[error("No object of type {object_type} with name {name} is found")]
    NotFound { object_type: String, name: String },

    /// Lookup by name matched more than one object
    #[error("More than one object ({count}) of type {object_type} with name {name} is found")]
    MultipleFound {
        object_type: String,
        name: String,
        count: usize,
    },

    /// Update was attempted on an object without a uuid
    #[error("Object of type {object_type} has no uuid")]
    MissingUuid { object_type: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request did not complete in time
    #[error("Request timed out after {duration}s")]
    Timeout { duration: u64 },
}

impl AviError {
    /// Check if the error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            AviError::Http(_) | AviError::Timeout { .. } => true,
            AviError::Api { status, .. } => {
                *status == StatusCode::TOO_MANY_REQUESTS.as_u16()
                    || *status == StatusCode::BAD_GATEWAY.as_u16()
                    || *status == StatusCode::SERVICE_UNAVAILABLE.as_u16()
                    || *status == StatusCode::GATEWAY_TIMEOUT.as_u16()
            }
            _ => false,
        }
    }

    /// Check if error indicates authentication failure
    pub fn is_auth_error(&self) -> bool {
        match self {
            AviError::Authentication { .. } => true,
            AviError::Api { status, .. } => {
                *status == StatusCode::UNAUTHORIZED.as_u16()
                    || *status == StatusCode::FORBIDDEN.as_u16()
            }
            _ => false,
        }
    }

    /// HTTP status attached to the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            AviError::Api { status, .. } => Some(*status),
            AviError::Http(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }

    /// Build an API error from a status code and raw response body.
    ///
    /// Uses the body's `error` key when it is a JSON error document.
    pub fn api_error(status: StatusCode, body: &str) -> Self {
        let message = match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => parsed.error,
            Err(_) if body.trim().is_empty() => status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string(),
            Err(_) => body.trim().to_string(),
        };
        AviError::Api {
            status: status.as_u16(),
            message,
        }
    }
}

/// Result type alias for controller operations
pub type Result<T> = std::result::Result<T, AviError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_retryable() {
        let timeout_err = AviError::Timeout { duration: 30 };
        assert!(timeout_err.is_retryable());

        let busy = AviError::api_error(StatusCode::SERVICE_UNAVAILABLE, "");
        assert!(busy.is_retryable());

        let not_found = AviError::NotFound {
            object_type: "pool".to_string(),
            name: "web".to_string(),
        };
        assert!(!not_found.is_retryable());
    }

    #[test]
    fn test_error_is_auth_error() {
        assert!(AviError::api_error(StatusCode::UNAUTHORIZED, "").is_auth_error());
        assert!(AviError::Authentication {
            message: "bad password".to_string()
        }
        .is_auth_error());
        assert!(!AviError::Timeout { duration: 30 }.is_auth_error());
    }

    #[test]
    fn test_api_error_uses_error_key() {
        let err = AviError::api_error(
            StatusCode::BAD_REQUEST,
            r#"{"error": "Pool with this Name and Tenant already exists."}"#,
        );
        match err {
            AviError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Pool with this Name and Tenant already exists.");
            }
            _ => panic!("Expected Api error variant"),
        }
    }

    #[test]
    fn test_api_error_falls_back_to_body_or_reason() {
        let err = AviError::api_error(StatusCode::NOT_FOUND, "  no such page ");
        assert_eq!(err.to_string(), "API error (status 404): no such page");

        let err = AviError::api_error(StatusCode::NOT_FOUND, "");
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "API error (status 404): Not Found");
    }
}
