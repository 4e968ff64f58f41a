//! Error type for connector invocations.
//!
//! Every failure of a script run is represented by [`ConnectorError`] and is
//! turned into a JSON `{"error": ...}` body at the handler boundary.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::connector::response::{json_response, ErrorBody};

/// Failures a single script run can produce.
#[derive(Debug, thiserror::Error)]
pub enum ConnectorError {
    /// A required request field was absent or empty.
    #[error("Both {0} and {1} must be provided.")]
    MissingField(&'static str, &'static str),

    /// The body was not a JSON object of the expected shape.
    #[error("Invalid JSON body: {0}")]
    MalformedJson(String),

    /// The supplied pattern failed to compile.
    #[error("Invalid regex pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// The operation identifier names no known operation.
    #[error("Unknown operation ID '{0}'")]
    UnknownOperation(String),

    /// The inbound body could not be read (I/O failure or size limit).
    #[error("Failed to read request body: {0}")]
    Body(String),

    /// The caller cancelled while the body was still being read.
    #[error("Request was cancelled")]
    Cancelled,

    /// The run did not finish within the configured request timeout.
    #[error("Request timed out after {0}s")]
    Timeout(u64),

    /// Any unexpected failure, including a panic while handling the request.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ConnectorError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ConnectorError::MissingField(..)
            | ConnectorError::MalformedJson(_)
            | ConnectorError::InvalidPattern(_)
            | ConnectorError::UnknownOperation(_)
            | ConnectorError::Body(_) => StatusCode::BAD_REQUEST,

            ConnectorError::Timeout(_) => StatusCode::REQUEST_TIMEOUT,

            ConnectorError::Cancelled => StatusCode::SERVICE_UNAVAILABLE,

            ConnectorError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short identifier used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            ConnectorError::MissingField(..) => "missing_field",
            ConnectorError::MalformedJson(_) => "malformed_json",
            ConnectorError::InvalidPattern(_) => "invalid_pattern",
            ConnectorError::UnknownOperation(_) => "unknown_operation",
            ConnectorError::Body(_) => "body",
            ConnectorError::Timeout(_) => "timeout",
            ConnectorError::Cancelled => "cancelled",
            ConnectorError::Internal(_) => "internal",
        }
    }
}

impl From<serde_json::Error> for ConnectorError {
    fn from(err: serde_json::Error) -> Self {
        ConnectorError::MalformedJson(err.to_string())
    }
}

impl IntoResponse for ConnectorError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        json_response(self.status_code(), &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message_names_both_fields() {
        let err = ConnectorError::MissingField("textToCheck", "regex");
        assert_eq!(err.to_string(), "Both textToCheck and regex must be provided.");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ConnectorError::UnknownOperation("Nope".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ConnectorError::Timeout(30).status_code(), StatusCode::REQUEST_TIMEOUT);
        assert_eq!(ConnectorError::Cancelled.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            ConnectorError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_invalid_pattern_from_regex_error() {
        let err: ConnectorError = regex::Regex::new("(").unwrap_err().into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().starts_with("Invalid regex pattern: "));
    }
}
