//! Standardized API error body.

use serde::{Deserialize, Serialize};

/// The error body returned by every non-2xx response:
/// `{"error": "...", "message": "..."}` with `message` optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Short, human-readable summary matching the HTTP status.
    pub error: String,

    /// Explanation specific to this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    // Common error constructors
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("Bad Request").with_message(message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("Not Found").with_message(message)
    }

    pub fn validation(errors: &[String]) -> Self {
        Self::new("Bad Request").with_message(errors.join(", "))
    }

    pub fn internal_error() -> Self {
        Self::new("Internal Server Error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_is_omitted_when_absent() {
        let json = serde_json::to_string(&ErrorResponse::internal_error()).unwrap();
        assert_eq!(json, r#"{"error":"Internal Server Error"}"#);
    }

    #[test]
    fn validation_errors_are_joined() {
        let errors = vec!["title is required".to_string(), "content is required".to_string()];
        let body = ErrorResponse::validation(&errors);
        assert_eq!(body.error, "Bad Request");
        assert_eq!(
            body.message.as_deref(),
            Some("title is required, content is required")
        );
    }
}
