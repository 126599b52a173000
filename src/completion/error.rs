//! Error types for the completion proxy

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when calling the completion provider
#[derive(Debug, Error)]
pub enum CompletionError {
    /// Missing or rejected credentials
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Non-success response or transport failure (status 0)
    #[error("HTTP error (status {status}): {body}")]
    Http { status: u16, body: String },

    /// The provider did not answer within the configured timeout
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// JSON encoding issues
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CompletionError {
    fn from(err: serde_json::Error) -> Self {
        CompletionError::Serialization(err.to_string())
    }
}

impl From<reqwest::Error> for CompletionError {
    fn from(err: reqwest::Error) -> Self {
        CompletionError::Http {
            status: err.status().map(|s| s.as_u16()).unwrap_or(0),
            body: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authentication_error() {
        let err = CompletionError::Authentication("OPENAI_API_KEY is not set".to_string());
        assert!(err.to_string().contains("Authentication error"));
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_http_error() {
        let err = CompletionError::Http {
            status: 429,
            body: "rate limited".to_string(),
        };
        assert!(err.to_string().contains("429"));
        assert!(err.to_string().contains("rate limited"));
    }

    #[test]
    fn test_timeout_error() {
        let err = CompletionError::Timeout(Duration::from_secs(60));
        assert!(err.to_string().contains("60s"));
    }

    #[test]
    fn test_from_serde_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: CompletionError = json_err.into();
        assert!(matches!(err, CompletionError::Serialization(_)));
    }
}
