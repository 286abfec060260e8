//! API error types

use std::time::Duration;

/// Errors that can occur while fetching from the REST endpoint.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP error response from the endpoint.
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body, or a reason phrase when the body was empty.
        message: String,
    },

    /// Network error during the request.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Request timed out.
    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    /// Invalid endpoint URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse the response body.
    #[error("Response parse error: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
        /// Raw response body, if available.
        body: Option<String>,
    },
}

impl ApiError {
    /// Creates a new HTTP error.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    /// Creates a new parse error with the raw response body.
    pub fn parse_with_body(message: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            body: Some(body.into()),
        }
    }

    /// Returns the HTTP status code if this is an HTTP error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the raw body of a response that failed to parse.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Parse { body, .. } => body.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ApiError::http(404, "Not Found").to_string(), "HTTP 404: Not Found");
        assert_eq!(
            ApiError::InvalidUrl("nope".into()).to_string(),
            "Invalid URL: nope"
        );
        assert_eq!(
            ApiError::Timeout(Duration::from_secs(3)).to_string(),
            "Timeout after 3s"
        );
    }

    #[test]
    fn test_accessors() {
        let err = ApiError::http(503, "busy");
        assert_eq!(err.status_code(), Some(503));
        assert_eq!(err.body(), None);

        let err = ApiError::parse_with_body("expected array", "{}");
        assert_eq!(err.status_code(), None);
        assert_eq!(err.body(), Some("{}"));
    }
}
