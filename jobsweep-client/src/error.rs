//! Error types for the node client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to a node
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Node returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// Response body did not have the expected shape
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Login succeeded but no session cookie came back
    #[error("Login response carried no session cookie")]
    MissingSession,

    /// Query was answered with GraphQL errors and no data
    #[error("Query returned errors: {0}")]
    GraphQl(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 400 && *status < 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert!(ClientError::api_error(401, "Invalid email or password").is_client_error());
        assert!(!ClientError::api_error(502, "bad gateway").is_client_error());
        assert!(!ClientError::MissingSession.is_client_error());
    }

    #[test]
    fn test_api_error_message() {
        let err = ClientError::api_error(401, "Invalid email or password");
        assert_eq!(
            err.to_string(),
            "API error (status 401): Invalid email or password"
        );
    }
}
