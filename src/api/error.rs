//! API Client Error Types
//!
//! Every failure the console can hit while talking to the backend, plus the
//! client-side validation failure that stops a form before any request.

use thiserror::Error;

/// Errors surfaced by the API client and form handlers
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Client-side validation failed; no request was sent
    #[error("{0}")]
    Validation(String),

    /// No token is stored; the request was never sent
    #[error("Not authenticated. Please login.")]
    NotAuthenticated,

    /// The backend rejected the token (401). The session has already been
    /// cleared by the time the caller sees this.
    #[error("Session expired. Please login again.")]
    AuthExpired,

    /// Any other non-2xx response
    #[error("{message}")]
    RequestFailed { status: u16, message: String },

    /// No response at all (connection failure or timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// The response body did not match the expected shape
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// True for the errors that leave the user signed out
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::AuthExpired | ApiError::NotAuthenticated)
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::RequestFailed { status, .. } => Some(*status),
            ApiError::AuthExpired => Some(401),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Result type for API client operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::RequestFailed {
            status: 409,
            message: "Vendor already exists".to_string(),
        };
        assert_eq!(err.to_string(), "Vendor already exists");
        assert_eq!(err.status(), Some(409));

        assert_eq!(
            ApiError::AuthExpired.to_string(),
            "Session expired. Please login again."
        );
        assert!(ApiError::AuthExpired.is_auth());
        assert!(!ApiError::Network("refused".to_string()).is_auth());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: ApiError = json_err.into();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
