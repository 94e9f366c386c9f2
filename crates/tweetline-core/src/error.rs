//! Error types for API operations.
//!
//! Every API call fails with one [`ApiError`]. Transport failures keep only
//! their message so errors stay `Clone` and can travel inside application
//! events.

use thiserror::Error;

/// HTTP status the server uses for unknown posts and authors.
pub const STATUS_NOT_FOUND: u16 = 404;

/// Errors that can occur while talking to the server.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (connection refused, reset, DNS).
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx response. `message` is the server's text, extracted from a
    /// structured body when possible.
    #[error("{message}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Server-provided message
        message: String,
    },

    /// Input rejected before any request was sent.
    #[error("{0}")]
    Validation(String),

    /// A 2xx body did not match the expected shape.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl ApiError {
    /// Returns true if the server answered 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Http { status: STATUS_NOT_FOUND, .. })
    }

    /// HTTP status, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_displays_server_text_verbatim() {
        let err = ApiError::Http { status: 401, message: "Incorrect username or password".into() };
        assert_eq!(err.to_string(), "Incorrect username or password");
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn only_404_is_not_found() {
        assert!(ApiError::Http { status: 404, message: String::new() }.is_not_found());
        assert!(!ApiError::Http { status: 500, message: String::new() }.is_not_found());
        assert!(!ApiError::Network("refused".into()).is_not_found());
    }
}
