//! Authentication bodies and the bearer token.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque bearer credential.
///
/// `Debug` never prints the value so tokens stay out of logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    /// Wrap a raw token string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Raw token value, for the `Authorization` header.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(<redacted>)")
    }
}

/// `POST /auth/login` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Account name.
    pub username: String,
    /// Account password.
    pub password: String,
}

/// `POST /auth/register` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Account name.
    pub username: String,
    /// Contact address.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    /// Bearer token for subsequent requests.
    pub access_token: Token,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_token() {
        let token = Token::new("secret-value");
        assert!(!format!("{token:?}").contains("secret"));
    }

    #[test]
    fn access_token_decodes() {
        let parsed: AccessToken = serde_json::from_str(r#"{"access_token":"abc"}"#).unwrap();
        assert_eq!(parsed.access_token.as_str(), "abc");
    }
}
