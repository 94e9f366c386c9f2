//! Client-side input validation.
//!
//! Each check runs before a request is built, so invalid input never reaches
//! the network. Messages are shown to the user as-is.

use tweetline_core::ApiError;
use tweetline_proto::{LoginRequest, RegisterRequest};

/// Shown when post content is blank.
pub const EMPTY_CONTENT: &str = "Please enter some content!";

/// Shown when a login field is missing.
pub const MISSING_CREDENTIALS: &str = "Please enter username and password";

/// Shown when a registration field is missing.
pub const MISSING_REGISTRATION_FIELDS: &str = "Please fill in all fields";

/// Post content must contain something other than whitespace.
pub fn content(content: &str) -> Result<(), ApiError> {
    if content.trim().is_empty() {
        return Err(ApiError::Validation(EMPTY_CONTENT.to_string()));
    }
    Ok(())
}

/// Both login fields are required.
pub fn login(request: &LoginRequest) -> Result<(), ApiError> {
    if request.username.is_empty() || request.password.is_empty() {
        return Err(ApiError::Validation(MISSING_CREDENTIALS.to_string()));
    }
    Ok(())
}

/// All registration fields are required.
pub fn register(request: &RegisterRequest) -> Result<(), ApiError> {
    if request.username.is_empty() || request.email.is_empty() || request.password.is_empty() {
        return Err(ApiError::Validation(MISSING_REGISTRATION_FIELDS.to_string()));
    }
    Ok(())
}
