//! Response decoding.
//!
//! A 2xx body is parsed into the expected type. Anything else becomes
//! [`ApiError::Http`] carrying the server's message: the `detail` of a
//! structured body when present, otherwise the raw body text.

use serde::de::DeserializeOwned;
use tweetline_core::ApiError;
use tweetline_proto::ErrorBody;

/// Returns true for 2xx status codes.
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Decode a JSON body, or the error the server reported.
pub fn decode_json<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<T, ApiError> {
    if !is_success(status) {
        return Err(http_error(status, body));
    }
    Ok(serde_json::from_slice(body)?)
}

/// Check the status of a response whose body is not needed.
pub fn decode_empty(status: u16, body: &[u8]) -> Result<(), ApiError> {
    if is_success(status) { Ok(()) } else { Err(http_error(status, body)) }
}

/// Build the error for a non-2xx response.
pub fn http_error(status: u16, body: &[u8]) -> ApiError {
    let message = match serde_json::from_slice::<ErrorBody>(body) {
        Ok(parsed) => parsed.detail.message(),
        Err(_) => {
            let text = String::from_utf8_lossy(body).trim().to_string();
            if text.is_empty() { format!("HTTP {status}") } else { text }
        },
    };
    ApiError::Http { status, message }
}
