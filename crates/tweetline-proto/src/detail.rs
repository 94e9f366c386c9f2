//! Structured error bodies.
//!
//! The server reports failures as `{"detail": ...}` where `detail` is either a
//! plain message or a list of per-field validation errors. Anything else is
//! carried through as raw JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error body envelope.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ErrorBody {
    /// The `detail` payload.
    pub detail: ErrorDetail,
}

/// The `detail` field of an error body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    /// Human-readable message.
    Message(String),
    /// Per-field validation failures.
    Fields(Vec<FieldError>),
    /// Any other shape.
    Other(Value),
}

/// One field validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Path to the offending field, e.g. `["body", "email"]`.
    #[serde(default)]
    pub loc: Vec<LocSegment>,
    /// Failure description.
    pub msg: String,
}

/// One segment of a field location (names or list indices).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocSegment {
    /// Field name.
    Name(String),
    /// List index.
    Index(u64),
}

impl ErrorDetail {
    /// Render the detail as a single user-facing message.
    ///
    /// Messages are returned verbatim. Field errors become one
    /// `loc.path: msg` line each.
    pub fn message(&self) -> String {
        match self {
            Self::Message(text) => text.clone(),
            Self::Fields(fields) => {
                fields.iter().map(FieldError::line).collect::<Vec<_>>().join("\n")
            },
            Self::Other(value) => value.to_string(),
        }
    }
}

impl FieldError {
    fn line(&self) -> String {
        let path = self
            .loc
            .iter()
            .map(|segment| match segment {
                LocSegment::Name(name) => name.clone(),
                LocSegment::Index(index) => index.to_string(),
            })
            .collect::<Vec<_>>()
            .join(".");
        format!("{path}: {}", self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> ErrorDetail {
        serde_json::from_str::<ErrorBody>(json).unwrap().detail
    }

    #[test]
    fn string_detail_is_verbatim() {
        let detail = parse(r#"{"detail":"Incorrect username or password"}"#);
        assert_eq!(detail.message(), "Incorrect username or password");
    }

    #[test]
    fn field_errors_join_location() {
        let detail = parse(
            r#"{"detail":[
                {"loc":["body","email"],"msg":"value is not a valid email address","type":"x"},
                {"loc":["body","items",0],"msg":"field required"}
            ]}"#,
        );
        insta::assert_snapshot!(detail.message(), @r"
        body.email: value is not a valid email address
        body.items.0: field required
        ");
    }

    #[test]
    fn other_detail_is_raw_json() {
        let detail = parse(r#"{"detail":{"code":3}}"#);
        assert_eq!(detail.message(), r#"{"code":3}"#);
    }
}
