//! User-facing failure reporting.
//!
//! Failures are caught where they happen and turned into a [`Report`]. The
//! severity for each kind of operation is fixed in
//! [`Severity::for_failure`] so every call site surfaces errors the same way.

use std::fmt;

/// How loudly a report is surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Logged only; the view keeps its previous content.
    Log,
    /// Shown inline next to the input that caused it.
    Inline,
    /// Shown prominently until the next user action.
    Alert,
}

/// Operations that can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Fetching the timeline.
    Timeline,
    /// Fetching the user list.
    Users,
    /// Logging in.
    Login,
    /// Registering an account.
    Register,
    /// Creating a post.
    Create,
    /// Editing a post.
    Edit,
    /// Deleting a post.
    Delete,
    /// Liking a post.
    Like,
}

impl Severity {
    /// Severity used for failures of `operation`.
    pub fn for_failure(operation: Operation) -> Self {
        match operation {
            Operation::Timeline | Operation::Users => Self::Log,
            Operation::Login | Operation::Register => Self::Inline,
            Operation::Create | Operation::Edit | Operation::Delete | Operation::Like => {
                Self::Alert
            },
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Timeline => "load tweets",
            Self::Users => "load users",
            Self::Login => "log in",
            Self::Register => "register",
            Self::Create => "post tweet",
            Self::Edit => "update tweet",
            Self::Delete => "delete tweet",
            Self::Like => "like tweet",
        };
        f.write_str(text)
    }
}

/// A message for the user with its severity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// How loudly to surface it.
    pub severity: Severity,
    /// Text shown to the user.
    pub message: String,
}

impl Report {
    /// Report a failed operation.
    ///
    /// Auth failures show the error text verbatim; everything else is
    /// prefixed with what was being attempted.
    pub fn failure(operation: Operation, error: &impl fmt::Display) -> Self {
        let message = match operation {
            Operation::Login | Operation::Register => error.to_string(),
            _ => format!("Failed to {operation}: {error}"),
        };
        Self { severity: Severity::for_failure(operation), message }
    }

    /// Input rejected before any request was sent. The message is shown as-is
    /// with the severity of the operation it guards.
    pub fn rejected(operation: Operation, message: impl Into<String>) -> Self {
        Self { severity: Severity::for_failure(operation), message: message.into() }
    }

    /// Informational message shown inline.
    pub fn info(message: impl Into<String>) -> Self {
        Self { severity: Severity::Inline, message: message.into() }
    }

    /// Write the report to the log at a level matching its severity.
    pub fn emit(&self) {
        match self.severity {
            Severity::Log => tracing::warn!(message = %self.message, "request failed"),
            Severity::Inline => tracing::info!(message = %self.message, "inline report"),
            Severity::Alert => tracing::error!(message = %self.message, "alert"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_failures_are_silent() {
        assert_eq!(Severity::for_failure(Operation::Timeline), Severity::Log);
        assert_eq!(Severity::for_failure(Operation::Users), Severity::Log);
    }

    #[test]
    fn mutation_failures_alert() {
        for op in [Operation::Create, Operation::Edit, Operation::Delete, Operation::Like] {
            assert_eq!(Severity::for_failure(op), Severity::Alert);
        }
    }

    #[test]
    fn rejected_input_keeps_operation_severity() {
        let report = Report::rejected(Operation::Create, "Please enter some content!");
        assert_eq!(report.severity, Severity::Alert);
        assert_eq!(report.message, "Please enter some content!");
    }

    #[test]
    fn auth_failures_are_verbatim() {
        let report = Report::failure(Operation::Login, &"Incorrect username or password");
        assert_eq!(report.message, "Incorrect username or password");
        assert_eq!(report.severity, Severity::Inline);
    }

    #[test]
    fn mutation_failure_names_operation() {
        let report = Report::failure(Operation::Delete, &"Tweet not found");
        assert_eq!(report.message, "Failed to delete tweet: Tweet not found");
    }
}
