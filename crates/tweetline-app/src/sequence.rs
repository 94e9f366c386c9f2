//! Refresh request sequencing.
//!
//! Every timeline fetch gets a fresh [`RequestId`]. Only the response to the
//! most recently issued id is applied; anything older arrived late and is
//! dropped, so the displayed snapshot always belongs to the latest request.

use std::fmt;

/// Identifies one timeline fetch. Monotonically increasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    /// Raw sequence number.
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Issues request ids and remembers the latest.
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    /// Fresh sequence. Nothing issued yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next id, superseding every earlier one.
    pub fn issue(&mut self) -> RequestId {
        self.latest = self.latest.saturating_add(1);
        RequestId(self.latest)
    }

    /// Supersede every outstanding id without issuing a new request.
    pub fn invalidate(&mut self) {
        self.latest = self.latest.saturating_add(1);
    }

    /// Returns true if `id` is the latest issued id.
    pub fn is_current(&self, id: RequestId) -> bool {
        id.0 == self.latest
    }
}
