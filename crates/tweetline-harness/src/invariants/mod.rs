//! Invariant checking for deterministic simulation testing.
//!
//! Invariants are properties of the displayed timeline that must hold whenever
//! the runtime is idle. They are checked against a [`Snapshot`] taken from the
//! [`App`](tweetline_app::App) and, optionally, the
//! [`SimServer`](crate::SimServer) it talks to.
//!
//! # Usage
//!
//! ```ignore
//! let registry = InvariantRegistry::standard();
//! let snapshot = Snapshot::capture(runtime.app(), Some(&server));
//! registry.assert_all(&snapshot, "after settle");
//! ```

mod checks;
mod snapshot;

pub use checks::{ConvergedWithServer, FilterRespected, NewestFirst};
pub use snapshot::Snapshot;

/// Invariant check result.
pub type InvariantResult = Result<(), Violation>;

/// Invariant violation with context.
#[derive(Debug, Clone)]
pub struct Violation {
    /// Name of the violated invariant.
    pub invariant: &'static str,
    /// Description of what went wrong.
    pub message: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.invariant, self.message)
    }
}

impl std::error::Error for Violation {}

/// A property checked against a [`Snapshot`].
pub trait Invariant: Send + Sync {
    /// Invariant name for error reporting.
    fn name(&self) -> &'static str;

    /// Check the invariant against the snapshot.
    fn check(&self, state: &Snapshot) -> InvariantResult;
}

/// Registry of invariants to check.
pub struct InvariantRegistry {
    invariants: Vec<Box<dyn Invariant>>,
}

impl Default for InvariantRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl InvariantRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { invariants: Vec::new() }
    }

    /// Registry with every timeline invariant:
    /// [`NewestFirst`], [`FilterRespected`] and [`ConvergedWithServer`].
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.add(NewestFirst);
        registry.add(FilterRespected);
        registry.add(ConvergedWithServer);
        registry
    }

    /// Add an invariant to the registry.
    pub fn add<I: Invariant + 'static>(&mut self, invariant: I) {
        self.invariants.push(Box::new(invariant));
    }

    /// Check all invariants, collecting every violation.
    pub fn check_all(&self, state: &Snapshot) -> Result<(), Vec<Violation>> {
        let violations: Vec<_> =
            self.invariants.iter().filter_map(|inv| inv.check(state).err()).collect();

        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }

    /// Check all invariants, panicking with every violation found.
    #[allow(clippy::panic)]
    pub fn assert_all(&self, state: &Snapshot, context: &str) {
        if let Err(violations) = self.check_all(state) {
            let messages: Vec<_> = violations.iter().map(ToString::to_string).collect();
            panic!("Invariant violation {context}:\n  {}", messages.join("\n  "));
        }
    }

    /// Number of registered invariants.
    pub fn len(&self) -> usize {
        self.invariants.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.invariants.is_empty()
    }
}
