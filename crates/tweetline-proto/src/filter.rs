//! Timeline filter.

use std::fmt;

/// Which posts the timeline shows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    /// Every post on the server.
    #[default]
    All,
    /// Posts by a single author. The name is trimmed and never empty.
    Author(String),
}

impl Filter {
    /// Build a filter from free-form user input.
    ///
    /// Blank input (empty or whitespace only) clears the filter.
    pub fn from_input(input: &str) -> Self {
        let name = input.trim();
        if name.is_empty() { Self::All } else { Self::Author(name.to_string()) }
    }

    /// Author name, if filtering.
    pub fn author(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Author(name) => Some(name),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Author(name) => write!(f, "@{name}"),
        }
    }
}
