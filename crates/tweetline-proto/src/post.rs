//! Posts and post mutation bodies.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned post identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub u64);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A post as returned by the list, update and like endpoints.
///
/// The server omits `likes` for posts nobody has liked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Stable identifier.
    pub id: PostId,
    /// Author display name.
    pub user: String,
    /// Post text.
    pub content: String,
    /// Number of likes.
    #[serde(default)]
    pub likes: u64,
}

impl Post {
    /// Create a post with no likes.
    pub fn new(id: u64, user: impl Into<String>, content: impl Into<String>) -> Self {
        Self { id: PostId(id), user: user.into(), content: content.into(), likes: 0 }
    }
}

/// Request body for create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBody {
    /// New post text.
    pub content: String,
}
