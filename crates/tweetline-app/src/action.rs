//! Application side-effects and intents.
//!
//! This module defines the [`AppAction`] enum, which represents instructions
//! produced by the [`crate::App`] state machine for the runtime to execute.

use tweetline_core::{Report, Theme};
use tweetline_proto::{Filter, LoginRequest, PostId, RegisterRequest, Token};

use crate::RequestId;

/// Actions produced by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Render the UI.
    Render,

    /// Quit the application.
    Quit,

    /// Fetch the timeline. The response must carry `request` back.
    FetchTimeline {
        /// Sequence number of this fetch.
        request: RequestId,
        /// Which posts to fetch.
        filter: Filter,
    },

    /// Fetch the author list.
    FetchUsers,

    /// Create a post.
    CreatePost {
        /// Post text.
        content: String,
    },

    /// Replace a post's content.
    EditPost {
        /// Target post.
        id: PostId,
        /// New text.
        content: String,
    },

    /// Delete a post.
    DeletePost {
        /// Target post.
        id: PostId,
    },

    /// Like a post.
    LikePost {
        /// Target post.
        id: PostId,
    },

    /// Exchange credentials for a token.
    Login(LoginRequest),

    /// Create an account.
    Register(RegisterRequest),

    /// Persist the bearer token.
    StoreToken(Token),

    /// Remove the persisted token and theme.
    ClearSession,

    /// Persist the theme preference.
    StoreTheme(Theme),

    /// Start the push channel.
    ConnectPush,

    /// Stop the push channel.
    ClosePush,

    /// Surface a message (always logged, shown unless `Log` severity).
    Report(Report),
}
