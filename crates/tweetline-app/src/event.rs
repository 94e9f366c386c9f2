//! Application input events.
//!
//! This module defines [`AppEvent`], the set of inputs that drive the
//! [`crate::App`] state machine.
//!
//! Events originate from three sources:
//! - User interactions (keyboard, resize).
//! - Completed API requests, delivered by the runtime.
//! - The push channel.

use tweetline_core::{ApiError, Operation, PushState};
use tweetline_proto::{Post, Token};

use crate::{KeyInput, RequestId};

/// Events processed by the App state machine.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Keyboard input.
    Key(KeyInput),

    /// Terminal resize (columns, rows).
    Resize(u16, u16),

    /// A timeline fetch completed.
    TimelineLoaded {
        /// Which fetch this answers.
        request: RequestId,
        /// Posts in server order.
        posts: Vec<Post>,
    },

    /// A timeline fetch failed.
    TimelineFailed {
        /// Which fetch this answers.
        request: RequestId,
        /// What went wrong.
        error: ApiError,
    },

    /// The author list arrived.
    UsersLoaded {
        /// Author names in server order.
        users: Vec<String>,
    },

    /// The author list could not be fetched.
    UsersFailed {
        /// What went wrong.
        error: ApiError,
    },

    /// A create, edit, delete or like succeeded.
    MutationSucceeded {
        /// Which mutation.
        operation: Operation,
    },

    /// A create, edit, delete or like failed.
    MutationFailed {
        /// Which mutation.
        operation: Operation,
        /// What went wrong.
        error: ApiError,
    },

    /// Login succeeded.
    LoggedIn {
        /// Token to persist.
        token: Token,
    },

    /// Login failed.
    LoginFailed {
        /// What went wrong.
        error: ApiError,
    },

    /// Registration succeeded.
    Registered,

    /// Registration failed.
    RegisterFailed {
        /// What went wrong.
        error: ApiError,
    },

    /// The server signalled that something changed.
    PushNotice,

    /// The push channel changed state.
    PushState(PushState),
}
