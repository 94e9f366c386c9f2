//! Application layer for the tweet client
//!
//! Pure state machines and a generic runtime, so the terminal client and the
//! simulation harness run the same orchestration code.
//!
//! # Components
//!
//! - [`App`]: timeline synchronizer and auth flow (events in, actions out)
//! - [`view`]: turns [`App`] state into display-ready values
//! - [`InputState`] and [`Command`]: line editing and command parsing
//! - [`Driver`]: trait for platform-specific input and rendering
//! - [`Runtime`]: generic orchestration loop over a [`Driver`], a
//!   [`TweetApi`](tweetline_client::TweetApi), a
//!   [`PushChannel`](tweetline_core::PushChannel) and a
//!   [`SessionStore`](tweetline_core::SessionStore)

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod command;
mod driver;
mod event;
mod input;
mod runtime;
mod sequence;
mod state;
pub mod view;

pub use action::AppAction;
pub use app::{App, REGISTERED};
pub use command::Command;
pub use driver::Driver;
pub use event::AppEvent;
pub use input::{InputState, KeyInput};
pub use runtime::Runtime;
pub use sequence::{RequestId, RequestSequence};
pub use state::{Screen, TimelineStatus};
