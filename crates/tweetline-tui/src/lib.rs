//! Terminal client for the tweet service
//!
//! A thin shell over [`tweetline_app::Driver`] that provides terminal-specific
//! I/O. All orchestration logic lives in the generic
//! [`tweetline_app::Runtime`].
//!
//! This crate only handles terminal input and rendering.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod terminal;
pub mod ui;

pub use terminal::{TerminalDriver, TerminalError};
pub use tweetline_app::{App, AppAction, AppEvent, Driver, KeyInput, Runtime};
