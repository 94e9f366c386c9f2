//! Core building blocks for the tweet client.
//!
//! Everything here is synchronous and free of network I/O so it can be driven
//! identically by the terminal client and the simulation harness.
//!
//! # Components
//!
//! - [`session`]: persisted bearer token and theme preference, plus the access
//!   guard
//! - [`error`]: the request failure taxonomy shared by every API operation
//! - [`report`]: one severity policy for surfacing failures to the user
//! - [`backoff`] and [`push`]: reconnect policy and lifecycle state machine
//!   for the realtime push channel

#![forbid(unsafe_code)]

pub mod backoff;
pub mod error;
pub mod push;
pub mod report;
pub mod session;

pub use backoff::{Backoff, BackoffConfig};
pub use error::ApiError;
pub use push::{PushAction, PushChannel, PushConnection, PushEvent, PushState};
pub use report::{Operation, Report, Severity};
pub use session::{
    FileStore, MemoryStore, Session, SessionError, SessionStore, StoreError, Theme,
};
