//! Deterministic simulation harness for the tweet client.
//!
//! In-memory implementations of the runtime's I/O seams so the production
//! [`Runtime`](tweetline_app::Runtime) can be exercised end to end without
//! sockets or a terminal.
//!
//! - [`SimServer`]: the tweet service, implementing
//!   [`TweetApi`](tweetline_client::TweetApi)
//! - [`SimPush`]: push channel fed by [`SimServer`] broadcasts
//! - [`SimDriver`]: scripted input and recorded renders
//!
//! # Invariant Testing
//!
//! The `invariants` module checks properties of the displayed timeline that
//! must hold after every settled step. Use [`InvariantRegistry::standard()`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod invariants;
pub mod sim_driver;
pub mod sim_push;
pub mod sim_server;

pub use invariants::{
    ConvergedWithServer, FilterRespected, Invariant, InvariantRegistry, InvariantResult,
    NewestFirst, Snapshot, Violation,
};
pub use sim_driver::{Frame, SimDriver, SimDriverError};
pub use sim_push::SimPush;
pub use sim_server::{RecordedRequest, Release, SimServer};
