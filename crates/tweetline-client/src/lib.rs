//! Client
//!
//! The tweet service's HTTP contract and realtime push channel.
//!
//! # Architecture
//!
//! Request construction and response decoding are Sans-IO: an [`ApiRequest`]
//! describes method, path, body and bearer token, and the `decode_*` functions
//! turn a status code and body bytes into a typed result or an
//! [`ApiError`](tweetline_core::ApiError). The [`TweetApi`] trait is the seam the
//! application depends on.
//!
//! # Components
//!
//! - [`Endpoint`] / [`ApiRequest`]: one variant per server capability
//! - [`decode_json`] / [`decode_empty`]: response handling and error extraction
//! - [`validate`]: client-side input checks run before any request is sent
//! - [`TweetApi`]: async capability trait
//! - [`ClientConfig`]: server location and reconnect policy
//!
//! # Transport (optional)
//!
//! With the `transport` feature enabled, this crate also provides:
//! - [`transport::HttpApi`]: [`TweetApi`] over reqwest
//! - [`transport::WsPushChannel`]: push channel over tokio-tungstenite with
//!   reconnect and backoff

#![forbid(unsafe_code)]

mod api;
mod config;
mod decode;
mod endpoint;
pub mod validate;

#[cfg(feature = "transport")]
pub mod transport;

pub use api::TweetApi;
pub use config::{ClientConfig, DEFAULT_BASE_URL, PUSH_PATH, push_url_for};
pub use decode::{decode_empty, decode_json, http_error, is_success};
pub use endpoint::{ApiRequest, Endpoint, Method};
