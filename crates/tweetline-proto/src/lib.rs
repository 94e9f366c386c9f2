//! Wire contract for the tweet service.
//!
//! Plain data types exchanged with the server over HTTP, plus the small set of
//! client-side domain types (filters, tokens) that request construction needs.
//! Nothing here performs I/O.
//!
//! # Components
//!
//! - [`Post`]: a user-authored record as returned by every list endpoint
//! - [`Filter`]: which timeline to fetch (everyone, or a single author)
//! - [`Token`]: opaque bearer credential
//! - [`ErrorDetail`]: the `detail` field of structured error bodies

#![forbid(unsafe_code)]

mod auth;
mod detail;
mod encoding;
mod filter;
mod post;

pub use auth::{AccessToken, LoginRequest, RegisterRequest, Token};
pub use detail::{ErrorBody, ErrorDetail, FieldError, LocSegment};
pub use encoding::encode_component;
pub use filter::Filter;
pub use post::{ContentBody, Post, PostId};
