//! Network transports.
//!
//! Thin I/O layers over the Sans-IO request builders and the push state
//! machine. Protocol decisions stay in [`crate::ApiRequest`], the `decode_*`
//! functions and [`tweetline_core::PushConnection`].

mod http;
mod notifier;

pub use http::HttpApi;
pub use notifier::WsPushChannel;
