//! Client configuration.

use tweetline_core::BackoffConfig;

/// Server the client talks to unless told otherwise.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8086";

/// Path of the push channel endpoint.
pub const PUSH_PATH: &str = "/ws";

/// Where the server lives and how to reconnect to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// HTTP base URL, without a trailing slash.
    pub base_url: String,
    /// WebSocket URL of the push channel.
    pub push_url: String,
    /// Reconnect policy for the push channel.
    pub backoff: BackoffConfig,
}

impl ClientConfig {
    /// Configuration for `base_url`, deriving the push URL from it.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let push_url = push_url_for(&base_url);
        Self { base_url, push_url, backoff: BackoffConfig::default() }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Push channel URL for an HTTP base URL (`http` → `ws`, `https` → `wss`).
pub fn push_url_for(base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let socket_base = if let Some(rest) = base.strip_prefix("https://") {
        format!("wss://{rest}")
    } else if let Some(rest) = base.strip_prefix("http://") {
        format!("ws://{rest}")
    } else {
        base.to_string()
    };
    format!("{socket_base}{PUSH_PATH}")
}
