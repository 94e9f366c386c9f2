//! Observable state captured for invariant checks.

use tweetline_app::{App, Screen, TimelineStatus};
use tweetline_proto::{Filter, Post};

use crate::SimServer;

/// What the client shows, plus what the server would answer right now.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Screen shown.
    pub screen: Screen,
    /// Active filter.
    pub filter: Filter,
    /// Displayed posts, newest first.
    pub posts: Vec<Post>,
    /// Timeline status.
    pub status: TimelineStatus,
    /// Server listing for `filter` in server order. `None` when no server was
    /// given.
    pub server_listing: Option<Vec<Post>>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            screen: Screen::Login,
            filter: Filter::All,
            posts: Vec::new(),
            status: TimelineStatus::Loading,
            server_listing: None,
        }
    }
}

impl Snapshot {
    /// Capture the app state and, with a server, its current listing.
    pub fn capture(app: &App, server: Option<&SimServer>) -> Self {
        Self {
            screen: app.screen(),
            filter: app.filter().clone(),
            posts: app.posts().to_vec(),
            status: app.timeline_status().clone(),
            server_listing: server.map(|s| s.expected_listing(app.filter())),
        }
    }
}
