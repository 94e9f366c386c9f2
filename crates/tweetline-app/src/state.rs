//! Screen and timeline status.

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Login and registration. Shown whenever no token is stored.
    Login,
    /// Timeline, user list and composer.
    Timeline,
}

/// What the timeline area currently reflects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimelineStatus {
    /// No response applied yet for the current filter.
    Loading,
    /// The latest applied response (possibly empty).
    Ready,
    /// The server has no posts for the filtered author.
    NotFound {
        /// Author that was searched for.
        author: String,
    },
    /// The first load failed and there is no snapshot to fall back on.
    Unavailable,
}
