//! Timeline invariants.

use super::{Invariant, InvariantResult, Snapshot, Violation};
use tweetline_app::{Screen, TimelineStatus};

/// Displayed posts are ordered newest first.
///
/// Ids are assigned in creation order, so they must strictly decrease down
/// the list.
pub struct NewestFirst;

impl Invariant for NewestFirst {
    fn name(&self) -> &'static str {
        "newest_first"
    }

    fn check(&self, state: &Snapshot) -> InvariantResult {
        for window in state.posts.windows(2) {
            if window[1].id >= window[0].id {
                return Err(Violation {
                    invariant: self.name(),
                    message: format!("post {} shown above post {}", window[0].id, window[1].id),
                });
            }
        }
        Ok(())
    }
}

/// Under an author filter, only that author's posts are shown.
pub struct FilterRespected;

impl Invariant for FilterRespected {
    fn name(&self) -> &'static str {
        "filter_respected"
    }

    fn check(&self, state: &Snapshot) -> InvariantResult {
        let Some(author) = state.filter.author() else {
            return Ok(());
        };
        match state.posts.iter().find(|p| p.user != author) {
            Some(stray) => Err(Violation {
                invariant: self.name(),
                message: format!("filter {author} shows post {} by {}", stray.id, stray.user),
            }),
            None => Ok(()),
        }
    }
}

/// Once loaded, the display is exactly the server listing reversed.
///
/// Only meaningful when no request is in flight and no push notice is
/// pending; skipped without a server listing or before the first load.
pub struct ConvergedWithServer;

impl Invariant for ConvergedWithServer {
    fn name(&self) -> &'static str {
        "converged_with_server"
    }

    fn check(&self, state: &Snapshot) -> InvariantResult {
        let Some(listing) = &state.server_listing else {
            return Ok(());
        };
        if state.screen != Screen::Timeline || state.status != TimelineStatus::Ready {
            return Ok(());
        }

        let expected: Vec<_> = listing.iter().rev().map(|p| p.id).collect();
        let shown: Vec<_> = state.posts.iter().map(|p| p.id).collect();
        if expected == shown {
            Ok(())
        } else {
            Err(Violation {
                invariant: self.name(),
                message: format!("shown {shown:?}, server has {expected:?}"),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use tweetline_proto::{Filter, Post};

    use super::*;

    fn ready(posts: Vec<Post>) -> Snapshot {
        Snapshot {
            screen: Screen::Timeline,
            status: TimelineStatus::Ready,
            posts,
            ..Snapshot::default()
        }
    }

    #[test]
    fn oldest_first_is_a_violation() {
        let state = ready(vec![Post::new(1, "ana", "a"), Post::new(2, "ana", "b")]);
        let violation = NewestFirst.check(&state).unwrap_err();
        assert_eq!(violation.invariant, "newest_first");
    }

    #[test]
    fn stray_author_is_a_violation() {
        let mut state = ready(vec![Post::new(2, "bo", "b"), Post::new(1, "ana", "a")]);
        state.filter = Filter::Author("ana".into());
        assert!(FilterRespected.check(&state).is_err());

        state.posts.remove(0);
        assert!(FilterRespected.check(&state).is_ok());
    }

    #[test]
    fn convergence_compares_reversed_listing() {
        let mut state = ready(vec![Post::new(2, "bo", "b"), Post::new(1, "ana", "a")]);
        state.server_listing = Some(vec![Post::new(1, "ana", "a"), Post::new(2, "bo", "b")]);
        assert!(ConvergedWithServer.check(&state).is_ok());

        state.server_listing = Some(vec![Post::new(1, "ana", "a")]);
        assert!(ConvergedWithServer.check(&state).is_err());
    }
}
