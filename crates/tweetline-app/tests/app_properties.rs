//! Property-based tests for the timeline synchronizer.
//!
//! Responses are delivered in arbitrary order; the displayed snapshot must
//! always belong to the newest request.

use proptest::prelude::*;
use tweetline_app::{App, AppAction, AppEvent, RequestId, TimelineStatus, view};
use tweetline_proto::{Filter, Post};

fn timeline_app() -> App {
    let mut app = App::default();
    let _ = app.start_timeline();
    app
}

fn fetch(actions: &[AppAction]) -> Option<(RequestId, Filter)> {
    actions.iter().find_map(|a| match a {
        AppAction::FetchTimeline { request, filter } => Some((*request, filter.clone())),
        _ => None,
    })
}

fn posts_for(request: RequestId, count: usize) -> Vec<Post> {
    (0..count as u64)
        .map(|i| Post::new(request.value() * 100 + i, "ana", format!("{request}/{i}")))
        .collect()
}

proptest! {
    #[test]
    fn newest_request_wins_regardless_of_arrival_order(
        sizes in prop::collection::vec(0usize..5, 1..8),
        keys in prop::collection::vec(any::<u32>(), 8),
    ) {
        let mut app = timeline_app();
        let mut responses: Vec<_> = sizes
            .iter()
            .zip(&keys)
            .map(|(&n, &key)| {
                let (request, _) = fetch(&app.refresh()).unwrap();
                (key, request, posts_for(request, n))
            })
            .collect();
        let (_, newest, newest_posts) = responses.last().cloned().unwrap();

        // Deliver in an arbitrary order
        responses.sort_by_key(|(key, ..)| *key);

        for (_, request, posts) in responses {
            let _ = app.handle(AppEvent::TimelineLoaded { request, posts });
        }

        let expected: Vec<_> = newest_posts.into_iter().rev().collect();
        prop_assert!(expected.iter().all(|p| p.id.0 / 100 == newest.value()));
        prop_assert_eq!(app.posts(), expected.as_slice());
        prop_assert_eq!(app.timeline_status(), &TimelineStatus::Ready);
    }

    #[test]
    fn snapshot_is_server_order_reversed(count in 0usize..20) {
        let mut app = timeline_app();
        let (request, _) = fetch(&app.refresh()).unwrap();
        let posts = posts_for(request, count);

        let _ = app.handle(AppEvent::TimelineLoaded { request, posts: posts.clone() });

        let shown: Vec<_> = app.posts().iter().map(|p| p.id).collect();
        let mut expected: Vec<_> = posts.iter().map(|p| p.id).collect();
        expected.reverse();
        prop_assert_eq!(shown, expected);
    }

    #[test]
    fn blank_filter_fetches_everything(ws in "[ \t]{0,6}") {
        let mut app = timeline_app();
        let _ = app.set_filter("ana");

        let (_, filter) = fetch(&app.set_filter(&ws)).unwrap();
        prop_assert_eq!(filter, Filter::All);
        prop_assert_eq!(app.filter(), &Filter::All);
    }

    #[test]
    fn filtered_fetch_uses_trimmed_name(name in "[a-z]{1,10}", pad in "[ ]{0,3}") {
        let mut app = timeline_app();
        let input = format!("{pad}{name}{pad}");

        let (_, filter) = fetch(&app.set_filter(&input)).unwrap();
        prop_assert_eq!(filter, Filter::Author(name));
    }

    #[test]
    fn every_post_renders_three_controls(count in 1usize..10) {
        let mut app = timeline_app();
        let (request, _) = fetch(&app.refresh()).unwrap();
        let _ = app.handle(AppEvent::TimelineLoaded { request, posts: posts_for(request, count) });

        let view::TimelineView::Posts(views) = view::timeline(&app) else {
            return Err(TestCaseError::fail("expected posts"));
        };
        prop_assert_eq!(views.len(), count);
        for v in views {
            let controls_target_post = v.controls.iter().all(|c| match c {
                view::Control::Like(id) | view::Control::Edit(id) | view::Control::Delete(id) => *id == v.id,
                view::Control::SelectAuthor(_) => false,
            });
            prop_assert!(controls_target_post);
        }
    }
}
