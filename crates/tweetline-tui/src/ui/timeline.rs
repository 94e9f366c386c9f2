//! Timeline area
//!
//! Displays the current snapshot, newest first, or the placeholder for an
//! empty or failed load.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use tweetline_app::{
    App,
    view::{self, PostView, TimelineView},
};
use tweetline_proto::Filter;

use super::Palette;

fn title(filter: &Filter) -> String {
    match filter {
        Filter::All => " All tweets ".to_string(),
        Filter::Author(author) => format!(" Tweets by {author} "),
    }
}

fn post_item<'a>(post: &'a PostView, palette: &Palette) -> ListItem<'a> {
    let hints: Vec<_> = post.controls.iter().map(view::Control::command_hint).collect();

    ListItem::new(vec![
        Line::from(vec![
            Span::styled(
                post.author.as_str(),
                Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" #{}", post.id), Style::default().fg(palette.muted)),
            Span::raw("  "),
            Span::styled(post.likes.as_str(), Style::default().fg(palette.alert)),
        ]),
        Line::from(Span::styled(post.content.as_str(), Style::default().fg(palette.text))),
        Line::from(Span::styled(hints.join("  "), Style::default().fg(palette.muted))),
        Line::default(),
    ])
}

/// Render the timeline area.
pub fn render(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(title(app.filter()));

    match view::timeline(app) {
        TimelineView::Posts(posts) => {
            let items: Vec<ListItem> = posts.iter().map(|p| post_item(p, palette)).collect();
            frame.render_widget(List::new(items).block(block), area);
        },
        placeholder => {
            let text = Span::styled(placeholder.to_string(), Style::default().fg(palette.muted));
            frame.render_widget(Paragraph::new(Line::from(text)).block(block), area);
        },
    }
}

#[cfg(test)]
mod tests {
    use tweetline_app::{AppAction, AppEvent};
    use tweetline_core::ApiError;
    use tweetline_proto::Post;

    use crate::ui::testing::{contains, draw};

    use super::*;

    fn timeline(filter: &str) -> (App, tweetline_app::RequestId) {
        let mut app = App::default();
        let _ = app.start_timeline();
        let actions = app.set_filter(filter);
        let request = actions
            .iter()
            .find_map(|a| match a {
                AppAction::FetchTimeline { request, .. } => Some(*request),
                _ => None,
            })
            .unwrap();
        (app, request)
    }

    #[test]
    fn posts_render_newest_first_with_controls() {
        let (mut app, request) = timeline("");
        app.handle(AppEvent::TimelineLoaded {
            request,
            posts: vec![Post::new(1, "ana", "older"), Post::new(2, "bo", "newer")],
        });

        let rows = draw(&app, 80, 24);
        let newer = rows.iter().position(|r| r.contains("newer")).unwrap();
        let older = rows.iter().position(|r| r.contains("older")).unwrap();
        assert!(newer < older);
        assert!(contains(&rows, "/like 2  /edit 2 <text>  /delete 2"));
        assert!(contains(&rows, "♥ 0"));
        assert!(contains(&rows, " All tweets "));
    }

    #[test]
    fn unknown_author_shows_placeholder() {
        let (mut app, request) = timeline("zed");
        app.handle(AppEvent::TimelineFailed {
            request,
            error: ApiError::Http { status: 404, message: "User not found".into() },
        });

        let rows = draw(&app, 80, 24);
        assert!(contains(&rows, "No tweets found for user: zed"));
        assert!(contains(&rows, " Tweets by zed "));
    }

    #[test]
    fn failed_first_load_shows_error_placeholder() {
        let (mut app, request) = timeline("");
        app.handle(AppEvent::TimelineFailed {
            request,
            error: ApiError::Network("refused".into()),
        });

        assert!(contains(&draw(&app, 80, 24), "Error loading tweets"));
    }
}
