//! Users sidebar
//!
//! Lists every known author. The filtered author is highlighted.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use tweetline_app::{App, view};

use super::Palette;

const SELECTED_PREFIX: &str = "> ";
const PREFIX: &str = "  ";

/// Render the users sidebar.
pub fn render(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let items: Vec<ListItem> = view::users(app)
        .into_iter()
        .map(|user| {
            let (prefix, style) = if user.selected {
                (
                    SELECTED_PREFIX,
                    Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
                )
            } else {
                (PREFIX, Style::default().fg(palette.text))
            };
            ListItem::new(Line::from(vec![Span::raw(prefix), Span::styled(user.name, style)]))
        })
        .collect();

    let block = Block::default().borders(Borders::ALL).title(" Users [Tab] ");
    frame.render_widget(List::new(items).block(block), area);
}

#[cfg(test)]
mod tests {
    use tweetline_app::AppEvent;

    use crate::ui::testing::{contains, draw};

    use super::*;

    #[test]
    fn selected_author_is_marked() {
        let mut app = App::default();
        let _ = app.start_timeline();
        app.handle(AppEvent::UsersLoaded { users: vec!["ana".into(), "bo".into()] });
        let _ = app.set_filter("bo");

        let rows = draw(&app, 80, 24);
        assert!(contains(&rows, "│  ana"));
        assert!(contains(&rows, "│> bo"));
    }
}
