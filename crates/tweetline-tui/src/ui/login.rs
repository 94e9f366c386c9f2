//! Login screen
//!
//! Shows the auth commands. Results appear in the status bar.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tweetline_app::App;

use super::Palette;

const HELP: [(&str, &str); 4] = [
    ("/login <username> <password>", "log in"),
    ("/register <username> <email> <password>", "create an account"),
    ("/theme", "switch light/dark"),
    ("/quit", "exit"),
];

/// Render the login screen.
pub fn render(frame: &mut Frame, _app: &App, palette: &Palette, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Welcome to tweetline",
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];
    lines.extend(HELP.iter().map(|(command, what)| {
        Line::from(vec![
            Span::styled(*command, Style::default().fg(palette.text)),
            Span::styled(format!("  {what}"), Style::default().fg(palette.muted)),
        ])
    }));

    let block = Block::default().borders(Borders::ALL).title(" Login ");
    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
