//! Status bar
//!
//! Push channel state, theme and the latest message.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};
use tweetline_app::App;
use tweetline_core::PushState;

use super::Palette;

/// Render the status bar.
pub fn render(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let push = app.push_state();
    let push_style = match push {
        PushState::Open => Style::default().fg(palette.accent),
        PushState::Backoff { .. } | PushState::Closed => Style::default().fg(palette.alert),
        PushState::Idle | PushState::Connecting { .. } => Style::default().fg(palette.muted),
    };

    let mut spans = vec![
        Span::raw(" "),
        Span::styled(push.to_string(), push_style),
        Span::styled(format!(" | {} | ", app.theme()), Style::default().fg(palette.muted)),
    ];
    if let Some(report) = app.status() {
        spans.push(Span::styled(report.message.as_str(), palette.severity(report.severity)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
