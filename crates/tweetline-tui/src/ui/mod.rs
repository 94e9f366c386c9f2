//! UI rendering
//!
//! Rendering functions that convert App state into terminal output using
//! ratatui widgets. All functions are pure (no I/O). Post and user data come
//! from [`tweetline_app::view`], so the terminal shows exactly what the view
//! layer decided.

mod input;
mod login;
mod status;
mod timeline;
mod users;

pub use input::masked;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
};
use tweetline_app::{App, Screen};
use tweetline_core::{Severity, Theme};

/// Colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Body text.
    pub text: Color,
    /// Background.
    pub background: Color,
    /// Author names, selected user, active borders.
    pub accent: Color,
    /// Hints and placeholders.
    pub muted: Color,
    /// Alert messages.
    pub alert: Color,
    /// Inline messages.
    pub inline: Color,
}

impl Palette {
    /// Palette for `theme`.
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                text: Color::Black,
                background: Color::White,
                accent: Color::Rgb(0x1d, 0xa1, 0xf2),
                muted: Color::Gray,
                alert: Color::Red,
                inline: Color::Blue,
            },
            Theme::Dark => Self {
                text: Color::White,
                background: Color::Black,
                accent: Color::Cyan,
                muted: Color::DarkGray,
                alert: Color::LightRed,
                inline: Color::Yellow,
            },
        }
    }

    /// Base style for text on the background.
    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    /// Style for a status message of `severity`.
    pub fn severity(&self, severity: Severity) -> Style {
        match severity {
            Severity::Log => Style::default().fg(self.muted),
            Severity::Inline => Style::default().fg(self.inline),
            Severity::Alert => Style::default().fg(self.alert),
        }
    }
}

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    const MAIN_AREA_MIN_HEIGHT: u16 = 3;
    const INPUT_HEIGHT: u16 = 3;
    const STATUS_HEIGHT: u16 = 1;

    let palette = Palette::for_theme(app.theme());
    frame.render_widget(ratatui::widgets::Block::default().style(palette.base()), frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(MAIN_AREA_MIN_HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(frame.area());

    let [main_area, input_area, status_area] = chunks.as_ref() else {
        return;
    };

    match app.screen() {
        Screen::Login => login::render(frame, app, &palette, *main_area),
        Screen::Timeline => render_timeline_screen(frame, app, &palette, *main_area),
    }
    input::render(frame, app.input(), &palette, *input_area);
    status::render(frame, app, &palette, *status_area);
}

/// Render the main area (users sidebar + timeline).
fn render_timeline_screen(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    const USER_SIDEBAR_WIDTH: u16 = 18;
    const TIMELINE_MIN_WIDTH: u16 = 20;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(USER_SIDEBAR_WIDTH), Constraint::Min(TIMELINE_MIN_WIDTH)])
        .split(area);

    let [users_area, timeline_area] = chunks.as_ref() else {
        return;
    };

    users::render(frame, app, palette, *users_area);
    timeline::render(frame, app, palette, *timeline_area);
}


#[cfg(test)]
mod tests {
    use super::{
        App, Color, Palette, Theme,
        testing::{contains, draw},
    };

    #[test]
    fn themes_use_distinct_palettes() {
        assert_ne!(Palette::for_theme(Theme::Light), Palette::for_theme(Theme::Dark));
        assert_eq!(Palette::for_theme(Theme::Light).accent, Color::Rgb(0x1d, 0xa1, 0xf2));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let app = App::default();
        let _ = draw(&app, 4, 2);
    }

    #[test]
    fn login_screen_lists_auth_commands() {
        let rows = draw(&App::default(), 80, 24);
        assert!(contains(&rows, "/login <username> <password>"));
        assert!(contains(&rows, "/register <username> <email> <password>"));
    }
}
