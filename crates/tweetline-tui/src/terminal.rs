//! Terminal driver for the TUI.
//!
//! Implements the [`Driver`] trait for terminal I/O using crossterm for
//! keyboard events and ratatui for rendering. Network access is owned by the
//! runtime, not the driver.

use std::io::{self, Stdout, stdout};

use crossterm::{
    ExecutableCommand,
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use thiserror::Error;
use tweetline_app::{App, AppAction, AppEvent, Driver, KeyInput};

use crate::ui;

/// Terminal driver errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Terminal driver implementing the [`Driver`] trait.
///
/// Owns raw mode and the alternate screen for its lifetime.
pub struct TerminalDriver {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    event_stream: EventStream,
}

impl TerminalDriver {
    /// Take over the terminal.
    pub fn new() -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;

        Ok(Self { terminal, event_stream: EventStream::new() })
    }
}

/// Convert a crossterm key event to [`KeyInput`].
///
/// Ctrl+C maps to Esc so it quits like in any other terminal program.
pub fn convert_key(event: KeyEvent) -> Option<KeyInput> {
    if event.modifiers.contains(KeyModifiers::CONTROL) && event.code == KeyCode::Char('c') {
        return Some(KeyInput::Esc);
    }
    match event.code {
        KeyCode::Char(c) => Some(KeyInput::Char(c)),
        KeyCode::Enter => Some(KeyInput::Enter),
        KeyCode::Backspace => Some(KeyInput::Backspace),
        KeyCode::Delete => Some(KeyInput::Delete),
        KeyCode::Tab => Some(KeyInput::Tab),
        KeyCode::Esc => Some(KeyInput::Esc),
        KeyCode::Left => Some(KeyInput::Left),
        KeyCode::Right => Some(KeyInput::Right),
        KeyCode::Up => Some(KeyInput::Up),
        KeyCode::Down => Some(KeyInput::Down),
        KeyCode::Home => Some(KeyInput::Home),
        KeyCode::End => Some(KeyInput::End),
        _ => None,
    }
}

impl Driver for TerminalDriver {
    type Error = TerminalError;

    async fn poll_event(&mut self, app: &mut App) -> Result<Vec<AppAction>, Self::Error> {
        match self.event_stream.next().await {
            Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                Ok(convert_key(key).map(|k| app.handle(AppEvent::Key(k))).unwrap_or_default())
            },
            Some(Ok(Event::Resize(cols, rows))) => Ok(app.handle(AppEvent::Resize(cols, rows))),
            Some(Ok(_)) => Ok(vec![]),
            Some(Err(e)) => Err(TerminalError::Io(e)),
            // Input closed; nothing more can happen
            None => Ok(app.quit()),
        }
    }

    fn render(&mut self, app: &App) -> Result<(), Self::Error> {
        self.terminal.draw(|frame| ui::render(frame, app))?;
        Ok(())
    }

    fn stop(&mut self) {
        let _ = self.terminal.show_cursor();
    }
}

impl Drop for TerminalDriver {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}
