//! Input line
//!
//! Displays the input buffer with cursor. Passwords typed into `/login` and
//! `/register` are masked.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
};
use tweetline_app::InputState;

use super::Palette;

const PROMPT_WIDTH: u16 = 3; // "> "
const INPUT_LINE_OFFSET_Y: u16 = 1; // inside top border
const RIGHT_PADDING: u16 = 1; // inside right border
const MASK: char = '*';

/// Word index of the password argument, if `line` is an auth command.
fn secret_word(line: &str) -> Option<usize> {
    let command = line.split_whitespace().next()?;
    match command {
        "/login" => Some(2),
        "/register" => Some(3),
        _ => None,
    }
}

/// `line` with the password argument of an auth command replaced by `*`.
///
/// The result has the same number of characters so the cursor position
/// still lines up.
pub fn masked(line: &str) -> String {
    let Some(secret) = secret_word(line) else {
        return line.to_string();
    };

    let mut word = 0;
    let mut in_word = false;
    line.chars()
        .map(|c| {
            if c.is_whitespace() {
                if in_word {
                    word += 1;
                }
                in_word = false;
                return c;
            }
            in_word = true;
            if word >= secret { MASK } else { c }
        })
        .collect()
}

/// Columns the cursor sits after the prompt, clamped to the visible width.
fn cursor_offset(cursor: usize, available_width: u16) -> u16 {
    u16::try_from(cursor).unwrap_or(u16::MAX).min(available_width)
}

/// Render the input line.
pub fn render(frame: &mut Frame, input: &InputState, palette: &Palette, area: Rect) {
    let block = Block::default().borders(Borders::ALL);

    let input_text = format!("> {}", masked(input.buffer()));
    let paragraph = Paragraph::new(input_text).style(Style::default().fg(palette.text)).block(block);

    frame.render_widget(paragraph, area);

    let available_width = area.width.saturating_sub(PROMPT_WIDTH + RIGHT_PADDING);
    let offset = cursor_offset(input.cursor(), available_width);

    let cursor_x = area.x.saturating_add(PROMPT_WIDTH).saturating_add(offset);
    let cursor_y = area.y.saturating_add(INPUT_LINE_OFFSET_Y);
    let max_x = area.x.saturating_add(area.width).saturating_sub(RIGHT_PADDING);
    let cursor_x = cursor_x.min(max_x);

    frame.set_cursor_position((cursor_x, cursor_y));
}
