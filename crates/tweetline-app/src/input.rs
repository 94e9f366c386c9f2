//! Line editing.
//!
//! [`InputState`] owns the text buffer and cursor. The cursor counts
//! characters, not bytes, so multi-byte input edits cleanly.

/// Terminal-agnostic keyboard input.
///
/// Decouples application logic from terminal libraries so tests can type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Printable character.
    Char(char),
    /// Enter/Return key (submit the line).
    Enter,
    /// Backspace key (delete character before cursor).
    Backspace,
    /// Delete key (delete character at cursor).
    Delete,
    /// Tab key (cycle the author filter).
    Tab,
    /// Escape key (quit).
    Esc,
    /// Left arrow key.
    Left,
    /// Right arrow key.
    Right,
    /// Up arrow key.
    Up,
    /// Down arrow key.
    Down,
    /// Home key (cursor to start).
    Home,
    /// End key (cursor to end).
    End,
}

/// Text buffer and cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    buffer: String,
    cursor: usize,
}

impl InputState {
    /// Create a new empty input state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text in the input buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Apply an editing key. Returns false for keys that do not edit.
    pub fn edit(&mut self, key: KeyInput) -> bool {
        match key {
            KeyInput::Char(c) => {
                let at = self.byte_offset(self.cursor);
                self.buffer.insert(at, c);
                self.cursor = self.cursor.saturating_add(1);
            },
            KeyInput::Backspace => {
                if self.cursor > 0 {
                    self.cursor = self.cursor.saturating_sub(1);
                    let at = self.byte_offset(self.cursor);
                    self.buffer.remove(at);
                }
            },
            KeyInput::Delete => {
                if self.cursor < self.len() {
                    let at = self.byte_offset(self.cursor);
                    self.buffer.remove(at);
                }
            },
            KeyInput::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyInput::Right => self.cursor = self.cursor.saturating_add(1).min(self.len()),
            KeyInput::Home => self.cursor = 0,
            KeyInput::End => self.cursor = self.len(),
            KeyInput::Enter | KeyInput::Tab | KeyInput::Esc | KeyInput::Up | KeyInput::Down => {
                return false;
            },
        }
        true
    }

    /// Take the buffer, leaving the input empty.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.buffer)
    }

    fn len(&self) -> usize {
        self.buffer.chars().count()
    }

    fn byte_offset(&self, chars: usize) -> usize {
        self.buffer.char_indices().nth(chars).map_or(self.buffer.len(), |(i, _)| i)
    }
}
