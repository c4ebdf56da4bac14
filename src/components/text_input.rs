use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    style::{Color, Style},
    text::Span,
};

/// A reusable single-line text editor handling cursor positioning and
/// editing keys.
///
/// The cursor is tracked as a char position; conversions to byte offsets
/// go through [`byte_index`](Self::byte_index) so multibyte input stays
/// consistent.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    text: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Set the text and move the cursor to the end.
    pub fn set_text(&mut self, text: String) {
        self.cursor = text.chars().count();
        self.text = text;
    }

    pub fn set_cursor(&mut self, position: usize) {
        self.cursor = position.min(self.len_chars());
    }

    fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    /// Byte offset of the given char position.
    fn byte_index(&self, char_pos: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_pos)
            .map(|(idx, _)| idx)
            .unwrap_or(self.text.len())
    }

    fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the chars in `[start, end)` and park the cursor at `start`.
    /// Returns whether anything was removed.
    fn delete_range(&mut self, start: usize, end: usize) -> bool {
        if start >= end || end > self.len_chars() {
            return false;
        }

        let byte_start = self.byte_index(start);
        let byte_end = self.byte_index(end);
        self.text.drain(byte_start..byte_end);
        self.cursor = start;
        true
    }

    /// Find the previous word boundary from the given position.
    fn prev_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.text.chars().collect();
        let mut pos = from;

        while pos > 0 && chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        while pos > 0 && !chars[pos - 1].is_whitespace() {
            pos -= 1;
        }

        pos
    }

    /// Find the next word boundary from the given position.
    fn next_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.text.chars().collect();
        let mut pos = from;

        while pos < chars.len() && !chars[pos].is_whitespace() {
            pos += 1;
        }
        while pos < chars.len() && chars[pos].is_whitespace() {
            pos += 1;
        }

        pos
    }

    /// Apply a key event; returns whether the text changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('a') => {
                    self.cursor = 0;
                    false
                }
                KeyCode::Char('e') => {
                    self.cursor = self.len_chars();
                    false
                }
                KeyCode::Char('b') => {
                    self.cursor = self.cursor.saturating_sub(1);
                    false
                }
                KeyCode::Char('f') => {
                    self.set_cursor(self.cursor + 1);
                    false
                }
                // Same as backspace
                KeyCode::Char('h') => self.delete_range(self.cursor.saturating_sub(1), self.cursor),
                // Delete char under cursor
                KeyCode::Char('d') => self.delete_range(self.cursor, self.cursor + 1),
                // Delete word before cursor
                KeyCode::Char('w') => {
                    self.delete_range(self.prev_word_boundary(self.cursor), self.cursor)
                }
                // Delete to beginning of line
                KeyCode::Char('u') => self.delete_range(0, self.cursor),
                // Delete to end of line
                KeyCode::Char('k') => self.delete_range(self.cursor, self.len_chars()),
                _ => false,
            };
        }

        if key.modifiers.contains(KeyModifiers::ALT) {
            return match key.code {
                KeyCode::Char('b') => {
                    self.cursor = self.prev_word_boundary(self.cursor);
                    false
                }
                KeyCode::Char('f') => {
                    self.cursor = self.next_word_boundary(self.cursor);
                    false
                }
                _ => false,
            };
        }

        match key.code {
            KeyCode::Char(c) => {
                self.insert_char(c);
                true
            }
            KeyCode::Backspace => self.delete_range(self.cursor.saturating_sub(1), self.cursor),
            KeyCode::Delete => self.delete_range(self.cursor, self.cursor + 1),
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            KeyCode::Right => {
                self.set_cursor(self.cursor + 1);
                false
            }
            KeyCode::Home => {
                self.cursor = 0;
                false
            }
            KeyCode::End => {
                self.cursor = self.len_chars();
                false
            }
            _ => false,
        }
    }

    /// Render the text with a block cursor as styled spans; shows the
    /// placeholder dimmed while the input is empty.
    pub fn cursor_spans(&self, placeholder: &str) -> Vec<Span<'_>> {
        let cursor_style = Style::default().bg(Color::White).fg(Color::Black);

        if self.text.is_empty() {
            let mut spans = vec![Span::styled(" ", cursor_style)];
            if !placeholder.is_empty() {
                spans.push(Span::styled(
                    placeholder.to_string(),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            return spans;
        }

        let split = self.byte_index(self.cursor);
        let (before, after) = self.text.split_at(split);

        if after.is_empty() {
            // Cursor sits past the last char
            return vec![Span::raw(before), Span::styled(" ", cursor_style)];
        }

        let mut rest = after.chars();
        let under_cursor = rest.next().map(String::from).unwrap_or_default();
        let remaining = rest.as_str();

        let mut spans = Vec::new();
        if !before.is_empty() {
            spans.push(Span::raw(before));
        }
        spans.push(Span::styled(under_cursor, cursor_style));
        if !remaining.is_empty() {
            spans.push(Span::raw(remaining));
        }
        spans
    }
}
