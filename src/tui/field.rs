use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::util::text::{next_boundary, prev_boundary, word_start_before};

/// A text input with a cursor (byte offset, always on a grapheme
/// boundary). Newlines are only inserted explicitly, never by plain Enter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
    cursor: usize,
}

impl TextField {
    /// A field holding `value` with the cursor at the end
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.len();
        TextField { value, cursor }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = prev_boundary(&self.value, self.cursor);
        self.value.replace_range(start..self.cursor, "");
        self.cursor = start;
    }

    pub fn delete(&mut self) {
        if self.cursor >= self.value.len() {
            return;
        }
        let end = next_boundary(&self.value, self.cursor);
        self.value.replace_range(self.cursor..end, "");
    }

    pub fn delete_word(&mut self) {
        let start = word_start_before(&self.value, self.cursor);
        self.value.replace_range(start..self.cursor, "");
        self.cursor = start;
    }

    pub fn left(&mut self) {
        self.cursor = prev_boundary(&self.value, self.cursor);
    }

    pub fn right(&mut self) {
        self.cursor = next_boundary(&self.value, self.cursor);
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    /// Apply an editing key. Returns false for keys a field does not handle
    /// (Enter, Esc, Tab, ...), leaving them to the caller.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('w')) | (KeyModifiers::ALT, KeyCode::Backspace) => {
                self.delete_word()
            }
            (KeyModifiers::CONTROL, KeyCode::Char('a')) => self.home(),
            (KeyModifiers::CONTROL, KeyCode::Char('e')) => self.end(),
            (KeyModifiers::CONTROL, KeyCode::Char('u')) => {
                self.value.replace_range(..self.cursor, "");
                self.cursor = 0;
            }
            (m, KeyCode::Char(c)) if !m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                self.insert(c)
            }
            (_, KeyCode::Backspace) => self.backspace(),
            (_, KeyCode::Delete) => self.delete(),
            (_, KeyCode::Left) => self.left(),
            (_, KeyCode::Right) => self.right(),
            (_, KeyCode::Home) => self.home(),
            (_, KeyCode::End) => self.end(),
            _ => return false,
        }
        true
    }
}
