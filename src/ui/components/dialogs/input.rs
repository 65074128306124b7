use crossterm::event::KeyCode;

/// Single-line text input with a char-indexed cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputField {
    pub text: String,
    pub cursor_position: usize,
}

impl InputField {
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor_position = text.chars().count();
        Self { text, cursor_position }
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor_position = 0;
    }

    fn byte_pos(&self, char_index: usize) -> usize {
        self.text.chars().take(char_index).map(|c| c.len_utf8()).sum()
    }

    pub fn insert_char(&mut self, c: char) {
        let byte_pos = self.byte_pos(self.cursor_position);
        self.text.insert(byte_pos, c);
        self.cursor_position += 1;
    }

    /// Insert pasted text, dropping line breaks
    pub fn insert_str(&mut self, s: &str) {
        for c in s.chars().filter(|c| *c != '\n' && *c != '\r') {
            self.insert_char(c);
        }
    }

    /// Apply an editing key. Returns false when the key is not an editing key.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        let char_count = self.text.chars().count();
        match code {
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Backspace => {
                if self.cursor_position > 0 {
                    let byte_pos = self.byte_pos(self.cursor_position - 1);
                    self.text.remove(byte_pos);
                    self.cursor_position -= 1;
                }
            }
            KeyCode::Delete => {
                if self.cursor_position < char_count {
                    let byte_pos = self.byte_pos(self.cursor_position);
                    self.text.remove(byte_pos);
                }
            }
            KeyCode::Left => self.cursor_position = self.cursor_position.saturating_sub(1),
            KeyCode::Right => {
                if self.cursor_position < char_count {
                    self.cursor_position += 1;
                }
            }
            KeyCode::Home => self.cursor_position = 0,
            KeyCode::End => self.cursor_position = char_count,
            _ => return false,
        }
        true
    }
}
