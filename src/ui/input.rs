use unicode_width::UnicodeWidthStr;

/// Single-line text input with a byte-offset cursor.
///
/// The cursor always sits on a character boundary; movement walks char
/// indices rather than bytes so multi-byte text behaves.
#[derive(Debug, Default)]
pub(crate) struct SearchInput {
    text: String,
    cursor: usize,
}

impl SearchInput {
    pub(crate) fn with_text(text: String) -> Self {
        let cursor = text.len();
        Self { text, cursor }
    }

    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn insert(&mut self, ch: char) {
        self.text.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    /// Remove the character before the cursor. Returns whether the text
    /// changed.
    pub(crate) fn backspace(&mut self) -> bool {
        let Some(previous) = self.previous_boundary() else {
            return false;
        };
        self.text.remove(previous);
        self.cursor = previous;
        true
    }

    /// Remove the character under the cursor. Returns whether the text
    /// changed.
    pub(crate) fn delete(&mut self) -> bool {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
            true
        } else {
            false
        }
    }

    pub(crate) fn move_left(&mut self) {
        if let Some(previous) = self.previous_boundary() {
            self.cursor = previous;
        }
    }

    pub(crate) fn move_right(&mut self) {
        if let Some(ch) = self.text[self.cursor..].chars().next() {
            self.cursor += ch.len_utf8();
        }
    }

    pub(crate) fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub(crate) fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Display column of the cursor, in terminal cells.
    pub(crate) fn cursor_column(&self) -> u16 {
        self.text[..self.cursor].width() as u16
    }

    fn previous_boundary(&self) -> Option<usize> {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(index, _)| index)
    }
}
