//! Single-line editable text with a byte-indexed cursor

/// A text input value plus cursor position (always on a char boundary)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
    cursor: usize,
}

impl TextField {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.len();
        TextField { value, cursor }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Characters before the cursor
    pub fn cursor_index(&self) -> usize {
        self.value[..self.cursor].chars().count()
    }


    /// The value with every character replaced by `mask`
    pub fn masked(&self, mask: char) -> String {
        self.value.chars().map(|_| mask).collect()
    }

    pub fn insert_char(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn insert_str(&mut self, text: &str) {
        let text: String = text.chars().filter(|c| !c.is_control()).collect();
        self.value.insert_str(self.cursor, &text);
        self.cursor += text.len();
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = self.value[..self.cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.value.remove(prev);
            self.cursor = prev;
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.value[..self.cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor = self.value[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.value.len());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace_multibyte() {
        let mut field = TextField::default();
        for c in "héllo".chars() {
            field.insert_char(c);
        }
        assert_eq!(field.value(), "héllo");
        field.move_left();
        field.move_left();
        field.move_left();
        field.backspace();
        assert_eq!(field.value(), "hllo");
        assert_eq!(field.cursor_index(), 1);
    }

    #[test]
    fn test_move_right_stops_at_end() {
        let mut field = TextField::new("ab");
        field.move_right();
        assert_eq!(field.cursor_index(), 2);
        field.move_left();
        field.insert_char('x');
        assert_eq!(field.value(), "axb");
    }

    #[test]
    fn test_paste_strips_newlines() {
        let mut field = TextField::default();
        field.insert_str("ada@example.com\n");
        assert_eq!(field.value(), "ada@example.com");
    }

    #[test]
    fn test_masked() {
        assert_eq!(TextField::new("pw1").masked('•'), "•••");
    }
}
