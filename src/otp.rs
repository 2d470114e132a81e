//! One-time code entry: a fixed row of single-character slots with a focus cursor.

use crate::constants::OTP_LENGTH;

/// Slot contents plus the index of the focused slot
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OtpInput {
    slots: [Option<char>; OTP_LENGTH],
    focus: usize,
}

impl Default for OtpInput {
    fn default() -> Self {
        Self::new()
    }
}

impl OtpInput {
    pub fn new() -> Self {
        OtpInput {
            slots: [None; OTP_LENGTH],
            focus: 0,
        }
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn slot(&self, index: usize) -> Option<char> {
        self.slots.get(index).copied().flatten()
    }

    pub fn set_focus(&mut self, index: usize) {
        if index < OTP_LENGTH {
            self.focus = index;
        }
    }

    /// Replace the focused slot with the last character of `text`.
    ///
    /// Empty text clears the slot. A non-empty entry moves focus to the
    /// next slot unless the last one is focused.
    pub fn change_text(&mut self, text: &str) {
        let index = self.focus;
        self.slots[index] = text.chars().last();
        if !text.is_empty() && index < OTP_LENGTH - 1 {
            self.focus = index + 1;
        }
    }

    pub fn enter_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.change_text(c.encode_utf8(&mut buf));
    }

    /// Backspace on an empty slot steps back; on a filled slot it clears it.
    pub fn backspace(&mut self) {
        let index = self.focus;
        if self.slots[index].is_none() {
            if index > 0 {
                self.focus = index - 1;
            }
        } else {
            self.slots[index] = None;
        }
    }

    pub fn code(&self) -> String {
        self.slots.iter().flatten().collect()
    }

    /// The complete code, if every slot holds a character
    pub fn complete_code(&self) -> Option<String> {
        let code = self.code();
        (code.chars().count() == OTP_LENGTH).then_some(code)
    }
}
