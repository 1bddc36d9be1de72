//! Keypad alphabet
//!
//! The operator has twelve keys: ten digits, `#` to confirm and `*` to
//! go back. Every other matrix position is unused.

/// Rows of the 4x3 keypad matrix
pub const KEYPAD_ROWS: usize = 4;

/// Columns of the 4x3 keypad matrix
pub const KEYPAD_COLS: usize = 3;

/// Character printed on each keypad position, row-major
pub const KEYMAP: [[char; KEYPAD_COLS]; KEYPAD_ROWS] = [
    ['1', '2', '3'],
    ['4', '5', '6'],
    ['7', '8', '9'],
    ['*', '0', '#'],
];

/// A single key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    /// Digit 0-9
    Digit(u8),
    /// `#` - confirm / advance
    Confirm,
    /// `*` - cancel / back
    Cancel,
}

impl Key {
    /// Decode a keymap character
    ///
    /// Returns `None` for characters outside the alphabet.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Key::Digit(c as u8 - b'0')),
            '#' => Some(Key::Confirm),
            '*' => Some(Key::Cancel),
            _ => None,
        }
    }

    /// Character printed on the key
    pub fn as_char(self) -> char {
        match self {
            Key::Digit(d) => (b'0' + d.min(9)) as char,
            Key::Confirm => '#',
            Key::Cancel => '*',
        }
    }
}
