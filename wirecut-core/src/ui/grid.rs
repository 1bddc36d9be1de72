//! In-memory character grid
//!
//! A [`TextDisplay`] that keeps the screen contents in RAM. Behaves like
//! the visible area of the 2x16 LCD: writes past the last column are
//! dropped.

use crate::traits::{DisplayError, TextDisplay};

/// Number of character rows on the LCD
pub const SCREEN_ROWS: usize = 2;

/// Number of character columns on the LCD
pub const SCREEN_COLS: usize = 16;

/// Character grid with a cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextGrid {
    cells: [[u8; SCREEN_COLS]; SCREEN_ROWS],
    col: usize,
    row: usize,
}

impl Default for TextGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl TextGrid {
    /// Create a blank grid
    pub const fn new() -> Self {
        Self {
            cells: [[b' '; SCREEN_COLS]; SCREEN_ROWS],
            col: 0,
            row: 0,
        }
    }

    /// Text of a row with trailing blanks removed
    pub fn row(&self, row: usize) -> &str {
        match self.cells.get(row) {
            Some(cells) => core::str::from_utf8(cells).unwrap_or("").trim_end(),
            None => "",
        }
    }

    /// Current cursor position as (column, row)
    pub fn cursor(&self) -> (usize, usize) {
        (self.col, self.row)
    }

    fn put(&mut self, byte: u8) {
        if self.col < SCREEN_COLS {
            // Only printable ASCII reaches the LCD character ROM unchanged
            let byte = if (0x20..0x7f).contains(&byte) { byte } else { b'?' };
            self.cells[self.row][self.col] = byte;
        }
        self.col = self.col.saturating_add(1);
    }
}

impl TextDisplay for TextGrid {
    async fn clear(&mut self) -> Result<(), DisplayError> {
        self.cells = [[b' '; SCREEN_COLS]; SCREEN_ROWS];
        self.col = 0;
        self.row = 0;
        Ok(())
    }

    async fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError> {
        // One past the last cell: text written there is off-screen
        self.col = (col as usize).min(SCREEN_COLS);
        self.row = (row as usize).min(SCREEN_ROWS - 1);
        Ok(())
    }

    async fn write_str(&mut self, text: &str) -> Result<(), DisplayError> {
        for byte in text.bytes() {
            self.put(byte);
        }
        Ok(())
    }
}
