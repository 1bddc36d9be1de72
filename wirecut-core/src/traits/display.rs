//! Text display trait for the 2x16 character LCD

use core::fmt::Write;

use heapless::String;

/// Errors that can occur with display communication
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus transfer to the display failed
    Bus,
}

/// Trait for a cursor-addressed character display
///
/// Text is written at the current cursor position, which advances by one
/// column per character.
#[allow(async_fn_in_trait)]
pub trait TextDisplay {
    /// Clear the screen and move the cursor to (0, 0)
    async fn clear(&mut self) -> Result<(), DisplayError>;

    /// Move the cursor
    ///
    /// - `col`: Column number (0-15). Larger values park the cursor just
    ///   past the last cell, where written text is not visible.
    /// - `row`: Row number (0-1), clamped to the last row
    async fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError>;

    /// Write ASCII text at the cursor
    async fn write_str(&mut self, text: &str) -> Result<(), DisplayError>;
}

/// Helper trait for drawing common screen elements
#[allow(async_fn_in_trait)]
pub trait TextDisplayExt: TextDisplay {
    /// Move the cursor and write text
    async fn text_at(&mut self, col: u8, row: u8, text: &str) -> Result<(), DisplayError> {
        self.set_cursor(col, row).await?;
        self.write_str(text).await
    }

    /// Write a single character at the cursor
    async fn write_char(&mut self, c: char) -> Result<(), DisplayError> {
        let mut buf = [0u8; 4];
        self.write_str(c.encode_utf8(&mut buf)).await
    }

    /// Write a number in decimal at the cursor
    async fn write_num(&mut self, value: u32) -> Result<(), DisplayError> {
        // Own buffer: never shares storage with the entry buffer
        let mut text: String<10> = String::new();
        // u32::MAX has 10 digits, always fits
        let written = write!(text, "{}", value);
        debug_assert!(written.is_ok());
        self.write_str(&text).await
    }
}

// Blanket implementation for all TextDisplay types
impl<T: TextDisplay> TextDisplayExt for T {}
