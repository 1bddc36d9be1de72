//! Matrix keypad scanner
//!
//! Scans a row/column key matrix: each row is driven low in turn while
//! the column inputs (pulled up) are read. A pressed key connects its row
//! to its column, so that column reads low.
//!
//! A key is reported once per press, after it has been seen in
//! `debounce_scans` consecutive scans. Holding a key does not repeat.
//!
//! Call [`MatrixKeypad::poll`] periodically (every 5-10 ms).

use embedded_hal::digital::{InputPin, OutputPin};

use wirecut_core::input::{Key, KEYMAP, KEYPAD_COLS, KEYPAD_ROWS};

/// Default number of identical scans before a press is accepted
pub const DEFAULT_DEBOUNCE_SCANS: u8 = 3;

/// Errors that can occur while scanning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeypadError {
    /// A row output could not be driven
    RowPin,
    /// A column input could not be read
    ColumnPin,
}

/// Row/column matrix keypad
pub struct MatrixKeypad<R, C, const ROWS: usize, const COLS: usize> {
    rows: [R; ROWS],
    cols: [C; COLS],
    keymap: [[char; COLS]; ROWS],
    debounce_scans: u8,
    /// Position seen in the most recent scan
    candidate: Option<(usize, usize)>,
    /// Consecutive scans `candidate` has been seen
    stable: u8,
    /// Whether the current press was already reported
    reported: bool,
}

/// Keypad with the reference 4x3 layout (`123 / 456 / 789 / *0#`)
pub type Keypad4x3<R, C> = MatrixKeypad<R, C, KEYPAD_ROWS, KEYPAD_COLS>;

impl<R, C> MatrixKeypad<R, C, KEYPAD_ROWS, KEYPAD_COLS>
where
    R: OutputPin,
    C: InputPin,
{
    /// Create a scanner for the reference 4x3 keypad
    pub fn reference(rows: [R; KEYPAD_ROWS], cols: [C; KEYPAD_COLS]) -> Result<Self, KeypadError> {
        Self::new(rows, cols, KEYMAP, DEFAULT_DEBOUNCE_SCANS)
    }
}

impl<R, C, const ROWS: usize, const COLS: usize> MatrixKeypad<R, C, ROWS, COLS>
where
    R: OutputPin,
    C: InputPin,
{
    /// Create a new scanner
    ///
    /// All rows are released (driven high). `debounce_scans` of 0 is
    /// treated as 1.
    pub fn new(
        mut rows: [R; ROWS],
        cols: [C; COLS],
        keymap: [[char; COLS]; ROWS],
        debounce_scans: u8,
    ) -> Result<Self, KeypadError> {
        for row in rows.iter_mut() {
            row.set_high().map_err(|_| KeypadError::RowPin)?;
        }
        Ok(Self {
            rows,
            cols,
            keymap,
            debounce_scans: debounce_scans.max(1),
            candidate: None,
            stable: 0,
            reported: false,
        })
    }

    /// Scan the matrix once and report a newly pressed key
    ///
    /// Returns `Ok(None)` while nothing is pressed, while a press is still
    /// bouncing, and while an already reported key is held. Positions the
    /// keymap does not decode are never reported.
    pub fn poll(&mut self) -> Result<Option<Key>, KeypadError> {
        let raw = self.scan()?;

        if raw == self.candidate {
            self.stable = self.stable.saturating_add(1);
        } else {
            self.candidate = raw;
            self.stable = 1;
            self.reported = false;
        }

        match raw {
            Some((row, col)) if !self.reported && self.stable >= self.debounce_scans => {
                self.reported = true;
                Ok(Key::from_char(self.keymap[row][col]))
            }
            _ => Ok(None),
        }
    }

    /// Read the raw matrix state
    ///
    /// Returns the first closed switch in row-major order.
    pub fn scan(&mut self) -> Result<Option<(usize, usize)>, KeypadError> {
        let mut found = None;

        for row in 0..ROWS {
            self.rows[row].set_low().map_err(|_| KeypadError::RowPin)?;

            let mut hit = Ok(None);
            for (col, input) in self.cols.iter_mut().enumerate() {
                match input.is_low() {
                    Ok(true) => {
                        hit = Ok(Some(col));
                        break;
                    }
                    Ok(false) => {}
                    Err(_) => {
                        hit = Err(KeypadError::ColumnPin);
                        break;
                    }
                }
            }

            // Always release the row, even if the read failed
            self.rows[row].set_high().map_err(|_| KeypadError::RowPin)?;

            if let Some(col) = hit? {
                found = Some((row, col));
                break;
            }
        }

        Ok(found)
    }
}
