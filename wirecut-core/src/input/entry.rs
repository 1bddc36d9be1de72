//! Numeric entry buffer
//!
//! Accumulates digit presses for the length and amount prompts. The
//! buffer holds at most [`MAX_DIGITS`] digits; further digits are dropped
//! without complaint.

use heapless::Vec;

use super::key::Key;

/// Maximum digits a prompt accepts
pub const MAX_DIGITS: usize = 4;

/// How a numeric entry ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EntryOutcome {
    /// Confirm pressed; the parsed value (0 for an empty buffer)
    Value(u16),
    /// Cancel pressed; the entry is discarded
    Retreat,
}

/// Bounded digit accumulator
#[derive(Debug, Clone, Default)]
pub struct NumericEntryBuffer {
    digits: Vec<u8, MAX_DIGITS>,
}

impl NumericEntryBuffer {
    /// Create an empty buffer
    pub const fn new() -> Self {
        Self { digits: Vec::new() }
    }

    /// Forget all digits
    pub fn reset(&mut self) {
        self.digits.clear();
    }

    /// Append a digit
    ///
    /// Returns `true` if the digit was stored (and should be echoed),
    /// `false` if the buffer is full or the value is not a digit.
    pub fn push(&mut self, digit: u8) -> bool {
        if digit > 9 {
            return false;
        }
        self.digits.push(digit).is_ok()
    }

    /// Decimal value of the digits entered so far
    pub fn value(&self) -> u16 {
        // Four digits never exceed 9999
        self.digits
            .iter()
            .fold(0u16, |acc, &d| acc * 10 + d as u16)
    }

    /// Resolve the entry with a terminating key
    ///
    /// Returns `None` for digit keys, which do not end an entry.
    pub fn resolve(&self, key: Key) -> Option<EntryOutcome> {
        match key {
            Key::Confirm => Some(EntryOutcome::Value(self.value())),
            Key::Cancel => Some(EntryOutcome::Retreat),
            Key::Digit(_) => None,
        }
    }
}
