//! Operator input
//!
//! Key alphabet of the keypad and the digit accumulator behind the
//! numeric prompts.

pub mod entry;
pub mod key;

pub use entry::{EntryOutcome, NumericEntryBuffer, MAX_DIGITS};
pub use key::{Key, KEYMAP, KEYPAD_COLS, KEYPAD_ROWS};
