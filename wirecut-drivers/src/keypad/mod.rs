//! Keypad implementations

pub mod matrix;

pub use matrix::{Keypad4x3, KeypadError, MatrixKeypad, DEFAULT_DEBOUNCE_SCANS};
