//! Operator screens
//!
//! The LCD is a 2x16 character display. Screens are drawn with plain
//! text writes; there is no off-screen buffer on the device.

pub mod grid;
pub mod screens;

pub use grid::{TextGrid, SCREEN_COLS, SCREEN_ROWS};
