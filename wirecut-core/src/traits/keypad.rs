//! Key input trait
//!
//! The controller consumes decoded key presses; electrical scanning and
//! debouncing happen behind this trait.

use crate::input::Key;

/// Source of operator key presses
#[allow(async_fn_in_trait)]
pub trait KeySource {
    /// Take the next pending key press without waiting
    ///
    /// Returns `None` if no key has been pressed.
    fn poll_key(&mut self) -> Option<Key>;

    /// Wait until a key is pressed
    ///
    /// This is the only place the controller suspends while waiting for
    /// the operator.
    async fn wait_key(&mut self) -> Key;

    /// Drop every key press that is already queued
    ///
    /// Used after the cutting cycle so presses made mid-stroke never act
    /// on the following screen.
    fn discard_pending(&mut self) -> usize {
        let mut dropped = 0;
        while self.poll_key().is_some() {
            dropped += 1;
        }
        dropped
    }
}
