//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use wirecut_core::input::Key;

/// Channel capacity for key presses
const KEY_CHANNEL_SIZE: usize = 8;

/// Debounced key presses from the keypad scanner to the controller
pub static KEY_CHANNEL: Channel<CriticalSectionRawMutex, Key, KEY_CHANNEL_SIZE> = Channel::new();
