//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels.

pub mod controller;
pub mod keypad;

pub use controller::{controller_task, CutterController};
pub use keypad::{keypad_task, ChannelKeys, FirmwareKeypad};
