//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations.

pub mod actuator;
pub mod display;
pub mod feed;
pub mod keypad;

pub use actuator::{ActuatorError, CutterActuator};
pub use display::{DisplayError, TextDisplay, TextDisplayExt};
pub use feed::{FeedDirection, FeedDrive, MotionError};
pub use keypad::KeySource;
