//! Controller error type

use crate::traits::{ActuatorError, DisplayError, MotionError};

/// Errors surfaced by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlError {
    /// Display communication failed
    Display(DisplayError),
    /// Feed stepper output failed
    Motion(MotionError),
    /// Cutter output failed
    Actuator(ActuatorError),
}

impl From<DisplayError> for ControlError {
    fn from(e: DisplayError) -> Self {
        ControlError::Display(e)
    }
}

impl From<MotionError> for ControlError {
    fn from(e: MotionError) -> Self {
        ControlError::Motion(e)
    }
}

impl From<ActuatorError> for ControlError {
    fn from(e: ActuatorError) -> Self {
        ControlError::Actuator(e)
    }
}

impl core::fmt::Display for ControlError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ControlError::Display(e) => write!(f, "display: {:?}", e),
            ControlError::Motion(e) => write!(f, "feed motor: {:?}", e),
            ControlError::Actuator(e) => write!(f, "cutter: {:?}", e),
        }
    }
}
