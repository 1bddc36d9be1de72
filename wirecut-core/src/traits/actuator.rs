//! Cutter actuator trait
//!
//! The cutter is a solenoid valve with two positions. Both transitions
//! are followed by a dwell so the mechanism can physically settle.

/// Errors that can occur with the cutter output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActuatorError {
    /// The valve output could not be driven
    Pin,
}

/// Trait for the cutter solenoid
#[allow(async_fn_in_trait)]
pub trait CutterActuator {
    /// Drive the cutting stroke, then dwell
    async fn close(&mut self) -> Result<(), ActuatorError>;

    /// Return to the rest position, then dwell
    async fn open(&mut self) -> Result<(), ActuatorError>;

    /// Check if the cutter is currently in its stroke position
    fn is_closed(&self) -> bool;
}
