//! State machine definition
//!
//! The operator walks a linear pipeline: `*` steps back, `#` steps
//! forward. Once cutting starts there is no way back until the job is
//! done.

use super::events::Event;

/// Machine states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MachineState {
    /// Menu shown, waiting for `1`
    #[default]
    Home,
    /// Operator typing the piece length
    EnterLength,
    /// Operator typing the piece count
    EnterAmount,
    /// Summary shown, waiting for go/back
    Confirm,
    /// Feeding and cutting; keypad ignored
    Cutting,
    /// Job finished, waiting for acknowledgement
    Done,
    /// Unexpected state; shows an error, then recovers to `Home`
    Invalid,
}

impl MachineState {
    /// Check if this state drives the roller and cutter
    pub fn motion_allowed(&self) -> bool {
        matches!(self, MachineState::Cutting)
    }

    /// Process an event and return the next state
    ///
    /// This is the core state transition logic.
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use MachineState::*;

        match (self, event) {
            // Home transitions
            (Home, Begin) => EnterLength,

            // EnterLength transitions
            (EnterLength, EntryAccepted) => EnterAmount,
            (EnterLength, EntryRejected) => EnterLength,
            (EnterLength, Back) => Home,

            // EnterAmount transitions
            (EnterAmount, EntryAccepted) => Confirm,
            (EnterAmount, EntryRejected) => EnterAmount,
            (EnterAmount, Back) => EnterLength,

            // Confirm transitions
            (Confirm, Advance) => Cutting,
            (Confirm, Back) => EnterAmount,

            // Cutting runs to completion
            (Cutting, CycleFinished) => Done,

            // Done transitions
            (Done, Acknowledge) => Home,

            // Invalid transitions
            (Invalid, Recover) => Home,

            // Default: stay in current state
            _ => self,
        }
    }
}
