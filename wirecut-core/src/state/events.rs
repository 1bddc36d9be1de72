//! Events that trigger state transitions

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // Operator navigation events
    /// `1` pressed on the home menu
    Begin,
    /// Numeric entry confirmed with a usable value
    EntryAccepted,
    /// Numeric entry confirmed with zero; prompt again
    EntryRejected,
    /// `#` pressed on the summary screen
    Advance,
    /// `*` pressed (or entry cancelled)
    Back,
    /// `#` pressed on the done screen
    Acknowledge,

    // Machine events
    /// Every piece of the job has been fed and cut
    CycleFinished,
    /// Error screen has been shown for the hold time
    Recover,
}
