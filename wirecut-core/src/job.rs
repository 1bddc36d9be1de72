//! Cutting job
//!
//! The operator's request for one session: how long each piece is and
//! how many pieces to cut.

/// Parameters and progress of the current job
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Job {
    /// Length of each piece in mm
    pub length_mm: u16,
    /// Number of pieces to cut
    pub amount: u16,
    /// Pieces started so far (0..=amount)
    pub progress: u16,
}

impl Job {
    /// Create a job with the given parameters
    pub const fn new(length_mm: u16, amount: u16) -> Self {
        Self {
            length_mm,
            amount,
            progress: 0,
        }
    }

    /// Check if the job would feed and cut anything
    pub fn is_runnable(&self) -> bool {
        self.length_mm > 0 && self.amount > 0
    }

    /// Check if every piece has been cut
    pub fn is_complete(&self) -> bool {
        self.progress >= self.amount
    }

    /// Clear parameters and progress
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
