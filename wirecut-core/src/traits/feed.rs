//! Feed motor trait
//!
//! This trait abstracts over the stepper driver that turns the feed
//! roller. One pulse advances the roller by one step.

/// Direction the roller turns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FeedDirection {
    /// Push cable towards the cutter
    Forward,
    /// Pull cable back from the cutter
    Reverse,
}

/// Errors that can occur with feed operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionError {
    /// A step or direction output could not be driven
    Pin,
}

/// Trait for the feed stepper
#[allow(async_fn_in_trait)]
pub trait FeedDrive {
    /// Set the direction line
    ///
    /// Only change direction between pulses.
    fn set_direction(&mut self, dir: FeedDirection) -> Result<(), MotionError>;

    /// Emit one step pulse
    ///
    /// Asserts the pulse line for `half_period_us`, then releases it for
    /// another `half_period_us`.
    async fn step(&mut self, half_period_us: u32) -> Result<(), MotionError>;

    /// Emit `steps` pulses back to back
    async fn feed(&mut self, steps: u32, half_period_us: u32) -> Result<(), MotionError> {
        for _ in 0..steps {
            self.step(half_period_us).await?;
        }
        Ok(())
    }
}
