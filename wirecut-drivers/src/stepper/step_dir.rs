//! Step/direction stepper driver
//!
//! Drives any stepper driver with a STEP and a DIR input (A4988, DRV8825,
//! TB6600, DM542, ...). One rising edge on STEP advances the motor by one
//! step; DIR selects the rotation direction.
//!
//! Pulse timing is generated with an async delay, so the pulse rate is
//! bounded by the delay resolution of the platform.

use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;

use wirecut_core::traits::{FeedDirection, FeedDrive, MotionError};

/// Step/direction driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepDirConfig {
    /// If true, forward = DIR low
    pub invert_direction: bool,
}

/// Feed stepper driven through STEP and DIR pins
pub struct StepDirFeed<S, R, D> {
    step: S,
    dir: R,
    delay: D,
    config: StepDirConfig,
    direction: FeedDirection,
    /// Pulses emitted since creation
    pulses: u64,
}

impl<S, R, D> StepDirFeed<S, R, D>
where
    S: OutputPin,
    R: OutputPin,
    D: DelayNs,
{
    /// Create a new step/direction driver
    ///
    /// Leaves STEP low and DIR set to forward.
    pub fn new(step: S, dir: R, delay: D, config: StepDirConfig) -> Result<Self, MotionError> {
        let mut feed = Self {
            step,
            dir,
            delay,
            config,
            direction: FeedDirection::Forward,
            pulses: 0,
        };
        feed.step.set_low().map_err(|_| MotionError::Pin)?;
        feed.set_direction(FeedDirection::Forward)?;
        Ok(feed)
    }

    /// Get the current direction
    pub fn direction(&self) -> FeedDirection {
        self.direction
    }

    /// Total pulses emitted
    pub fn pulse_count(&self) -> u64 {
        self.pulses
    }

    /// Get the configuration
    pub fn config(&self) -> &StepDirConfig {
        &self.config
    }

    /// Release the pins and delay
    pub fn release(self) -> (S, R, D) {
        (self.step, self.dir, self.delay)
    }
}

impl<S, R, D> FeedDrive for StepDirFeed<S, R, D>
where
    S: OutputPin,
    R: OutputPin,
    D: DelayNs,
{
    fn set_direction(&mut self, dir: FeedDirection) -> Result<(), MotionError> {
        // Normal: forward = DIR high; inverted: forward = DIR low
        let high = (dir == FeedDirection::Forward) != self.config.invert_direction;
        let result = if high {
            self.dir.set_high()
        } else {
            self.dir.set_low()
        };
        result.map_err(|_| MotionError::Pin)?;
        self.direction = dir;
        Ok(())
    }

    async fn step(&mut self, half_period_us: u32) -> Result<(), MotionError> {
        self.step.set_high().map_err(|_| MotionError::Pin)?;
        self.delay.delay_us(half_period_us).await;
        self.step.set_low().map_err(|_| MotionError::Pin)?;
        self.delay.delay_us(half_period_us).await;
        self.pulses = self.pulses.wrapping_add(1);
        Ok(())
    }
}
