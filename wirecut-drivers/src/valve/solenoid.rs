//! Solenoid valve cutter output
//!
//! The cutter is driven by a solenoid valve on a single GPIO (directly or
//! via relay/MOSFET). The output can be configured as active-high or
//! active-low; the reference rig rests with the pin HIGH and cuts with
//! the pin LOW.
//!
//! Every transition is followed by a dwell: the valve and the cylinder
//! behind it need time to move before the next action may start.

use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;

use wirecut_core::traits::{ActuatorError, CutterActuator};

/// Solenoid valve configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SolenoidConfig {
    /// If true, cutting stroke = pin LOW
    pub active_low: bool,
    /// Dwell after each transition (ms)
    pub dwell_ms: u32,
}

impl Default for SolenoidConfig {
    fn default() -> Self {
        Self {
            active_low: true,
            dwell_ms: 2000,
        }
    }
}

/// Solenoid-actuated cutter
pub struct SolenoidValve<P, D> {
    pin: P,
    delay: D,
    config: SolenoidConfig,
    /// Current logical state (true = cutting stroke)
    closed: bool,
    /// Completed cuts since creation
    cuts: u32,
}

impl<P: OutputPin, D: DelayNs> SolenoidValve<P, D> {
    /// Create a new solenoid valve output
    ///
    /// Drives the rest level immediately, without dwelling.
    pub fn new(pin: P, delay: D, config: SolenoidConfig) -> Result<Self, ActuatorError> {
        let mut valve = Self {
            pin,
            delay,
            config,
            closed: false,
            cuts: 0,
        };
        // Ensure cutter starts retracted
        valve.drive(false)?;
        Ok(valve)
    }

    /// Get the configuration
    pub fn config(&self) -> &SolenoidConfig {
        &self.config
    }

    /// Number of complete close/open cycles
    pub fn cut_count(&self) -> u32 {
        self.cuts
    }

    fn drive(&mut self, closed: bool) -> Result<(), ActuatorError> {
        // Normal: closed=true, active_low=false → high
        // Inverted: closed=true, active_low=true → low
        let result = if closed != self.config.active_low {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        result.map_err(|_| ActuatorError::Pin)?;
        self.closed = closed;
        Ok(())
    }
}

impl<P: OutputPin, D: DelayNs> CutterActuator for SolenoidValve<P, D> {
    async fn close(&mut self) -> Result<(), ActuatorError> {
        self.drive(true)?;
        self.delay.delay_ms(self.config.dwell_ms).await;
        Ok(())
    }

    async fn open(&mut self) -> Result<(), ActuatorError> {
        let was_closed = self.closed;
        self.drive(false)?;
        self.delay.delay_ms(self.config.dwell_ms).await;
        if was_closed {
            self.cuts = self.cuts.wrapping_add(1);
        }
        Ok(())
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}
