//! Rig calibration
//!
//! Mechanical constants of a physical cutter rig. Everything that depends
//! on the roller, the stepper driver, or the solenoid lives here so the
//! control logic never hard-codes a rig.

/// Mechanical and timing calibration for one cutter rig
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RigConfig {
    /// Radius of the feed roller in mm
    pub feed_radius_mm: u32,
    /// Step pulses for one full revolution of the feed roller
    pub steps_per_revolution: u32,
    /// Hold time on each half of a step pulse (µs). Lower is faster.
    pub step_half_period_us: u32,
    /// Dwell after each valve transition (ms)
    pub valve_switch_ms: u32,
    /// Pause between the end of feeding and closing the cutter (ms)
    pub settle_ms: u32,
    /// How long the error screen stays up before recovering (ms)
    pub error_hold_ms: u32,
}

impl RigConfig {
    /// Calibration of the reference rig (40 mm roller, 1700 steps/rev)
    pub const REFERENCE: Self = Self {
        feed_radius_mm: 40,
        steps_per_revolution: 1700,
        step_half_period_us: 250,
        valve_switch_ms: 2000,
        settle_ms: 500,
        error_hold_ms: 5000,
    };

    /// Linear feed per step pulse in mm
    ///
    /// Roller circumference divided by steps per revolution.
    pub fn mm_per_step(&self) -> f64 {
        2.0 * core::f64::consts::PI * self.feed_radius_mm as f64
            / self.steps_per_revolution.max(1) as f64
    }

    /// Number of step pulses needed to feed `length_mm` of cable
    ///
    /// Rounds down: the segment is never longer than requested.
    pub fn step_count(&self, length_mm: u16) -> u32 {
        let mm_per_step = self.mm_per_step();
        if mm_per_step <= 0.0 {
            return 0;
        }
        // Truncation is floor for non-negative values
        (length_mm as f64 / mm_per_step) as u32
    }
}

impl Default for RigConfig {
    fn default() -> Self {
        Self::REFERENCE
    }
}
