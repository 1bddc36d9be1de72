//! Configuration types
//!
//! Rig calibration is compile-time data supplied by the firmware build.

pub mod rig;

pub use rig::RigConfig;
