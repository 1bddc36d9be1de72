//! Cutter valve implementations

pub mod solenoid;

pub use solenoid::{SolenoidConfig, SolenoidValve};
