//! Board-agnostic core logic for the cable cutter firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (keypad, display, feed stepper, cutter)
//! - State machine for the operator pipeline
//! - Numeric entry and job parameters
//! - Rig calibration (feed distance per step)
//! - Screen rendering
//! - The controller that runs the feed and cut cycle

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod error;
pub mod input;
pub mod job;
pub mod state;
pub mod traits;
pub mod ui;

pub use controller::Controller;
pub use error::ControlError;
