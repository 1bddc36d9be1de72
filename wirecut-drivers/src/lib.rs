//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in wirecut-core for the cutter's hardware:
//!
//! - Feed stepper (step/direction drivers)
//! - Cutter solenoid valve
//! - 4x3 matrix keypad
//! - HD44780 character LCD on a PCF8574 I2C backpack

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod display;
pub mod keypad;
pub mod stepper;
pub mod valve;
