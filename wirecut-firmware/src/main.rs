//! Wirecut - Cable Feed & Cut Firmware
//!
//! Main firmware binary for RP2040-based cable cutters. An operator enters
//! a segment length and a piece count on a 4x3 keypad; a stepper-driven
//! roller feeds the cable and a solenoid-actuated cutter severs each piece.
//!
//! Wiring (reference rig):
//!
//! | Signal          | GPIO      |
//! |-----------------|-----------|
//! | Stepper STEP    | 10        |
//! | Stepper DIR     | 11        |
//! | Cutter valve    | 12        |
//! | Keypad rows 1-4 | 2, 3, 4, 5 |
//! | Keypad cols 1-3 | 6, 7, 8   |
//! | LCD I2C0 SDA    | 16        |
//! | LCD I2C0 SCL    | 17        |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use wirecut_core::Controller;
use wirecut_drivers::display::{Hd44780, DEFAULT_ADDRESS};
use wirecut_drivers::keypad::MatrixKeypad;
use wirecut_drivers::stepper::{StepDirConfig, StepDirFeed};
use wirecut_drivers::valve::{SolenoidConfig, SolenoidValve};

use crate::config::RIG;
use crate::tasks::ChannelKeys;

mod channels;
mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Wirecut firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    info!(
        "Rig: roller r={}mm, {} steps/rev, {}us half-period, {}ms valve dwell",
        RIG.feed_radius_mm, RIG.steps_per_revolution, RIG.step_half_period_us, RIG.valve_switch_ms
    );

    // Cutter valve first: the cutter must be retracted before anything moves.
    // The reference valve is active-low, so rest is the HIGH level.
    let valve_config = SolenoidConfig {
        active_low: true,
        dwell_ms: RIG.valve_switch_ms,
    };
    let valve = match SolenoidValve::new(Output::new(p.PIN_12, Level::High), Delay, valve_config) {
        Ok(valve) => valve,
        Err(e) => defmt::panic!("Cutter valve init failed: {:?}", e),
    };
    info!("Cutter valve initialized (retracted)");

    // Feed stepper (STEP=GPIO10, DIR=GPIO11)
    let feed = match StepDirFeed::new(
        Output::new(p.PIN_10, Level::Low),
        Output::new(p.PIN_11, Level::Low),
        Delay,
        StepDirConfig::default(),
    ) {
        Ok(feed) => feed,
        Err(e) => defmt::panic!("Feed stepper init failed: {:?}", e),
    };
    info!("Feed stepper initialized");

    // Keypad: rows driven, columns pulled up
    let rows = [
        Output::new(p.PIN_2, Level::High),
        Output::new(p.PIN_3, Level::High),
        Output::new(p.PIN_4, Level::High),
        Output::new(p.PIN_5, Level::High),
    ];
    let cols = [
        Input::new(p.PIN_6, Pull::Up),
        Input::new(p.PIN_7, Pull::Up),
        Input::new(p.PIN_8, Pull::Up),
    ];
    let keypad = match MatrixKeypad::reference(rows, cols) {
        Ok(keypad) => keypad,
        Err(e) => defmt::panic!("Keypad init failed: {:?}", e),
    };
    info!("Keypad initialized");

    // LCD on I2C0 (SCL=GPIO17, SDA=GPIO16)
    let i2c = I2c::new_async(p.I2C0, p.PIN_17, p.PIN_16, Irqs, i2c::Config::default());
    let mut lcd = Hd44780::new(i2c, Delay, DEFAULT_ADDRESS);
    if let Err(e) = lcd.init().await {
        error!("Failed to initialize LCD: {:?}", e);
    } else {
        info!("LCD initialized");
    }

    let controller = Controller::new(RIG, ChannelKeys, lcd, feed, valve, Delay);

    spawner.spawn(tasks::keypad_task(keypad)).unwrap();
    spawner.spawn(tasks::controller_task(controller)).unwrap();

    info!("All tasks spawned");
}
