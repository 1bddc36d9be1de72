//! Main controller task
//!
//! Runs the operator state machine and the feed and cut cycle. Control
//! errors are logged and the controller resumes from the state it was
//! left in; a failed cycle lands in the error screen and recovers home.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_rp::i2c::{Async, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_time::{Delay, Timer};

use wirecut_core::Controller;
use wirecut_drivers::display::Hd44780;
use wirecut_drivers::stepper::StepDirFeed;
use wirecut_drivers::valve::SolenoidValve;

use super::keypad::ChannelKeys;

/// Pause before resuming after a control error
const ERROR_BACKOFF_MS: u64 = 100;

/// Controller wired to the RP2040 peripherals
pub type CutterController = Controller<
    ChannelKeys,
    Hd44780<I2c<'static, I2C0, Async>, Delay>,
    StepDirFeed<Output<'static>, Output<'static>, Delay>,
    SolenoidValve<Output<'static>, Delay>,
    Delay,
>;

/// Controller task - main coordination loop
#[embassy_executor::task]
pub async fn controller_task(mut controller: CutterController) {
    info!("Controller task started");

    loop {
        let err = controller.run().await;
        error!(
            "Control error in {:?}: {:?}",
            controller.state(),
            err
        );
        Timer::after_millis(ERROR_BACKOFF_MS).await;
    }
}
