//! Keypad scanning task
//!
//! Scans the 4x3 matrix on a fixed tick and forwards each debounced key
//! press to the controller through [`KEY_CHANNEL`].

use defmt::*;
use embassy_rp::gpio::{Input, Output};
use embassy_time::{Duration, Ticker};

use wirecut_core::input::Key;
use wirecut_core::traits::KeySource;
use wirecut_drivers::keypad::Keypad4x3;

use crate::channels::KEY_CHANNEL;

/// Scan interval
const SCAN_INTERVAL_MS: u64 = 5;

/// Keypad wired to RP2040 GPIOs
pub type FirmwareKeypad = Keypad4x3<Output<'static>, Input<'static>>;

/// Keypad task - scans the matrix and queues key presses
#[embassy_executor::task]
pub async fn keypad_task(mut keypad: FirmwareKeypad) {
    info!("Keypad task started");

    let mut ticker = Ticker::every(Duration::from_millis(SCAN_INTERVAL_MS));

    loop {
        match keypad.poll() {
            Ok(Some(key)) => {
                debug!("Key: {}", key.as_char());
                if KEY_CHANNEL.try_send(key).is_err() {
                    warn!("Key queue full, dropped {}", key.as_char());
                }
            }
            Ok(None) => {}
            Err(e) => {
                warn!("Keypad scan failed: {:?}", e);
            }
        }

        ticker.next().await;
    }
}

/// Controller side of the key channel
pub struct ChannelKeys;

impl KeySource for ChannelKeys {
    fn poll_key(&mut self) -> Option<Key> {
        KEY_CHANNEL.try_receive().ok()
    }

    async fn wait_key(&mut self) -> Key {
        KEY_CHANNEL.receive().await
    }
}
