//! HD44780 character LCD over a PCF8574 I2C backpack
//!
//! The backpack exposes the LCD in 4-bit mode through one expander byte:
//!
//! | bit | P0 | P1 | P2 | P3        | P4..P7 |
//! |-----|----|----|----|-----------|--------|
//! | LCD | RS | RW | EN | backlight | D4..D7 |
//!
//! Every byte is sent as two nibbles, high nibble first, each latched by
//! a falling edge on EN. RW is always low (write only).

use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::I2c;

use wirecut_core::traits::{DisplayError, TextDisplay};

/// Common backpack address (PCF8574T with A0-A2 open)
pub const DEFAULT_ADDRESS: u8 = 0x27;

/// Character rows
pub const ROWS: u8 = 2;
/// Character columns
pub const COLS: u8 = 16;

/// DDRAM address of the first cell of each row
const ROW_OFFSETS: [u8; ROWS as usize] = [0x00, 0x40];

mod bits {
    pub const RS: u8 = 0x01;
    pub const EN: u8 = 0x04;
    pub const BACKLIGHT: u8 = 0x08;
}

mod cmd {
    pub const CLEAR: u8 = 0x01;
    pub const ENTRY_MODE: u8 = 0x04;
    pub const DISPLAY_CONTROL: u8 = 0x08;
    pub const FUNCTION_SET: u8 = 0x20;
    pub const SET_DDRAM_ADDR: u8 = 0x80;

    // Entry mode flags
    pub const ENTRY_INCREMENT: u8 = 0x02;

    // Display control flags
    pub const DISPLAY_ON: u8 = 0x04;
    pub const CURSOR_ON: u8 = 0x02;
    pub const BLINK_ON: u8 = 0x01;

    // Function set flags
    pub const TWO_LINES: u8 = 0x08;
}

/// Execution time of ordinary instructions (µs)
const EXEC_US: u32 = 50;
/// Execution time of clear/home (µs)
const CLEAR_US: u32 = 2000;

/// HD44780 LCD driver
pub struct Hd44780<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
    backlight: bool,
}

impl<I2C: I2c, D: DelayNs> Hd44780<I2C, D> {
    /// Create a driver for the backpack at `address`
    ///
    /// Does not touch the bus; call [`Self::init`] before use.
    pub fn new(i2c: I2C, delay: D, address: u8) -> Self {
        Self {
            i2c,
            delay,
            address,
            backlight: true,
        }
    }

    /// Run the 4-bit initialization sequence
    ///
    /// Leaves the display cleared with backlight on and a blinking
    /// cursor at (0, 0).
    pub async fn init(&mut self) -> Result<(), DisplayError> {
        // Wait for VCC to settle after power-up
        self.delay.delay_ms(50).await;

        // Force 8-bit mode three times, then switch to 4-bit
        self.write_nibble(0x03, 0).await?;
        self.delay.delay_us(4500).await;
        self.write_nibble(0x03, 0).await?;
        self.delay.delay_us(4500).await;
        self.write_nibble(0x03, 0).await?;
        self.delay.delay_us(150).await;
        self.write_nibble(0x02, 0).await?;
        self.delay.delay_us(EXEC_US).await;

        self.command(cmd::FUNCTION_SET | cmd::TWO_LINES).await?;
        self.command(cmd::DISPLAY_CONTROL | cmd::DISPLAY_ON | cmd::CURSOR_ON | cmd::BLINK_ON)
            .await?;
        self.command(cmd::CLEAR).await?;
        self.delay.delay_us(CLEAR_US).await;
        self.command(cmd::ENTRY_MODE | cmd::ENTRY_INCREMENT).await?;

        Ok(())
    }

    /// Switch the backlight
    pub async fn set_backlight(&mut self, on: bool) -> Result<(), DisplayError> {
        self.backlight = on;
        let byte = self.backlight_bit();
        self.i2c
            .write(self.address, &[byte])
            .await
            .map_err(|_| DisplayError::Bus)
    }

    /// Release the bus and delay
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    fn backlight_bit(&self) -> u8 {
        if self.backlight {
            bits::BACKLIGHT
        } else {
            0
        }
    }

    async fn command(&mut self, value: u8) -> Result<(), DisplayError> {
        self.write_byte(value, 0).await?;
        self.delay.delay_us(EXEC_US).await;
        Ok(())
    }

    async fn data(&mut self, value: u8) -> Result<(), DisplayError> {
        self.write_byte(value, bits::RS).await?;
        self.delay.delay_us(EXEC_US).await;
        Ok(())
    }

    async fn write_byte(&mut self, value: u8, mode: u8) -> Result<(), DisplayError> {
        let base = mode | self.backlight_bit();
        let high = (value & 0xF0) | base;
        let low = ((value << 4) & 0xF0) | base;
        self.i2c
            .write(self.address, &[high | bits::EN, high, low | bits::EN, low])
            .await
            .map_err(|_| DisplayError::Bus)
    }

    async fn write_nibble(&mut self, nibble: u8, mode: u8) -> Result<(), DisplayError> {
        let byte = ((nibble << 4) & 0xF0) | mode | self.backlight_bit();
        self.i2c
            .write(self.address, &[byte | bits::EN, byte])
            .await
            .map_err(|_| DisplayError::Bus)
    }
}

impl<I2C: I2c, D: DelayNs> TextDisplay for Hd44780<I2C, D> {
    async fn clear(&mut self) -> Result<(), DisplayError> {
        self.command(cmd::CLEAR).await?;
        self.delay.delay_us(CLEAR_US).await;
        Ok(())
    }

    async fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError> {
        // One past the last cell: text written there lands in hidden DDRAM
        let row = row.min(ROWS - 1);
        let col = col.min(COLS);
        self.command(cmd::SET_DDRAM_ADDR | (ROW_OFFSETS[row as usize] + col))
            .await
    }

    async fn write_str(&mut self, text: &str) -> Result<(), DisplayError> {
        for byte in text.bytes() {
            // Character ROM A00 matches ASCII only in the printable range
            let byte = if (0x20..0x7F).contains(&byte) {
                byte
            } else {
                b'?'
            };
            self.data(byte).await?;
        }
        Ok(())
    }
}
