//! HD44780 character LCD driver
//!
//! Minimal driver for a 16x2 HD44780-compatible LCD on a 4-bit parallel
//! bus (RS + EN + D4..D7, R/W tied to ground). Write-only: instead of
//! polling the busy flag, the driver waits out the worst-case instruction
//! times from the datasheet.

use embassy_rp::gpio::Output;
use embassy_time::{block_for, Duration};

use telltale_core::{DisplayError, RowDisplay, DISPLAY_COLS, DISPLAY_ROWS};

/// HD44780 instructions (subset used here)
#[allow(dead_code)]
mod cmd {
    pub const CLEAR: u8 = 0x01;
    pub const HOME: u8 = 0x02;
    pub const ENTRY_MODE: u8 = 0x06; // increment cursor, no display shift
    pub const DISPLAY_ON: u8 = 0x0C; // display on, cursor off, blink off
    pub const FUNCTION_SET: u8 = 0x28; // 4-bit bus, 2 lines, 5x8 font
    pub const SET_DDRAM: u8 = 0x80;
}

/// DDRAM start address of each display row
const ROW_OFFSETS: [u8; DISPLAY_ROWS] = [0x00, 0x40];

/// 4-bit-bus HD44780 driver
pub struct Hd44780<'d> {
    rs: Output<'d>,
    en: Output<'d>,
    data: [Output<'d>; 4],
}

impl<'d> Hd44780<'d> {
    /// Create a driver from the six bus pins (data pins D4..D7 in order)
    pub fn new(rs: Output<'d>, en: Output<'d>, data: [Output<'d>; 4]) -> Self {
        Self { rs, en, data }
    }

    /// Run the power-on initialization-by-instruction sequence
    pub fn init(&mut self) {
        // Controller needs time after VCC rise before accepting commands
        block_for(Duration::from_millis(50));

        // Three 8-bit function-set knocks, then the switch to 4-bit mode
        self.rs.set_low();
        self.write_nibble(0x03);
        block_for(Duration::from_millis(5));
        self.write_nibble(0x03);
        block_for(Duration::from_micros(150));
        self.write_nibble(0x03);
        block_for(Duration::from_micros(150));
        self.write_nibble(0x02);
        block_for(Duration::from_micros(150));

        self.command(cmd::FUNCTION_SET);
        self.command(cmd::DISPLAY_ON);
        self.clear();
        self.command(cmd::ENTRY_MODE);
    }

    /// Clear the display and return the cursor home
    pub fn clear(&mut self) {
        self.command(cmd::CLEAR);
        // Clear is the one instruction that takes milliseconds
        block_for(Duration::from_millis(2));
    }

    fn command(&mut self, byte: u8) {
        self.rs.set_low();
        self.write_byte(byte);
    }

    fn write_data(&mut self, byte: u8) {
        self.rs.set_high();
        self.write_byte(byte);
    }

    fn write_byte(&mut self, byte: u8) {
        self.write_nibble(byte >> 4);
        self.write_nibble(byte & 0x0F);
        // Worst-case instruction time for everything except clear/home
        block_for(Duration::from_micros(50));
    }

    fn write_nibble(&mut self, nibble: u8) {
        for (bit, pin) in self.data.iter_mut().enumerate() {
            if nibble & (1u8 << bit) != 0 {
                pin.set_high();
            } else {
                pin.set_low();
            }
        }
        self.pulse_enable();
    }

    fn pulse_enable(&mut self) {
        self.en.set_high();
        block_for(Duration::from_micros(1));
        self.en.set_low();
        block_for(Duration::from_micros(1));
    }
}

impl RowDisplay for Hd44780<'_> {
    fn write_row(&mut self, row: u8, text: &str) -> Result<(), DisplayError> {
        let offset = *ROW_OFFSETS
            .get(row as usize)
            .ok_or(DisplayError::InvalidRow)?;
        self.command(cmd::SET_DDRAM | offset);

        let mut written = 0;
        for byte in text.bytes().take(DISPLAY_COLS) {
            // The character ROM is ASCII in the range we care about
            self.write_data(if byte.is_ascii() { byte } else { b'?' });
            written += 1;
        }
        // Pad short rows so stale characters never linger
        for _ in written..DISPLAY_COLS {
            self.write_data(b' ');
        }
        Ok(())
    }
}
