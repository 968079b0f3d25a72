//! Board wiring and panel configuration
//!
//! Pin assignments for the reference build: a bare RP2040 board with a
//! 16x2 HD44780 LCD on a 4-bit bus and the switch output on GPIO6.
//!
//! Wiring summary (GPIO numbers, see `main.rs` for the peripheral setup):
//! - UART0: GPIO0 TX / GPIO1 RX (host link)
//! - Switch output: GPIO6
//! - LCD: RS=GPIO8, EN=GPIO9, D4..D7=GPIO10..GPIO13 (R/W tied to ground)

/// Name of the channel mirrored onto the switch output pin
pub const SWITCH_CHANNEL: &str = "LED1";

/// Host link baud rate
pub const BAUD_RATE: u32 = 9600;

/// Row 0 message shown until the first command arrives (exactly 16 chars)
pub const WAITING_MSG: &str = "Awaiting data...";

/// A blank display row (exactly 16 spaces)
pub const BLANK_ROW: &str = "                ";
