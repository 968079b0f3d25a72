//! Telltale - Serial Channel Status Panel Firmware
//!
//! Main firmware binary for RP2040-based status panels. Listens for
//! `SET:<channel>:<type>:<payload>` lines on UART0, mirrors one designated
//! BOOL channel onto a GPIO output, and pages the channel table across a
//! 16x2 character LCD.
//!
//! Everything runs in a single control loop: serial input is drained
//! first each cycle, then the page-rotation timer is polled. There is no
//! second task and nothing to lock.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_futures::yield_now;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use embassy_time::Instant;
use embedded_io::{Read, ReadReady};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use telltale_core::{Panel, SwitchOutput};
use telltale_protocol::{LineAssembler, SetCommand};

mod board;
mod hd44780;

use crate::hd44780::Hd44780;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

/// Switch output adapter over a GPIO pin
struct SwitchPin<'d>(Output<'d>);

impl SwitchOutput for SwitchPin<'_> {
    fn set_active(&mut self, active: bool) {
        if active {
            self.0.set_high();
        } else {
            self.0.set_low();
        }
    }
}

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Telltale firmware starting...");

    let p = embassy_rp::init(Default::default());

    // Host link on UART0 (GPIO0 TX / GPIO1 RX). The panel never talks
    // back, but the buffered driver wants both halves.
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = board::BAUD_RATE;

    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 256]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (_tx, mut rx) = uart.split();

    info!("UART initialized for host link");

    // Switch output (GPIO6, matching the original board wiring)
    let mut switch = SwitchPin(Output::new(p.PIN_6, Level::Low));

    // 16x2 LCD on a 4-bit bus
    let mut lcd = Hd44780::new(
        Output::new(p.PIN_8, Level::Low), // RS
        Output::new(p.PIN_9, Level::Low), // EN
        [
            Output::new(p.PIN_10, Level::Low), // D4
            Output::new(p.PIN_11, Level::Low), // D5
            Output::new(p.PIN_12, Level::Low), // D6
            Output::new(p.PIN_13, Level::Low), // D7
        ],
    );
    lcd.init();
    info!("LCD initialized");

    // Startup screen until the first command arrives
    show_waiting_screen(&mut lcd);

    let mut panel = Panel::new(board::SWITCH_CHANNEL);
    let mut assembler = LineAssembler::new();
    let started = Instant::now();

    info!("Entering control loop");

    let mut read_buf = [0u8; 64];
    loop {
        // Drain all pending host input before doing timed work
        while matches!(rx.read_ready(), Ok(true)) {
            let Ok(n) = rx.read(&mut read_buf) else { break };
            if n == 0 {
                break;
            }
            for &byte in &read_buf[..n] {
                let Some(line) = assembler.feed(byte) else {
                    continue;
                };
                let Some(command) = SetCommand::parse(&line) else {
                    // Malformed lines are dropped without feedback
                    continue;
                };
                trace!("apply {=str}", line.as_str());
                if let Err(e) = panel.apply(&command, &mut switch, &mut lcd) {
                    warn!("display write failed: {}", e);
                }
            }
        }

        // Page rotation timer
        let now_ms = started.elapsed().as_millis();
        if let Err(e) = panel.tick(now_ms, &mut lcd) {
            warn!("display write failed: {}", e);
        }

        // Cooperative yield only - the next cycle polls input immediately
        yield_now().await;
    }
}

/// Fixed pre-first-command screen: message on row 0, blank row 1
fn show_waiting_screen(lcd: &mut Hd44780<'_>) {
    use telltale_core::RowDisplay;

    if lcd.write_row(0, board::WAITING_MSG).is_err() || lcd.write_row(1, board::BLANK_ROW).is_err()
    {
        warn!("failed to draw startup screen");
    }
}
