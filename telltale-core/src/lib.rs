//! Board-agnostic core logic for the Telltale status panel firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Channel store (named, typed status values)
//! - Display renderer (per-kind formatting, text scrolling, paging)
//! - Page scheduler (timed rotation, command-driven redraw)
//! - Hardware abstraction traits (switch output, row display)
//!
//! Hardware reaches the core through exactly two seams: a boolean switch
//! output and a fixed-width row writer. Everything else is pure state.

#![no_std]
#![deny(unsafe_code)]

pub mod pager;
pub mod panel;
pub mod render;
pub mod store;
pub mod traits;

pub use pager::{PageScheduler, ROTATE_INTERVAL_MS};
pub use panel::Panel;
pub use render::{render_page, Screen, DISPLAY_COLS, DISPLAY_ROWS};
pub use store::{Channel, ChannelStore, MAX_CHANNELS, MAX_NAME_LEN, MAX_PAYLOAD_LEN};
pub use traits::{DisplayError, RowDisplay, SwitchOutput};
