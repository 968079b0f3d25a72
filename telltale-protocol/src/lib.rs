//! Telltale serial wire protocol
//!
//! This crate defines the line-oriented protocol spoken by the host towards
//! the status panel. The protocol is designed for simplicity and robustness
//! under noisy, unauthenticated input: anything that is not a well-formed
//! command is dropped without feedback.
//!
//! # Protocol Overview
//!
//! One command per line, lines delimited by `\n` and/or `\r`:
//!
//! ```text
//! SET:<channel>:<type>:<payload>
//! ```
//!
//! - `<channel>`: channel name, matched case-insensitively
//! - `<type>`: one of `BOOL | PERCENT | VALUE | TEXT` (case-insensitive)
//! - `<payload>`: everything after the third colon, may itself contain colons
//!
//! The panel never answers on the wire; malformed lines are ignored.

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod line;

pub use command::{truthy, ChannelKind, SetCommand};
pub use line::{Line, LineAssembler, MAX_LINE_LEN};
