//! Channel store
//!
//! A fixed-capacity table of named status channels. Names are matched
//! case-insensitively but stored verbatim from their first sighting, and
//! insertion order defines the render order for the life of the process.
//! There is no deletion path: the table only grows until capacity, after
//! which previously unseen names are dropped without error.

use heapless::{String, Vec};
use telltale_protocol::ChannelKind;

/// Maximum number of channels the store can hold
pub const MAX_CHANNELS: usize = 16;

/// Maximum channel name length in bytes
pub const MAX_NAME_LEN: usize = 16;

/// Maximum payload length in bytes (matches the wire line cap)
pub const MAX_PAYLOAD_LEN: usize = 256;

/// One named, typed status value
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Channel {
    name: String<MAX_NAME_LEN>,
    kind: ChannelKind,
    payload: String<MAX_PAYLOAD_LEN>,
    /// Byte offset of the scroll window, meaningful for over-width Text
    scroll_cursor: usize,
}

impl Channel {
    /// Channel name as first received
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current payload interpretation rule
    pub fn kind(&self) -> ChannelKind {
        self.kind
    }

    /// Raw payload as received; typed parsing happens at render time
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Current scroll offset
    pub fn scroll_cursor(&self) -> usize {
        self.scroll_cursor
    }

    /// Advance the scroll window one step, wrapping modulo payload length
    pub fn advance_scroll(&mut self) {
        let len = self.payload.len();
        if len > 0 {
            self.scroll_cursor = (self.scroll_cursor + 1) % len;
        }
    }
}

/// Fixed-capacity channel table
#[derive(Debug, Default)]
pub struct ChannelStore {
    channels: Vec<Channel, MAX_CHANNELS>,
}

impl ChannelStore {
    /// Create an empty store
    pub const fn new() -> Self {
        Self {
            channels: Vec::new(),
        }
    }

    /// Insert or update a channel.
    ///
    /// An existing name (case-insensitive match) is updated in place: if
    /// the payload changed, kind and payload are replaced and the scroll
    /// cursor resets to zero; an identical payload is a no-op so an
    /// ongoing scroll is not disturbed. Unseen names append in arrival
    /// order while capacity lasts and are silently dropped afterwards.
    /// Over-long names and payloads are clipped to their field capacity.
    pub fn upsert(&mut self, name: &str, kind: ChannelKind, payload: &str) {
        let name = clip::<MAX_NAME_LEN>(name);
        let payload = clip::<MAX_PAYLOAD_LEN>(payload);

        if let Some(channel) = self
            .channels
            .iter_mut()
            .find(|c| c.name.eq_ignore_ascii_case(&name))
        {
            if channel.payload != payload {
                channel.kind = kind;
                channel.payload = payload;
                channel.scroll_cursor = 0;
            }
            return;
        }

        // Best-effort append: at capacity the new channel is dropped
        let _ = self.channels.push(Channel {
            name,
            kind,
            payload,
            scroll_cursor: 0,
        });
    }

    /// Number of channels currently stored
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Channel at `index` in insertion order
    pub fn get(&self, index: usize) -> Option<&Channel> {
        self.channels.get(index)
    }

    /// Mutable channel access, used by the renderer to advance scrolling
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Channel> {
        self.channels.get_mut(index)
    }

    /// Iterate channels in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Channel> {
        self.channels.iter()
    }
}

/// Copy a string into a bounded buffer, dropping whatever does not fit
fn clip<const N: usize>(s: &str) -> String<N> {
    let mut out = String::new();
    for c in s.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}
