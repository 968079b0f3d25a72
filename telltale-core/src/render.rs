//! Display rendering
//!
//! Formats channels into fixed-width rows for a 16x2 character display.
//! Two channels share a page; long Text payloads scroll through a circular
//! window that advances one character per render call.

use core::fmt::Write;

use heapless::String;
use telltale_protocol::{truthy, ChannelKind};

use crate::store::{Channel, ChannelStore};

/// Display width in characters
pub const DISPLAY_COLS: usize = 16;

/// Display height in rows (also the number of channels per page)
pub const DISPLAY_ROWS: usize = 2;

/// One rendered display row, always exactly [`DISPLAY_COLS`] bytes
pub type Row = String<DISPLAY_COLS>;

/// A rendered page: one fixed-width string per display row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    rows: [Row; DISPLAY_ROWS],
}

impl Screen {
    /// A screen of blank (all-spaces) rows
    pub fn blank() -> Self {
        Self {
            rows: [blank_row(), blank_row()],
        }
    }

    /// Text of a row; out-of-range rows read as empty
    pub fn row(&self, row: usize) -> &str {
        self.rows.get(row).map(|r| r.as_str()).unwrap_or("")
    }
}

/// Render one page of the store into a [`Screen`].
///
/// Row `r` shows the channel at index `page * DISPLAY_ROWS + r`; indexes
/// past the end of the store render as blank rows. Rendering advances the
/// scroll cursor of any over-width Text channel it touches, so this is a
/// read-plus-scroll-advance operation rather than a pure read.
pub fn render_page(store: &mut ChannelStore, page: usize) -> Screen {
    let mut screen = Screen::blank();
    for (row, slot) in screen.rows.iter_mut().enumerate() {
        if let Some(channel) = store.get_mut(page * DISPLAY_ROWS + row) {
            *slot = format_row(channel);
        }
    }
    screen
}

/// Format a single channel into an exactly [`DISPLAY_COLS`]-wide row
pub fn format_row(channel: &mut Channel) -> Row {
    let mut out = RowWriter::new();

    match channel.kind() {
        ChannelKind::Bool => {
            let state = if truthy(channel.payload()) { "ON" } else { "OFF" };
            let _ = write!(out, "{}:{}", channel.name(), state);
        }
        ChannelKind::Percent => {
            let _ = write!(out, "{}:{}%", channel.name(), lenient_int(channel.payload()));
        }
        ChannelKind::Text => {
            if channel.payload().len() > DISPLAY_COLS {
                scroll_window(channel, &mut out);
            } else {
                let _ = out.write_str(channel.payload());
            }
        }
        // Unknown type tokens fall back to the plain name:value form
        ChannelKind::Value | ChannelKind::Unknown => {
            let _ = write!(out, "{}:{}", channel.name(), channel.payload());
        }
    }

    out.finish()
}

/// Emit the 16-character circular window and advance the cursor one step
fn scroll_window(channel: &mut Channel, out: &mut RowWriter) {
    let bytes = channel.payload().as_bytes();
    let offset = channel.scroll_cursor() % bytes.len();

    for i in 0..DISPLAY_COLS {
        let byte = bytes[(offset + i) % bytes.len()];
        // The panel is an ASCII device; anything else shows as '?'
        let c = if byte.is_ascii() { byte as char } else { '?' };
        let _ = out.row.push(c);
    }

    channel.advance_scroll();
}

/// Lenient integer parse: optional sign, leading digits, anything else is 0
fn lenient_int(s: &str) -> i32 {
    let mut chars = s.chars().peekable();
    let negative = match chars.peek() {
        Some('-') => {
            chars.next();
            true
        }
        Some('+') => {
            chars.next();
            false
        }
        _ => false,
    };

    let mut value: i32 = 0;
    for c in chars {
        match c.to_digit(10) {
            Some(d) => value = value.saturating_mul(10).saturating_add(d as i32),
            None => break,
        }
    }

    if negative {
        -value
    } else {
        value
    }
}

fn blank_row() -> Row {
    let mut row = Row::new();
    while row.push(' ').is_ok() {}
    row
}

/// Width-clipping writer: accepts any amount of formatted output and keeps
/// the first [`DISPLAY_COLS`] bytes
struct RowWriter {
    row: Row,
}

impl RowWriter {
    fn new() -> Self {
        Self { row: Row::new() }
    }

    /// Pad to full width and return the finished row
    fn finish(mut self) -> Row {
        while self.row.push(' ').is_ok() {}
        self.row
    }
}

impl Write for RowWriter {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        for c in s.chars() {
            if self.row.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ChannelStore;

    fn single(kind: ChannelKind, name: &str, payload: &str) -> ChannelStore {
        let mut store = ChannelStore::new();
        store.upsert(name, kind, payload);
        store
    }

    fn render_one(store: &mut ChannelStore) -> Row {
        format_row(store.get_mut(0).unwrap())
    }

    #[test]
    fn test_bool_on_off() {
        let mut store = single(ChannelKind::Bool, "LED1", "1");
        assert_eq!(render_one(&mut store).as_str(), "LED1:ON         ");

        store.upsert("LED1", ChannelKind::Bool, "0");
        assert_eq!(render_one(&mut store).as_str(), "LED1:OFF        ");

        store.upsert("LED1", ChannelKind::Bool, "True");
        assert_eq!(render_one(&mut store).as_str(), "LED1:ON         ");
    }

    #[test]
    fn test_percent_formatting() {
        let mut store = single(ChannelKind::Percent, "TEMP", "42");
        assert_eq!(render_one(&mut store).as_str(), "TEMP:42%        ");
    }

    #[test]
    fn test_percent_non_numeric_reads_zero() {
        let mut store = single(ChannelKind::Percent, "HUM", "wet");
        assert_eq!(render_one(&mut store).as_str(), "HUM:0%          ");
    }

    #[test]
    fn test_value_verbatim() {
        let mut store = single(ChannelKind::Value, "RPM", "1200.5");
        assert_eq!(render_one(&mut store).as_str(), "RPM:1200.5      ");
    }

    #[test]
    fn test_unknown_kind_falls_back_to_value_form() {
        let mut store = single(ChannelKind::Unknown, "X", "7");
        assert_eq!(render_one(&mut store).as_str(), "X:7             ");
    }

    #[test]
    fn test_overlong_row_truncated_to_width() {
        let mut store = single(ChannelKind::Value, "LONGNAME", "0123456789abcdef");
        let row = render_one(&mut store);
        assert_eq!(row.len(), DISPLAY_COLS);
        assert_eq!(row.as_str(), "LONGNAME:0123456");
    }

    #[test]
    fn test_short_text_verbatim() {
        let mut store = single(ChannelKind::Text, "T", "hello");
        assert_eq!(render_one(&mut store).as_str(), "hello           ");
    }

    #[test]
    fn test_text_scroll_cycles_through_payload() {
        // 20-byte payload: each render shifts the window one character left
        let payload = "abcdefghijklmnopqrst";
        let mut store = single(ChannelKind::Text, "TICKER", payload);

        let mut seen: heapless::Vec<Row, 20> = heapless::Vec::new();
        for _ in 0..payload.len() {
            let _ = seen.push(render_one(&mut store));
        }

        assert_eq!(seen[0].as_str(), "abcdefghijklmnop");
        assert_eq!(seen[1].as_str(), "bcdefghijklmnopq");
        // Windows wrap circularly around the payload end
        assert_eq!(seen[5].as_str(), "fghijklmnopqrsta");
        assert_eq!(seen[19].as_str(), "tabcdefghijklmno");

        // All twenty windows are distinct; the cycle repeats afterwards
        for i in 0..seen.len() {
            for j in (i + 1)..seen.len() {
                assert_ne!(seen[i].as_str(), seen[j].as_str());
            }
        }
        assert_eq!(render_one(&mut store).as_str(), seen[0].as_str());
    }

    #[test]
    fn test_render_page_layout() {
        let mut store = ChannelStore::new();
        store.upsert("A", ChannelKind::Value, "1");
        store.upsert("B", ChannelKind::Value, "2");
        store.upsert("C", ChannelKind::Value, "3");

        let page0 = render_page(&mut store, 0);
        assert_eq!(page0.row(0), "A:1             ");
        assert_eq!(page0.row(1), "B:2             ");

        let page1 = render_page(&mut store, 1);
        assert_eq!(page1.row(0), "C:3             ");
        assert_eq!(page1.row(1), "                ");
    }

    #[test]
    fn test_render_empty_page_is_blank() {
        let mut store = ChannelStore::new();
        let screen = render_page(&mut store, 0);
        assert_eq!(screen.row(0), "                ");
        assert_eq!(screen.row(1), "                ");
    }

    #[test]
    fn test_lenient_int() {
        assert_eq!(lenient_int("42"), 42);
        assert_eq!(lenient_int("-7"), -7);
        assert_eq!(lenient_int("+3"), 3);
        assert_eq!(lenient_int("12abc"), 12);
        assert_eq!(lenient_int("abc"), 0);
        assert_eq!(lenient_int(""), 0);
    }
}
