//! Byte-stream to line assembly.
//!
//! The serial port delivers raw bytes with no framing beyond `\r`/`\n`
//! terminators. The assembler accumulates bytes into discrete lines while
//! bounding memory use: an unterminated stream slides through a fixed
//! window instead of growing without limit.

use heapless::{String, Vec};

/// Hard cap on an assembled line, in bytes.
pub const MAX_LINE_LEN: usize = 256;

/// A completed input line.
pub type Line = String<MAX_LINE_LEN>;

/// Accumulates raw serial bytes into lines.
///
/// `\n` and `\r` both terminate a line; a terminator on an empty buffer is
/// absorbed silently, so CR/LF pairs do not emit spurious empty lines. When
/// the buffer is full, the oldest byte is discarded to make room, keeping
/// the most recent `MAX_LINE_LEN` bytes of an unterminated stream.
#[derive(Debug, Default)]
pub struct LineAssembler {
    buffer: Vec<u8, MAX_LINE_LEN>,
}

impl LineAssembler {
    /// Create an empty assembler
    pub const fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Feed a single byte.
    ///
    /// Returns `Some(line)` when the byte completes a non-empty line,
    /// `None` otherwise. Lines that are not valid UTF-8 are dropped,
    /// consistent with the silent malformed-input policy.
    pub fn feed(&mut self, byte: u8) -> Option<Line> {
        match byte {
            b'\n' | b'\r' => self.take_line(),
            _ => {
                if self.buffer.is_full() {
                    self.buffer.remove(0);
                }
                // Cannot fail: a slot was just freed if the buffer was full
                let _ = self.buffer.push(byte);
                None
            }
        }
    }

    /// Number of bytes currently buffered
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    fn take_line(&mut self) -> Option<Line> {
        if self.buffer.is_empty() {
            return None;
        }
        let line = core::str::from_utf8(&self.buffer)
            .ok()
            .and_then(|s| Line::try_from(s).ok());
        self.buffer.clear();
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_str(assembler: &mut LineAssembler, input: &str) -> Option<Line> {
        let mut out = None;
        for &b in input.as_bytes() {
            if let Some(line) = assembler.feed(b) {
                out = Some(line);
            }
        }
        out
    }

    #[test]
    fn test_simple_line() {
        let mut assembler = LineAssembler::new();
        let line = feed_str(&mut assembler, "SET:A:BOOL:1\n").unwrap();
        assert_eq!(line.as_str(), "SET:A:BOOL:1");
        assert_eq!(assembler.pending(), 0);
    }

    #[test]
    fn test_crlf_emits_single_line() {
        let mut assembler = LineAssembler::new();
        let mut lines = 0;
        for &b in b"hello\r\nworld\r\n" {
            if assembler.feed(b).is_some() {
                lines += 1;
            }
        }
        assert_eq!(lines, 2);
    }

    #[test]
    fn test_empty_lines_absorbed() {
        let mut assembler = LineAssembler::new();
        assert!(assembler.feed(b'\n').is_none());
        assert!(assembler.feed(b'\r').is_none());
        assert!(assembler.feed(b'\n').is_none());
    }

    #[test]
    fn test_overflow_keeps_most_recent_bytes() {
        let mut assembler = LineAssembler::new();
        // 300 'a's, then a marker, with no terminator in between
        for _ in 0..300 {
            assert!(assembler.feed(b'a').is_none());
        }
        assert!(assembler.feed(b'z').is_none());
        assert_eq!(assembler.pending(), MAX_LINE_LEN);

        let line = assembler.feed(b'\n').unwrap();
        assert_eq!(line.len(), MAX_LINE_LEN);
        assert!(line.ends_with('z'));
    }

    #[test]
    fn test_invalid_utf8_dropped() {
        let mut assembler = LineAssembler::new();
        assert!(assembler.feed(0xFF).is_none());
        assert!(assembler.feed(b'\n').is_none());
        // Next line still comes through cleanly
        let line = feed_str(&mut assembler, "ok\n").unwrap();
        assert_eq!(line.as_str(), "ok");
    }
}
