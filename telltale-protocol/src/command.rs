//! `SET` command decoding.
//!
//! A command line has four colon-delimited fields:
//!
//! ```text
//! SET:<channel>:<type>:<payload>
//! ```
//!
//! The payload is everything after the third colon and may contain colons
//! of its own. Channel, type, and payload are trimmed of surrounding
//! whitespace. Anything that does not decode is silently ignored by the
//! caller; decoding therefore returns `Option`, not a hard error.

/// Interpretation rule for a channel's payload.
///
/// Unrecognized type tokens are accepted and stored; they render through
/// the same fallback as [`ChannelKind::Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelKind {
    /// On/off state, shown as `ON`/`OFF`
    Bool,
    /// Integer percentage, shown with a `%` suffix
    Percent,
    /// Free-form value, shown verbatim after the name
    Value,
    /// Free-form text, scrolled when wider than the display
    Text,
    /// Any other type token
    Unknown,
}

impl ChannelKind {
    /// Map a wire type token (case-insensitive) to a kind
    pub fn from_token(token: &str) -> Self {
        if token.eq_ignore_ascii_case("BOOL") {
            ChannelKind::Bool
        } else if token.eq_ignore_ascii_case("PERCENT") {
            ChannelKind::Percent
        } else if token.eq_ignore_ascii_case("VALUE") {
            ChannelKind::Value
        } else if token.eq_ignore_ascii_case("TEXT") {
            ChannelKind::Text
        } else {
            ChannelKind::Unknown
        }
    }
}

/// A decoded `SET` command, borrowing its fields from the input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SetCommand<'a> {
    /// Target channel name, trimmed
    pub channel: &'a str,
    /// Payload interpretation rule
    pub kind: ChannelKind,
    /// Raw payload, trimmed
    pub payload: &'a str,
}

impl<'a> SetCommand<'a> {
    /// Decode one line.
    ///
    /// Returns `None` for lines that do not start with `SET:` or are
    /// missing either of the two delimiters after the channel and type
    /// fields.
    pub fn parse(line: &'a str) -> Option<Self> {
        let rest = line.strip_prefix("SET:")?;
        let (channel, rest) = rest.split_once(':')?;
        let (kind_token, payload) = rest.split_once(':')?;

        Some(Self {
            channel: channel.trim(),
            kind: ChannelKind::from_token(kind_token.trim()),
            payload: payload.trim(),
        })
    }
}

/// Wire truthiness: `"1"` or any casing of `"true"` is active
pub fn truthy(payload: &str) -> bool {
    payload == "1" || payload.eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let cmd = SetCommand::parse("SET:TEMP:PERCENT:42").unwrap();
        assert_eq!(cmd.channel, "TEMP");
        assert_eq!(cmd.kind, ChannelKind::Percent);
        assert_eq!(cmd.payload, "42");
    }

    #[test]
    fn test_parse_payload_keeps_colons() {
        let cmd = SetCommand::parse("SET:CLOCK:TEXT:12:34:56").unwrap();
        assert_eq!(cmd.channel, "CLOCK");
        assert_eq!(cmd.kind, ChannelKind::Text);
        assert_eq!(cmd.payload, "12:34:56");
    }

    #[test]
    fn test_parse_trims_fields() {
        let cmd = SetCommand::parse("SET: LED1 : bool : 1 ").unwrap();
        assert_eq!(cmd.channel, "LED1");
        assert_eq!(cmd.kind, ChannelKind::Bool);
        assert_eq!(cmd.payload, "1");
    }

    #[test]
    fn test_parse_rejects_foreign_lines() {
        assert!(SetCommand::parse("GET:TEMP:PERCENT:42").is_none());
        assert!(SetCommand::parse("noise").is_none());
        assert!(SetCommand::parse("").is_none());
    }

    #[test]
    fn test_parse_rejects_missing_delimiters() {
        assert!(SetCommand::parse("SET:").is_none());
        assert!(SetCommand::parse("SET:TEMP").is_none());
        assert!(SetCommand::parse("SET:TEMP:PERCENT").is_none());
    }

    #[test]
    fn test_empty_payload_allowed() {
        let cmd = SetCommand::parse("SET:NOTE:TEXT:").unwrap();
        assert_eq!(cmd.payload, "");
    }

    #[test]
    fn test_unknown_kind_token() {
        let cmd = SetCommand::parse("SET:X:GAUGE:7").unwrap();
        assert_eq!(cmd.kind, ChannelKind::Unknown);
        assert_eq!(cmd.payload, "7");
    }

    #[test]
    fn test_kind_tokens_case_insensitive() {
        assert_eq!(ChannelKind::from_token("bool"), ChannelKind::Bool);
        assert_eq!(ChannelKind::from_token("Percent"), ChannelKind::Percent);
        assert_eq!(ChannelKind::from_token("VALUE"), ChannelKind::Value);
        assert_eq!(ChannelKind::from_token("tExT"), ChannelKind::Text);
    }

    #[test]
    fn test_truthy() {
        assert!(truthy("1"));
        assert!(truthy("true"));
        assert!(truthy("TRUE"));
        assert!(!truthy("0"));
        assert!(!truthy("yes"));
        assert!(!truthy(""));
    }
}
