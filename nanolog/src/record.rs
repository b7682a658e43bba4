//! Log record representation and line formatting.
//!
//! A [`Record`] is the ephemeral form a message takes between the call site
//! and the sink; it is never persisted. [`format_record`] renders it into the
//! single line of text that is handed to the sink as one unit.

use core::fmt::{self, Write};

/// Severity of a log message.
///
/// Variants are declared from least to most verbose, so the derived ordering
/// doubles as the verbosity ordering: [`Severity::Error`] is the highest
/// priority and compares lowest.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Severity {
    /// No specific level.
    ///
    /// Not produced by the logging macros; as a filter value it disables
    /// every level.
    None,

    /// The "error" level.
    ///
    /// Designates very serious failures.
    Error,

    /// The "warning" level.
    ///
    /// Designates hazardous situations.
    Warning,

    /// The "info" level.
    ///
    /// Designates useful information.
    Info,

    /// The "debug" level.
    ///
    /// Designates lower priority information.
    Debug,
}

/// Marker text emitted once, immediately before the first record of an
/// execution, as part of the same dispatch.
pub(crate) const BANNER: &str = "\n---------- NEW EXECUTION -----------\n\n";

const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const GREEN: &str = "\x1b[32m";
const BLUE: &str = "\x1b[34m";
const RESET: &str = "\x1b[0m";

/// Single-character level tag embedded in every line.
fn level_char(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "E",
        Severity::Warning => "W",
        Severity::Info => "I",
        Severity::Debug => "D",
        Severity::None => "_",
    }
}

/// ANSI prefix for colored output: error=red, warning=yellow, info=green,
/// debug=blue.
fn level_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => RED,
        Severity::Warning => YELLOW,
        Severity::Info => GREEN,
        Severity::Debug => BLUE,
        Severity::None => RESET,
    }
}

/// A message on its way to the sink.
#[derive(Debug)]
pub(crate) struct Record<'a> {
    pub sequence: u64,
    pub severity: Severity,
    pub tag: &'a str,
    pub timestamp: Option<&'a str>,
    pub body: &'a str,
}

/// Renders `record` into `out` as
/// `[color?][seq] C : [tag] [timestamp?] body[reset?]\n`.
pub(crate) fn format_record(record: &Record<'_>, use_color: bool, out: &mut String) {
    if use_color {
        out.push_str(level_color(record.severity));
    }

    write!(
        out,
        "[{}] {} : [{}]",
        record.sequence,
        level_char(record.severity),
        record.tag
    )
    .unwrap();

    if let Some(timestamp) = record.timestamp {
        write!(out, " [{timestamp}]").unwrap();
    }

    out.push(' ');
    out.push_str(record.body);

    if use_color {
        out.push_str(RESET);
    }
    out.push('\n');
}

/// Returns the longest prefix of `s` that fits in `max` bytes, never
/// splitting a character.
pub(crate) fn truncated(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// A [`fmt::Write`] target bounded to `limit` bytes.
///
/// Overflowing writes are shortened to the remaining capacity instead of
/// erroring, so formatting through this writer cannot fail.
#[derive(Debug)]
pub(crate) struct TruncatingWriter {
    buffer: String,
    limit: usize,
}

impl TruncatingWriter {
    pub(crate) fn new(limit: usize) -> Self {
        Self {
            buffer: String::new(),
            limit,
        }
    }

    pub(crate) fn into_inner(self) -> String {
        self.buffer
    }
}

impl Write for TruncatingWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let remaining = self.limit.saturating_sub(self.buffer.len());
        self.buffer.push_str(truncated(s, remaining));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use core::fmt::Write;

    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::{Record, Severity, TruncatingWriter, format_record, level_char, truncated};

    #[test_case(Severity::Error, "E")]
    #[test_case(Severity::Warning, "W")]
    #[test_case(Severity::Info, "I")]
    #[test_case(Severity::Debug, "D")]
    #[test_case(Severity::None, "_")]
    fn level_chars(severity: Severity, expected: &str) {
        assert_eq!(level_char(severity), expected);
    }

    #[test]
    fn severity_orders_by_verbosity() {
        assert!(Severity::None < Severity::Error);
        assert!(Severity::Error < Severity::Warning);
        assert!(Severity::Warning < Severity::Info);
        assert!(Severity::Info < Severity::Debug);
    }

    fn record() -> Record<'static> {
        Record {
            sequence: 1,
            severity: Severity::Error,
            tag: "NET",
            timestamp: None,
            body: "fail 7",
        }
    }

    #[test]
    fn plain_line() {
        let mut line = String::new();
        format_record(&record(), false, &mut line);

        assert_eq!(line, "[1] E : [NET] fail 7\n");
    }

    #[test]
    fn timestamped_line() {
        let mut line = String::new();
        format_record(
            &Record {
                timestamp: Some("2025-04-30 13:05:09"),
                ..record()
            },
            false,
            &mut line,
        );

        assert_eq!(line, "[1] E : [NET] [2025-04-30 13:05:09] fail 7\n");
    }

    #[test]
    fn colored_line() {
        let mut line = String::new();
        format_record(&record(), true, &mut line);

        assert_eq!(line, "\x1b[31m[1] E : [NET] fail 7\x1b[0m\n");
    }

    #[test]
    fn color_only_adds_decoration() {
        let mut plain = String::new();
        let mut colored = String::new();
        format_record(&record(), false, &mut plain);
        format_record(&record(), true, &mut colored);

        let stripped = colored
            .strip_prefix("\x1b[31m")
            .and_then(|rest| rest.strip_suffix("\x1b[0m\n"))
            .unwrap();
        assert_eq!(format!("{stripped}\n"), plain);
    }

    #[test_case("short", 16, "short")]
    #[test_case("exactly-sixteen!", 16, "exactly-sixteen!")]
    #[test_case("definitely-longer-than-sixteen", 16, "definitely-longe")]
    fn truncation_bounds(input: &str, max: usize, expected: &str) {
        assert_eq!(truncated(input, max), expected);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        // 'ü' is two bytes; cutting at 5 would split it.
        assert_eq!(truncated("grüße", 5), "grü");
    }

    #[test]
    fn truncating_writer_caps_formatted_output() {
        let mut writer = TruncatingWriter::new(10);
        write!(writer, "{} {}", "first", "second-part").unwrap();

        assert_eq!(writer.into_inner(), "first seco");
    }

    #[test]
    fn truncating_writer_keeps_short_output() {
        let mut writer = TruncatingWriter::new(120);
        write!(writer, "fail {}", 7).unwrap();

        assert_eq!(writer.into_inner(), "fail 7");
    }
}
