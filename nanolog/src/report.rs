//! Error-result value type shared by call sites.
//!
//! A [`Report`] carries the outcome of a fallible operation: a status code,
//! a short tag naming the component, and a human-readable description. Call
//! sites use it to decide whether to log at error severity; the taxonomy of
//! non-zero codes is application-defined and of no concern to the logger,
//! which consumes the fields as plain strings.

use core::fmt;

use crate::record::truncated;

/// Maximum length of a report tag, in bytes.
pub const MAX_TAG_LEN: usize = 16;

/// Maximum length of a report description, in bytes.
pub const MAX_DESCRIPTION_LEN: usize = 128;

/// Outcome of a fallible operation.
///
/// A `code` of zero means success. Tag and description are bounded: both
/// are truncated to [`MAX_TAG_LEN`] and [`MAX_DESCRIPTION_LEN`] at
/// construction, never afterwards.
///
/// # Examples
///
/// ```rust
/// use nanolog::Report;
///
/// let report = Report::new(-3, "NET", "handshake timed out");
/// assert!(!report.is_ok());
/// report.log();
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Report {
    code: i32,
    tag: String,
    description: String,
}

impl Report {
    /// Creates a report, truncating over-long fields to their bounds.
    pub fn new(code: i32, tag: &str, description: &str) -> Self {
        Self {
            code,
            tag: truncated(tag, MAX_TAG_LEN).to_owned(),
            description: truncated(description, MAX_DESCRIPTION_LEN).to_owned(),
        }
    }

    /// The status code; zero means success.
    pub fn code(&self) -> i32 {
        self.code
    }

    /// Short tag naming the component the report came from.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Human-readable description of the outcome.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the report carries a success code.
    pub fn is_ok(&self) -> bool {
        self.code == 0
    }

    /// Logs the report through the global logger at error severity.
    ///
    /// Success reports are not logged.
    pub fn log(&self) {
        if self.is_ok() {
            return;
        }
        crate::error!(&self.tag, "({}) {}", self.code, self.description);
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ({}) {}", self.tag, self.code, self.description)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{MAX_DESCRIPTION_LEN, MAX_TAG_LEN, Report};

    #[test]
    fn fields_are_bounded_at_construction() {
        let report = Report::new(7, &"T".repeat(40), &"d".repeat(300));

        assert_eq!(report.tag().len(), MAX_TAG_LEN);
        assert_eq!(report.description().len(), MAX_DESCRIPTION_LEN);
    }

    #[test]
    fn short_fields_are_kept_verbatim() {
        let report = Report::new(0, "NET", "all good");

        assert!(report.is_ok());
        assert_eq!(report.tag(), "NET");
        assert_eq!(report.description(), "all good");
    }

    #[test]
    fn display_embeds_all_fields() {
        let report = Report::new(-3, "NET", "handshake timed out");

        assert_eq!(report.to_string(), "[NET] (-3) handshake timed out");
    }
}
