//! Logger configuration.
//!
//! The whole configuration surface is an explicit [`Config`] value built once
//! at startup and held by the logger for its lifetime; nothing is
//! reconfigurable afterwards. Defaults reproduce the permissive behavior of
//! an unconfigured logger: every level enabled, timestamps on, color off,
//! terminal output.

use crate::record::Severity;

/// Selects the backend a logger dispatches finished lines to.
///
/// Only [`Output::Terminal`] and [`Output::File`] can be resolved from
/// configuration alone. [`Output::Memory`] needs an explicitly constructed
/// [`MemorySink`][crate::MemorySink] so the caller keeps the read handle,
/// and the remaining variants have no backend implementation yet; selecting
/// any of these is a construction error rather than a silent no-op.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Output {
    /// Write lines to standard output.
    Terminal,
    /// Reserved for serial output.
    Uart,
    /// Append lines to a log file, see [`FileOutput`].
    File,
    /// Store lines in an in-memory buffer.
    Memory,
    /// Reserved for socket output.
    Network,
}

/// Target path settings for [`Output::File`].
///
/// Lines are appended to `<directory>/<base_name>.<extension>`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FileOutput {
    /// Directory the log file lives in, created on demand.
    pub directory: String,
    /// File name without extension.
    pub base_name: String,
    /// File extension without the leading dot.
    pub extension: String,
}

impl Default for FileOutput {
    fn default() -> Self {
        Self {
            directory: String::from("LogOutput"),
            base_name: String::from("log"),
            extension: String::from("txt"),
        }
    }
}

/// Logger configuration, constructed once at startup.
///
/// A message passes the enablement gates iff the master switch is on, its
/// level's individual switch is on, *and* its severity does not exceed
/// [`level_filter`][Config::level_filter] — the switches and the threshold
/// combine with AND.
///
/// # Examples
///
/// ```rust
/// use nanolog::{Config, Severity};
///
/// let config = Config {
///     use_color: true,
///     level_filter: Severity::Warning,
///     ..Config::default()
/// };
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Master switch for all logging.
    pub enabled: bool,

    /// Message bodies longer than this many bytes are silently truncated.
    pub max_message_len: usize,

    /// Decorate lines with an ANSI color keyed by severity.
    pub use_color: bool,

    /// Most verbose severity that is still emitted.
    ///
    /// [`Severity::Debug`] passes everything, [`Severity::None`] nothing.
    pub level_filter: Severity,

    /// Individual switch for [`Severity::Error`] messages.
    pub error_enabled: bool,
    /// Individual switch for [`Severity::Warning`] messages.
    pub warning_enabled: bool,
    /// Individual switch for [`Severity::Info`] messages.
    pub info_enabled: bool,
    /// Individual switch for [`Severity::Debug`] messages.
    pub debug_enabled: bool,

    /// Backend selection, resolved when the logger is built.
    pub output: Output,

    /// Embed a wall-clock timestamp in every line.
    pub timestamp: bool,

    /// Target path settings for [`Output::File`].
    pub file: FileOutput,

    /// Tags longer than this many bytes are truncated.
    pub max_tag_len: usize,
}

impl Config {
    /// Configuration of the logger in place before a global one is set:
    /// everything off.
    pub const DISABLED: Config = Config {
        enabled: false,
        max_message_len: 0,
        use_color: false,
        level_filter: Severity::None,
        error_enabled: false,
        warning_enabled: false,
        info_enabled: false,
        debug_enabled: false,
        output: Output::Terminal,
        timestamp: false,
        file: FileOutput {
            directory: String::new(),
            base_name: String::new(),
            extension: String::new(),
        },
        max_tag_len: 0,
    };

    /// Whether a message at `severity` passes every enablement gate.
    pub(crate) fn passes(&self, severity: Severity) -> bool {
        self.enabled && self.level_switch(severity) && severity <= self.level_filter
    }

    /// The individual switch for `severity`.
    ///
    /// [`Severity::None`] has no switch of its own and only answers to the
    /// master switch and the filter.
    fn level_switch(&self, severity: Severity) -> bool {
        match severity {
            Severity::Error => self.error_enabled,
            Severity::Warning => self.warning_enabled,
            Severity::Info => self.info_enabled,
            Severity::Debug => self.debug_enabled,
            Severity::None => true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enabled: true,
            max_message_len: 120,
            use_color: false,
            level_filter: Severity::Debug,
            error_enabled: true,
            warning_enabled: true,
            info_enabled: true,
            debug_enabled: true,
            output: Output::Terminal,
            timestamp: true,
            file: FileOutput::default(),
            max_tag_len: 16,
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::{Config, Severity};

    #[test]
    fn defaults_pass_every_level() {
        let config = Config::default();
        for severity in [
            Severity::Error,
            Severity::Warning,
            Severity::Info,
            Severity::Debug,
        ] {
            assert!(config.passes(severity));
        }
    }

    #[test]
    fn master_switch_gates_everything() {
        let config = Config {
            enabled: false,
            ..Config::default()
        };
        assert!(!config.passes(Severity::Error));
    }

    #[test_case(Severity::Error, true)]
    #[test_case(Severity::Warning, true)]
    #[test_case(Severity::Info, false)]
    #[test_case(Severity::Debug, false)]
    fn filter_caps_verbosity(severity: Severity, expected: bool) {
        let config = Config {
            level_filter: Severity::Warning,
            ..Config::default()
        };
        assert_eq!(config.passes(severity), expected);
    }

    #[test]
    fn switch_and_filter_combine_with_and() {
        // The filter would let warnings through, the switch does not.
        let config = Config {
            level_filter: Severity::Warning,
            warning_enabled: false,
            ..Config::default()
        };
        assert!(!config.passes(Severity::Warning));
        assert!(config.passes(Severity::Error));
    }

    #[test]
    fn none_filter_disables_all_levels() {
        let config = Config {
            level_filter: Severity::None,
            ..Config::default()
        };
        assert!(!config.passes(Severity::Error));
        assert!(!config.passes(Severity::Debug));
    }
}
