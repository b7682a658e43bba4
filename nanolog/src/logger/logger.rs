use core::fmt;
use core::sync::atomic::{AtomicU64, Ordering};

use super::Sink;
use crate::config::Config;
use crate::record::{self, BANNER, Record, Severity, TruncatingWriter};
use crate::time;

/// Formats messages and hands them to the configured sink.
///
/// The logger owns the process-wide sequence counter: every emitted record
/// gets the next number, starting at 1, and the first record of an execution
/// is prefixed with the banner. A logger is typically installed globally via
/// [`build`][super::build] and reached through the logging macros, but it
/// can also be constructed directly, which is useful for tests.
///
/// # Examples
///
/// ```rust
/// use nanolog::{Config, Logger, Severity, TerminalSink};
///
/// let logger = Logger::new(Config::default(), &TerminalSink::DEFAULT);
/// logger.emit(Severity::Info, "MAIN", format_args!("up and running"));
/// ```
#[derive(Debug)]
pub struct Logger {
    config: Config,
    sequence: AtomicU64,
    sink: &'static (dyn Sink + Sync),
}

impl Logger {
    /// Creates a logger with the given configuration and sink.
    ///
    /// The sink reference must live for the rest of the process; sinks that
    /// are built at runtime can be leaked into place, see
    /// [`Builder::leaked_sink`][super::Builder::leaked_sink].
    pub const fn new(config: Config, sink: &'static (dyn Sink + Sync)) -> Self {
        Self {
            config,
            sequence: AtomicU64::new(0),
            sink,
        }
    }

    /// Formats one message and dispatches it to the sink.
    ///
    /// Calls that fail an enablement gate (master switch, per-level switch,
    /// level filter) return without output and without advancing the
    /// sequence counter. Everything else is best effort: an over-long body
    /// or tag is truncated, never an error, and the call blocks until the
    /// sink has taken the line.
    ///
    /// Call sites normally go through the macros instead:
    /// `error!("NET", "fail {}", 7)`.
    pub fn emit(&self, severity: Severity, tag: &str, args: fmt::Arguments<'_>) {
        if !self.config.passes(severity) {
            return;
        }

        let mut body = TruncatingWriter::new(self.config.max_message_len);
        // Cannot fail, the writer truncates instead of erroring.
        let _ = fmt::write(&mut body, args);
        let body = body.into_inner();

        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;

        let timestamp = self.config.timestamp.then(time::now_timestamp);

        let record = Record {
            sequence,
            severity,
            tag: record::truncated(tag, self.config.max_tag_len),
            timestamp: timestamp.as_deref(),
            body: &body,
        };

        let mut line = String::new();
        if sequence == 1 {
            line.push_str(BANNER);
        }
        record::format_record(&record, self.config.use_color, &mut line);

        self.sink.write_line(&line);
    }
}
