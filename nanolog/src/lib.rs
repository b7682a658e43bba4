//! # `nanolog`
//!
//! A minimal leveled logging facility for resource-constrained targets.
//!
//! Messages carry a severity, a short tag and printf-style arguments; the
//! logger formats them into single lines and dispatches each line, as one
//! unit, to a configurable backend sink.
//!
//! ## Features
//!
//! - **Leveled, tagged messages**: error/warning/info/debug plus a short
//!   component tag on every line
//! - **Sequence numbering**: every emitted record gets the next number in a
//!   process-lifetime counter, and the first record is preceded by a
//!   one-time execution banner
//! - **Optional decoration**: wall-clock timestamps and per-severity ANSI
//!   colors, both configurable
//! - **Pluggable sinks**: terminal, append-to-file and in-memory backends
//!   behind a single-method [`Sink`] trait
//! - **Best effort by design**: over-long bodies and tags truncate silently
//!   and sink failures never reach the call site
//!
//! ## Basic Usage
//!
//! Install a global logger once at startup:
//!
//! ```rust
//! use nanolog::Config;
//!
//! nanolog::build()
//!     .config(Config::default())
//!     .set_global()
//!     .expect("logger was not set yet");
//! ```
//!
//! Then use the logging macros:
//!
//! ```rust
//! nanolog::info!("MAIN", "up and running, version {}", 3);
//! nanolog::error!("NET", "connect failed after {} retries", 2);
//! ```
//!
//! ## Line Format
//!
//! Without decoration a line looks like
//!
//! ```text
//! [17] E : [NET] connect failed after 2 retries
//! ```
//!
//! with the sequence number, the single-character level, the tag, and the
//! message body. Enabling timestamps inserts a `[YYYY-MM-DD HH:MM:SS]`
//! field after the tag; enabling color wraps the whole line in an ANSI
//! escape pair keyed by severity.
//!
//! ## Configuration
//!
//! All behavior is fixed when the logger is built, via [`Config`]: a master
//! switch, per-level switches, a most-verbose-severity filter (the switches
//! and the filter combine with AND), body/tag length bounds, timestamp and
//! color toggles, and the backend selection. There is no runtime
//! reconfiguration; calls that fail a gate cost one branch and advance
//! nothing.

pub mod config;
#[doc(hidden)]
pub mod log;
pub mod logger;
mod macros;
mod record;
pub mod report;
mod time;

pub use config::{Config, FileOutput, Output};
pub use logger::{
    BuildError, Builder, FileSink, Logger, MemorySink, SetGlobalError, Sink, TerminalSink, build,
    get_logger,
};
pub use record::Severity;
pub use report::Report;
