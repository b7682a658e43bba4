//! Message dispatch and backend sinks.
//!
//! This module provides the [`Logger`] that turns a call site's severity,
//! tag and format arguments into a finished line, the [`Sink`] trait lines
//! are handed to, and the built-in sink implementations.
//!
//! # Global Logger
//!
//! A process normally installs one logger at startup through
//! [`build`] and reaches it through the logging macros. The global is
//! set-once; until it is set, [`get_logger`] returns a disabled logger that
//! drops everything.
//!
//! # Sink Trait
//!
//! The [`Sink`] trait is the single seam between formatting and output.
//! New destinations are added by implementing it; the logger itself never
//! changes.
//!
//! # Built-in Sinks
//!
//! - [`TerminalSink`] - writes lines to standard output
//! - [`FileSink`] - appends lines to a log file, reopening per write
//! - [`MemorySink`] - stores lines in memory, mainly for tests

mod builder;
mod file_sink;
mod global;
mod logger;
mod memory_sink;
mod terminal_sink;

use core::fmt::Debug;

pub use builder::{BuildError, Builder, build};
pub use file_sink::FileSink;
pub use global::{SetGlobalError, get_logger};
pub use logger::Logger;
pub use memory_sink::MemorySink;
pub use terminal_sink::TerminalSink;

/// Trait for delivering finished log lines to a destination.
///
/// Implementors receive each line exactly as it should appear, including the
/// trailing newline and, for the first record of an execution, the banner.
/// A line is one unit: it is written in a single call and must not be split
/// or interleaved.
///
/// Delivery is best effort. A sink must not panic and has no way to report
/// failure to the call site; logging must never crash the application.
///
/// # Examples
///
/// ```rust
/// use nanolog::Sink;
///
/// #[derive(Debug)]
/// struct StderrSink;
///
/// impl Sink for StderrSink {
///     fn write_line(&self, line: &str) {
///         eprint!("{line}");
///     }
/// }
/// ```
pub trait Sink: Debug {
    /// Delivers one finished line to the destination.
    fn write_line(&self, line: &str);
}
