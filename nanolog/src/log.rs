//! Logging entry point used by the macros.

use core::fmt;

use crate::logger::get_logger;
use crate::record::Severity;

/// Forwards one message to the global logger.
///
/// Prefer using the macros.
///
/// Until a global logger has been installed this is a no-op; afterwards it
/// behaves exactly like [`Logger::emit`][crate::Logger::emit] on the
/// installed instance.
#[doc(hidden)]
pub fn log(severity: Severity, tag: &str, args: fmt::Arguments<'_>) {
    get_logger().emit(severity, tag, args);
}
