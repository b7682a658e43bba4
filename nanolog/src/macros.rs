//! Macros for leveled, tagged logging.
//!
//! The macros are the intended call-site surface: they forward a severity,
//! a tag and format arguments to the global logger. Until a global logger
//! is installed they are no-ops.
//!
//! - `log!`: generic logging macro that accepts a severity level
//! - `error!`: logs error-level messages
//! - `warn!`: logs warning-level messages
//! - `info!`: logs informational messages
//! - `debug!`: logs debug-level messages (most verbose)

/// Logs a message with the specified severity level.
///
/// This is the base logging macro that the severity-specific macros build
/// upon.
///
/// # Examples
///
/// ```rust
/// use nanolog::Severity;
///
/// nanolog::log!(Severity::Info, "MAIN", "application started");
/// ```
#[macro_export]
macro_rules! log {
    ($severity:expr, $tag:expr, $($args:tt)*) => {
        $crate::log::log($severity, $tag, ::core::format_args!($($args)*))
    };
}

/// Logs an error-level message.
///
/// Error messages indicate serious problems that have occurred but allow
/// the program to continue running.
///
/// # Examples
///
/// ```rust
/// nanolog::error!("NET", "connect failed after {} retries", 3);
/// ```
#[macro_export]
macro_rules! error {
    ($tag:expr, $($args:tt)*) => {
        $crate::log!($crate::Severity::Error, $tag, $($args)*)
    };
}

/// Logs a warning-level message.
///
/// Warning messages indicate potential issues that don't prevent the
/// program from continuing but should be noted.
///
/// # Examples
///
/// ```rust
/// nanolog::warn!("PWR", "voltage at {}%", 12);
/// ```
#[macro_export]
macro_rules! warn {
    ($tag:expr, $($args:tt)*) => {
        $crate::log!($crate::Severity::Warning, $tag, $($args)*)
    };
}

/// Logs an info-level message.
///
/// Info messages provide general information about the program's execution.
///
/// # Examples
///
/// ```rust
/// nanolog::info!("MAIN", "up and running, version {}", 3);
/// ```
#[macro_export]
macro_rules! info {
    ($tag:expr, $($args:tt)*) => {
        $crate::log!($crate::Severity::Info, $tag, $($args)*)
    };
}

/// Logs a debug-level message.
///
/// Debug messages provide detailed information about the program's
/// execution, useful during development and troubleshooting.
///
/// # Examples
///
/// ```rust
/// nanolog::debug!("PARSE", "token {:?} at offset {}", "if", 42);
/// ```
#[macro_export]
macro_rules! debug {
    ($tag:expr, $($args:tt)*) => {
        $crate::log!($crate::Severity::Debug, $tag, $($args)*)
    };
}
