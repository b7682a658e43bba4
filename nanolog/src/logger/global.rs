//! Global logger state and initialization.

use core::sync::atomic::{AtomicUsize, Ordering};
use core::{error, fmt};

use super::{Logger, Sink};
use crate::config::Config;

/// No-op sink used while no logger has been installed.
#[derive(Debug)]
struct NopSink;

impl Sink for NopSink {
    fn write_line(&self, _: &str) {}
}

static NO_SINK: NopSink = NopSink;

static NO_LOGGER: Logger = Logger::new(Config::DISABLED, &NO_SINK);

/// The `GLOBAL_LOGGER` static holds the global logger instance. It is protected by
/// the `GLOBAL_INIT` static which determines whether `GLOBAL_LOGGER` has been initialized.
static mut GLOBAL_LOGGER: Logger = Logger::new(Config::DISABLED, &NO_SINK);

static GLOBAL_INIT: AtomicUsize = AtomicUsize::new(0);

// There are three different states that we care about:
// - the logger is uninitialized
// - the logger is initializing (`set_global` has been called but `GLOBAL_LOGGER` hasn't been set yet)
// - the logger is active
const UNINITIALIZED: usize = 0;
const INITIALIZING: usize = 1;
const INITIALIZED: usize = 2;

/// Set the global logger instance.
pub(super) fn set_logger(logger: Logger) -> Result<(), SetGlobalError> {
    if GLOBAL_INIT
        .compare_exchange(
            UNINITIALIZED,
            INITIALIZING,
            Ordering::Acquire,
            Ordering::Relaxed,
        )
        .is_ok()
    {
        // SAFETY: this is guarded by the atomic
        unsafe { GLOBAL_LOGGER = logger }
        GLOBAL_INIT.store(INITIALIZED, Ordering::Release);
        Ok(())
    } else {
        Err(SetGlobalError(()))
    }
}

/// Returns a reference to the logger.
///
/// If a logger has not been set, a disabled no-op implementation is returned.
pub fn get_logger() -> &'static Logger {
    // `INITIALIZED` is stored with `Release` ordering only after
    // `GLOBAL_LOGGER` has been written, so observing it through this
    // `Acquire` load synchronizes the logger's initialization with the
    // current thread.
    if GLOBAL_INIT.load(Ordering::Acquire) != INITIALIZED {
        &NO_LOGGER
    } else {
        // SAFETY: this is guarded by the atomic
        unsafe {
            #[expect(clippy::deref_addrof, reason = "false positive")]
            &*&raw const GLOBAL_LOGGER
        }
    }
}

/// The type returned by [`set_global`][super::Builder::set_global] if the logger has already been initialized.
#[derive(Debug)]
pub struct SetGlobalError(());

impl SetGlobalError {
    const MESSAGE: &'static str = "a global logger has already been set";
}

impl fmt::Display for SetGlobalError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str(Self::MESSAGE)
    }
}

impl error::Error for SetGlobalError {}
