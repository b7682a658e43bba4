use std::io::{self, Write};

use super::Sink;

/// Sink that writes lines to standard output.
///
/// Output goes through a locked handle and is flushed per line; I/O results
/// are ignored, so writing cannot fail observably.
#[derive(Debug, Default)]
pub struct TerminalSink(());

impl TerminalSink {
    /// A `const` version of `TerminalSink::default()` to allow use as a `&'static`.
    pub const DEFAULT: Self = TerminalSink(());
}

impl Sink for TerminalSink {
    fn write_line(&self, line: &str) {
        let mut stdout = io::stdout().lock();
        let _ = stdout.write_all(line.as_bytes());
        let _ = stdout.flush();
    }
}
