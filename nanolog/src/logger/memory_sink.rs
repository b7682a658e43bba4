use std::sync::{Arc, Mutex};

use super::Sink;

/// Sink that stores all lines in memory.
///
/// This sink is useful for unit tests and integration tests where output
/// needs to be inspected, and it backs the in-memory buffer destination.
#[derive(Debug)]
pub struct MemorySink {
    /// Shared vector storing all delivered lines.
    pub lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    /// Creates a new memory sink and returns both the sink and a handle to
    /// the line storage.
    ///
    /// The sink is typically leaked into a logger while the handle stays
    /// with the caller for inspection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nanolog::MemorySink;
    ///
    /// let (sink, lines) = MemorySink::new();
    /// // Hand `sink` to a logger, read `lines` afterwards.
    /// ```
    pub fn new() -> (Self, Arc<Mutex<Vec<String>>>) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                lines: lines.clone(),
            },
            lines,
        )
    }
}

impl Sink for MemorySink {
    fn write_line(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{MemorySink, Sink};

    #[test]
    fn stores_lines_in_order() {
        let (sink, lines) = MemorySink::new();

        sink.write_line("one\n");
        sink.write_line("two\n");

        assert_eq!(*lines.lock().unwrap(), vec!["one\n", "two\n"]);
    }
}
