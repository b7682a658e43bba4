use super::global::{self, SetGlobalError};
use super::{FileSink, Logger, Sink, TerminalSink};
use crate::config::{Config, Output};

/// Builder for constructing and optionally installing a logger.
///
/// Created via [`build()`] and finalized with [`finish`](Builder::finish)
/// or [`set_global`](Builder::set_global). When no explicit sink is given,
/// one is resolved from [`Config::output`].
#[derive(Debug)]
#[must_use]
pub struct Builder {
    config: Config,
    sink: Option<&'static (dyn Sink + Sync)>,
}

/// Creates a new logger builder.
///
/// # Example
///
/// ```rust,no_run
/// use nanolog::Config;
///
/// nanolog::build()
///     .config(Config::default())
///     .set_global()
///     .expect("logger was not set yet");
/// ```
pub fn build() -> Builder {
    Builder {
        config: Config::default(),
        sink: None,
    }
}

impl Builder {
    /// Sets the configuration for the logger.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Sets an explicit sink, overriding [`Config::output`].
    pub fn sink(mut self, sink: &'static (dyn Sink + Sync)) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Sets the given sink by leaking it to obtain a static reference.
    ///
    /// This is a convenience method for sinks that are built at runtime.
    /// Equivalent to `.sink(Box::leak(Box::new(sink)))`.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use nanolog::MemorySink;
    ///
    /// let (sink, lines) = MemorySink::new();
    /// nanolog::build()
    ///     .leaked_sink(sink)
    ///     .set_global()
    ///     .expect("logger was not set yet");
    /// ```
    pub fn leaked_sink(self, sink: impl Sink + Sync + 'static) -> Self {
        self.sink(Box::leak(Box::new(sink)))
    }

    /// Builds the logger, resolving the sink from the configuration when
    /// none was set explicitly.
    ///
    /// # Errors
    ///
    /// Fails when [`Config::output`] selects a destination that cannot be
    /// resolved: [`Output::Uart`] and [`Output::Network`] have no backend
    /// implementation, and [`Output::Memory`] needs an explicit
    /// [`MemorySink`][super::MemorySink] so the caller keeps the read
    /// handle. Erroring here, at construction time, avoids a logger that
    /// silently discards every line.
    pub fn finish(self) -> Result<Logger, BuildError> {
        let sink: &'static (dyn Sink + Sync) = match self.sink {
            Some(sink) => sink,
            None => match self.config.output {
                Output::Terminal => &TerminalSink::DEFAULT,
                Output::File => Box::leak(Box::new(FileSink::new(&self.config.file))),
                Output::Memory => return Err(BuildError::SinkRequired(Output::Memory)),
                output @ (Output::Uart | Output::Network) => {
                    return Err(BuildError::UnimplementedOutput(output));
                }
            },
        };

        Ok(Logger::new(self.config, sink))
    }

    /// Builds the logger and installs it as the global instance.
    ///
    /// # Errors
    ///
    /// Fails when the sink cannot be resolved (see
    /// [`finish`](Builder::finish)) or when a global logger has already
    /// been set.
    pub fn set_global(self) -> Result<(), BuildError> {
        global::set_logger(self.finish()?)?;
        Ok(())
    }
}

/// The type returned by [`Builder::finish`] and [`Builder::set_global`]
/// when the logger cannot be constructed or installed.
#[derive(thiserror::Error, Debug)]
pub enum BuildError {
    /// The selected output has no backend implementation.
    #[error("output {0:?} is not implemented")]
    UnimplementedOutput(Output),

    /// The selected output cannot be resolved from configuration alone.
    #[error("output {0:?} requires an explicit sink, see `Builder::sink`")]
    SinkRequired(Output),

    /// A global logger has already been set.
    #[error(transparent)]
    AlreadyInitialized(#[from] SetGlobalError),
}

#[cfg(test)]
mod tests {
    use super::{BuildError, build};
    use crate::config::{Config, Output};

    #[test]
    fn terminal_output_resolves() {
        assert!(build().config(Config::default()).finish().is_ok());
    }

    #[test]
    fn stub_outputs_are_construction_errors() {
        for output in [Output::Uart, Output::Network] {
            let result = build()
                .config(Config {
                    output,
                    ..Config::default()
                })
                .finish();
            assert!(matches!(
                result,
                Err(BuildError::UnimplementedOutput(o)) if o == output
            ));
        }
    }

    #[test]
    fn memory_output_requires_an_explicit_sink() {
        let result = build()
            .config(Config {
                output: Output::Memory,
                ..Config::default()
            })
            .finish();
        assert!(matches!(
            result,
            Err(BuildError::SinkRequired(Output::Memory))
        ));
    }
}
