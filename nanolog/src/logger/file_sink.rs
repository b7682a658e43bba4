use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::Sink;
use crate::config::FileOutput;

/// Sink that appends lines to a log file.
///
/// The file is opened and closed around every line, so no handle outlives a
/// single write. A missing output directory is created on demand; when
/// creation fails the failure is reported on stderr and the write is still
/// attempted. Lines are dropped silently when the file cannot be opened.
///
/// # Examples
///
/// ```rust,no_run
/// use nanolog::{FileOutput, FileSink};
///
/// let sink = FileSink::new(&FileOutput::default());
/// nanolog::build()
///     .leaked_sink(sink)
///     .set_global()
///     .expect("logger was not set yet");
/// ```
#[derive(Debug)]
pub struct FileSink {
    directory: PathBuf,
    path: PathBuf,
}

impl FileSink {
    /// Creates a file sink targeting `<directory>/<base_name>.<extension>`.
    ///
    /// No I/O happens here; the directory and file are only touched when a
    /// line is written.
    pub fn new(output: &FileOutput) -> Self {
        let directory = PathBuf::from(&output.directory);
        let path = directory.join(format!("{}.{}", output.base_name, output.extension));
        Self { directory, path }
    }

    /// The full path lines are appended to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn write_line(&self, line: &str) {
        if !self.directory.as_os_str().is_empty() && !self.directory.exists() {
            if let Err(error) = fs::create_dir_all(&self.directory) {
                eprintln!(
                    "failed to create log directory {}: {error}",
                    self.directory.display()
                );
            }
        }

        let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&self.path) else {
            return;
        };
        let _ = file.write_all(line.as_bytes());
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{FileSink, Sink};
    use crate::config::FileOutput;

    fn output_in(directory: &std::path::Path) -> FileOutput {
        FileOutput {
            directory: directory.to_str().unwrap().to_owned(),
            ..FileOutput::default()
        }
    }

    #[test]
    fn appends_each_line_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileSink::new(&output_in(&dir.path().join("logs")));

        sink.write_line("[1] I : [FS] one\n");
        sink.write_line("[2] I : [FS] two\n");

        let contents = std::fs::read_to_string(sink.path()).unwrap();
        assert_eq!(contents, "[1] I : [FS] one\n[2] I : [FS] two\n");
    }

    #[test]
    fn creates_the_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let sink = FileSink::new(&output_in(&nested));

        sink.write_line("line\n");

        assert!(nested.is_dir());
        assert_eq!(std::fs::read_to_string(sink.path()).unwrap(), "line\n");
    }

    #[test]
    fn unopenable_file_drops_the_line() {
        let dir = tempfile::tempdir().unwrap();
        // The target path is a directory, so opening it as a file fails.
        let sink = FileSink::new(&FileOutput {
            directory: dir.path().to_str().unwrap().to_owned(),
            base_name: String::new(),
            extension: String::new(),
        });
        std::fs::create_dir_all(sink.path()).unwrap();

        sink.write_line("dropped\n");
    }

    #[test]
    fn path_composition() {
        let sink = FileSink::new(&FileOutput {
            directory: String::from("LogOutput"),
            base_name: String::from("log"),
            extension: String::from("txt"),
        });
        assert_eq!(sink.path(), std::path::Path::new("LogOutput/log.txt"));
    }
}
