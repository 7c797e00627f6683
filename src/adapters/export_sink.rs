//! Destinations for exported definitions on the host.

use formsmith_core::ExportSink;
use std::io::Write;
use std::path::PathBuf;

/// Prints the exported text to standard output.
pub struct StdoutSink;

impl ExportSink for StdoutSink {
    fn deliver(&mut self, text: &str) {
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", text) {
            tracing::error!("Failed to write export to stdout: {}", e);
        }
    }
}

/// Writes the exported text to a file. A failed write is kept for the caller to inspect.
pub struct FileSink {
    path: PathBuf,
    pub failure: Option<std::io::Error>,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            failure: None,
        }
    }
}

impl ExportSink for FileSink {
    fn deliver(&mut self, text: &str) {
        match std::fs::write(&self.path, format!("{}\n", text)) {
            Ok(()) => tracing::info!("Export written to {}", self.path.display()),
            Err(e) => {
                tracing::error!("Failed to write export to {}: {}", self.path.display(), e);
                self.failure = Some(e);
            }
        }
    }
}
