// src/infrastructure/csv_writer.rs
use crate::application::HighlightSink;
use crate::domain::{DomainError, Highlight};
use crate::ports::CsvPresenter;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Writes highlights to a CSV file, truncating whatever was there.
///
/// The parent directory must exist. A failure part way through leaves the partial
/// file in place.
#[derive(Debug)]
pub struct CsvFileWriter {
    path: PathBuf,
    presenter: CsvPresenter,
}

impl CsvFileWriter {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            presenter: CsvPresenter::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: impl Into<io::Error>) -> DomainError {
        DomainError::Io {
            path: self.path.clone(),
            source: source.into(),
        }
    }
}

impl HighlightSink for CsvFileWriter {
    #[instrument(level = "debug", skip(self, highlights), fields(path = ?self.path))]
    fn write_highlights(&mut self, highlights: Vec<Highlight>) -> Result<usize, DomainError> {
        info!(path = ?self.path, "Exporting highlights to CSV");

        let file = File::create(&self.path).map_err(|e| self.io_error(e))?;
        // The writer owns the file; it is closed when `writer` goes out of scope.
        let mut writer = csv::Writer::from_writer(file);

        writer
            .write_record(self.presenter.header())
            .map_err(|e| self.io_error(e))?;

        for highlight in &highlights {
            writer
                .write_record(self.presenter.row(highlight))
                .map_err(|e| self.io_error(e))?;
        }

        writer.flush().map_err(|e| self.io_error(e))?;

        info!(rows = highlights.len(), "Export completed successfully");
        Ok(highlights.len())
    }
}
