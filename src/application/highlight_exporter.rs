// src/application/highlight_exporter.rs
use crate::domain::{DomainError, Highlight};
use anyhow::Context;
use async_trait::async_trait;
use tracing::info;

/// Where highlights come from. Implemented by the Readeck HTTP client.
#[async_trait]
pub trait HighlightSource {
    /// Fetch every highlight in the order the service returns them
    async fn fetch_highlights(&self) -> Result<Vec<Highlight>, DomainError>;
}

/// Where highlights go. Implemented by the CSV file writer.
pub trait HighlightSink {
    /// Persist the highlights and return the number of records written
    fn write_highlights(&mut self, highlights: Vec<Highlight>) -> Result<usize, DomainError>;
}

/// Runs one fetch followed by one export. The sink is never touched if the fetch fails.
pub struct HighlightExporter<S: HighlightSource, W: HighlightSink> {
    source: S,
    sink: W,
}

impl<S: HighlightSource, W: HighlightSink> HighlightExporter<S, W> {
    pub fn new(source: S, sink: W) -> Self {
        Self { source, sink }
    }

    pub async fn fetch(&self) -> Result<Vec<Highlight>, DomainError> {
        let highlights = self.source.fetch_highlights().await?;
        info!(count = highlights.len(), "Fetched highlights");
        Ok(highlights)
    }

    pub fn export(&mut self, highlights: Vec<Highlight>) -> Result<usize, DomainError> {
        let written = self.sink.write_highlights(highlights)?;
        info!(rows = written, "Exported highlights");
        Ok(written)
    }

    /// Fetch then export, returning the number of rows written.
    ///
    /// Errors carry the stage that failed; the `DomainError` stays reachable through
    /// `downcast_ref`.
    pub async fn run(&mut self) -> anyhow::Result<usize> {
        let highlights = self.fetch().await.context("Failed to fetch highlights")?;
        self.export(highlights)
            .context("Failed to export highlights to CSV")
    }
}
