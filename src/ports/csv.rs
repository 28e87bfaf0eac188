// src/ports/csv.rs
use crate::constants::{CSV_DATE_FORMAT, CSV_HEADER};
use crate::domain::Highlight;
use tracing::instrument;

/// Projects a highlight onto the four exported columns.
#[derive(Debug, Default)]
pub struct CsvPresenter;

impl CsvPresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn header(&self) -> [&'static str; 4] {
        CSV_HEADER
    }

    #[instrument(level = "trace", skip(self, highlight), fields(id = %highlight.id))]
    pub fn row(&self, highlight: &Highlight) -> [String; 4] {
        let date = highlight
            .created
            .map(|created| created.format(CSV_DATE_FORMAT).to_string())
            .unwrap_or_default();

        [
            highlight.text.clone(),
            highlight.bookmark_title.clone(),
            highlight.bookmark_url.clone(),
            date,
        ]
    }
}
