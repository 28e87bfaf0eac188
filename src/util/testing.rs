// src/util/testing.rs

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use std::env;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{HighlightSink, HighlightSource};
use crate::domain::{DomainError, Highlight};

enum FetchBehavior {
    Highlights,
    ApiError(u16, String),
    RawBody(String),
}

/// Shared fake for use cases that depend on HighlightSource
///
/// # Examples
///
/// ```
/// use readeck_highlights::util::testing::{sample_highlight, MockHighlightSource};
///
/// let source = MockHighlightSource::builder()
///     .with_highlight(sample_highlight("h1", "Some text"))
///     .build();
/// ```
pub struct MockHighlightSource {
    highlights: Vec<Highlight>,
    behavior: FetchBehavior,
}

impl MockHighlightSource {
    pub fn builder() -> MockHighlightSourceBuilder {
        MockHighlightSourceBuilder::new()
    }
}

#[async_trait]
impl HighlightSource for MockHighlightSource {
    async fn fetch_highlights(&self) -> Result<Vec<Highlight>, DomainError> {
        match &self.behavior {
            FetchBehavior::Highlights => Ok(self.highlights.clone()),
            FetchBehavior::ApiError(status, reason) => Err(DomainError::Api {
                status: *status,
                reason: reason.clone(),
            }),
            FetchBehavior::RawBody(body) => {
                serde_json::from_str(body).map_err(DomainError::Decode)
            }
        }
    }
}

/// Builder for MockHighlightSource
pub struct MockHighlightSourceBuilder {
    highlights: Vec<Highlight>,
    behavior: FetchBehavior,
}

impl MockHighlightSourceBuilder {
    pub fn new() -> Self {
        Self {
            highlights: vec![],
            behavior: FetchBehavior::Highlights,
        }
    }

    /// Append a highlight to the fetched sequence
    pub fn with_highlight(mut self, highlight: Highlight) -> Self {
        self.highlights.push(highlight);
        self
    }

    /// Fail every fetch with an API error
    pub fn with_api_error(mut self, status: u16, reason: &str) -> Self {
        self.behavior = FetchBehavior::ApiError(status, reason.to_string());
        self
    }

    /// Decode `body` as if it came off the wire
    pub fn with_raw_body(mut self, body: &str) -> Self {
        self.behavior = FetchBehavior::RawBody(body.to_string());
        self
    }

    pub fn build(self) -> MockHighlightSource {
        MockHighlightSource {
            highlights: self.highlights,
            behavior: self.behavior,
        }
    }
}

impl Default for MockHighlightSourceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Sink that records every batch it is handed. Clones share the record.
#[derive(Clone, Default)]
pub struct MockHighlightSink {
    batches: Arc<Mutex<Vec<Vec<Highlight>>>>,
}

impl MockHighlightSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of write calls seen
    pub fn calls(&self) -> usize {
        self.batches.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Highlights from the most recent write, empty if never called
    pub fn received(&self) -> Vec<Highlight> {
        self.batches
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
            .unwrap_or_default()
    }
}

impl HighlightSink for MockHighlightSink {
    fn write_highlights(&mut self, highlights: Vec<Highlight>) -> Result<usize, DomainError> {
        let count = highlights.len();
        self.batches
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(highlights);
        Ok(count)
    }
}

/// Highlight with placeholder bookmark data created at 2024-01-02 03:04:05 UTC
pub fn sample_highlight(id: &str, text: &str) -> Highlight {
    Highlight {
        id: id.to_string(),
        text: text.to_string(),
        href: format!("https://readeck.example/bookmarks/b1#{id}"),
        bookmark_title: "Example Article".to_string(),
        bookmark_url: "https://example.com/article".to_string(),
        bookmark_href: "https://readeck.example/api/bookmarks/b1".to_string(),
        created: Some(sample_created()),
    }
}

fn sample_created() -> DateTime<FixedOffset> {
    Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5)
        .single()
        .map(|dt| dt.fixed_offset())
        .unwrap_or_default()
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["hyper", "hyper_util", "reqwest", "wiremock", "mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[ctor::ctor]
    fn init() {
        init_test_setup().expect("Failed to initialize test setup");
    }

    #[tokio::test]
    async fn given_highlights_added_when_fetching_then_returns_them_in_order() {
        let source = MockHighlightSource::builder()
            .with_highlight(sample_highlight("h1", "one"))
            .with_highlight(sample_highlight("h2", "two"))
            .build();

        let result = source.fetch_highlights().await.expect("Fetch should succeed");

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].id, "h1");
        assert_eq!(result[1].id, "h2");
    }

    #[tokio::test]
    async fn given_object_body_when_fetching_then_returns_decode_error() {
        let source = MockHighlightSource::builder()
            .with_raw_body(r#"{"error": "not a list"}"#)
            .build();

        let result = source.fetch_highlights().await;

        assert!(matches!(result, Err(DomainError::Decode(_))));
    }

    #[test]
    fn given_sink_clone_when_writing_then_original_sees_batch() {
        let sink = MockHighlightSink::new();
        let mut writer = sink.clone();

        writer
            .write_highlights(vec![sample_highlight("h1", "one")])
            .expect("Write should succeed");

        assert_eq!(sink.calls(), 1);
        assert_eq!(sink.received()[0].id, "h1");
    }

    #[test]
    fn given_poisoned_lock_when_counting_calls_then_still_reports() {
        let sink = MockHighlightSink::new();
        let shared = sink.clone();
        let _ = std::thread::spawn(move || {
            let _guard = shared.batches.lock().unwrap();
            panic!("poison the sink lock");
        })
        .join();

        assert_eq!(sink.calls(), 0);
        assert!(sink.received().is_empty());
    }

    #[test]
    fn given_sample_highlight_when_built_then_created_is_utc() {
        let highlight = sample_highlight("h1", "one");

        let created = highlight.created.expect("sample has a timestamp");
        assert_eq!(created.to_rfc3339(), "2024-01-02T03:04:05+00:00");
    }
}
