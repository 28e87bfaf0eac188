// src/application/mod.rs
pub mod highlight_exporter;

pub use highlight_exporter::{HighlightExporter, HighlightSink, HighlightSource};
