// src/domain/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Missing required environment variable: {0}")]
    MissingConfig(&'static str),
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("Request to Readeck API failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("Readeck API returned {status} {reason}")]
    Api { status: u16, reason: String },
    #[error("Failed to decode highlights response: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
