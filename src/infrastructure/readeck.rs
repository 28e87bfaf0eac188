// src/infrastructure/readeck.rs
use crate::application::HighlightSource;
use crate::domain::{DomainError, Highlight};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::fmt;
use tracing::{debug, info};
use url::Url;

/// Readeck HTTP API client for a single endpoint.
///
/// The `reqwest::Client` is supplied by the caller so the connection pool and its
/// defaults are owned in one place.
pub struct ReadeckClient {
    http: reqwest::Client,
    endpoint: Url,
    token: String,
}

impl ReadeckClient {
    pub fn new(
        http: reqwest::Client,
        base_url: &str,
        api_path: &str,
        token: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let endpoint = join_api_path(base_url, api_path)?;
        debug!(%endpoint, "Created Readeck client");
        Ok(Self {
            http,
            endpoint,
            token: token.into(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl fmt::Debug for ReadeckClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadeckClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("token", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl HighlightSource for ReadeckClient {
    async fn fetch_highlights(&self) -> Result<Vec<Highlight>, DomainError> {
        info!(url = %self.endpoint, "Fetching highlights");

        let response = self
            .http
            .get(self.endpoint.clone())
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(DomainError::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(DomainError::Api {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.bytes().await.map_err(DomainError::Transport)?;
        debug!(bytes = body.len(), "Received highlights payload");

        serde_json::from_slice(&body).map_err(DomainError::Decode)
    }
}

/// Append `api_path` to the path of `base_url` segment by segment.
///
/// Trailing slashes on the base (any number of them) and a leading slash on the path
/// never produce an empty segment, so there is always exactly one `/` at the seam.
pub fn join_api_path(base_url: &str, api_path: &str) -> Result<Url, DomainError> {
    let invalid = |reason: &str| DomainError::InvalidBaseUrl {
        url: base_url.to_string(),
        reason: reason.to_string(),
    };

    let mut url = Url::parse(base_url).map_err(|e| invalid(&e.to_string()))?;
    if url.host().is_none() {
        return Err(invalid("missing host"));
    }

    let trailing_empty = url
        .path_segments()
        .map(|segments| segments.rev().take_while(|s| s.is_empty()).count())
        .unwrap_or(0);

    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| invalid("cannot be used as a base"))?;
        for _ in 0..trailing_empty {
            segments.pop();
        }
        segments.extend(api_path.split('/').filter(|segment| !segment.is_empty()));
    }

    Ok(url)
}
