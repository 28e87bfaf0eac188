// src/infrastructure/config.rs
use crate::constants::{DEFAULT_ENV_FILE, ENV_API_KEY, ENV_BASE_URL, ENV_OUTPUT_PATH};
use crate::domain::DomainError;
use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};

/// Runtime settings, all sourced from the environment.
#[derive(Clone, PartialEq)]
pub struct Config {
    pub base_url: String,
    pub api_key: String,
    pub output_path: PathBuf,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("output_path", &self.output_path)
            .finish()
    }
}

impl Config {
    /// Read the configuration from the process environment
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read the configuration through `lookup`.
    ///
    /// Unset and empty values are both treated as missing. Keys are checked in the
    /// order base URL, API key, output path and the first missing one is reported.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = required(&lookup, ENV_BASE_URL)?;
        let api_key = required(&lookup, ENV_API_KEY)?;
        let output_path = PathBuf::from(required(&lookup, ENV_OUTPUT_PATH)?);

        Ok(Self {
            base_url,
            api_key,
            output_path,
        })
    }
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String, DomainError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => {
            error!(key, "Missing required environment variable");
            Err(DomainError::MissingConfig(key))
        }
    }
}

/// Merge a dotenv file into the process environment.
///
/// Variables already set in the environment are left untouched. Without an explicit
/// path, `.env` in the working directory is tried and any failure is only a warning.
pub fn load_env_file(path: Option<&Path>) -> Result<Option<PathBuf>> {
    match path {
        Some(path) => {
            dotenvy::from_path(path)
                .with_context(|| format!("Failed to load env file {}", path.display()))?;
            debug!(?path, "Loaded env file");
            Ok(Some(path.to_path_buf()))
        }
        None => match dotenvy::dotenv() {
            Ok(path) => {
                debug!(?path, "Loaded env file");
                Ok(Some(path))
            }
            Err(e) => {
                warn!(file = DEFAULT_ENV_FILE, error = %e, "Error loading env file");
                Ok(None)
            }
        },
    }
}
