// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use anyhow::{Context, Result};
use application::HighlightExporter;
use constants::ANNOTATIONS_API_PATH;
use infrastructure::{config, Config, CsvFileWriter, ReadeckClient};
use tracing::{debug, info};
use crate::cli::args::Args;

pub async fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting readeck-highlights with arguments");

    config::load_env_file(args.env_file.as_deref())?;
    let config = Config::from_env().context("Failed to load configuration")?;
    debug!(?config, "Loaded configuration");

    let rows = export_highlights(&config).await?;
    info!(rows, path = ?config.output_path, "Done");

    Ok(())
}

/// Fetch all highlights and write them to `config.output_path`
pub async fn export_highlights(config: &Config) -> Result<usize> {
    export_highlights_with(build_http_client()?, config).await
}

/// Same as [`export_highlights`] with a caller-supplied HTTP client
pub async fn export_highlights_with(http: reqwest::Client, config: &Config) -> Result<usize> {
    let source = ReadeckClient::new(
        http,
        &config.base_url,
        ANNOTATIONS_API_PATH,
        config.api_key.clone(),
    )
    .context("Invalid configuration")?;
    let sink = CsvFileWriter::new(&config.output_path);

    HighlightExporter::new(source, sink).run().await
}

pub fn build_http_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to create HTTP client")
}
