// src/cli/args.rs
use clap::Parser;
use std::path::PathBuf;

/// Export Readeck highlights to a CSV file.
///
/// Reads READECK_API_BASE_URL, READECK_API_KEY and CSV_OUTPUT_PATH from the
/// environment (optionally seeded from a dotenv file).
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
pub struct Args {
    /// Dotenv file to merge into the environment (default: ./.env if present)
    #[arg(long, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
