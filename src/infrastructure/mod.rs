// src/infrastructure/mod.rs
pub mod config;
pub mod csv_writer;
pub mod readeck;

pub use config::Config;
pub use csv_writer::CsvFileWriter;
pub use readeck::ReadeckClient;
