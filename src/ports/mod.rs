// src/ports/mod.rs
pub mod csv;

pub use self::csv::CsvPresenter;
