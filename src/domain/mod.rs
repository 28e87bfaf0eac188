// src/domain/mod.rs
pub mod error;
pub mod highlight;

pub use error::DomainError;
pub use highlight::Highlight;
