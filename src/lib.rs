//! Menagerie Library
//!
//! Introductory modeling exercises: two animal schemas, the same animals as
//! key/value records, an encapsulated car and a tour of the built-in data types.

pub mod animals;
pub mod car;
pub mod cli;
pub mod config_file;
pub mod error;
pub mod exercises;
pub mod tutorial;
pub mod types;

// Re-export main types for convenience
pub use animals::record::{Record, Value};
pub use car::Car;
pub use config_file::SessionConfig;
pub use error::{ConversionError, MenagerieError, Result};
pub use tutorial::complex::Complex;
pub use types::{EngineStatus, TypeCategory};
