//! dwbh Migrate Library
//!
//! Configuration loading, error handling and dependency wiring for the
//! one-shot dwbh v1 to v2 migration binary.

pub mod config;
pub mod errors;

pub use config::{Dependencies, MigrationConfig};
pub use errors::AppError;
