//! Configuration module for the migration binary.
//! Loads settings from the environment and wires up the repositories and
//! the orchestrator.
mod dependencies;
mod settings;

pub use dependencies::Dependencies;
pub use settings::{MigrationConfig, redact_url};
