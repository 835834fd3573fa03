//! Error types for the migration binary.
//! Consolidates configuration, connection and orchestration failures into
//! the error returned from `main`.
use dwbh_migrate_pipeline::errors::OrchestratorError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cannot connect to the {database} database: {source}")]
    Connection {
        database: &'static str,
        source: sqlx::Error,
    },

    #[error("Migration error: {0}")]
    Orchestrator(#[from] OrchestratorError),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
