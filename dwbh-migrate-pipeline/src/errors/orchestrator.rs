//! Error types for the migration orchestrator.
use dwbh_migrate_repository::DestinationRepositoryError;
use thiserror::Error;

use crate::errors::MigrationError;

/// Represents errors that can occur while orchestrating a migration run.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// A migrator failed; the destination transaction has been rolled back.
    #[error("Migration aborted: {0}")]
    Migration(#[from] MigrationError),

    /// Opening, committing or rolling back the destination transaction failed.
    #[error("Transaction error: {0}")]
    Transaction(#[from] DestinationRepositoryError),
}
