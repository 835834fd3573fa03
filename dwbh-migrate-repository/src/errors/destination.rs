use dwbh_migrate_shared::types::EntityKind;
use thiserror::Error;

/// Represents errors that can occur while writing the v2 database.
///
/// Constraint violations raised by the destination (duplicate emails, broken
/// foreign keys) surface as `Insert` with the offending entity type.
#[derive(Debug, Error)]
pub enum DestinationRepositoryError {
    #[error("Failed to begin destination transaction: {0}")]
    Begin(#[source] sqlx::Error),

    #[error("Failed to insert {entity} rows: {source}")]
    Insert {
        entity: EntityKind,
        source: sqlx::Error,
    },

    #[error("Failed to commit destination transaction: {0}")]
    Commit(#[source] sqlx::Error),

    #[error("Failed to roll back destination transaction: {0}")]
    Rollback(#[source] sqlx::Error),
}

impl DestinationRepositoryError {
    pub fn insert(entity: EntityKind) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| Self::Insert { entity, source }
    }
}
