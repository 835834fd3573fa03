use dwbh_migrate_shared::types::EntityKind;
use thiserror::Error;

/// Represents errors that can occur while reading the v1 database.
#[derive(Debug, Error)]
pub enum SourceRepositoryError {
    #[error("Failed to read {entity} rows: {source}")]
    Query {
        entity: EntityKind,
        source: sqlx::Error,
    },
}

impl SourceRepositoryError {
    pub fn query(entity: EntityKind) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| Self::Query { entity, source }
    }
}
