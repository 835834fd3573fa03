//! Error types raised while migrating entity rows.
use dwbh_migrate_repository::{DestinationRepositoryError, SourceRepositoryError};
use dwbh_migrate_shared::types::{EntityKind, LegacyId};
use thiserror::Error;

/// Represents errors that abort the migration.
///
/// Every variant is fatal: the orchestrator rolls back the destination
/// transaction as soon as one is raised.
#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("No migrated {entity} with legacy id {legacy_id}, referenced by {referenced_by}")]
    UnresolvedReference {
        entity: EntityKind,
        legacy_id: LegacyId,
        referenced_by: String,
    },

    #[error("Legacy {entity} id {legacy_id} appears more than once in the source")]
    DuplicateLegacyId { entity: EntityKind, legacy_id: LegacyId },

    #[error("Group {group_id} has voting hour {hour}, expected a value between 0 and 23")]
    InvalidVotingHour { group_id: LegacyId, hour: i32 },

    #[error("Source error: {0}")]
    Source(#[from] SourceRepositoryError),

    #[error("Destination error: {0}")]
    Destination(#[from] DestinationRepositoryError),
}
