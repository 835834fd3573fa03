//! This module defines the `SourceRepository` trait, the read-only view of the
//! v1 database used by the migrators.
use dwbh_migrate_shared::types::{
    LegacyGroup, LegacyMembership, LegacyUser, LegacyVote, LegacyVoting,
};

use crate::errors::SourceRepositoryError;

/// Read-only access to the five v1 tables.
///
/// Every method returns all rows of its table. Implementations must not
/// modify the source database.
#[async_trait::async_trait]
pub trait SourceRepository: Send + Sync {
    /// Reads every row of `dwbh_user`.
    async fn fetch_users(&self) -> Result<Vec<LegacyUser>, SourceRepositoryError>;

    /// Reads every row of `dwbh_group`.
    async fn fetch_groups(&self) -> Result<Vec<LegacyGroup>, SourceRepositoryError>;

    /// Reads every row of the `user_group` junction table, duplicates included.
    async fn fetch_memberships(&self) -> Result<Vec<LegacyMembership>, SourceRepositoryError>;

    /// Reads every row of `votation`.
    async fn fetch_votings(&self) -> Result<Vec<LegacyVoting>, SourceRepositoryError>;

    /// Reads every row of `vote`.
    async fn fetch_votes(&self) -> Result<Vec<LegacyVote>, SourceRepositoryError>;
}
