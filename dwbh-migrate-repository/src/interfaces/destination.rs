//! This module defines the write side of the migration: a repository able to
//! open a transaction, and the transaction that receives every migrated row.
use dwbh_migrate_shared::types::{Group, Membership, User, Vote, Voting};

use crate::errors::DestinationRepositoryError;

/// Entry point to the v2 database.
#[async_trait::async_trait]
pub trait DestinationRepository: Send + Sync {
    /// Opens the single transaction the whole migration runs in.
    async fn begin(&self) -> Result<Box<dyn DestinationTransaction>, DestinationRepositoryError>;
}

/// An open transaction against the v2 database.
///
/// Nothing written through it is visible until `commit`. Dropping it without
/// committing discards every insert.
#[async_trait::async_trait]
pub trait DestinationTransaction: Send {
    /// Inserts rows into `users`.
    async fn insert_users(&mut self, users: &[User]) -> Result<(), DestinationRepositoryError>;

    /// Inserts rows into `groups`.
    async fn insert_groups(&mut self, groups: &[Group]) -> Result<(), DestinationRepositoryError>;

    /// Inserts rows into `users_groups`.
    async fn insert_memberships(
        &mut self,
        memberships: &[Membership],
    ) -> Result<(), DestinationRepositoryError>;

    /// Inserts rows into `voting`.
    async fn insert_votings(
        &mut self,
        votings: &[Voting],
    ) -> Result<(), DestinationRepositoryError>;

    /// Inserts rows into `vote`.
    async fn insert_votes(&mut self, votes: &[Vote]) -> Result<(), DestinationRepositoryError>;

    /// Makes every insert of this transaction durable.
    async fn commit(self: Box<Self>) -> Result<(), DestinationRepositoryError>;

    /// Discards every insert of this transaction.
    async fn rollback(self: Box<Self>) -> Result<(), DestinationRepositoryError>;
}
