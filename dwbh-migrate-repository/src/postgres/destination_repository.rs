//! PostgreSQL writer for the v2 schema.
//!
//! All inserts go through one `sqlx::Transaction`. Rows are written with
//! multi-row `INSERT ... VALUES` statements built by `QueryBuilder`, chunked so
//! a single statement never exceeds PostgreSQL's bind-parameter limit.
use async_trait::async_trait;
use dwbh_migrate_shared::types::{EntityKind, Group, Membership, User, Vote, Voting};
use sqlx::{Postgres, QueryBuilder, Transaction};

use crate::{DestinationRepository, DestinationRepositoryError, DestinationTransaction};

/// Rows per `INSERT` statement unless configured otherwise.
pub const DEFAULT_INSERT_BATCH_SIZE: usize = 1000;

/// PostgreSQL implementation of the destination repository.
pub struct PostgresDestinationRepository {
    pool: sqlx::PgPool,
    batch_size: usize,
}

impl PostgresDestinationRepository {
    /// Creates a new destination repository instance.
    ///
    /// # Arguments
    ///
    /// * `pool` - Connected pool whose database already holds the v2 schema
    /// * `batch_size` - Rows per multi-row insert, at least 1
    pub fn new(pool: sqlx::PgPool, batch_size: usize) -> Self {
        Self {
            pool,
            batch_size: batch_size.max(1),
        }
    }
}

#[async_trait]
impl DestinationRepository for PostgresDestinationRepository {
    async fn begin(&self) -> Result<Box<dyn DestinationTransaction>, DestinationRepositoryError> {
        let tx = self
            .pool
            .begin()
            .await
            .map_err(DestinationRepositoryError::Begin)?;

        Ok(Box::new(PostgresDestinationTransaction {
            tx,
            batch_size: self.batch_size,
        }))
    }
}

/// The open transaction every migrated row is written through.
pub struct PostgresDestinationTransaction {
    tx: Transaction<'static, Postgres>,
    batch_size: usize,
}

#[async_trait]
impl DestinationTransaction for PostgresDestinationTransaction {
    async fn insert_users(&mut self, users: &[User]) -> Result<(), DestinationRepositoryError> {
        for chunk in users.chunks(self.batch_size) {
            let mut query_builder =
                QueryBuilder::<Postgres>::new("INSERT INTO users (id, name, email, password) ");

            query_builder.push_values(chunk, |mut b, user| {
                b.push_bind(user.id)
                    .push_bind(&user.name)
                    .push_bind(&user.email)
                    .push_bind(&user.password);
            });

            query_builder
                .build()
                .execute(&mut *self.tx)
                .await
                .map_err(DestinationRepositoryError::insert(EntityKind::User))?;
        }
        Ok(())
    }

    async fn insert_groups(&mut self, groups: &[Group]) -> Result<(), DestinationRepositoryError> {
        for chunk in groups.chunks(self.batch_size) {
            let mut query_builder = QueryBuilder::<Postgres>::new(
                "INSERT INTO groups \
                 (id, name, visible_member_list, anonymous_vote, voting_time, voting_days) ",
            );

            query_builder.push_values(chunk, |mut b, group| {
                let voting_days: Vec<String> = group
                    .voting_days
                    .iter()
                    .map(|day| day.as_str().to_string())
                    .collect();

                b.push_bind(group.id)
                    .push_bind(&group.name)
                    .push_bind(group.visible_member_list)
                    .push_bind(group.anonymous_vote)
                    .push_bind(group.voting_time)
                    .push_bind(voting_days);
            });

            query_builder
                .build()
                .execute(&mut *self.tx)
                .await
                .map_err(DestinationRepositoryError::insert(EntityKind::Group))?;
        }
        Ok(())
    }

    async fn insert_memberships(
        &mut self,
        memberships: &[Membership],
    ) -> Result<(), DestinationRepositoryError> {
        for chunk in memberships.chunks(self.batch_size) {
            let mut query_builder = QueryBuilder::<Postgres>::new(
                "INSERT INTO users_groups (group_id, user_id, is_admin) ",
            );

            query_builder.push_values(chunk, |mut b, membership| {
                b.push_bind(membership.group_id)
                    .push_bind(membership.user_id)
                    .push_bind(membership.is_admin);
            });

            query_builder
                .build()
                .execute(&mut *self.tx)
                .await
                .map_err(DestinationRepositoryError::insert(EntityKind::Membership))?;
        }
        Ok(())
    }

    async fn insert_votings(
        &mut self,
        votings: &[Voting],
    ) -> Result<(), DestinationRepositoryError> {
        for chunk in votings.chunks(self.batch_size) {
            let mut query_builder = QueryBuilder::<Postgres>::new(
                "INSERT INTO voting (id, group_id, created_at, created_by, average) ",
            );

            query_builder.push_values(chunk, |mut b, voting| {
                b.push_bind(voting.id)
                    .push_bind(voting.group_id)
                    .push_bind(voting.created_at)
                    .push_bind(voting.created_by)
                    .push_bind(&voting.average);
            });

            query_builder
                .build()
                .execute(&mut *self.tx)
                .await
                .map_err(DestinationRepositoryError::insert(EntityKind::Voting))?;
        }
        Ok(())
    }

    async fn insert_votes(&mut self, votes: &[Vote]) -> Result<(), DestinationRepositoryError> {
        for chunk in votes.chunks(self.batch_size) {
            let mut query_builder = QueryBuilder::<Postgres>::new(
                "INSERT INTO vote (id, voting_id, created_by, created_at, score, comment) ",
            );

            query_builder.push_values(chunk, |mut b, vote| {
                b.push_bind(vote.id)
                    .push_bind(vote.voting_id)
                    .push_bind(vote.created_by)
                    .push_bind(vote.created_at)
                    .push_bind(vote.score)
                    .push_bind(&vote.comment);
            });

            query_builder
                .build()
                .execute(&mut *self.tx)
                .await
                .map_err(DestinationRepositoryError::insert(EntityKind::Vote))?;
        }
        Ok(())
    }

    async fn commit(self: Box<Self>) -> Result<(), DestinationRepositoryError> {
        self.tx
            .commit()
            .await
            .map_err(DestinationRepositoryError::Commit)
    }

    async fn rollback(self: Box<Self>) -> Result<(), DestinationRepositoryError> {
        self.tx
            .rollback()
            .await
            .map_err(DestinationRepositoryError::Rollback)
    }
}
