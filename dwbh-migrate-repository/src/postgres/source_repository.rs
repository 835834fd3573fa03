//! PostgreSQL reader for the v1 schema.
//!
//! Rows are read in primary-key order so two runs over the same snapshot
//! process rows identically. Id columns are cast to `int8` and `average` is
//! read as text, so `INTEGER` ids and both `NUMERIC` and `DOUBLE PRECISION`
//! averages decode without loss.
use std::str::FromStr;

use async_trait::async_trait;
use dwbh_migrate_shared::types::{
    EntityKind, LegacyGroup, LegacyMembership, LegacyUser, LegacyVote, LegacyVoting,
};
use sqlx::postgres::PgRow;
use sqlx::types::BigDecimal;
use sqlx::Row;

use crate::{SourceRepository, SourceRepositoryError};

/// Reads the five v1 tables from a PostgreSQL pool.
pub struct PostgresSourceRepository {
    pool: sqlx::PgPool,
}

impl PostgresSourceRepository {
    /// Creates a new source repository over an already connected pool.
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }

    async fn fetch<T: Send>(
        &self,
        entity: EntityKind,
        sql: &'static str,
        map: fn(&PgRow) -> Result<T, sqlx::Error>,
    ) -> Result<Vec<T>, SourceRepositoryError> {
        let rows = sqlx::query(sql)
            .fetch_all(&self.pool)
            .await
            .map_err(SourceRepositoryError::query(entity))?;

        let records = rows
            .iter()
            .map(map)
            .collect::<Result<Vec<T>, _>>()
            .map_err(SourceRepositoryError::query(entity))?;

        tracing::debug!(entity = %entity, rows = records.len(), "Read source rows");
        Ok(records)
    }
}

fn user_from_row(row: &PgRow) -> Result<LegacyUser, sqlx::Error> {
    Ok(LegacyUser {
        id: row.try_get("id")?,
        username: row.try_get("username")?,
        full_name: row.try_get("full_name")?,
        password: row.try_get("password")?,
    })
}

fn group_from_row(row: &PgRow) -> Result<LegacyGroup, sqlx::Error> {
    Ok(LegacyGroup {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        visible_member_list: row.try_get("visible_member_list")?,
        anonymous_vote: row.try_get("anonymous_vote")?,
        hour: row.try_get("hour")?,
        owner_id: row.try_get("owner_id")?,
        days: [
            row.try_get("day1")?,
            row.try_get("day2")?,
            row.try_get("day3")?,
            row.try_get("day4")?,
            row.try_get("day5")?,
            row.try_get("day6")?,
            row.try_get("day7")?,
        ],
    })
}

fn membership_from_row(row: &PgRow) -> Result<LegacyMembership, sqlx::Error> {
    Ok(LegacyMembership {
        group_id: row.try_get("group_id")?,
        user_id: row.try_get("user_id")?,
    })
}

fn voting_from_row(row: &PgRow) -> Result<LegacyVoting, sqlx::Error> {
    Ok(LegacyVoting {
        id: row.try_get("id")?,
        group_id: row.try_get("group_id")?,
        date: row.try_get("date")?,
        average: decimal_from_text(row, "average")?,
    })
}

fn decimal_from_text(row: &PgRow, column: &str) -> Result<Option<BigDecimal>, sqlx::Error> {
    let Some(text) = row.try_get::<Option<String>, _>(column)? else {
        return Ok(None);
    };
    BigDecimal::from_str(&text)
        .map(Some)
        .map_err(|e| sqlx::Error::ColumnDecode {
            index: column.to_string(),
            source: Box::new(e),
        })
}

fn vote_from_row(row: &PgRow) -> Result<LegacyVote, sqlx::Error> {
    Ok(LegacyVote {
        votation_id: row.try_get("votation_id")?,
        user_id: row.try_get("user_id")?,
        date: row.try_get("date")?,
        value: row.try_get("value")?,
        comment: row.try_get("comment")?,
    })
}

#[async_trait]
impl SourceRepository for PostgresSourceRepository {
    async fn fetch_users(&self) -> Result<Vec<LegacyUser>, SourceRepositoryError> {
        self.fetch(
            EntityKind::User,
            "SELECT id::int8 AS id, username, full_name, password FROM dwbh_user ORDER BY id",
            user_from_row,
        )
        .await
    }

    async fn fetch_groups(&self) -> Result<Vec<LegacyGroup>, SourceRepositoryError> {
        self.fetch(
            EntityKind::Group,
            r#"
            SELECT id::int8 AS id, name, visible_member_list, anonymous_vote,
                   hour::int4 AS hour, owner_id::int8 AS owner_id,
                   day1, day2, day3, day4, day5, day6, day7
              FROM dwbh_group
             ORDER BY id
            "#,
            group_from_row,
        )
        .await
    }

    async fn fetch_memberships(&self) -> Result<Vec<LegacyMembership>, SourceRepositoryError> {
        self.fetch(
            EntityKind::Membership,
            r#"
            SELECT group_id::int8 AS group_id, user_id::int8 AS user_id
              FROM user_group
             ORDER BY group_id, user_id
            "#,
            membership_from_row,
        )
        .await
    }

    async fn fetch_votings(&self) -> Result<Vec<LegacyVoting>, SourceRepositoryError> {
        self.fetch(
            EntityKind::Voting,
            r#"
            SELECT id::int8 AS id, group_id::int8 AS group_id, date, average::text AS average
              FROM votation
             ORDER BY id
            "#,
            voting_from_row,
        )
        .await
    }

    async fn fetch_votes(&self) -> Result<Vec<LegacyVote>, SourceRepositoryError> {
        self.fetch(
            EntityKind::Vote,
            r#"
            SELECT votation_id::int8 AS votation_id, user_id::int8 AS user_id, date,
                   value::int4 AS value, comment
              FROM vote
             ORDER BY votation_id, date
            "#,
            vote_from_row,
        )
        .await
    }
}
