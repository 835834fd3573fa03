//! Integration tests for the PostgreSQL v1 reader.
//!
//! These tests require a real PostgreSQL database and use SQLx test macros
//! to ensure proper test isolation and cleanup.
//!
//! The fixture schema uses 32-bit `SERIAL` ids, which the reader widens.
//!
//! Run with: `cargo test --test postgres_source`

use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use dwbh_migrate_repository::{PostgresSourceRepository, SourceRepository};
use dwbh_migrate_shared::types::{LegacyMembership, LegacyUser};

fn membership(group_id: i64, user_id: i64) -> LegacyMembership {
    LegacyMembership { group_id, user_id }
}

async fn seed_users(pool: &sqlx::PgPool) {
    sqlx::query(
        r#"
        INSERT INTO dwbh_user (id, username, full_name, password) VALUES
            (7, 'a@x.com', 'Ann', 'h1'),
            (2, 'b@x.com', 'Bob', 'h2')
        "#,
    )
    .execute(pool)
    .await
    .unwrap();
}

async fn seed_group(pool: &sqlx::PgPool) {
    sqlx::query(
        r#"
        INSERT INTO dwbh_group
            (id, name, visible_member_list, anonymous_vote, hour, owner_id, day1, day4)
        VALUES (3, 'Team', TRUE, FALSE, 9, 7, TRUE, TRUE)
        "#,
    )
    .execute(pool)
    .await
    .unwrap();
}

// ============================================================================
// Users and Groups
// ============================================================================

#[sqlx::test(migrations = "tests/migrations/source")]
async fn test_fetch_users_ordered_by_id(pool: sqlx::PgPool) {
    seed_users(&pool).await;
    let repository = PostgresSourceRepository::new(pool);

    let users = repository.fetch_users().await.unwrap();

    assert_eq!(
        users,
        vec![
            LegacyUser {
                id: 2,
                username: "b@x.com".to_string(),
                full_name: "Bob".to_string(),
                password: "h2".to_string(),
            },
            LegacyUser {
                id: 7,
                username: "a@x.com".to_string(),
                full_name: "Ann".to_string(),
                password: "h1".to_string(),
            },
        ]
    );
}

#[sqlx::test(migrations = "tests/migrations/source")]
async fn test_fetch_groups_reads_day_flags_in_order(pool: sqlx::PgPool) {
    seed_users(&pool).await;
    seed_group(&pool).await;
    let repository = PostgresSourceRepository::new(pool);

    let groups = repository.fetch_groups().await.unwrap();

    assert_eq!(groups.len(), 1);
    let group = &groups[0];
    assert_eq!(group.id, 3);
    assert_eq!(group.name, "Team");
    assert!(group.visible_member_list);
    assert!(!group.anonymous_vote);
    assert_eq!(group.hour, 9);
    assert_eq!(group.owner_id, 7);
    assert_eq!(group.days, [true, false, false, true, false, false, false]);
}

#[sqlx::test(migrations = "tests/migrations/source")]
async fn test_fetch_memberships_keeps_duplicates(pool: sqlx::PgPool) {
    seed_users(&pool).await;
    seed_group(&pool).await;
    sqlx::query("INSERT INTO user_group (group_id, user_id) VALUES (3, 7), (3, 2), (3, 2)")
        .execute(&pool)
        .await
        .unwrap();
    let repository = PostgresSourceRepository::new(pool);

    let memberships = repository.fetch_memberships().await.unwrap();

    assert_eq!(
        memberships,
        vec![
            membership(3, 2),
            membership(3, 2),
            membership(3, 7),
        ]
    );
}

// ============================================================================
// Votings and Votes
// ============================================================================

#[sqlx::test(migrations = "tests/migrations/source")]
async fn test_fetch_votings_with_and_without_average(pool: sqlx::PgPool) {
    seed_users(&pool).await;
    seed_group(&pool).await;
    sqlx::query(
        r#"
        INSERT INTO votation (id, group_id, date, average) VALUES
            (10, 3, '2019-03-04 09:00:00', 3.5),
            (11, 3, '2019-03-07 09:00:00', NULL)
        "#,
    )
    .execute(&pool)
    .await
    .unwrap();
    let repository = PostgresSourceRepository::new(pool);

    let votings = repository.fetch_votings().await.unwrap();

    assert_eq!(votings.len(), 2);
    assert_eq!(votings[0].id, 10);
    assert_eq!(votings[0].group_id, 3);
    assert_eq!(
        votings[0].date,
        NaiveDate::from_ymd_opt(2019, 3, 4)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    );
    assert_eq!(votings[0].average, Some(BigDecimal::from_str("3.5").unwrap()));
    assert_eq!(votings[1].average, None);
}

#[sqlx::test(migrations = "tests/migrations/source")]
async fn test_fetch_votings_keeps_full_float_precision(pool: sqlx::PgPool) {
    seed_users(&pool).await;
    seed_group(&pool).await;
    sqlx::query(
        r#"
        INSERT INTO votation (id, group_id, date, average)
        VALUES (10, 3, '2019-03-04 09:00:00', $1)
        "#,
    )
    .bind(10.0_f64 / 3.0)
    .execute(&pool)
    .await
    .unwrap();
    let repository = PostgresSourceRepository::new(pool);

    let votings = repository.fetch_votings().await.unwrap();

    assert_eq!(
        votings[0].average,
        Some(BigDecimal::from_str("3.3333333333333335").unwrap())
    );
}

#[sqlx::test(migrations = "tests/migrations/source")]
async fn test_fetch_votings_reads_numeric_average_exactly(pool: sqlx::PgPool) {
    seed_users(&pool).await;
    seed_group(&pool).await;
    sqlx::query("ALTER TABLE votation ALTER COLUMN average TYPE NUMERIC")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query(
        r#"
        INSERT INTO votation (id, group_id, date, average)
        VALUES (10, 3, '2019-03-04 09:00:00', 3.33333333333333333333)
        "#,
    )
    .execute(&pool)
    .await
    .unwrap();
    let repository = PostgresSourceRepository::new(pool);

    let votings = repository.fetch_votings().await.unwrap();

    assert_eq!(
        votings[0].average,
        Some(BigDecimal::from_str("3.33333333333333333333").unwrap())
    );
}

#[sqlx::test(migrations = "tests/migrations/source")]
async fn test_fetch_widens_integer_ids(pool: sqlx::PgPool) {
    seed_users(&pool).await;
    seed_group(&pool).await;
    sqlx::query("INSERT INTO user_group (group_id, user_id) VALUES (3, 7)")
        .execute(&pool)
        .await
        .unwrap();
    let repository = PostgresSourceRepository::new(pool);

    let users = repository.fetch_users().await.unwrap();
    let groups = repository.fetch_groups().await.unwrap();
    let memberships = repository.fetch_memberships().await.unwrap();

    assert_eq!(users.iter().map(|u| u.id).collect::<Vec<i64>>(), vec![2, 7]);
    assert_eq!(groups[0].owner_id, 7_i64);
    assert_eq!(memberships, vec![membership(3, 7)]);
}

#[sqlx::test(migrations = "tests/migrations/source")]
async fn test_fetch_votes_with_optional_voter_and_comment(pool: sqlx::PgPool) {
    seed_users(&pool).await;
    seed_group(&pool).await;
    sqlx::query("INSERT INTO votation (id, group_id, date) VALUES (10, 3, '2019-03-04 09:00:00')")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query(
        r#"
        INSERT INTO vote (votation_id, user_id, date, value, comment) VALUES
            (10, 7,    '2019-03-04 09:05:00', 4, 'fine'),
            (10, NULL, '2019-03-04 09:10:00', 2, NULL)
        "#,
    )
    .execute(&pool)
    .await
    .unwrap();
    let repository = PostgresSourceRepository::new(pool);

    let votes = repository.fetch_votes().await.unwrap();

    assert_eq!(votes.len(), 2);
    assert_eq!(votes[0].user_id, Some(7));
    assert_eq!(votes[0].value, 4);
    assert_eq!(votes[0].comment.as_deref(), Some("fine"));
    assert_eq!(votes[1].user_id, None);
    assert_eq!(votes[1].comment, None);
}

#[sqlx::test(migrations = "tests/migrations/source")]
async fn test_fetch_from_empty_tables(pool: sqlx::PgPool) {
    let repository = PostgresSourceRepository::new(pool);

    assert!(repository.fetch_users().await.unwrap().is_empty());
    assert!(repository.fetch_groups().await.unwrap().is_empty());
    assert!(repository.fetch_memberships().await.unwrap().is_empty());
    assert!(repository.fetch_votings().await.unwrap().is_empty());
    assert!(repository.fetch_votes().await.unwrap().is_empty());
}
