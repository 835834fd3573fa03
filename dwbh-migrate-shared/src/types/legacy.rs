//! Row shapes of the v1 schema, exactly as read from the source database.
use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Identifier assigned by the v1 schema. Only meaningful for cross-referencing
/// rows while the migration runs.
pub type LegacyId = i64;

/// A row of `dwbh_user`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyUser {
    pub id: LegacyId,
    pub username: String,
    pub full_name: String,
    /// Password hash, opaque to the migration.
    pub password: String,
}

/// A row of `dwbh_group`.
///
/// `days` holds the `day1..day7` columns, Monday first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyGroup {
    pub id: LegacyId,
    pub name: String,
    pub visible_member_list: bool,
    pub anonymous_vote: bool,
    pub hour: i32,
    pub owner_id: LegacyId,
    pub days: [bool; 7],
}

/// A row of the `user_group` junction table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyMembership {
    pub group_id: LegacyId,
    pub user_id: LegacyId,
}

/// A row of `votation`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacyVoting {
    pub id: LegacyId,
    pub group_id: LegacyId,
    /// Wall-clock time without zone information.
    pub date: NaiveDateTime,
    /// Exact decimal; v1 floats are carried at full precision.
    pub average: Option<BigDecimal>,
}

/// A row of `vote`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyVote {
    pub votation_id: LegacyId,
    /// Absent for anonymous votes and votes of deleted users.
    pub user_id: Option<LegacyId>,
    pub date: NaiveDateTime,
    pub value: i32,
    pub comment: Option<String>,
}
