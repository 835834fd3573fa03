//! Records of the v2 schema produced by the migration.
//!
//! Records with a legacy counterpart keep its `legacy_id` so later migrators
//! can resolve references through the identity maps; the legacy id itself is
//! never written to the destination.
use bigdecimal::BigDecimal;
use chrono::{DateTime, FixedOffset, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{LegacyId, Weekday};

/// A row of `users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub legacy_id: LegacyId,
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// A row of `groups`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub legacy_id: LegacyId,
    pub id: Uuid,
    pub name: String,
    pub visible_member_list: bool,
    pub anonymous_vote: bool,
    pub voting_time: NaiveTime,
    pub voting_days: Vec<Weekday>,
    /// Legacy id of the owner, used for admin flags and session creators.
    pub owner_legacy_id: LegacyId,
    /// New id of the owner.
    pub owner_id: Uuid,
}

/// A row of `users_groups`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    pub group_id: Uuid,
    pub user_id: Uuid,
    pub is_admin: bool,
}

/// A row of `voting`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voting {
    pub legacy_id: LegacyId,
    pub id: Uuid,
    pub group_id: Uuid,
    pub created_at: DateTime<FixedOffset>,
    pub created_by: Uuid,
    pub average: Option<BigDecimal>,
}

/// A row of `vote`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    pub id: Uuid,
    pub voting_id: Uuid,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<FixedOffset>,
    pub score: i32,
    /// Never null in v2; a missing legacy comment becomes `""`.
    pub comment: String,
}
