use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::types::EntityKind;

/// Summary of a migration run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MigrationReport {
    pub users: usize,
    pub groups: usize,
    pub memberships: usize,
    pub votings: usize,
    pub votes: usize,
    /// `false` for dry runs, whose transaction is rolled back.
    pub committed: bool,
    pub elapsed: Duration,
}

impl MigrationReport {
    pub fn count(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::User => self.users,
            EntityKind::Group => self.groups,
            EntityKind::Membership => self.memberships,
            EntityKind::Voting => self.votings,
            EntityKind::Vote => self.votes,
        }
    }

    /// Total number of destination rows written.
    pub fn total_rows(&self) -> usize {
        EntityKind::MIGRATION_ORDER
            .iter()
            .map(|kind| self.count(*kind))
            .sum()
    }
}
