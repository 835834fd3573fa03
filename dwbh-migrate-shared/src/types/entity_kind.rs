use serde::{Deserialize, Serialize};
use std::fmt;

/// The five entity types moved by the migration, in dependency order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    User,
    Group,
    Membership,
    Voting,
    Vote,
}

impl EntityKind {
    /// All entity kinds in the order they must be migrated.
    pub const MIGRATION_ORDER: [EntityKind; 5] = [
        EntityKind::User,
        EntityKind::Group,
        EntityKind::Membership,
        EntityKind::Voting,
        EntityKind::Vote,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::User => "user",
            EntityKind::Group => "group",
            EntityKind::Membership => "membership",
            EntityKind::Voting => "voting",
            EntityKind::Vote => "vote",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
