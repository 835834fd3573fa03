mod entity_kind;
mod legacy;
mod migrated;
mod report;
mod weekday;

pub use entity_kind::EntityKind;
pub use legacy::{LegacyGroup, LegacyId, LegacyMembership, LegacyUser, LegacyVote, LegacyVoting};
pub use migrated::{Group, Membership, User, Vote, Voting};
pub use report::MigrationReport;
pub use weekday::Weekday;
