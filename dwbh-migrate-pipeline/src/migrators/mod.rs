//! The five entity migrators, one module per v1 table.
//!
//! Each migrator reads every row of its source table, transforms all of them
//! before writing anything (so an unresolvable reference fails before the
//! first insert of that entity), inserts the batch through the open
//! destination transaction, and hands back what later migrators need.
//!
//! Dependency order: users, groups, memberships, votings, votes.
mod groups;
mod memberships;
mod users;
mod votes;
mod votings;

pub use groups::{migrate_groups, transform_group};
pub use memberships::{migrate_memberships, transform_membership};
pub use users::{migrate_users, transform_user};
pub use votes::{migrate_votes, transform_vote};
pub use votings::{migrate_votings, transform_voting};
