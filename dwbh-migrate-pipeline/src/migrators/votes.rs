use chrono_tz::Tz;
use dwbh_migrate_repository::{DestinationTransaction, SourceRepository};
use dwbh_migrate_shared::types::{LegacyId, LegacyVote, User, Vote, Voting};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::MigrationError;
use crate::identity::IdentityMap;
use crate::timezone::localize;

/// Voter id v1 stores for a vote nobody can be linked to.
const NO_VOTER: LegacyId = 0;

/// Maps a v1 vote onto its v2 shape.
///
/// A vote without a voter (anonymous, or cast by a deleted user) stays
/// without one, as does a vote whose voter id is 0. A missing comment
/// becomes an empty string.
pub fn transform_vote(
    row: &LegacyVote,
    id: Uuid,
    votings: &IdentityMap<Voting>,
    users: &IdentityMap<User>,
    tz: &Tz,
) -> Result<Vote, MigrationError> {
    let describe = || format!("vote of voting {} cast at {}", row.votation_id, row.date);
    let voting = votings.resolve(row.votation_id, describe)?;
    let created_by = row
        .user_id
        .filter(|&user_id| user_id != NO_VOTER)
        .map(|user_id| users.resolve(user_id, describe).map(|user| user.id))
        .transpose()?;

    Ok(Vote {
        id,
        voting_id: voting.id,
        created_by,
        created_at: localize(tz, row.date),
        score: row.value,
        comment: row.comment.clone().unwrap_or_default(),
    })
}

/// Migrates every v1 vote.
#[instrument(skip_all, fields(timezone = %tz))]
pub async fn migrate_votes(
    source: &dyn SourceRepository,
    tx: &mut dyn DestinationTransaction,
    votings: &IdentityMap<Voting>,
    users: &IdentityMap<User>,
    tz: &Tz,
) -> Result<Vec<Vote>, MigrationError> {
    let rows = source.fetch_votes().await?;

    let votes = rows
        .iter()
        .map(|row| transform_vote(row, Uuid::new_v4(), votings, users, tz))
        .collect::<Result<Vec<_>, _>>()?;

    tx.insert_votes(&votes).await?;
    info!(
        rows = votes.len(),
        anonymous = votes.iter().filter(|v| v.created_by.is_none()).count(),
        "Migrated votes"
    );
    Ok(votes)
}
