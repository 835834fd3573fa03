use chrono_tz::Tz;
use dwbh_migrate_repository::{DestinationTransaction, SourceRepository};
use dwbh_migrate_shared::types::{EntityKind, Group, LegacyVoting, User, Voting};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::errors::MigrationError;
use crate::identity::IdentityMap;
use crate::timezone::localize;

/// Maps a v1 `votation` onto a v2 voting session.
///
/// v1 does not store who opened a session; it is always the group owner, so
/// the creator is resolved through the owner recorded on the migrated group.
pub fn transform_voting(
    row: &LegacyVoting,
    id: Uuid,
    groups: &IdentityMap<Group>,
    users: &IdentityMap<User>,
    tz: &Tz,
) -> Result<Voting, MigrationError> {
    let group = groups.resolve(row.group_id, || format!("voting {}", row.id))?;
    let creator = users.resolve(group.owner_legacy_id, || {
        format!("voting {} as owner of group {}", row.id, row.group_id)
    })?;

    Ok(Voting {
        legacy_id: row.id,
        id,
        group_id: group.id,
        created_at: localize(tz, row.date),
        created_by: creator.id,
        average: row.average.clone(),
    })
}

/// Migrates every v1 `votation` row and returns the Voting identity map.
#[instrument(skip_all, fields(timezone = %tz))]
pub async fn migrate_votings(
    source: &dyn SourceRepository,
    tx: &mut dyn DestinationTransaction,
    groups: &IdentityMap<Group>,
    users: &IdentityMap<User>,
    tz: &Tz,
) -> Result<IdentityMap<Voting>, MigrationError> {
    let rows = source.fetch_votings().await?;
    let mut votings = IdentityMap::with_capacity(EntityKind::Voting, rows.len());

    for row in &rows {
        let voting = transform_voting(row, Uuid::new_v4(), groups, users, tz)?;
        debug!(
            legacy_id = row.id,
            id = %voting.id,
            created_at = %voting.created_at,
            "Mapped voting"
        );
        votings.register(row.id, voting)?;
    }

    tx.insert_votings(votings.records()).await?;
    info!(rows = votings.records().len(), "Migrated votings");
    Ok(votings)
}
