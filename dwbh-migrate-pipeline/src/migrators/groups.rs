use chrono::NaiveTime;
use dwbh_migrate_repository::{DestinationTransaction, SourceRepository};
use dwbh_migrate_shared::types::{EntityKind, Group, LegacyGroup, User, Weekday};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::errors::MigrationError;
use crate::identity::IdentityMap;

/// Maps a v1 group onto its v2 shape.
///
/// The packed `hour` becomes `hour:00:00` and the `day1..day7` flags become
/// the ordered list of enabled weekdays. The owner must already be migrated.
pub fn transform_group(
    row: &LegacyGroup,
    id: Uuid,
    users: &IdentityMap<User>,
) -> Result<Group, MigrationError> {
    let owner = users.resolve(row.owner_id, || format!("owner of group {}", row.id))?;

    let voting_time = u32::try_from(row.hour)
        .ok()
        .and_then(|hour| NaiveTime::from_hms_opt(hour, 0, 0))
        .ok_or(MigrationError::InvalidVotingHour {
            group_id: row.id,
            hour: row.hour,
        })?;

    Ok(Group {
        legacy_id: row.id,
        id,
        name: row.name.clone(),
        visible_member_list: row.visible_member_list,
        anonymous_vote: row.anonymous_vote,
        voting_time,
        voting_days: Weekday::from_flags(&row.days),
        owner_legacy_id: row.owner_id,
        owner_id: owner.id,
    })
}

/// Migrates every v1 group and returns the Group identity map.
#[instrument(skip_all)]
pub async fn migrate_groups(
    source: &dyn SourceRepository,
    tx: &mut dyn DestinationTransaction,
    users: &IdentityMap<User>,
) -> Result<IdentityMap<Group>, MigrationError> {
    let rows = source.fetch_groups().await?;
    let mut groups = IdentityMap::with_capacity(EntityKind::Group, rows.len());

    for row in &rows {
        let group = transform_group(row, Uuid::new_v4(), users)?;
        debug!(
            legacy_id = row.id,
            id = %group.id,
            voting_time = %group.voting_time,
            voting_days = ?group.voting_days,
            "Mapped group"
        );
        groups.register(row.id, group)?;
    }

    tx.insert_groups(groups.records()).await?;
    info!(rows = groups.records().len(), "Migrated groups");
    Ok(groups)
}
