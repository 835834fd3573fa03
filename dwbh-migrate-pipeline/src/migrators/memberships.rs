use dwbh_migrate_repository::{DestinationTransaction, SourceRepository};
use dwbh_migrate_shared::types::{Group, LegacyMembership, Membership, User};
use tracing::{info, instrument};

use crate::errors::MigrationError;
use crate::identity::IdentityMap;

/// Relinks a `user_group` pair to the new group and user ids.
///
/// The member is an admin exactly when it owns the group.
pub fn transform_membership(
    row: &LegacyMembership,
    groups: &IdentityMap<Group>,
    users: &IdentityMap<User>,
) -> Result<Membership, MigrationError> {
    let describe = || format!("membership of user {} in group {}", row.user_id, row.group_id);
    let group = groups.resolve(row.group_id, describe)?;
    let user = users.resolve(row.user_id, describe)?;

    Ok(Membership {
        group_id: group.id,
        user_id: user.id,
        is_admin: row.user_id == group.owner_legacy_id,
    })
}

/// Migrates every `user_group` row.
///
/// Duplicate pairs in the source are written as duplicates.
#[instrument(skip_all)]
pub async fn migrate_memberships(
    source: &dyn SourceRepository,
    tx: &mut dyn DestinationTransaction,
    groups: &IdentityMap<Group>,
    users: &IdentityMap<User>,
) -> Result<Vec<Membership>, MigrationError> {
    let rows = source.fetch_memberships().await?;

    let memberships = rows
        .iter()
        .map(|row| transform_membership(row, groups, users))
        .collect::<Result<Vec<_>, _>>()?;

    tx.insert_memberships(&memberships).await?;
    info!(
        rows = memberships.len(),
        admins = memberships.iter().filter(|m| m.is_admin).count(),
        "Migrated memberships"
    );
    Ok(memberships)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use dwbh_migrate_shared::types::EntityKind;
    use uuid::Uuid;

    fn legacy_membership(group_id: i64, user_id: i64) -> LegacyMembership {
        LegacyMembership { group_id, user_id }
    }
    
    fn fixtures() -> (IdentityMap<Group>, IdentityMap<User>) {
        let mut users = IdentityMap::new(EntityKind::User);
        for legacy_id in [7, 8] {
            users
                .register(
                    legacy_id,
                    User {
                        legacy_id,
                        id: Uuid::new_v4(),
                        name: format!("User {legacy_id}"),
                        email: format!("{legacy_id}@x.com"),
                        password: "hash".to_string(),
                    },
                )
                .unwrap();
        }

        let mut groups = IdentityMap::new(EntityKind::Group);
        groups
            .register(
                3,
                Group {
                    legacy_id: 3,
                    id: Uuid::new_v4(),
                    name: "Team".to_string(),
                    visible_member_list: true,
                    anonymous_vote: false,
                    voting_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                    voting_days: vec![],
                    owner_legacy_id: 7,
                    owner_id: users.get(7).unwrap().id,
                },
            )
            .unwrap();

        (groups, users)
    }

    #[test]
    fn test_owner_is_admin() {
        let (groups, users) = fixtures();

        let membership = transform_membership(&legacy_membership(3, 7), &groups, &users).unwrap();

        assert!(membership.is_admin);
        assert_eq!(membership.group_id, groups.get(3).unwrap().id);
        assert_eq!(membership.user_id, users.get(7).unwrap().id);
    }

    #[test]
    fn test_regular_member_is_not_admin() {
        let (groups, users) = fixtures();

        let membership = transform_membership(&legacy_membership(3, 8), &groups, &users).unwrap();

        assert!(!membership.is_admin);
        assert_eq!(membership.user_id, users.get(8).unwrap().id);
    }

    #[test]
    fn test_unknown_group_is_fatal() {
        let (groups, users) = fixtures();

        let err = transform_membership(&legacy_membership(99, 7), &groups, &users).unwrap_err();

        assert!(matches!(
            err,
            MigrationError::UnresolvedReference {
                entity: EntityKind::Group,
                legacy_id: 99,
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_user_is_fatal() {
        let (groups, users) = fixtures();

        let err = transform_membership(&legacy_membership(3, 99), &groups, &users).unwrap_err();

        assert!(matches!(
            err,
            MigrationError::UnresolvedReference {
                entity: EntityKind::User,
                legacy_id: 99,
                ..
            }
        ));
    }
}
