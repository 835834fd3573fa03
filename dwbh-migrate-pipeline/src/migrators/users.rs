use dwbh_migrate_repository::{DestinationTransaction, SourceRepository};
use dwbh_migrate_shared::types::{EntityKind, LegacyUser, User};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::errors::MigrationError;
use crate::identity::IdentityMap;

/// Maps a v1 user onto its v2 shape.
///
/// The username becomes the email and the password hash is copied verbatim;
/// both schemas share the same hashing scheme.
pub fn transform_user(row: &LegacyUser, id: Uuid) -> User {
    User {
        legacy_id: row.id,
        id,
        name: row.full_name.clone(),
        email: row.username.clone(),
        password: row.password.clone(),
    }
}

/// Migrates every v1 user and returns the User identity map.
#[instrument(skip_all)]
pub async fn migrate_users(
    source: &dyn SourceRepository,
    tx: &mut dyn DestinationTransaction,
) -> Result<IdentityMap<User>, MigrationError> {
    let rows = source.fetch_users().await?;
    let mut users = IdentityMap::with_capacity(EntityKind::User, rows.len());

    for row in &rows {
        let user = transform_user(row, Uuid::new_v4());
        debug!(legacy_id = row.id, id = %user.id, "Mapped user");
        users.register(row.id, user)?;
    }

    tx.insert_users(users.records()).await?;
    info!(rows = users.records().len(), "Migrated users");
    Ok(users)
}
