//! Run-scoped identity maps from legacy ids to migrated records.
use std::collections::HashMap;

use dwbh_migrate_shared::types::{EntityKind, LegacyId};

use crate::errors::MigrationError;

/// Maps the legacy id of one entity type to its migrated record.
///
/// Records are kept in registration order so the map doubles as the batch
/// handed to the destination. A map is built by exactly one migrator and only
/// read by the migrators that run after it.
#[derive(Debug, Clone)]
pub struct IdentityMap<T> {
    entity: EntityKind,
    records: Vec<T>,
    index: HashMap<LegacyId, usize>,
}

impl<T> IdentityMap<T> {
    pub fn new(entity: EntityKind) -> Self {
        Self::with_capacity(entity, 0)
    }

    pub fn with_capacity(entity: EntityKind, capacity: usize) -> Self {
        Self {
            entity,
            records: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Registers the migrated record of `legacy_id`.
    ///
    /// A legacy id can only be registered once.
    pub fn register(&mut self, legacy_id: LegacyId, record: T) -> Result<(), MigrationError> {
        if self.index.contains_key(&legacy_id) {
            return Err(MigrationError::DuplicateLegacyId {
                entity: self.entity,
                legacy_id,
            });
        }
        self.index.insert(legacy_id, self.records.len());
        self.records.push(record);
        Ok(())
    }

    /// Looks up the migrated record of `legacy_id`.
    ///
    /// `referenced_by` describes the row holding the reference and is only
    /// evaluated when the lookup fails.
    pub fn resolve(
        &self,
        legacy_id: LegacyId,
        referenced_by: impl FnOnce() -> String,
    ) -> Result<&T, MigrationError> {
        self.get(legacy_id)
            .ok_or_else(|| MigrationError::UnresolvedReference {
                entity: self.entity,
                legacy_id,
                referenced_by: referenced_by(),
            })
    }

    pub fn get(&self, legacy_id: LegacyId) -> Option<&T> {
        self.index.get(&legacy_id).map(|position| &self.records[*position])
    }

    /// Records in registration order.
    pub fn records(&self) -> &[T] {
        &self.records
    }
}
