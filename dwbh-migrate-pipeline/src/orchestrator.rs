//! This module defines the `Orchestrator` responsible for running the entity
//! migrators in dependency order inside one destination transaction.
//!
//! Either every destination table ends up populated from the source snapshot,
//! or the transaction is rolled back and none of them are touched.
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono_tz::Tz;
use dwbh_migrate_repository::{DestinationRepository, DestinationTransaction, SourceRepository};
use dwbh_migrate_shared::types::MigrationReport;
use tracing::{error, info, instrument, warn};

use crate::errors::{MigrationError, OrchestratorError};
use crate::migrators::{
    migrate_groups, migrate_memberships, migrate_users, migrate_votes, migrate_votings,
};
use crate::timezone::DEFAULT_TIMEZONE;

/// Configuration for the orchestrator.
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    /// Zone the naive v1 timestamps are interpreted in.
    pub timezone: Tz,
    /// Run every migrator, then roll back instead of committing.
    pub dry_run: bool,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE,
            dry_run: false,
        }
    }
}

/// Runs the five entity migrators against a source and a destination.
pub struct Orchestrator {
    source: Arc<dyn SourceRepository>,
    destination: Arc<dyn DestinationRepository>,
    config: OrchestratorConfig,
}

impl Orchestrator {
    /// Creates a new orchestrator with the default configuration.
    pub fn new(
        source: Arc<dyn SourceRepository>,
        destination: Arc<dyn DestinationRepository>,
    ) -> Self {
        Self::with_config(source, destination, OrchestratorConfig::default())
    }

    /// Creates a new orchestrator with a custom configuration.
    pub fn with_config(
        source: Arc<dyn SourceRepository>,
        destination: Arc<dyn DestinationRepository>,
        config: OrchestratorConfig,
    ) -> Self {
        Self {
            source,
            destination,
            config,
        }
    }

    /// Runs the migration.
    ///
    /// Opens the destination transaction, runs users, groups, memberships,
    /// votings and votes in that order, and commits. Any migrator failure
    /// rolls the whole transaction back and is returned as
    /// `OrchestratorError::Migration`.
    ///
    /// # Returns
    ///
    /// * `Ok(MigrationReport)` - Row counts per entity; `committed` is `false` for dry runs
    /// * `Err(OrchestratorError)` - The migration was aborted or the transaction failed
    #[instrument(
        skip(self),
        fields(timezone = %self.config.timezone, dry_run = self.config.dry_run)
    )]
    pub async fn run(&self) -> Result<MigrationReport, OrchestratorError> {
        let started = Instant::now();
        info!("Starting dwbh v1 to v2 migration");

        let mut tx = self.destination.begin().await?;

        let mut report = match self.migrate(tx.as_mut()).await {
            Ok(report) => report,
            Err(e) => {
                error!(error = %e, "Migration failed, rolling back destination transaction");
                if let Err(rollback_error) = tx.rollback().await {
                    // Dropping the connection rolls the transaction back server side.
                    error!(error = %rollback_error, "Explicit rollback failed");
                }
                return Err(e.into());
            }
        };

        if self.config.dry_run {
            tx.rollback().await?;
            warn!("Dry run: destination transaction rolled back");
        } else {
            tx.commit().await?;
            report.committed = true;
        }
        report.elapsed = started.elapsed();

        info!(
            users = report.users,
            groups = report.groups,
            memberships = report.memberships,
            votings = report.votings,
            votes = report.votes,
            total_rows = report.total_rows(),
            committed = report.committed,
            elapsed_secs = report.elapsed.as_secs_f64(),
            "Migration complete"
        );
        Ok(report)
    }

    async fn migrate(
        &self,
        tx: &mut dyn DestinationTransaction,
    ) -> Result<MigrationReport, MigrationError> {
        let source = self.source.as_ref();
        let tz = &self.config.timezone;

        let users = migrate_users(source, tx).await?;
        let groups = migrate_groups(source, tx, &users).await?;
        let memberships = migrate_memberships(source, tx, &groups, &users).await?;
        let votings = migrate_votings(source, tx, &groups, &users, tz).await?;
        let votes = migrate_votes(source, tx, &votings, &users, tz).await?;

        Ok(MigrationReport {
            users: users.records().len(),
            groups: groups.records().len(),
            memberships: memberships.len(),
            votings: votings.records().len(),
            votes: votes.len(),
            committed: false,
            elapsed: Duration::ZERO,
        })
    }
}
