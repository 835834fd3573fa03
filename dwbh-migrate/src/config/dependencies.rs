use std::sync::Arc;

use dwbh_migrate_pipeline::Orchestrator;
use dwbh_migrate_repository::postgres::{connect_destination, connect_source};
use dwbh_migrate_repository::{PostgresDestinationRepository, PostgresSourceRepository};
use tracing::info;

use crate::config::{MigrationConfig, redact_url};
use crate::errors::AppError;

/// `Dependencies` holds the components of a migration run, connected and
/// ready to use.
pub struct Dependencies {
    pub orchestrator: Orchestrator,
}

impl Dependencies {
    /// Connects to both databases and builds the orchestrator.
    ///
    /// Both connections are established before any migration work starts, so
    /// an unreachable database stops the run with nothing written.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Both databases reachable
    /// * `Err(AppError::Connection)` - Naming the database that could not be reached
    pub async fn new(config: &MigrationConfig) -> Result<Self, AppError> {
        let source_pool = connect_source(&config.source_url)
            .await
            .map_err(|source| AppError::Connection {
                database: "source",
                source,
            })?;
        info!(url = %redact_url(&config.source_url), "Connected to source database");

        let destination_pool = connect_destination(&config.destination_url)
            .await
            .map_err(|source| AppError::Connection {
                database: "destination",
                source,
            })?;
        info!(url = %redact_url(&config.destination_url), "Connected to destination database");

        let source = PostgresSourceRepository::new(source_pool);
        let destination = PostgresDestinationRepository::new(destination_pool, config.batch_size);

        let orchestrator = Orchestrator::with_config(
            Arc::new(source),
            Arc::new(destination),
            config.orchestrator_config(),
        );

        Ok(Self { orchestrator })
    }
}
