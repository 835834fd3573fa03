//! dwbh v1 to v2 migration entry point.
//!
//! Reads the legacy database, rewrites every row for the v2 schema and inserts
//! it into the destination inside a single transaction.

use dotenv::dotenv;
use dwbh_migrate::{AppError, Dependencies, MigrationConfig};
use std::env;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing/logging.
fn init_tracing() -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("dwbh_migrate=info,dwbh_migrate_pipeline=info,dwbh_migrate_repository=info")
    });

    let json = env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json"));

    let result = if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .try_init()
    };

    result.map_err(|e| AppError::config(format!("Failed to initialize tracing: {e}")))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), AppError> {
    // Load environment variables from .env file
    dotenv().ok();

    init_tracing()?;

    let config = MigrationConfig::from_env().inspect_err(|e| {
        error!(error = %e, "Invalid configuration");
    })?;

    info!(
        service_version = env!("CARGO_PKG_VERSION"),
        config = ?config,
        "Starting dwbh-1to2"
    );

    let dependencies = match Dependencies::new(&config).await {
        Ok(dependencies) => dependencies,
        Err(e) => {
            error!(error = %e, "Failed to connect");
            return Err(e);
        }
    };

    match dependencies.orchestrator.run().await {
        Ok(report) if report.committed => {
            info!(total_rows = report.total_rows(), "Migration committed");
            Ok(())
        }
        Ok(report) => {
            info!(total_rows = report.total_rows(), "Dry run finished, nothing was written");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Migration failed, destination left untouched");
            Err(e.into())
        }
    }
}
