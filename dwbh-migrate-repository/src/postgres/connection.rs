//! PostgreSQL connection setup for both ends of the migration.
use sqlx::postgres::PgPoolOptions;
use sqlx::{Executor, PgPool};

/// The migration runs sequentially, one connection per database is enough.
const MAX_CONNECTIONS: u32 = 1;

/// Connects to the v1 database.
///
/// Every session is switched to read-only so no statement issued through this
/// pool can modify the source snapshot.
pub async fn connect_source(url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .after_connect(|conn, _meta| {
            Box::pin(async move {
                conn.execute("SET default_transaction_read_only = on").await?;
                Ok(())
            })
        })
        .connect(url)
        .await
}

/// Connects to the v2 database.
pub async fn connect_destination(url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect(url)
        .await
}
