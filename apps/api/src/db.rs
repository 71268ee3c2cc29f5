use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates a PostgreSQL pool without opening a connection yet.
///
/// Connections are established on first query, so an unreachable database
/// shows up as a failed profile load rather than a failed startup.
pub fn create_pool(database_url: &str) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(std::time::Duration::from_secs(5))
        .connect_lazy(database_url)?;

    info!("PostgreSQL pool configured (lazy connect)");
    Ok(pool)
}
