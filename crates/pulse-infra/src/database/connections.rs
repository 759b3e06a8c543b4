use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

/// Configuration for the database pool.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Initialize the connection pool from configuration.
///
/// The pool is opened lazily: connections are only established when the
/// first statement runs, so the API can boot while the database is down
/// and report it through the health probe instead of refusing to start.
pub async fn connect(config: &DatabaseConfig) -> Result<DbConn, DbErr> {
    tracing::info!("Initializing database connection pool...");

    let opts = ConnectOptions::new(&config.url)
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(true)
        .connect_lazy(true)
        .to_owned();

    let db = Database::connect(opts).await?;
    tracing::info!("Database pool ready (max: {})", config.max_connections);

    Ok(db)
}
