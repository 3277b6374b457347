//! SQLite connection pool and schema migrations

use std::{path::Path, str::FromStr, time::Duration};

use sqlx::{
    migrate::Migrator,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions},
};

use crate::config::DatabaseConfig;

/// Embedded schema and seed migrations
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Path value that selects a private in-memory database
pub const IN_MEMORY: &str = ":memory:";

/// Open the connection pool described by `config`.
///
/// An in-memory database lives only as long as its connection, so it gets a
/// single connection that is never recycled.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    if config.path == IN_MEMORY {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
        return SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await;
    }

    if let Some(parent) = Path::new(&config.path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let options = SqliteConnectOptions::new()
        .filename(&config.path)
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5));

    SqlitePoolOptions::new()
        .max_connections(config.max_connections.max(1))
        .acquire_timeout(Duration::from_secs(30))
        .connect_with(options)
        .await
}

/// Connect and bring the schema up to date
pub async fn init(config: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    let pool = connect(config).await?;
    tracing::info!(path = %config.path, "Running database migrations...");
    MIGRATOR.run(&pool).await?;
    tracing::info!("Migrations completed");
    Ok(pool)
}
