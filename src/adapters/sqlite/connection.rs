//! SQLite connection pool management for the engagement ledger.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

use crate::domain::models::DatabaseConfig;

/// Errors creating or preparing the ledger database.
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("Failed to create pool: {0}")]
    PoolCreationFailed(#[source] sqlx::Error),
    #[error("Invalid database URL: {0}")]
    InvalidDatabaseUrl(String),
    #[error("Failed to create directory: {0}")]
    DirectoryCreationFailed(#[source] std::io::Error),
    #[error("Schema setup failed: {0}")]
    SchemaFailed(#[source] sqlx::Error),
}

/// Pool sizing options.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: 5,
            acquire_timeout: Duration::from_secs(3),
        }
    }
}

/// Create the ledger pool, creating the database file and its parent
/// directory if missing.
pub async fn create_pool(
    database_url: &str,
    config: Option<PoolConfig>,
) -> Result<SqlitePool, ConnectionError> {
    let mut config = config.unwrap_or_default();
    // Each connection to an in-memory database gets its own empty
    // database, so the pool must stay at one connection there.
    if database_url.contains(":memory:") {
        config.max_connections = 1;
    }
    ensure_database_directory(database_url)?;

    let connect_options = SqliteConnectOptions::from_str(database_url)
        .map_err(|_| ConnectionError::InvalidDatabaseUrl(database_url.to_string()))?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .foreign_keys(true)
        .busy_timeout(Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_with(connect_options)
        .await
        .map_err(ConnectionError::PoolCreationFailed)?;

    Ok(pool)
}

/// Open the ledger database described by the configuration and prepare
/// its schema. The configured connection limit sizes the pool.
pub async fn open_ledger(config: &DatabaseConfig) -> Result<SqlitePool, ConnectionError> {
    let url = format!("sqlite://{}", config.path);
    let pool_config = PoolConfig {
        max_connections: config.max_connections,
        ..PoolConfig::default()
    };
    let pool = create_pool(&url, Some(pool_config)).await?;
    ensure_schema(&pool).await?;
    Ok(pool)
}

/// Create the ledger schema if it does not exist yet.
///
/// One row per (viewer, issue) pair; the primary key makes re-recording
/// an intent a no-op, which is what gives the ledger its monotone,
/// duplicate-tolerant growth.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), ConnectionError> {
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS upvote_ledger (
            viewer_id TEXT NOT NULL,
            issue_id TEXT NOT NULL,
            created_at TEXT NOT NULL,
            PRIMARY KEY (viewer_id, issue_id)
        )"#,
    )
    .execute(pool)
    .await
    .map_err(ConnectionError::SchemaFailed)?;

    Ok(())
}

fn ensure_database_directory(database_url: &str) -> Result<(), ConnectionError> {
    // In-memory databases have no backing file.
    let path = database_url.trim_start_matches("sqlite://").trim_start_matches("sqlite:");
    if path.is_empty() || path.starts_with(':') {
        return Ok(());
    }
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(ConnectionError::DirectoryCreationFailed)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_pool_and_schema() {
        let pool = create_pool("sqlite::memory:", None).await.unwrap();
        ensure_schema(&pool).await.unwrap();

        let row: (i64,) = sqlx::query_as(
            "SELECT count(*) FROM sqlite_master WHERE type='table' AND name='upvote_ledger'",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(row.0, 1);
    }

    #[tokio::test]
    async fn test_file_pool_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("nested/ledger.db");
        let url = format!("sqlite://{}", db_path.display());

        let pool = create_pool(&url, None).await.unwrap();
        ensure_schema(&pool).await.unwrap();
        assert!(db_path.exists());
    }

    #[tokio::test]
    async fn test_open_ledger_sizes_pool_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = DatabaseConfig {
            path: dir.path().join("ledger.db").display().to_string(),
            max_connections: 2,
        };

        let pool = open_ledger(&config).await.unwrap();
        assert_eq!(pool.options().get_max_connections(), 2);

        let row: (i64,) = sqlx::query_as(
            "SELECT count(*) FROM sqlite_master WHERE type='table' AND name='upvote_ledger'",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(row.0, 1);
    }

    #[tokio::test]
    async fn test_in_memory_pool_clamps_to_one_connection() {
        let pool = create_pool("sqlite::memory:", None).await.unwrap();
        assert_eq!(pool.options().get_max_connections(), 1);
    }
}
