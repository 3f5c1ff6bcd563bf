//! Database Module
//!
//! Handles the SQLite connection pool and the embedded schema migrations

pub mod models;
pub mod repository;

#[doc(hidden)]
pub mod fixtures;

use crate::server::Config;
use crate::utils::{AppError, AppResult};
use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::str::FromStr;
use std::time::Duration;

/// Schema migrations under `migrations/`, embedded at compile time
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Database service — owns a SQLite connection pool
#[derive(Clone)]
pub struct DbService {
    pub pool: SqlitePool,
}

impl DbService {
    /// Open (or create) the database file named by `config.database_url`
    pub async fn new(config: &Config) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(&config.database_url)
            .map_err(|e| AppError::Database(format!("Invalid database url: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .foreign_keys(true)
            // 写冲突时等待 5s 而非立即失败
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(config.db_max_connections)
            .connect_with(options)
            .await
            .map_err(|e| AppError::Database(format!("Failed to open database: {e}")))?;

        tracing::info!(
            database_url = %config.database_url,
            max_connections = config.db_max_connections,
            "Database connection established (SQLite WAL)"
        );

        let db = Self { pool };
        if config.run_migrations {
            db.migrate().await?;
        } else {
            tracing::info!("Skipping migrations (RUN_MIGRATIONS=false)");
        }
        Ok(db)
    }

    /// Private in-memory database with the schema applied.
    ///
    /// Pinned to a single connection that never expires: every SQLite
    /// `:memory:` connection is its own database.
    pub async fn in_memory() -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| AppError::Database(format!("Invalid database url: {e}")))?
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| AppError::Database(format!("Failed to open database: {e}")))?;

        let db = Self { pool };
        db.migrate().await?;
        Ok(db)
    }

    /// Apply pending migrations
    pub async fn migrate(&self) -> AppResult<()> {
        MIGRATOR
            .run(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Failed to apply migrations: {e}")))?;
        tracing::info!("Database migrations applied");
        Ok(())
    }
}
