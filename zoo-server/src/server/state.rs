//! Application state shared by all handlers

use sqlx::SqlitePool;

use crate::db::DbService;
use crate::server::Config;
use crate::utils::AppResult;

/// Shared application state
///
/// Built once at startup and handed to the router; handlers receive a clone
/// through `State<AppState>`. Holds no entity data, every request reads from
/// the pool.
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(db: DbService) -> Self {
        Self { pool: db.pool }
    }

    /// Open the database described by `config` and build the state around it
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        let db = DbService::new(config).await?;
        Ok(Self::new(db))
    }
}
