//! Repository Module
//!
//! Read-only lookups against the SQLite pool. Every `find_*` returns
//! `Ok(None)` (or an empty list) when nothing matches; `Err` is reserved for
//! storage failures.

pub mod animal;
pub mod enclosure;
pub mod zookeeper;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
