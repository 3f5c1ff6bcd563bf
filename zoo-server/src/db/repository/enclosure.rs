//! Enclosure Repository

use super::{RepoResult, animal};
use crate::db::models::{Enclosure, EnclosureDetail};
use sqlx::SqlitePool;

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Enclosure>> {
    let enclosure = sqlx::query_as::<_, Enclosure>(
        "SELECT id, environment, open_to_visitors FROM enclosures WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(enclosure)
}

/// Enclosure plus the animals it houses
pub async fn find_detail(pool: &SqlitePool, id: i64) -> RepoResult<Option<EnclosureDetail>> {
    let Some(enclosure) = find_by_id(pool, id).await? else {
        return Ok(None);
    };
    let animals = animal::find_by_enclosure(pool, enclosure.id).await?;
    Ok(Some(EnclosureDetail { enclosure, animals }))
}
