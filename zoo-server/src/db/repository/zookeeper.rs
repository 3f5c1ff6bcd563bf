//! Zookeeper Repository

use super::{RepoResult, animal};
use crate::db::models::{Zookeeper, ZookeeperDetail};
use sqlx::SqlitePool;

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Zookeeper>> {
    let zookeeper = sqlx::query_as::<_, Zookeeper>(
        "SELECT id, name, birthday FROM zookeepers WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(zookeeper)
}

/// Zookeeper plus the animals in their care
pub async fn find_detail(pool: &SqlitePool, id: i64) -> RepoResult<Option<ZookeeperDetail>> {
    let Some(zookeeper) = find_by_id(pool, id).await? else {
        return Ok(None);
    };
    let animals = animal::find_by_zookeeper(pool, zookeeper.id).await?;
    Ok(Some(ZookeeperDetail { zookeeper, animals }))
}
