//! Animal Repository

use super::RepoResult;
use crate::db::models::{Animal, AnimalDetail, Enclosure, Zookeeper};
use chrono::NaiveDate;
use sqlx::SqlitePool;

/// Flat row of the animal/zookeeper/enclosure join
#[derive(sqlx::FromRow)]
struct AnimalDetailRow {
    id: i64,
    name: String,
    species: String,
    zookeeper_id: i64,
    enclosure_id: i64,
    zookeeper_name: String,
    zookeeper_birthday: NaiveDate,
    enclosure_environment: String,
    enclosure_open_to_visitors: bool,
}

impl From<AnimalDetailRow> for AnimalDetail {
    fn from(row: AnimalDetailRow) -> Self {
        Self {
            zookeeper: Zookeeper {
                id: row.zookeeper_id,
                name: row.zookeeper_name,
                birthday: row.zookeeper_birthday,
            },
            enclosure: Enclosure {
                id: row.enclosure_id,
                environment: row.enclosure_environment,
                open_to_visitors: row.enclosure_open_to_visitors,
            },
            animal: Animal {
                id: row.id,
                name: row.name,
                species: row.species,
                zookeeper_id: row.zookeeper_id,
                enclosure_id: row.enclosure_id,
            },
        }
    }
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Animal>> {
    let animal = sqlx::query_as::<_, Animal>(
        "SELECT id, name, species, zookeeper_id, enclosure_id FROM animals WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(animal)
}

/// Animals cared for by one zookeeper
pub async fn find_by_zookeeper(pool: &SqlitePool, zookeeper_id: i64) -> RepoResult<Vec<Animal>> {
    let animals = sqlx::query_as::<_, Animal>(
        "SELECT id, name, species, zookeeper_id, enclosure_id FROM animals WHERE zookeeper_id = ? ORDER BY id",
    )
    .bind(zookeeper_id)
    .fetch_all(pool)
    .await?;
    Ok(animals)
}

/// Animals housed in one enclosure
pub async fn find_by_enclosure(pool: &SqlitePool, enclosure_id: i64) -> RepoResult<Vec<Animal>> {
    let animals = sqlx::query_as::<_, Animal>(
        "SELECT id, name, species, zookeeper_id, enclosure_id FROM animals WHERE enclosure_id = ? ORDER BY id",
    )
    .bind(enclosure_id)
    .fetch_all(pool)
    .await?;
    Ok(animals)
}

/// Animal plus its zookeeper and enclosure in a single joined read
pub async fn find_detail(pool: &SqlitePool, id: i64) -> RepoResult<Option<AnimalDetail>> {
    let row = sqlx::query_as::<_, AnimalDetailRow>(
        "SELECT a.id, a.name, a.species, a.zookeeper_id, a.enclosure_id, z.name AS zookeeper_name, z.birthday AS zookeeper_birthday, e.environment AS enclosure_environment, e.open_to_visitors AS enclosure_open_to_visitors FROM animals a JOIN zookeepers z ON z.id = a.zookeeper_id JOIN enclosures e ON e.id = a.enclosure_id WHERE a.id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row.map(AnimalDetail::from))
}
