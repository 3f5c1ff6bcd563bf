//! Seed data shared by the unit and integration tests
//!
//! | id | zookeeper | birthday   | enclosure | open | animals               |
//! |----|-----------|------------|-----------|------|-----------------------|
//! | 1  | Amy       | 2000-01-01 | Savanna   | yes  | Leo (Lion), Zed (Zebra) |
//! | 2  | Bob       | 1985-06-15 | Arctic    | no   | Pingu (Penguin)       |
//! | 3  | Cara      | 1990-03-20 | Aviary    | yes  | none                  |
//!
//! The animal list is per zookeeper and per enclosure alike.

#[cfg(test)]
use super::DbService;
#[cfg(test)]
use sqlx::SqlitePool;

pub const SEED: &[&str] = &[
    "INSERT INTO zookeepers (id, name, birthday) VALUES (1, 'Amy', '2000-01-01')",
    "INSERT INTO zookeepers (id, name, birthday) VALUES (2, 'Bob', '1985-06-15')",
    "INSERT INTO zookeepers (id, name, birthday) VALUES (3, 'Cara', '1990-03-20')",
    "INSERT INTO enclosures (id, environment, open_to_visitors) VALUES (1, 'Savanna', 1)",
    "INSERT INTO enclosures (id, environment, open_to_visitors) VALUES (2, 'Arctic', 0)",
    "INSERT INTO enclosures (id, environment, open_to_visitors) VALUES (3, 'Aviary', 1)",
    "INSERT INTO animals (id, name, species, zookeeper_id, enclosure_id) VALUES (1, 'Leo', 'Lion', 1, 1)",
    "INSERT INTO animals (id, name, species, zookeeper_id, enclosure_id) VALUES (2, 'Zed', 'Zebra', 1, 1)",
    "INSERT INTO animals (id, name, species, zookeeper_id, enclosure_id) VALUES (3, 'Pingu', 'Penguin', 2, 2)",
];

/// In-memory pool with the schema and the rows above
#[cfg(test)]
pub(crate) async fn seeded_pool() -> SqlitePool {
    let db = DbService::in_memory().await.unwrap();
    for stmt in SEED {
        sqlx::query(stmt).execute(&db.pool).await.unwrap();
    }
    db.pool
}
