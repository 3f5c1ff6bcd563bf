//! Opening on-disk databases through `DbService::new`

mod common;

use common::{app, get};
use http::StatusCode;
use zoo_server::{AppState, Config, DbService};

fn config_for(path: &std::path::Path) -> Config {
    Config {
        database_url: format!("sqlite:{}", path.display()),
        db_max_connections: 2,
        ..Config::default()
    }
}

#[tokio::test]
async fn creates_missing_file_and_applies_schema() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("zoo.db");
    assert!(!path.exists());

    let db = DbService::new(&config_for(&path)).await.unwrap();
    assert!(path.exists());

    let tables: Vec<String> = sqlx::query_scalar(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('zookeepers', 'enclosures', 'animals') ORDER BY name",
    )
    .fetch_all(&db.pool)
    .await
    .unwrap();
    assert_eq!(tables, vec!["animals", "enclosures", "zookeepers"]);
}

#[tokio::test]
async fn accepts_tables_created_by_the_seeding_process() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("seeded.db");

    // Seed without migrations, the way an external tool would
    let seed = DbService::new(&Config {
        run_migrations: false,
        ..config_for(&path)
    })
    .await
    .unwrap();
    for stmt in [
        "CREATE TABLE zookeepers (id INTEGER PRIMARY KEY, name TEXT NOT NULL, birthday DATE NOT NULL)",
        "CREATE TABLE enclosures (id INTEGER PRIMARY KEY, environment TEXT NOT NULL, open_to_visitors BOOLEAN NOT NULL)",
        "CREATE TABLE animals (id INTEGER PRIMARY KEY, name TEXT NOT NULL, species TEXT NOT NULL, zookeeper_id INTEGER NOT NULL REFERENCES zookeepers (id), enclosure_id INTEGER NOT NULL REFERENCES enclosures (id))",
        "INSERT INTO zookeepers (id, name, birthday) VALUES (1, 'Amy', '2000-01-01')",
        "INSERT INTO enclosures (id, environment, open_to_visitors) VALUES (1, 'Savanna', 1)",
        "INSERT INTO animals (id, name, species, zookeeper_id, enclosure_id) VALUES (1, 'Leo', 'Lion', 1, 1)",
    ] {
        sqlx::query(stmt).execute(&seed.pool).await.unwrap();
    }
    seed.pool.close().await;

    let state = AppState::initialize(&config_for(&path)).await.unwrap();
    let app = app(state);

    let res = get(&app, "/animal/1").await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("Name: Leo"));
    assert!(res.body.contains("Species: Lion"));
    assert!(res.body.contains("Zookeeper: Amy"));
    assert!(res.body.contains("Enclosure: Savanna"));

    let res = get(&app, "/animal/99").await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert!(res.body.contains("animal not found"));
}

#[tokio::test]
async fn unreachable_database_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("zoo.db");
    assert!(DbService::new(&config_for(&path)).await.is_err());
}
