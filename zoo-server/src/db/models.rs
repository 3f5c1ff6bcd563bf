//! Zoo record types
//!
//! Rows are owned by the external seeding process; this crate only reads them.

use chrono::NaiveDate;
use std::fmt;

/// Zookeeper row (`zookeepers`)
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Zookeeper {
    pub id: i64,
    pub name: String,
    pub birthday: NaiveDate,
}

/// Enclosure row (`enclosures`)
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Enclosure {
    pub id: i64,
    /// Habitat description, e.g. "Savanna"
    pub environment: String,
    pub open_to_visitors: bool,
}

/// Animal row (`animals`)
///
/// Both foreign keys are required: every animal has exactly one zookeeper
/// and lives in exactly one enclosure.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Animal {
    pub id: i64,
    pub name: String,
    pub species: String,
    pub zookeeper_id: i64,
    pub enclosure_id: i64,
}

/// Animal with its zookeeper and enclosure resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimalDetail {
    pub animal: Animal,
    pub zookeeper: Zookeeper,
    pub enclosure: Enclosure,
}

/// Zookeeper with the animals in their care, ordered by id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZookeeperDetail {
    pub zookeeper: Zookeeper,
    pub animals: Vec<Animal>,
}

/// Enclosure with the animals it houses, ordered by id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnclosureDetail {
    pub enclosure: Enclosure,
    pub animals: Vec<Animal>,
}

/// The three kinds of record that can be looked up by id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Animal,
    Zookeeper,
    Enclosure,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Animal => "animal",
            Self::Zookeeper => "zookeeper",
            Self::Enclosure => "enclosure",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
