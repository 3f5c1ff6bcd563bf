//! Record fragments
//!
//! Each detail line is its own `<ul>` element, e.g. `<ul>Name: Leo</ul>`.
//! Animal listings under a zookeeper or enclosure share one line format:
//! `Animal: {name} ({species})`.

use maud::{Markup, html};

use crate::db::models::{Animal, AnimalDetail, EnclosureDetail, ZookeeperDetail};

pub fn animal(detail: &AnimalDetail) -> Markup {
    html! {
        ul { "Name: " (detail.animal.name) }
        ul { "Species: " (detail.animal.species) }
        ul { "Zookeeper: " (detail.zookeeper.name) }
        ul { "Enclosure: " (detail.enclosure.environment) }
    }
}

pub fn zookeeper(detail: &ZookeeperDetail) -> Markup {
    let birthday = detail.zookeeper.birthday.format("%Y-%m-%d").to_string();
    html! {
        ul { "Name: " (detail.zookeeper.name) }
        ul { "Birthday: " (birthday) }
        (animal_lines(&detail.animals))
    }
}

pub fn enclosure(detail: &EnclosureDetail) -> Markup {
    let open = if detail.enclosure.open_to_visitors {
        "Yes"
    } else {
        "No"
    };
    html! {
        ul { "Environment: " (detail.enclosure.environment) }
        ul { "Open to Visitors: " (open) }
        (animal_lines(&detail.animals))
    }
}

fn animal_lines(animals: &[Animal]) -> Markup {
    html! {
        @for entry in animals {
            ul { "Animal: " (entry.name) " (" (entry.species) ")" }
        }
    }
}
