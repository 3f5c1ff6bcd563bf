use maud::{Markup, html};

use crate::db::models::EntityKind;

pub fn welcome() -> Markup {
    html! { h1 { "Zoo app" } }
}

/// `404 animal not found` and friends
pub fn not_found(kind: EntityKind) -> Markup {
    html! { h1 { "404 " (kind.as_str()) " not found" } }
}

/// Deliberately carries no detail about the failure
pub fn server_error() -> Markup {
    html! { h1 { "500 internal server error" } }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welcome() {
        assert_eq!(welcome().into_string(), "<h1>Zoo app</h1>");
    }

    #[test]
    fn test_not_found_per_kind() {
        assert_eq!(
            not_found(EntityKind::Animal).into_string(),
            "<h1>404 animal not found</h1>"
        );
        assert_eq!(
            not_found(EntityKind::Zookeeper).into_string(),
            "<h1>404 zookeeper not found</h1>"
        );
        assert_eq!(
            not_found(EntityKind::Enclosure).into_string(),
            "<h1>404 enclosure not found</h1>"
        );
    }
}
