//! Previous/next page navigation.
//!
//! Pages are ordered by section, then by position within the section.
//! The order comes from the registry alone.

use serde::Serialize;

use crate::registry::{DocPackage, NavItem};

/// Neighbors of the current page in reading order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Neighbors<'a> {
    /// Page before the current one (`None` on the first page).
    pub previous: Option<&'a NavItem>,
    /// Page after the current one (`None` on the last page).
    pub next: Option<&'a NavItem>,
}

impl Neighbors<'_> {
    /// Whether there is anything to link to.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.previous.is_none() && self.next.is_none()
    }
}

impl DocPackage {
    /// Sidebar entries flattened into reading order.
    pub fn pages(&self) -> impl Iterator<Item = &NavItem> {
        self.sections.iter().flat_map(|section| section.items.iter())
    }

    /// Sidebar entry with exactly this path.
    #[must_use]
    pub fn page(&self, path: &str) -> Option<&NavItem> {
        self.pages().find(|item| item.path == path)
    }

    /// Previous and next pages around `path`.
    ///
    /// Both are `None` when `path` isn't listed in the sidebar.
    #[must_use]
    pub fn neighbors(&self, path: &str) -> Neighbors<'_> {
        let pages: Vec<&NavItem> = self.pages().collect();
        let Some(index) = pages.iter().position(|item| item.path == path) else {
            return Neighbors::default();
        };

        Neighbors {
            previous: index.checked_sub(1).map(|i| pages[i]),
            next: pages.get(index + 1).copied(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::tests::package;
    use pretty_assertions::assert_eq;

    fn request() -> DocPackage {
        package(
            "request",
            "/docs/request",
            vec![
                vec!["/docs/request", "/docs/request/getting-started"],
                vec![],
                vec!["/docs/request/authentication", "/docs/request/requests"],
                vec!["/docs/request/examples/login-form"],
            ],
        )
    }

    fn paths(neighbors: Neighbors<'_>) -> (Option<&str>, Option<&str>) {
        (
            neighbors.previous.map(|i| i.path.as_str()),
            neighbors.next.map(|i| i.path.as_str()),
        )
    }

    #[test]
    fn test_pages_flatten_in_section_order() {
        let package = request();
        let order: Vec<_> = package.pages().map(|i| i.path.as_str()).collect();
        assert_eq!(
            order,
            vec![
                "/docs/request",
                "/docs/request/getting-started",
                "/docs/request/authentication",
                "/docs/request/requests",
                "/docs/request/examples/login-form",
            ]
        );
    }

    #[test]
    fn test_first_page_has_no_previous() {
        let package = request();
        assert_eq!(
            paths(package.neighbors("/docs/request")),
            (None, Some("/docs/request/getting-started"))
        );
    }

    #[test]
    fn test_last_page_has_no_next() {
        let package = request();
        assert_eq!(
            paths(package.neighbors("/docs/request/examples/login-form")),
            (Some("/docs/request/requests"), None)
        );
    }

    #[test]
    fn test_interior_pages_link_to_adjacent_positions() {
        let package = request();
        let order: Vec<_> = package.pages().collect();

        for i in 1..order.len() - 1 {
            let neighbors = package.neighbors(&order[i].path);
            assert_eq!(neighbors.previous, Some(order[i - 1]));
            assert_eq!(neighbors.next, Some(order[i + 1]));
        }
    }

    #[test]
    fn test_crosses_section_boundaries_and_skips_empty_sections() {
        let package = request();
        assert_eq!(
            paths(package.neighbors("/docs/request/getting-started")),
            (Some("/docs/request"), Some("/docs/request/authentication"))
        );
    }

    #[test]
    fn test_unlisted_path_has_no_neighbors() {
        let package = request();
        let neighbors = package.neighbors("/docs/request/not-in-sidebar");
        assert!(neighbors.is_empty());
    }

    #[test]
    fn test_match_is_exact() {
        let package = request();
        assert!(package.neighbors("/docs/request/requests/").is_empty());
        assert!(package.neighbors("/docs/request/Requests").is_empty());
    }

    #[test]
    fn test_single_page_package() {
        let package = package("solo", "/docs/solo", vec![vec!["/docs/solo"]]);
        assert!(package.neighbors("/docs/solo").is_empty());
    }

    #[test]
    fn test_page_lookup() {
        let package = request();
        assert_eq!(
            package.page("/docs/request/requests").map(|i| i.path.as_str()),
            Some("/docs/request/requests")
        );
        assert!(package.page("/docs/request/missing").is_none());
    }
}
