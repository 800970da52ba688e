//! Package registry and package resolution.
//!
//! The registry is built once at startup and never mutated. All structural
//! checks happen in [`Registry::new`], so lookups at request time are total.

use std::borrow::Cow;
use std::collections::HashSet;

use fp_i18n::Localized;
use serde::{Deserialize, Serialize};

/// A single documentation page entry in the sidebar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Sidebar label.
    pub label: Localized,
    /// URL path (leading slash, no trailing slash).
    pub path: String,
}

/// A titled group of sidebar entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section heading.
    pub title: Localized,
    /// Entries in display order.
    #[serde(default)]
    pub items: Vec<NavItem>,
}

/// One documentation set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocPackage {
    /// Short identifier, also the content directory name (e.g. "request").
    pub id: String,
    /// Published package name (e.g. "@forgepack/request").
    pub display_name: String,
    /// Version shown next to the name.
    pub version: String,
    /// Source repository, used for contribution links.
    #[serde(default)]
    pub repository_url: Option<String>,
    /// Package registry page (npm, Maven Central).
    #[serde(default)]
    pub registry_url: Option<String>,
    /// One-line description for the package selector.
    pub description: Localized,
    /// Icon shown in the package selector.
    #[serde(default)]
    pub icon: String,
    /// URL prefix owning every page of this package (e.g. "/docs/request").
    pub root: String,
    /// Fallback package for paths outside every root.
    #[serde(default)]
    pub default: bool,
    /// Sidebar sections in display order.
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl DocPackage {
    /// Whether `path` (normalized) belongs to this package.
    #[must_use]
    pub fn owns(&self, path: &str) -> bool {
        path.starts_with(&self.root)
    }

    /// Path relative to the package root, without leading slash.
    ///
    /// Empty for the root itself. Returns `None` when `path` is not owned.
    #[must_use]
    pub fn relative<'a>(&self, path: &'a str) -> Option<&'a str> {
        path.strip_prefix(self.root.as_str())
            .map(|rest| rest.trim_start_matches('/'))
    }
}

/// Error returned when the registry is malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// No packages registered.
    #[error("Package registry is empty")]
    Empty,
    /// Package ID empty or not usable as a directory name.
    #[error("Invalid package id: {0:?}")]
    InvalidId(String),
    /// Two packages with the same ID.
    #[error("Duplicate package id: {0}")]
    DuplicateId(String),
    /// Root is not an absolute path without trailing slash.
    #[error("Invalid root for package {package}: {root:?}")]
    InvalidRoot { package: String, root: String },
    /// One root is a prefix of another, so some paths would match both.
    #[error("Package roots overlap: {first} and {second}")]
    OverlappingRoots { first: String, second: String },
    /// More than one package marked `default`.
    #[error("More than one default package: {first} and {second}")]
    MultipleDefaults { first: String, second: String },
    /// Sidebar entry path is malformed.
    #[error("Invalid page path in package {package}: {path:?}")]
    InvalidPath { package: String, path: String },
    /// Sidebar entry outside its package root.
    #[error("Page {path} is outside package root {root}")]
    OutsideRoot { path: String, root: String },
    /// Same path listed twice in one package.
    #[error("Duplicate page path in package {package}: {path}")]
    DuplicatePath { package: String, path: String },
}

/// Validated, immutable set of documentation packages.
#[derive(Clone, Debug)]
pub struct Registry {
    packages: Vec<DocPackage>,
    default_index: usize,
}

impl Registry {
    /// Build a registry, checking every structural invariant.
    ///
    /// The default package is the one marked `default`, or the first one.
    pub fn new(packages: Vec<DocPackage>) -> Result<Self, RegistryError> {
        if packages.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut ids = HashSet::new();
        let mut default_index: Option<usize> = None;

        for (i, package) in packages.iter().enumerate() {
            if !is_valid_id(&package.id) {
                return Err(RegistryError::InvalidId(package.id.clone()));
            }
            if !ids.insert(package.id.as_str()) {
                return Err(RegistryError::DuplicateId(package.id.clone()));
            }
            if !is_valid_root(&package.root) {
                return Err(RegistryError::InvalidRoot {
                    package: package.id.clone(),
                    root: package.root.clone(),
                });
            }
            if package.default {
                if let Some(first) = default_index {
                    return Err(RegistryError::MultipleDefaults {
                        first: packages[first].id.clone(),
                        second: package.id.clone(),
                    });
                }
                default_index = Some(i);
            }
            validate_items(package)?;
        }

        for (i, a) in packages.iter().enumerate() {
            for b in &packages[i + 1..] {
                if a.root.starts_with(&b.root) || b.root.starts_with(&a.root) {
                    return Err(RegistryError::OverlappingRoots {
                        first: a.root.clone(),
                        second: b.root.clone(),
                    });
                }
            }
        }

        let default_index = default_index.unwrap_or(0);
        tracing::debug!(
            packages = packages.len(),
            default = %packages[default_index].id,
            "Package registry built"
        );

        Ok(Self {
            packages,
            default_index,
        })
    }

    /// All packages in registration order.
    #[must_use]
    pub fn packages(&self) -> &[DocPackage] {
        &self.packages
    }

    /// Package used when no root matches.
    #[must_use]
    pub fn default_package(&self) -> &DocPackage {
        &self.packages[self.default_index]
    }

    /// Look up a package by ID.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&DocPackage> {
        self.packages.iter().find(|p| p.id == id)
    }

    /// Package whose root is a prefix of `path`, if any.
    ///
    /// Roots never overlap, so at most one package matches.
    #[must_use]
    pub fn matching(&self, path: &str) -> Option<&DocPackage> {
        let path = normalize_path(path);
        self.packages.iter().find(|p| p.owns(&path))
    }

    /// Active package for `path`, falling back to the default package.
    #[must_use]
    pub fn resolve(&self, path: &str) -> &DocPackage {
        self.matching(path).unwrap_or_else(|| self.default_package())
    }
}

/// Normalize a request path for matching.
///
/// Ensures a leading slash and strips trailing slashes (except for `/`).
#[must_use]
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return Cow::Borrowed("/");
    }
    if trimmed.starts_with('/') {
        if trimmed.len() == path.len() {
            Cow::Borrowed(path)
        } else {
            Cow::Borrowed(trimmed)
        }
    } else {
        Cow::Owned(format!("/{trimmed}"))
    }
}

fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn is_valid_root(root: &str) -> bool {
    root.len() > 1 && root.starts_with('/') && !root.ends_with('/') && is_valid_path(root)
}

/// Absolute path of plain segments: no empty, `.` or `..` segments.
fn is_valid_path(path: &str) -> bool {
    let Some(rest) = path.strip_prefix('/') else {
        return false;
    };
    rest.split('/').all(|segment| {
        !segment.is_empty()
            && segment != "."
            && segment != ".."
            && segment
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    })
}

fn validate_items(package: &DocPackage) -> Result<(), RegistryError> {
    let mut paths = HashSet::new();
    for item in package.sections.iter().flat_map(|s| &s.items) {
        if !is_valid_path(&item.path) {
            return Err(RegistryError::InvalidPath {
                package: package.id.clone(),
                path: item.path.clone(),
            });
        }
        let under_root = item.path == package.root
            || item
                .path
                .strip_prefix(package.root.as_str())
                .is_some_and(|rest| rest.starts_with('/'));
        if !under_root {
            return Err(RegistryError::OutsideRoot {
                path: item.path.clone(),
                root: package.root.clone(),
            });
        }
        if !paths.insert(item.path.as_str()) {
            return Err(RegistryError::DuplicatePath {
                package: package.id.clone(),
                path: item.path.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    pub(crate) fn item(path: &str) -> NavItem {
        NavItem {
            label: Localized::same(path.rsplit('/').next().unwrap_or(path)),
            path: path.to_owned(),
        }
    }

    pub(crate) fn package(id: &str, root: &str, sections: Vec<Vec<&str>>) -> DocPackage {
        DocPackage {
            id: id.to_owned(),
            display_name: format!("@forgepack/{id}"),
            version: "v1.0.0".to_owned(),
            repository_url: Some(format!("https://github.com/forgepack/{id}")),
            registry_url: None,
            description: Localized::same(id),
            icon: String::new(),
            root: root.to_owned(),
            default: false,
            sections: sections
                .into_iter()
                .enumerate()
                .map(|(i, paths)| Section {
                    title: Localized::same(format!("Section {i}")),
                    items: paths.into_iter().map(item).collect(),
                })
                .collect(),
        }
    }

    pub(crate) fn two_packages() -> Registry {
        Registry::new(vec![
            package(
                "request",
                "/docs/request",
                vec![
                    vec!["/docs/request", "/docs/request/getting-started"],
                    vec!["/docs/request/authentication"],
                ],
            ),
            package(
                "leaflet",
                "/docs/leaflet",
                vec![vec!["/docs/leaflet", "/docs/leaflet/examples/basic-map"]],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_resolve_exact_root() {
        let registry = two_packages();
        assert_eq!(registry.resolve("/docs/leaflet").id, "leaflet");
    }

    #[test]
    fn test_resolve_every_path_under_root() {
        let registry = two_packages();
        for package in registry.packages() {
            for suffix in ["", "/", "/getting-started", "/a/b/c", "/unlisted/"] {
                let path = format!("{}{suffix}", package.root);
                assert_eq!(registry.resolve(&path).id, package.id, "path {path}");
            }
        }
    }

    #[test]
    fn test_resolve_unmatched_falls_back_to_first() {
        let registry = two_packages();
        assert_eq!(registry.resolve("/").id, "request");
        assert_eq!(registry.resolve("/docs").id, "request");
        assert_eq!(registry.resolve("/docs/unknown").id, "request");
        assert_eq!(registry.resolve("").id, "request");
    }

    #[test]
    fn test_resolve_unmatched_uses_marked_default() {
        let mut leaflet = package("leaflet", "/docs/leaflet", vec![]);
        leaflet.default = true;
        let registry = Registry::new(vec![package("request", "/docs/request", vec![]), leaflet])
            .unwrap();

        assert_eq!(registry.default_package().id, "leaflet");
        assert_eq!(registry.resolve("/pricing").id, "leaflet");
        assert_eq!(registry.resolve("/docs/request/x").id, "request");
    }

    #[test]
    fn test_matching_returns_none_outside_roots() {
        let registry = two_packages();
        assert!(registry.matching("/docs").is_none());
        assert!(registry.matching("/docs/request/x").is_some());
    }

    #[test]
    fn test_get_by_id() {
        let registry = two_packages();
        assert_eq!(registry.get("leaflet").unwrap().root, "/docs/leaflet");
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_relative_path() {
        let registry = two_packages();
        let request = registry.get("request").unwrap();
        assert_eq!(request.relative("/docs/request"), Some(""));
        assert_eq!(request.relative("/docs/request/api/hooks"), Some("api/hooks"));
        assert_eq!(request.relative("/docs/leaflet"), None);
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/docs/request/"), "/docs/request");
        assert_eq!(normalize_path("/docs/request"), "/docs/request");
        assert_eq!(normalize_path("docs/request"), "/docs/request");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("///"), "/");
    }

    #[test]
    fn test_empty_registry_rejected() {
        assert_eq!(Registry::new(Vec::new()).unwrap_err(), RegistryError::Empty);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = Registry::new(vec![
            package("request", "/docs/request", vec![]),
            package("request", "/docs/other", vec![]),
        ])
        .unwrap_err();
        assert_eq!(err, RegistryError::DuplicateId("request".to_owned()));
    }

    #[test]
    fn test_overlapping_roots_rejected() {
        let err = Registry::new(vec![
            package("request", "/docs/request", vec![]),
            package("requests", "/docs/requests", vec![]),
        ])
        .unwrap_err();
        assert!(matches!(err, RegistryError::OverlappingRoots { .. }));
    }

    #[test]
    fn test_invalid_roots_rejected() {
        for root in ["", "/", "docs/request", "/docs/request/", "/docs//request", "/docs/../x"] {
            let err = Registry::new(vec![package("request", root, vec![])]).unwrap_err();
            assert!(
                matches!(err, RegistryError::InvalidRoot { .. }),
                "root {root:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_invalid_id_rejected() {
        let err = Registry::new(vec![package("../x", "/docs/x", vec![])]).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidId(_)));
    }

    #[test]
    fn test_multiple_defaults_rejected() {
        let mut a = package("a", "/docs/a", vec![]);
        let mut b = package("b", "/docs/b", vec![]);
        a.default = true;
        b.default = true;
        let err = Registry::new(vec![a, b]).unwrap_err();
        assert!(matches!(err, RegistryError::MultipleDefaults { .. }));
    }

    #[test]
    fn test_duplicate_item_path_rejected() {
        let err = Registry::new(vec![package(
            "request",
            "/docs/request",
            vec![vec!["/docs/request/hooks"], vec!["/docs/request/hooks"]],
        )])
        .unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicatePath {
                package: "request".to_owned(),
                path: "/docs/request/hooks".to_owned(),
            }
        );
    }

    #[test]
    fn test_item_outside_root_rejected() {
        let err = Registry::new(vec![package(
            "request",
            "/docs/request",
            vec![vec!["/docs/requestx"]],
        )])
        .unwrap_err();
        assert!(matches!(err, RegistryError::OutsideRoot { .. }));
    }

    #[test]
    fn test_malformed_item_path_rejected() {
        let err = Registry::new(vec![package(
            "request",
            "/docs/request",
            vec![vec!["/docs/request/../secret"]],
        )])
        .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidPath { .. }));
    }

    #[test]
    fn test_package_deserialize_from_toml() {
        let toml = r#"
id = "request"
display_name = "@forgepack/request"
version = "v1.1.1"
root = "/docs/request"
description = { en = "HTTP client", pt = "Cliente HTTP" }

[[sections]]
title = { en = "Overview", pt = "Visão Geral" }
items = [
    { label = { en = "Overview", pt = "Visão Geral" }, path = "/docs/request" },
]
"#;
        let package: DocPackage = toml::from_str(toml).unwrap();

        assert_eq!(package.id, "request");
        assert!(!package.default);
        assert_eq!(package.repository_url, None);
        assert_eq!(package.sections[0].items[0].path, "/docs/request");
        assert_eq!(package.description.pt, "Cliente HTTP");
    }
}
