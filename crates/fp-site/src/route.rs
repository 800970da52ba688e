//! URL routing.
//!
//! Every request path resolves to exactly one [`Route`]. Documentation
//! routes exist for each package root (the overview) and for every sidebar
//! entry; anything else is [`Route::NotFound`].

use crate::registry::{DocPackage, NavItem, Registry, normalize_path};

/// Page identity for a request path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route<'a> {
    /// Marketing home page.
    Home,
    /// A documentation page.
    Doc(DocRoute<'a>),
    /// No page registered at this path.
    NotFound,
}

/// A registered documentation page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocRoute<'a> {
    /// Owning package.
    pub package: &'a DocPackage,
    /// Sidebar entry, `None` for a package overview that isn't listed.
    pub item: Option<&'a NavItem>,
    /// Normalized path.
    pub path: String,
    /// Path relative to the package root (empty for the overview).
    pub slug: String,
}

impl DocRoute<'_> {
    /// Whether this is the package overview page.
    #[must_use]
    pub fn is_overview(&self) -> bool {
        self.slug.is_empty()
    }
}

impl Registry {
    /// Resolve a request path to a page.
    #[must_use]
    pub fn route(&self, path: &str) -> Route<'_> {
        let path = normalize_path(path);
        if path == "/" {
            return Route::Home;
        }

        let Some(package) = self.matching(&path) else {
            return Route::NotFound;
        };

        let item = package.page(&path);
        if item.is_none() && path != package.root {
            return Route::NotFound;
        }

        let slug = package.relative(&path).unwrap_or_default().to_owned();
        Route::Doc(DocRoute {
            package,
            item,
            path: path.into_owned(),
            slug,
        })
    }

    /// Every documentation page path: each package root, then its sidebar entries.
    pub fn doc_paths(&self) -> impl Iterator<Item = (&DocPackage, &str)> {
        self.packages().iter().flat_map(|package| {
            let root_listed = package.page(&package.root).is_some();
            let root = (!root_listed).then_some((package, package.root.as_str()));
            root.into_iter()
                .chain(package.pages().map(move |item| (package, item.path.as_str())))
        })
    }
}
