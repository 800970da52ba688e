//! Documentation page assembly.
//!
//! [`Site`] ties the registry to a content source: for a routed page it
//! picks the content file for the requested language, falls back to the
//! site's fallback language, and marks pages with no content anywhere as
//! placeholders.

use std::sync::Arc;

use fp_i18n::Language;
use fp_renderer::{RenderedContent, render_markdown};

use crate::content::{ContentError, ContentSource};
use crate::contribution::ContributionLinks;
use crate::registry::{DocPackage, NavItem, Registry};
use crate::route::DocRoute;
use crate::sequencer::Neighbors;

/// Site repository used when neither the package nor the config names one.
pub const DEFAULT_REPOSITORY_URL: &str = "https://github.com/forgepack/docs";

/// A documentation page ready for templating.
#[derive(Debug)]
pub struct DocPage<'a> {
    /// Owning package.
    pub package: &'a DocPackage,
    /// Sidebar entry, if listed.
    pub item: Option<&'a NavItem>,
    /// Normalized page path.
    pub path: &'a str,
    /// Page title.
    pub title: String,
    /// Rendered content. Empty for placeholders.
    pub content: RenderedContent,
    /// Language the content was read in, `None` for placeholders.
    pub content_language: Option<Language>,
    /// Previous and next pages.
    pub neighbors: Neighbors<'a>,
    /// Issue and pull request links.
    pub contribution: ContributionLinks,
}

impl DocPage<'_> {
    /// Whether the page has no content in any language.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.content_language.is_none()
    }
}

/// A page with no content file in some language.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissingPage {
    /// Package ID.
    pub package: String,
    /// Page path.
    pub path: String,
    /// Language without a content file.
    pub language: Language,
}

/// Registry plus content.
pub struct Site {
    registry: Registry,
    content: Arc<dyn ContentSource>,
    fallback_language: Language,
    repository_url: String,
    public_url: String,
}

impl Site {
    /// Create a site over `registry` and `content`.
    #[must_use]
    pub fn new(registry: Registry, content: Arc<dyn ContentSource>) -> Self {
        Self {
            registry,
            content,
            fallback_language: Language::default(),
            repository_url: DEFAULT_REPOSITORY_URL.to_owned(),
            public_url: String::new(),
        }
    }

    /// Language whose content is shown when a page is missing in the selected one.
    #[must_use]
    pub fn with_fallback_language(mut self, language: Language) -> Self {
        self.fallback_language = language;
        self
    }

    /// Repository for pages whose package has none.
    #[must_use]
    pub fn with_repository_url(mut self, url: impl Into<String>) -> Self {
        self.repository_url = url.into();
        self
    }

    /// Base URL prepended to page paths in contribution links.
    #[must_use]
    pub fn with_public_url(mut self, url: impl Into<String>) -> Self {
        self.public_url = url.into().trim_end_matches('/').to_owned();
        self
    }

    /// Package registry.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Fallback content language.
    #[must_use]
    pub fn fallback_language(&self) -> Language {
        self.fallback_language
    }

    /// Site repository URL.
    #[must_use]
    pub fn repository_url(&self) -> &str {
        &self.repository_url
    }

    /// Assemble a documentation page in `language`.
    ///
    /// # Errors
    ///
    /// Returns an error if a content file exists but cannot be read.
    pub fn render_doc<'a>(
        &self,
        route: &'a DocRoute<'a>,
        language: Language,
    ) -> Result<DocPage<'a>, ContentError> {
        let package = route.package;
        let (markdown, content_language) = self.read_with_fallback(package, &route.slug, language)?;

        let content = markdown
            .map(|source| render_markdown(&source, language))
            .unwrap_or_default();

        let title = content
            .title
            .clone()
            .or_else(|| route.item.map(|item| item.label.get(language).to_owned()))
            .unwrap_or_else(|| package.display_name.clone());

        let repository = package
            .repository_url
            .as_deref()
            .unwrap_or(&self.repository_url);
        let page_url = format!("{}{}", self.public_url, route.path);

        if content_language.is_none() {
            tracing::debug!(path = %route.path, %language, "Rendering placeholder page");
        }

        Ok(DocPage {
            package,
            item: route.item,
            path: &route.path,
            title,
            content,
            content_language,
            neighbors: package.neighbors(&route.path),
            contribution: ContributionLinks::new(repository, &page_url),
        })
    }

    fn read_with_fallback(
        &self,
        package: &DocPackage,
        slug: &str,
        language: Language,
    ) -> Result<(Option<String>, Option<Language>), ContentError> {
        if let Some(markdown) = self.content.read(language, &package.id, slug)? {
            return Ok((Some(markdown), Some(language)));
        }
        if language != self.fallback_language
            && let Some(markdown) = self.content.read(self.fallback_language, &package.id, slug)?
        {
            tracing::debug!(
                package = %package.id,
                slug,
                requested = %language,
                fallback = %self.fallback_language,
                "Content missing, using fallback language"
            );
            return Ok((Some(markdown), Some(self.fallback_language)));
        }
        Ok((None, None))
    }

    /// Every page and language without a content file.
    ///
    /// # Errors
    ///
    /// Returns an error if a content file exists but cannot be read.
    pub fn missing_content(&self) -> Result<Vec<MissingPage>, ContentError> {
        let mut missing = Vec::new();
        for (package, path) in self.registry.doc_paths() {
            let slug = package.relative(path).unwrap_or_default();
            for language in Language::ALL {
                if self.content.read(language, &package.id, slug)?.is_none() {
                    missing.push(MissingPage {
                        package: package.id.clone(),
                        path: path.to_owned(),
                        language,
                    });
                }
            }
        }
        Ok(missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::MemoryContent;
    use crate::registry::tests::two_packages;
    use crate::route::Route;
    use pretty_assertions::assert_eq;

    fn site(content: MemoryContent) -> Site {
        Site::new(two_packages(), Arc::new(content)).with_public_url("http://localhost:7979/")
    }

    fn doc_route<'a>(site: &'a Site, path: &str) -> DocRoute<'a> {
        match site.registry().route(path) {
            Route::Doc(doc) => doc,
            other => panic!("expected doc route, got {other:?}"),
        }
    }

    #[test]
    fn test_render_doc_in_selected_language() {
        let site = site(
            MemoryContent::new()
                .with_page(Language::En, "request", "getting-started", "# Getting Started\n\nHi")
                .with_page(Language::Pt, "request", "getting-started", "# Primeiros Passos\n\nOi"),
        );
        let route = doc_route(&site, "/docs/request/getting-started");

        let page = site.render_doc(&route, Language::Pt).unwrap();

        assert_eq!(page.title, "Primeiros Passos");
        assert_eq!(page.content_language, Some(Language::Pt));
        assert!(page.content.html.contains("Oi"));
        assert!(!page.is_placeholder());
    }

    #[test]
    fn test_render_doc_falls_back_to_default_language() {
        let site = site(MemoryContent::new().with_page(
            Language::En,
            "request",
            "authentication",
            "# Authentication",
        ));
        let route = doc_route(&site, "/docs/request/authentication");

        let page = site.render_doc(&route, Language::Pt).unwrap();

        assert_eq!(page.content_language, Some(Language::En));
        assert_eq!(page.title, "Authentication");
    }

    #[test]
    fn test_render_doc_placeholder_uses_sidebar_label() {
        let site = site(MemoryContent::new());
        let route = doc_route(&site, "/docs/request/authentication");

        let page = site.render_doc(&route, Language::En).unwrap();

        assert!(page.is_placeholder());
        assert_eq!(page.title, "authentication");
        assert!(page.content.html.is_empty());
    }

    #[test]
    fn test_render_doc_neighbors_and_links() {
        let site = site(MemoryContent::new());
        let route = doc_route(&site, "/docs/request/getting-started");

        let page = site.render_doc(&route, Language::En).unwrap();

        assert_eq!(page.neighbors.previous.map(|i| i.path.as_str()), Some("/docs/request"));
        assert_eq!(
            page.neighbors.next.map(|i| i.path.as_str()),
            Some("/docs/request/authentication")
        );
        assert_eq!(page.contribution.pr_url, "https://github.com/forgepack/request/compare");
        assert!(page.contribution.issue_url.contains(
            "http%3A%2F%2Flocalhost%3A7979%2Fdocs%2Frequest%2Fgetting-started"
        ));
    }

    #[test]
    fn test_render_doc_without_package_repository_uses_site_repository() {
        let mut packages = two_packages().packages().to_vec();
        packages[1].repository_url = None;
        let site = Site::new(Registry::new(packages).unwrap(), Arc::new(MemoryContent::new()))
            .with_repository_url("https://github.com/forgepack/site");
        let route = doc_route(&site, "/docs/leaflet");

        let page = site.render_doc(&route, Language::En).unwrap();

        assert_eq!(page.contribution.pr_url, "https://github.com/forgepack/site/compare");
    }

    #[test]
    fn test_missing_content_reports_each_language() {
        let site = site(
            MemoryContent::new()
                .with_page(Language::En, "request", "", "# Request")
                .with_page(Language::Pt, "request", "", "# Request")
                .with_page(Language::En, "request", "getting-started", "# Start")
                .with_page(Language::Pt, "request", "getting-started", "# Início")
                .with_page(Language::En, "request", "authentication", "# Auth")
                .with_page(Language::Pt, "request", "authentication", "# Auth")
                .with_page(Language::En, "leaflet", "", "# Leaflet")
                .with_page(Language::Pt, "leaflet", "", "# Leaflet")
                .with_page(Language::En, "leaflet", "examples/basic-map", "# Map"),
        );

        assert_eq!(
            site.missing_content().unwrap(),
            vec![MissingPage {
                package: "leaflet".to_owned(),
                path: "/docs/leaflet/examples/basic-map".to_owned(),
                language: Language::Pt,
            }]
        );
    }
}
