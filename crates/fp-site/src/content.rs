//! Content page sources.
//!
//! Pages are markdown files laid out as
//! `{root}/{language}/{package}/{slug}.md`, with `index.md` for the
//! package overview.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use fp_i18n::Language;

/// Error returned when reading content fails for a reason other than absence.
#[derive(Debug, thiserror::Error)]
#[error("Failed to read {}: {source}", path.display())]
pub struct ContentError {
    /// File that could not be read.
    pub path: PathBuf,
    /// Underlying I/O error.
    #[source]
    pub source: std::io::Error,
}

/// Where content pages come from.
pub trait ContentSource: Send + Sync {
    /// Read the markdown for a page.
    ///
    /// Returns `Ok(None)` when the page has no content in `language`.
    fn read(
        &self,
        language: Language,
        package: &str,
        slug: &str,
    ) -> Result<Option<String>, ContentError>;
}

/// File name for a page slug.
fn file_name(slug: &str) -> String {
    if slug.is_empty() {
        "index.md".to_owned()
    } else {
        format!("{slug}.md")
    }
}

/// Content read from a directory tree.
#[derive(Clone, Debug)]
pub struct FsContent {
    root: PathBuf,
}

impl FsContent {
    /// Create a source rooted at `root`.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// File path for a page.
    #[must_use]
    pub fn page_path(&self, language: Language, package: &str, slug: &str) -> PathBuf {
        self.root
            .join(language.tag())
            .join(package)
            .join(file_name(slug))
    }
}

impl ContentSource for FsContent {
    fn read(
        &self,
        language: Language,
        package: &str,
        slug: &str,
    ) -> Result<Option<String>, ContentError> {
        let path = self.page_path(language, package, slug);
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ContentError { path, source }),
        }
    }
}

/// Content held in memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryContent {
    pages: HashMap<(Language, String, String), String>,
}

impl MemoryContent {
    /// Create an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page, replacing any existing one.
    #[must_use]
    pub fn with_page(
        mut self,
        language: Language,
        package: &str,
        slug: &str,
        markdown: &str,
    ) -> Self {
        self.pages.insert(
            (language, package.to_owned(), slug.to_owned()),
            markdown.to_owned(),
        );
        self
    }
}

impl ContentSource for MemoryContent {
    fn read(
        &self,
        language: Language,
        package: &str,
        slug: &str,
    ) -> Result<Option<String>, ContentError> {
        Ok(self
            .pages
            .get(&(language, package.to_owned(), slug.to_owned()))
            .cloned())
    }
}
