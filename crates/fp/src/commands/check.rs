//! `fp check` command implementation.
//!
//! Loads the configuration, builds the package registry (which rejects
//! duplicate IDs and overlapping roots) and lists every page that has no
//! content file in some language.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use fp_config::Config;
use fp_i18n::Language;
use fp_site::{FsContent, MissingPage, Site};

use crate::error::CliError;
use crate::output::{Output, Tone};

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover fp.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Result of checking the site content.
#[derive(Debug)]
pub(crate) struct CheckReport {
    /// Number of documentation pages across all packages.
    pub(crate) pages: usize,
    /// Pages without content, grouped by language.
    pub(crate) missing: BTreeMap<Language, Vec<MissingPage>>,
}

impl CheckReport {
    fn missing_count(&self) -> usize {
        self.missing.values().map(Vec::len).sum()
    }
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or registry is invalid, or a
    /// content file cannot be read.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = Config::load(self.config.as_deref(), None)?;
        config.validate()?;

        if let Some(path) = &config.config_path {
            output.setting("Configuration", path.display());
        }
        output.setting("Content directory", config.site_resolved.content_dir.display());

        let report = check(&config)?;

        for (language, pages) in &report.missing {
            output.line(
                Tone::Warning,
                &format!(
                    "{} pages without {} content:",
                    pages.len(),
                    language.native_name()
                ),
            );
            for page in pages {
                output.line(Tone::Warning, &format!("  {} ({})", page.path, page.package));
            }
        }

        let missing = report.missing_count();
        if missing == 0 {
            output.line(
                Tone::Success,
                &format!("All {} pages have content", report.pages),
            );
        } else {
            output.line(
                Tone::Success,
                &format!(
                    "Registry is valid: {} pages, {missing} shown as placeholders",
                    report.pages
                ),
            );
        }
        Ok(())
    }
}

/// Build the site from `config` and collect pages without content.
fn check(config: &Config) -> Result<CheckReport, CliError> {
    let registry = config.registry()?;
    let pages = registry.doc_paths().count();
    tracing::info!(pages, "Registry built");

    let content = Arc::new(FsContent::new(config.site_resolved.content_dir.clone()));
    let site = Site::new(registry, content);

    let mut missing: BTreeMap<Language, Vec<MissingPage>> = BTreeMap::new();
    for page in site.missing_content()? {
        missing.entry(page.language).or_default().push(page);
    }
    Ok(CheckReport { pages, missing })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fp_config::ConfigError;
    use fp_site::RegistryError;
    use pretty_assertions::assert_eq;
    use std::fs;

    const CONFIG: &str = r#"
[site]
content_dir = "content"

[[packages]]
id = "request"
display_name = "@forgepack/request"
version = "v1.1.1"
root = "/docs/request"
description = { en = "HTTP client", pt = "Cliente HTTP" }

[[packages.sections]]
title = { en = "Overview", pt = "Visão Geral" }
items = [
    { label = { en = "Overview", pt = "Visão Geral" }, path = "/docs/request" },
    { label = { en = "Getting Started", pt = "Primeiros Passos" }, path = "/docs/request/getting-started" },
]
"#;

    fn write(root: &std::path::Path, relative: &str, contents: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn test_check_groups_missing_pages_by_language() {
        let temp = tempfile::tempdir().unwrap();
        write(temp.path(), "fp.toml", CONFIG);
        write(temp.path(), "content/en/request/index.md", "# Request\n");
        write(temp.path(), "content/en/request/getting-started.md", "# Start\n");
        write(temp.path(), "content/pt/request/index.md", "# Request\n");

        let config = Config::load(Some(temp.path().join("fp.toml").as_path()), None).unwrap();
        let report = check(&config).unwrap();

        assert_eq!(report.pages, 2);
        assert_eq!(report.missing_count(), 1);
        assert!(!report.missing.contains_key(&Language::En));
        let pt = &report.missing[&Language::Pt];
        assert_eq!(pt[0].path, "/docs/request/getting-started");
        assert_eq!(pt[0].package, "request");
    }

    #[test]
    fn test_check_without_content_dir_reports_everything() {
        let temp = tempfile::tempdir().unwrap();
        write(temp.path(), "fp.toml", CONFIG);

        let config = Config::load(Some(temp.path().join("fp.toml").as_path()), None).unwrap();
        let report = check(&config).unwrap();

        assert_eq!(report.missing_count(), 4);
    }

    #[test]
    fn test_overlapping_roots_fail_before_check() {
        let temp = tempfile::tempdir().unwrap();
        let config = format!(
            "{CONFIG}\n[[packages]]\nid = \"requests\"\ndisplay_name = \"@forgepack/requests\"\n\
             version = \"v1.0.0\"\nroot = \"/docs/requests\"\ndescription = {{ en = \"b\", pt = \"b\" }}\n"
        );
        write(temp.path(), "fp.toml", &config);

        let result = Config::load(Some(temp.path().join("fp.toml").as_path()), None);

        assert!(matches!(
            result.map_err(CliError::from),
            Err(CliError::Config(ConfigError::Registry(
                RegistryError::OverlappingRoots { .. }
            )))
        ));
    }
}
