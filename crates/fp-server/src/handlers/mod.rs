//! HTTP request handlers.

pub(crate) mod language;
pub(crate) mod navigation;
pub(crate) mod packages;
pub(crate) mod pages;

use fp_i18n::Language;
use fp_site::DocPackage;
use serde::Serialize;

/// Package metadata shared by the navigation and package selector endpoints.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PackageSummary<'a> {
    id: &'a str,
    display_name: &'a str,
    version: &'a str,
    description: &'a str,
    icon: &'a str,
    root: &'a str,
    repository_url: Option<&'a str>,
    registry_url: Option<&'a str>,
    active: bool,
}

impl<'a> PackageSummary<'a> {
    pub(crate) fn new(package: &'a DocPackage, language: Language, active: bool) -> Self {
        Self {
            id: &package.id,
            display_name: &package.display_name,
            version: &package.version,
            description: package.description.get(language),
            icon: &package.icon,
            root: &package.root,
            repository_url: package.repository_url.as_deref(),
            registry_url: package.registry_url.as_deref(),
            active,
        }
    }
}
