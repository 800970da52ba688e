//! Navigation API endpoint.
//!
//! Returns the sidebar and previous/next links for a path, localized to the
//! current language.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use fp_i18n::Language;
use fp_site::{NavItem, normalize_path};
use serde::{Deserialize, Serialize};

use crate::handlers::PackageSummary;
use crate::state::AppState;

/// Query parameters for GET /api/navigation.
#[derive(Deserialize)]
pub(crate) struct NavigationQuery {
    /// Current page path (defaults to `/`).
    path: Option<String>,
}

/// Response for GET /api/navigation.
#[derive(Serialize)]
struct NavigationResponse<'a> {
    /// Language the labels are in.
    language: Language,
    /// Active package.
    package: PackageSummary<'a>,
    /// Sidebar sections of the active package.
    sections: Vec<SectionResponse<'a>>,
    /// Previous page in reading order.
    previous: Option<LinkResponse<'a>>,
    /// Next page in reading order.
    next: Option<LinkResponse<'a>>,
}

#[derive(Serialize)]
struct SectionResponse<'a> {
    title: &'a str,
    items: Vec<LinkResponse<'a>>,
}

#[derive(Serialize)]
struct LinkResponse<'a> {
    label: &'a str,
    path: &'a str,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    active: bool,
}

impl<'a> LinkResponse<'a> {
    fn new(item: &'a NavItem, language: Language, active: bool) -> Self {
        Self {
            label: item.label.get(language),
            path: &item.path,
            active,
        }
    }
}

/// Handle GET /api/navigation.
pub(crate) async fn get_navigation(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NavigationQuery>,
) -> Response {
    let language = state.language.get();
    let path = normalize_path(query.path.as_deref().unwrap_or("/"));
    let package = state.site.registry().resolve(&path);
    let neighbors = package.neighbors(&path);

    let sections = package
        .sections
        .iter()
        .map(|section| SectionResponse {
            title: section.title.get(language),
            items: section
                .items
                .iter()
                .map(|item| LinkResponse::new(item, language, item.path == path))
                .collect(),
        })
        .collect();

    Json(NavigationResponse {
        language,
        package: PackageSummary::new(package, language, true),
        sections,
        previous: neighbors.previous.map(|item| LinkResponse::new(item, language, false)),
        next: neighbors.next.map(|item| LinkResponse::new(item, language, false)),
    })
    .into_response()
}
