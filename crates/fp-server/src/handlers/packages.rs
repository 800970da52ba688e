//! Package selector API endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::handlers::PackageSummary;
use crate::state::AppState;

/// Query parameters for GET /api/packages.
#[derive(Deserialize)]
pub(crate) struct PackagesQuery {
    /// Current page path, used to flag the active package.
    path: Option<String>,
}

/// Response for GET /api/packages.
#[derive(Serialize)]
struct PackagesResponse<'a> {
    packages: Vec<PackageSummary<'a>>,
}

/// Handle GET /api/packages.
pub(crate) async fn get_packages(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PackagesQuery>,
) -> Response {
    let language = state.language.get();
    let registry = state.site.registry();
    let active = registry.resolve(query.path.as_deref().unwrap_or("/"));

    let packages = registry
        .packages()
        .iter()
        .map(|package| PackageSummary::new(package, language, package.id == active.id))
        .collect();

    Json(PackagesResponse { packages }).into_response()
}
