//! Language setting endpoints.
//!
//! The language is a single process-wide setting. It changes only through
//! these handlers.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, header};
use axum::response::Redirect;
use fp_i18n::Language;
use serde::{Deserialize, Serialize};

use crate::error::ServerError;
use crate::state::AppState;

/// Body of GET and PUT /api/language.
#[derive(Serialize)]
pub(crate) struct LanguageResponse {
    language: Language,
}

/// Body of PUT /api/language.
#[derive(Deserialize)]
pub(crate) struct LanguageRequest {
    language: String,
}

/// Query parameters for GET /lang/{tag}.
#[derive(Deserialize)]
pub(crate) struct SwitchQuery {
    /// Local path to return to.
    next: Option<String>,
}

/// Handle GET /api/language.
pub(crate) async fn get_language(State(state): State<Arc<AppState>>) -> Json<LanguageResponse> {
    Json(LanguageResponse {
        language: state.language.get(),
    })
}

/// Handle PUT /api/language.
pub(crate) async fn put_language(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LanguageRequest>,
) -> Result<Json<LanguageResponse>, ServerError> {
    let language: Language = request.language.parse()?;
    state.language.set(language);
    Ok(Json(LanguageResponse { language }))
}

/// Handle GET /lang/{tag}: switch language and go back to the page.
pub(crate) async fn switch_language(
    State(state): State<Arc<AppState>>,
    Path(tag): Path<String>,
    Query(query): Query<SwitchQuery>,
    headers: HeaderMap,
) -> Result<Redirect, ServerError> {
    let language: Language = tag.parse()?;

    let referer = headers
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok());
    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok());

    let target = query
        .next
        .as_deref()
        .filter(|next| is_local_path(next))
        .or_else(|| referer.and_then(|referer| same_site_path(referer, host)))
        .unwrap_or("/");

    state.language.set(language);
    Ok(Redirect::to(target))
}

/// Whether `path` is a path on this site (not a scheme-relative URL).
///
/// Browsers drop tabs and newlines from URLs, so `/\t/host` would turn into
/// `//host`; any control or whitespace character disqualifies the path.
fn is_local_path(path: &str) -> bool {
    path.starts_with('/')
        && !path.starts_with("//")
        && !path
            .chars()
            .any(|c| c == '\\' || c.is_control() || c.is_whitespace())
}

/// Path part of `referer` when it points at `host`.
fn same_site_path<'a>(referer: &'a str, host: Option<&str>) -> Option<&'a str> {
    let rest = referer
        .strip_prefix("http://")
        .or_else(|| referer.strip_prefix("https://"))?;
    let (authority, path) = rest.find('/').map_or((rest, "/"), |i| rest.split_at(i));
    if Some(authority) != host {
        return None;
    }
    Some(path).filter(|path| is_local_path(path))
}
