//! Static file serving.
//!
//! Serves the stylesheet and browser script under `/assets/`.
//! Uses `fp-assets` for asset retrieval in both embedded and filesystem modes.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::extract::Path;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;

use crate::state::AppState;

/// URL prefix for static assets.
pub(crate) const ASSETS_PREFIX: &str = "/assets";

/// Create router for static file serving.
pub(crate) fn static_router() -> Router<Arc<AppState>> {
    Router::new().route("/assets/{*path}", get(serve_asset))
}

/// URL of an asset, for use in page templates.
pub(crate) fn asset_url(path: &str) -> String {
    format!("{ASSETS_PREFIX}/{path}")
}

/// Serve a static asset.
async fn serve_asset(Path(path): Path<String>) -> Response {
    let Some(content) = fp_assets::get(&path) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    (
        [
            (header::CONTENT_TYPE, fp_assets::mime_for(&path)),
            (header::CACHE_CONTROL, "public, max-age=3600".to_owned()),
        ],
        Body::from(content.into_owned()),
    )
        .into_response()
}
