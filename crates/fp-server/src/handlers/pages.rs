//! HTML pages.
//!
//! Every path that isn't an API route or an asset lands here and is routed
//! through the registry to the home page, a documentation page, or the
//! not found page.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, Uri, header};
use axum::response::{Html, IntoResponse, Response};
use fp_i18n::Language;
use fp_site::Route;
use md5::{Digest, Md5};

use crate::error::ServerError;
use crate::state::AppState;
use crate::templates::{
    ActiveNav, Chrome, render_doc_page, render_home_page, render_not_found_page, render_page,
};

/// Handle any page request.
pub(crate) async fn get_page(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    let language = state.language.get();
    let site = &state.site;
    let registry = site.registry();

    let html = match registry.route(uri.path()) {
        Route::Home => {
            let body = render_home_page(registry, site.repository_url(), language);
            let shell = chrome(&state, language, "/", ActiveNav::Home);
            render_page(&shell, language.bundle().nav.home, &body, true)
        }
        Route::Doc(route) => {
            let page = site.render_doc(&route, language)?;
            let body = render_doc_page(&page, registry, language);
            let shell = chrome(&state, language, &route.path, ActiveNav::Docs);
            render_page(&shell, &page.title, &body, false)
        }
        Route::NotFound => {
            tracing::debug!(path = %uri.path(), "No page registered");
            let body = render_not_found_page(uri.path(), language);
            let shell = chrome(&state, language, uri.path(), ActiveNav::None);
            let html = render_page(
                &shell,
                language.bundle().docs.not_found_title,
                &body,
                false,
            );
            return Ok((StatusCode::NOT_FOUND, Html(html)).into_response());
        }
    };

    let etag = compute_etag(&state.version, language, &html);

    // Check If-None-Match header for conditional request
    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && if_none_match.as_bytes() == etag.as_bytes()
    {
        return Ok((StatusCode::NOT_MODIFIED, [(header::ETAG, etag)]).into_response());
    }

    // The language can change between requests, so caches must revalidate
    Ok((
        [
            (header::ETAG, etag),
            (header::CACHE_CONTROL, "no-cache".to_owned()),
        ],
        Html(html),
    )
        .into_response())
}

fn chrome<'a>(
    state: &'a AppState,
    language: Language,
    path: &'a str,
    active: ActiveNav,
) -> Chrome<'a> {
    Chrome {
        language,
        path,
        active,
        registry: state.site.registry(),
        repository_url: state.site.repository_url(),
    }
}

/// Compute `ETag` from version, language and content.
///
/// Uses MD5 hash truncated to 64 bits (16 hex chars) - sufficient for
/// cache invalidation with negligible collision probability.
fn compute_etag(version: &str, language: Language, content: &str) -> String {
    let hash = Md5::digest(format!("{version}:{language}:{content}").as_bytes());
    format!("\"{}\"", &hex::encode(hash)[..16])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::{body_string, get, send, test_state};
    use axum::body::Body;
    use axum::http::Request;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_compute_etag_includes_version() {
        let etag1 = compute_etag("1.0.0", Language::En, "content");
        let etag2 = compute_etag("1.0.1", Language::En, "content");

        assert_ne!(etag1, etag2);
    }

    #[test]
    fn test_compute_etag_includes_language() {
        let etag1 = compute_etag("1.0.0", Language::En, "content");
        let etag2 = compute_etag("1.0.0", Language::Pt, "content");

        assert_ne!(etag1, etag2);
    }

    #[test]
    fn test_compute_etag_format() {
        let etag = compute_etag("1.0.0", Language::En, "content");

        assert!(etag.starts_with('"'));
        assert!(etag.ends_with('"'));
        // 16 hex chars + 2 quotes = 18 total
        assert_eq!(etag.len(), 18);
    }

    #[tokio::test]
    async fn test_home_page() {
        let state = test_state();
        let response = send(&state, get("/")).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(header::ETAG));
        let html = body_string(response).await;
        assert!(html.contains("<title>Home | Forgepack</title>"));
        assert!(html.contains("site-footer"));
    }

    #[tokio::test]
    async fn test_doc_page_renders_content() {
        let state = test_state();
        let response = send(&state, get("/docs/request/getting-started/")).await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("<title>Getting Started | Forgepack</title>"));
        assert!(html.contains("<code class=\"language-bash\">"));
        assert!(html.contains("<a href=\"#install\">Install</a>"));
        assert!(!html.contains("site-footer"));
    }

    #[tokio::test]
    async fn test_listed_page_without_content_is_placeholder() {
        let state = test_state();
        let response = send(&state, get("/docs/leaflet/examples/markers")).await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("class=\"placeholder\""));
        assert!(html.contains("<h1>Marker Management</h1>"));
    }

    #[tokio::test]
    async fn test_unlisted_doc_path_is_not_found() {
        let state = test_state();
        let response = send(&state, get("/docs/request/does-not-exist")).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(!response.headers().contains_key(header::ETAG));
    }

    #[tokio::test]
    async fn test_if_none_match_returns_not_modified() {
        let state = test_state();
        let first = send(&state, get("/docs/request")).await;
        let etag = first.headers()[header::ETAG].clone();

        let request = Request::builder()
            .uri("/docs/request")
            .header(header::IF_NONE_MATCH, etag)
            .body(Body::empty())
            .unwrap();
        let second = send(&state, request).await;

        assert_eq!(second.status(), StatusCode::NOT_MODIFIED);
    }

    #[tokio::test]
    async fn test_language_switch_changes_rendered_page_and_etag() {
        let state = test_state();
        let english = send(&state, get("/docs/request")).await;
        let english_etag = english.headers()[header::ETAG].clone();

        state.language.set(Language::Pt);
        let portuguese = send(&state, get("/docs/request")).await;

        assert_ne!(portuguese.headers()[header::ETAG], english_etag);
        let html = body_string(portuguese).await;
        assert!(html.contains("<html lang=\"pt\">"));
        assert!(html.contains("Cliente HTTP."));
        assert!(html.contains("<small>Próximo</small>"));
    }

    #[tokio::test]
    async fn test_missing_translation_falls_back_to_default_language() {
        let state = test_state();
        state.language.set(Language::Pt);

        let html = body_string(send(&state, get("/docs/leaflet")).await).await;

        // Content comes from the English file, chrome stays Portuguese
        assert!(html.contains("Maps."));
        assert!(html.contains("<small>Próximo</small>Primeiros Passos"));
    }
}
