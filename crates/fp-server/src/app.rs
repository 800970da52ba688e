//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security::SecurityHeader;
use crate::state::AppState;
use crate::static_files;

/// Create the application router.
///
/// # Arguments
///
/// * `state` - Shared application state
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    // API routes
    let api_routes = Router::new()
        .route("/api/navigation", get(handlers::navigation::get_navigation))
        .route("/api/packages", get(handlers::packages::get_packages))
        .route(
            "/api/language",
            get(handlers::language::get_language).put(handlers::language::put_language),
        )
        .route("/lang/{tag}", get(handlers::language::switch_language));

    // Every other path is a page: home, documentation or not found
    Router::new()
        .merge(api_routes)
        .merge(static_files::static_router())
        .fallback(handlers::pages::get_page)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(SecurityHeader::ContentSecurityPolicy.layer())
                .layer(SecurityHeader::ContentTypeOptions.layer())
                .layer(SecurityHeader::FrameOptions.layer())
                .layer(SecurityHeader::ReferrerPolicy.layer()),
        )
        .with_state(state)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, Response, StatusCode, header};
    use fp_i18n::{Language, LanguageContext};
    use fp_site::{MemoryContent, Registry, Site, forgepack_packages};
    use tower::ServiceExt;

    pub(crate) fn test_state() -> Arc<AppState> {
        let content = MemoryContent::new()
            .with_page(Language::En, "request", "", "# Request\n\nHTTP client.")
            .with_page(Language::Pt, "request", "", "# Request\n\nCliente HTTP.")
            .with_page(
                Language::En,
                "request",
                "getting-started",
                "# Getting Started\n\n## Install\n\n```bash\nnpm install @forgepack/request\n```\n",
            )
            .with_page(Language::En, "leaflet", "", "# Leaflet\n\nMaps.");
        let site = Site::new(
            Registry::new(forgepack_packages()).unwrap(),
            Arc::new(content),
        )
        .with_public_url("http://localhost:7979");

        Arc::new(AppState {
            site,
            language: LanguageContext::new(Language::En),
            version: "0.1.0".to_owned(),
        })
    }

    pub(crate) async fn send(state: &Arc<AppState>, request: Request<Body>) -> Response<Body> {
        create_router(Arc::clone(state)).oneshot(request).await.unwrap()
    }

    pub(crate) fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    pub(crate) async fn body_string(response: Response<Body>) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_security_headers_on_every_response() {
        let state = test_state();
        for uri in ["/", "/docs/request", "/nope", "/api/packages", "/assets/site.css"] {
            let response = send(&state, get(uri)).await;
            let headers = response.headers();
            for security in SecurityHeader::ALL {
                assert_eq!(headers[security.name()], security.value(), "uri {uri}");
            }
        }
    }

    #[tokio::test]
    async fn test_unknown_path_is_html_not_found() {
        let state = test_state();
        let response = send(&state, get("/pricing")).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/html; charset=utf-8"
        );
        assert!(body_string(response).await.contains("Page not found"));
    }
}
