//! HTTP server for the forgepack documentation site.
//!
//! This crate provides a native Rust HTTP server using axum, serving:
//! - Server-rendered HTML for the home page and every documentation page
//! - API endpoints for navigation, the package selector and the language setting
//! - Static stylesheet and script assets
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use fp_i18n::Language;
//! use fp_server::{ServerConfig, run_server};
//! use fp_site::{Registry, forgepack_packages};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_owned(),
//!         port: 7979,
//!         content_dir: PathBuf::from("content"),
//!         default_language: Language::En,
//!         repository_url: "https://github.com/forgepack/docs".to_owned(),
//!         public_url: None,
//!         registry: Registry::new(forgepack_packages()).unwrap(),
//!         version: "0.1.0".to_owned(),
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► axum server (fp-server)
//!                        │
//!                        ├─► Page fallback ──► Registry::route ──► Site::render_doc ──► templates
//!                        │
//!                        ├─► API routes (navigation, packages, language)
//!                        │
//!                        └─► /assets/* (embedded or from disk)
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;
mod static_files;
mod templates;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use fp_i18n::{Language, LanguageContext};
use fp_site::{FsContent, Registry, Site};
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Content directory.
    pub content_dir: PathBuf,
    /// Language selected at startup, also the content fallback.
    pub default_language: Language,
    /// Repository for contribution links of packages without their own.
    pub repository_url: String,
    /// Public base URL (defaults to `http://{host}:{port}`).
    pub public_url: Option<String>,
    /// Documentation packages.
    pub registry: Registry,
    /// Application version (for cache invalidation).
    pub version: String,
}

impl ServerConfig {
    /// Base URL used in links that leave the site.
    #[must_use]
    pub fn public_url(&self) -> String {
        self.public_url
            .clone()
            .unwrap_or_else(|| format!("http://{}:{}", self.host, self.port))
    }
}

/// Run the server.
///
/// # Arguments
///
/// * `config` - Server configuration
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let public_url = config.public_url();
    let content = Arc::new(FsContent::new(config.content_dir.clone()));
    let site = Site::new(config.registry, content)
        .with_fallback_language(config.default_language)
        .with_repository_url(config.repository_url)
        .with_public_url(public_url);

    let state = Arc::new(AppState {
        site,
        language: LanguageContext::new(config.default_language),
        version: config.version,
    });

    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(
        address = %addr,
        content_dir = %config.content_dir.display(),
        language = %config.default_language,
        "Starting server"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from the site config.
///
/// # Arguments
///
/// * `config` - Loaded configuration
/// * `version` - Application version
///
/// # Errors
///
/// Returns an error if the package registry is malformed.
pub fn server_config_from_fp_config(
    config: &fp_config::Config,
    version: String,
) -> Result<ServerConfig, fp_config::ConfigError> {
    Ok(ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        content_dir: config.site_resolved.content_dir.clone(),
        default_language: config.site_resolved.default_language,
        repository_url: config.site_resolved.repository_url.clone(),
        public_url: config.site_resolved.public_url.clone(),
        registry: config.registry()?,
        version,
    })
}
