//! Application state.
//!
//! Shared state for all request handlers.

use fp_i18n::LanguageContext;
use fp_site::Site;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Package registry and content.
    pub(crate) site: Site,
    /// Selected site language.
    pub(crate) language: LanguageContext,
    /// Application version for cache invalidation.
    pub(crate) version: String,
}
