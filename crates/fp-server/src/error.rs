//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use fp_i18n::UnknownLanguage;
use fp_site::ContentError;
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// Content file exists but could not be read.
    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    /// Language tag outside the supported set.
    #[error(transparent)]
    UnknownLanguage(#[from] UnknownLanguage),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Content(e) => {
                tracing::error!(error = %e, "Failed to read content");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({"error": "Failed to read content"}),
                )
            }
            Self::UnknownLanguage(e) => (
                StatusCode::BAD_REQUEST,
                json!({"error": e.to_string(), "language": e.0}),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_language_is_bad_request() {
        let response = ServerError::from(UnknownLanguage("fr".to_owned())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_content_error_is_internal() {
        let error = ContentError {
            path: "content/en/request/index.md".into(),
            source: std::io::Error::other("denied"),
        };
        let response = ServerError::from(error).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
