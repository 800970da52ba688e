//! Security response headers.
//!
//! Pages are fully server-rendered and load only `/assets/site.css` and
//! `/assets/site.js`, so the content policy allows nothing but this origin.
//! The language switch returns to the `Referer` path, which the referrer
//! policy keeps for same-origin navigation.

use axum::http::HeaderValue;
use axum::http::header::{self, HeaderName};
use tower_http::set_header::SetResponseHeaderLayer;

/// A header added to every response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SecurityHeader {
    ContentSecurityPolicy,
    ContentTypeOptions,
    FrameOptions,
    ReferrerPolicy,
}

impl SecurityHeader {
    pub(crate) const ALL: [Self; 4] = [
        Self::ContentSecurityPolicy,
        Self::ContentTypeOptions,
        Self::FrameOptions,
        Self::ReferrerPolicy,
    ];

    pub(crate) fn name(self) -> HeaderName {
        match self {
            Self::ContentSecurityPolicy => header::CONTENT_SECURITY_POLICY,
            Self::ContentTypeOptions => header::X_CONTENT_TYPE_OPTIONS,
            Self::FrameOptions => header::X_FRAME_OPTIONS,
            Self::ReferrerPolicy => header::REFERRER_POLICY,
        }
    }

    pub(crate) fn value(self) -> &'static str {
        match self {
            Self::ContentSecurityPolicy => {
                "default-src 'self'; script-src 'self'; style-src 'self'; \
                 img-src 'self' data:; connect-src 'self'; \
                 base-uri 'self'; form-action 'self'; frame-ancestors 'none'"
            }
            Self::ContentTypeOptions => "nosniff",
            Self::FrameOptions => "DENY",
            Self::ReferrerPolicy => "strict-origin-when-cross-origin",
        }
    }

    /// Layer that sets this header, replacing any value a handler wrote.
    pub(crate) fn layer(self) -> SetResponseHeaderLayer<HeaderValue> {
        SetResponseHeaderLayer::overriding(self.name(), HeaderValue::from_static(self.value()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn test_header_names_are_distinct() {
        let names: HashSet<_> = SecurityHeader::ALL.iter().map(|h| h.name()).collect();
        assert_eq!(names.len(), SecurityHeader::ALL.len());
    }

    #[test]
    fn test_policy_allows_only_own_origin() {
        let csp = SecurityHeader::ContentSecurityPolicy.value();
        assert!(csp.contains("script-src 'self';"));
        assert!(csp.contains("style-src 'self';"));
        assert!(csp.contains("frame-ancestors 'none'"));
        assert!(!csp.contains("unsafe-inline"));
        assert!(!csp.contains("https:"));
    }
}
