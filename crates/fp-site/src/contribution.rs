//! "Edit this page" style links into the package repository.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;

/// Characters left unescaped by `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Links for reporting a documentation problem.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionLinks {
    /// New issue, prefilled with the documentation template and page URL.
    pub issue_url: String,
    /// Compare view for opening a pull request.
    pub pr_url: String,
}

impl ContributionLinks {
    /// Build links for `page_url` in `repository_url`.
    #[must_use]
    pub fn new(repository_url: &str, page_url: &str) -> Self {
        let repository_url = repository_url.trim_end_matches('/');
        let page_url = utf8_percent_encode(page_url, COMPONENT);
        Self {
            issue_url: format!(
                "{repository_url}/issues/new?template=documentation-issue.md\
                 &title=Documentation%20Issue%3A%20\
                 &body=**Page%20URL%3A**%20{page_url}%0A%0A\
                 **Issue%20Description%3A**%0A%0A**Expected%3A**%0A%0A**Actual%3A**%0A"
            ),
            pr_url: format!("{repository_url}/compare"),
        }
    }
}
