//! HTML page templates.
//!
//! Every page shares the same shell: header with navigation and language
//! toggle, a page body, and (on the home page) the footer. Pages receive the
//! language explicitly; nothing here reads the shared language setting.

mod doc;
mod home;
mod not_found;

use std::fmt::Write;

use fp_i18n::Language;
use fp_renderer::escape_html;
use fp_site::Registry;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

pub(crate) use doc::render_doc_page;
pub(crate) use home::render_home_page;
pub(crate) use not_found::render_not_found_page;

use crate::static_files::asset_url;

/// Bytes escaped in a query value; `/` is kept so paths stay readable.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Header link highlighted for the current page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ActiveNav {
    Home,
    Docs,
    None,
}

/// Data shared by every page shell.
pub(crate) struct Chrome<'a> {
    /// Language for all UI strings.
    pub(crate) language: Language,
    /// Request path, used as the return target of the language toggle.
    pub(crate) path: &'a str,
    /// Highlighted header link.
    pub(crate) active: ActiveNav,
    /// Package registry (for the docs and get-started links).
    pub(crate) registry: &'a Registry,
    /// Site repository URL.
    pub(crate) repository_url: &'a str,
}

/// Path of the "Get started" page: the default package's getting-started
/// entry, or its root when it has none.
pub(crate) fn get_started_path(registry: &Registry) -> &str {
    let package = registry.default_package();
    package
        .pages()
        .find(|item| package.relative(&item.path) == Some("getting-started"))
        .map_or(package.root.as_str(), |item| item.path.as_str())
}

/// Render a complete HTML page.
pub(crate) fn render_page(chrome: &Chrome<'_>, title: &str, body: &str, footer: bool) -> String {
    let mut html = String::with_capacity(8192 + body.len());

    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"{}\">\n<head>\n",
        chrome.language.tag()
    );
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(html, "<title>{} | Forgepack</title>", escape_html(title));
    let _ = writeln!(
        html,
        "<link rel=\"stylesheet\" href=\"{}\">",
        asset_url(fp_assets::STYLESHEET)
    );
    let _ = writeln!(
        html,
        "<script src=\"{}\" defer></script>",
        asset_url(fp_assets::SCRIPT)
    );
    html.push_str("</head>\n<body>\n");

    render_header(&mut html, chrome);
    html.push_str(body);
    if footer {
        render_footer(&mut html, chrome);
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn active_class(active: bool) -> &'static str {
    if active { " class=\"active\"" } else { "" }
}

/// Render the site header.
fn render_header(html: &mut String, chrome: &Chrome<'_>) {
    let strings = &chrome.language.bundle().nav;
    let docs_path = &chrome.registry.default_package().root;

    html.push_str("<header class=\"site-header\">\n");
    html.push_str("<a href=\"/\" class=\"brand\">Forgepack</a>\n<nav>\n");
    let _ = writeln!(
        html,
        "<a href=\"/\"{}>{}</a>",
        active_class(chrome.active == ActiveNav::Home),
        escape_html(strings.home)
    );
    let _ = writeln!(
        html,
        "<a href=\"{}\"{}>{}</a>",
        escape_html(docs_path),
        active_class(chrome.active == ActiveNav::Docs),
        escape_html(strings.docs)
    );
    let _ = writeln!(
        html,
        "<a href=\"{}\" rel=\"noopener\">{}</a>",
        escape_html(chrome.repository_url),
        escape_html(strings.github)
    );
    html.push_str("</nav>\n");

    html.push_str("<div class=\"lang-toggle\">\n");
    let next = utf8_percent_encode(chrome.path, QUERY_VALUE).to_string();
    for language in Language::ALL {
        let _ = writeln!(
            html,
            "<a href=\"/lang/{}?next={}\" hreflang=\"{}\" title=\"{}\"{}>{}</a>",
            language.tag(),
            escape_html(&next),
            language.tag(),
            language.native_name(),
            active_class(language == chrome.language),
            language.tag().to_ascii_uppercase()
        );
    }
    html.push_str("</div>\n");

    let _ = writeln!(
        html,
        "<a href=\"{}\" class=\"btn\">{}</a>",
        escape_html(get_started_path(chrome.registry)),
        escape_html(strings.get_started)
    );
    html.push_str("</header>\n");
}

/// Render the site footer.
fn render_footer(html: &mut String, chrome: &Chrome<'_>) {
    let strings = &chrome.language.bundle().footer;
    let repository = escape_html(chrome.repository_url);

    html.push_str("<footer class=\"site-footer\">\n<div class=\"columns\">\n");
    let _ = writeln!(
        html,
        "<div><strong>Forgepack</strong><p>{}</p></div>",
        escape_html(strings.description)
    );

    let _ = writeln!(html, "<div><h4>{}</h4>\n<ul>", escape_html(strings.resources));
    let _ = writeln!(
        html,
        "<li><a href=\"{}\">{}</a></li>",
        escape_html(&chrome.registry.default_package().root),
        escape_html(strings.documentation)
    );
    let _ = writeln!(
        html,
        "<li><a href=\"{repository}/releases\">{}</a></li>",
        escape_html(strings.changelog)
    );
    html.push_str("</ul></div>\n");

    let _ = writeln!(html, "<div><h4>{}</h4>\n<ul>", escape_html(strings.community));
    let _ = writeln!(html, "<li><a href=\"{repository}\">GitHub</a></li>");
    let _ = writeln!(
        html,
        "<li><a href=\"{repository}/discussions\">Discussions</a></li>"
    );
    html.push_str("</ul></div>\n");

    let _ = writeln!(html, "<div><h4>{}</h4>\n<ul>", escape_html(strings.legal));
    let _ = writeln!(
        html,
        "<li><a href=\"{repository}/blob/main/LICENSE\">{}</a></li>",
        escape_html(strings.license)
    );
    html.push_str("</ul></div>\n</div>\n");

    let _ = writeln!(html, "<p>{}</p>", escape_html(strings.copyright));
    html.push_str("</footer>\n");
}
