//! Documentation page template.

use std::fmt::Write;

use fp_i18n::Language;
use fp_renderer::{TocEntry, escape_html};
use fp_site::{DocPackage, DocPage, NavItem, Registry};

/// Render the body of a documentation page: sidebar, content, table of contents.
pub(crate) fn render_doc_page(
    page: &DocPage<'_>,
    registry: &Registry,
    language: Language,
) -> String {
    let mut html = String::with_capacity(4096 + page.content.html.len());

    html.push_str("<div class=\"docs-layout\">\n");
    render_sidebar(&mut html, page, registry, language);

    html.push_str("<main class=\"docs-main\">\n");
    render_docs_header(&mut html, page.package, language);

    html.push_str("<article class=\"content\">\n");
    if page.is_placeholder() {
        render_placeholder(&mut html, &page.title, language);
    } else {
        html.push_str(&page.content.html);
    }
    html.push_str("</article>\n");

    render_page_nav(&mut html, page, language);
    render_contribution(&mut html, page, language);
    html.push_str("</main>\n");

    render_toc(&mut html, &page.content.toc, language);
    html.push_str("</div>\n");
    html
}

/// Render the package selector and the package's sidebar sections.
fn render_sidebar(html: &mut String, page: &DocPage<'_>, registry: &Registry, language: Language) {
    html.push_str("<aside class=\"sidebar\">\n<div class=\"package-selector\">\n");
    for package in registry.packages() {
        let active = package.id == page.package.id;
        let _ = writeln!(
            html,
            "<a href=\"{}\"{}><span class=\"icon\">{}</span><span><strong>{}</strong>\
             <span class=\"description\">{}</span></span></a>",
            escape_html(&package.root),
            if active { " class=\"active\"" } else { "" },
            escape_html(&package.icon),
            escape_html(&package.display_name),
            escape_html(package.description.get(language)),
        );
    }
    html.push_str("</div>\n<nav>\n");

    for section in &page.package.sections {
        if section.items.is_empty() {
            continue;
        }
        let _ = writeln!(html, "<h4>{}</h4>\n<ul>", escape_html(section.title.get(language)));
        for item in &section.items {
            let active = item.path == page.path;
            let _ = writeln!(
                html,
                "<li><a href=\"{}\"{}>{}</a></li>",
                escape_html(&item.path),
                if active { " class=\"active\" aria-current=\"page\"" } else { "" },
                escape_html(item.label.get(language)),
            );
        }
        html.push_str("</ul>\n");
    }
    html.push_str("</nav>\n</aside>\n");
}

/// Render the package name, version and registry button.
fn render_docs_header(html: &mut String, package: &DocPackage, language: Language) {
    html.push_str("<div class=\"docs-header\">\n");
    let _ = writeln!(
        html,
        "<strong>{}</strong> <span class=\"version\">{}</span>",
        escape_html(&package.display_name),
        escape_html(&package.version),
    );
    if let Some(url) = &package.registry_url {
        let _ = writeln!(
            html,
            "<a href=\"{}\" class=\"btn secondary\" rel=\"noopener\">{}</a>",
            escape_html(url),
            escape_html(language.bundle().docs.view_on_registry),
        );
    }
    html.push_str("</div>\n");
}

fn render_placeholder(html: &mut String, title: &str, language: Language) {
    let strings = &language.bundle().docs;
    let _ = writeln!(html, "<h1>{}</h1>", escape_html(title));
    let _ = writeln!(
        html,
        "<div class=\"placeholder\"><h2>{}</h2><p>{}</p></div>",
        escape_html(strings.placeholder_title),
        escape_html(strings.placeholder_body),
    );
}

fn nav_link(html: &mut String, item: &NavItem, class: &str, caption: &str, language: Language) {
    let _ = writeln!(
        html,
        "<a href=\"{}\" class=\"{class}\"><small>{}</small>{}</a>",
        escape_html(&item.path),
        escape_html(caption),
        escape_html(item.label.get(language)),
    );
}

/// Render previous/next links.
fn render_page_nav(html: &mut String, page: &DocPage<'_>, language: Language) {
    if page.neighbors.is_empty() {
        return;
    }
    let strings = &language.bundle().docs;

    html.push_str("<nav class=\"page-nav\">\n");
    match page.neighbors.previous {
        Some(item) => nav_link(html, item, "previous", strings.prev_page, language),
        None => html.push_str("<span></span>\n"),
    }
    if let Some(item) = page.neighbors.next {
        nav_link(html, item, "next", strings.next_page, language);
    }
    html.push_str("</nav>\n");
}

/// Render the issue and pull request links.
fn render_contribution(html: &mut String, page: &DocPage<'_>, language: Language) {
    let strings = &language.bundle().docs;
    html.push_str("<section class=\"contribution\">\n");
    let _ = writeln!(
        html,
        "<h3>{}</h3>\n<p>{}</p>",
        escape_html(strings.contribution_title),
        escape_html(strings.found_error),
    );
    let _ = writeln!(
        html,
        "<a href=\"{}\" rel=\"noopener\">{}</a>\n<a href=\"{}\" rel=\"noopener\">{}</a>",
        escape_html(&page.contribution.issue_url),
        escape_html(strings.open_issue),
        escape_html(&page.contribution.pr_url),
        escape_html(strings.open_pr),
    );
    html.push_str("</section>\n");
}

/// Render the table of contents sidebar.
fn render_toc(html: &mut String, toc: &[TocEntry], language: Language) {
    if toc.is_empty() {
        return;
    }
    let _ = writeln!(
        html,
        "<aside class=\"toc\">\n<h4>{}</h4>\n<ul>",
        escape_html(language.bundle().docs.on_this_page)
    );
    for entry in toc {
        let _ = writeln!(
            html,
            "<li class=\"level-{}\"><a href=\"#{}\">{}</a></li>",
            entry.level,
            escape_html(&entry.id),
            escape_html(&entry.title),
        );
    }
    html.push_str("</ul>\n</aside>\n");
}
