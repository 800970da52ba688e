//! Not found page template.

use std::fmt::Write;

use fp_i18n::Language;
use fp_renderer::escape_html;

/// Render the body of the 404 page.
pub(crate) fn render_not_found_page(path: &str, language: Language) -> String {
    let strings = &language.bundle().docs;
    let mut html = String::with_capacity(512);

    html.push_str("<main class=\"not-found\">\n<h1>404</h1>\n");
    let _ = writeln!(html, "<h2>{}</h2>", escape_html(strings.not_found_title));
    let _ = writeln!(
        html,
        "<p>{}</p>\n<p><code>{}</code></p>",
        escape_html(strings.not_found_body),
        escape_html(path),
    );
    let _ = writeln!(
        html,
        "<a href=\"/\" class=\"btn\">{}</a>",
        escape_html(strings.back_home)
    );
    html.push_str("</main>\n");
    html
}
