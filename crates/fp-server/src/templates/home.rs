//! Home page template.

use std::fmt::Write;

use fp_i18n::Language;
use fp_renderer::escape_html;
use fp_site::Registry;

use super::get_started_path;

/// A package announced on the home page before its documentation exists.
struct Upcoming {
    name: &'static str,
    icon: &'static str,
    en: &'static str,
    pt: &'static str,
}

const UPCOMING: &[Upcoming] = &[
    Upcoming {
        name: "@forgepack/auth-jwt",
        icon: "☕",
        en: "JWT authentication for Spring Boot (Maven)",
        pt: "Autenticação JWT para Spring Boot (Maven)",
    },
    Upcoming {
        name: "@forgepack/crud",
        icon: "🧩",
        en: "Generic CRUD services and controllers",
        pt: "Serviços e controladores CRUD genéricos",
    },
    Upcoming {
        name: "@forgepack/datatable",
        icon: "📊",
        en: "Data tables with sorting, filtering and pagination",
        pt: "Tabelas de dados com ordenação, filtros e paginação",
    },
];

/// Render the body of the home page: hero and package list.
pub(crate) fn render_home_page(
    registry: &Registry,
    repository_url: &str,
    language: Language,
) -> String {
    let bundle = language.bundle();
    let hero = &bundle.hero;
    let strings = &bundle.packages;
    let mut html = String::with_capacity(4096);

    html.push_str("<main>\n<section class=\"hero\">\n");
    let _ = writeln!(html, "<span class=\"badge\">{}</span>", escape_html(hero.badge));
    let _ = writeln!(
        html,
        "<h1>{} <span class=\"highlight\">{}</span></h1>",
        escape_html(hero.title),
        escape_html(hero.title_highlight),
    );
    let _ = writeln!(html, "<p>{}</p>", escape_html(hero.description));
    let _ = writeln!(
        html,
        "<div class=\"actions\"><a href=\"{}\" class=\"btn\">{}</a>\
         <a href=\"{}\" class=\"btn secondary\" rel=\"noopener\">{}</a></div>",
        escape_html(get_started_path(registry)),
        escape_html(hero.cta),
        escape_html(repository_url),
        escape_html(hero.secondary),
    );
    html.push_str("</section>\n");

    html.push_str("<section class=\"packages\">\n");
    let _ = writeln!(
        html,
        "<h2>{}</h2>\n<p>{}</p>\n<div class=\"package-grid\">",
        escape_html(strings.title),
        escape_html(strings.subtitle),
    );
    for package in registry.packages() {
        let _ = writeln!(
            html,
            "<div class=\"package-card\"><span class=\"icon\">{}</span>\
             <h3>{} <small>{}</small></h3><p>{}</p>\
             <a href=\"{}\">{} →</a></div>",
            escape_html(&package.icon),
            escape_html(&package.display_name),
            escape_html(&package.version),
            escape_html(package.description.get(language)),
            escape_html(&package.root),
            escape_html(strings.view_docs),
        );
    }
    for upcoming in UPCOMING {
        let description = match language {
            Language::En => upcoming.en,
            Language::Pt => upcoming.pt,
        };
        let _ = writeln!(
            html,
            "<div class=\"package-card coming-soon\"><span class=\"icon\">{}</span>\
             <h3>{}</h3><p>{}</p><span class=\"badge\">{}</span></div>",
            upcoming.icon,
            escape_html(upcoming.name),
            escape_html(description),
            escape_html(strings.coming_soon),
        );
    }
    html.push_str("</div>\n</section>\n</main>\n");
    html
}
