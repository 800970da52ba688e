//! Built-in package registry for the forgepack site.
//!
//! Used when the configuration file doesn't declare `[[packages]]`.

use fp_i18n::Localized;

use crate::registry::{DocPackage, NavItem, Section};

fn item(en: &str, pt: &str, path: &str) -> NavItem {
    NavItem {
        label: Localized::new(en, pt),
        path: path.to_owned(),
    }
}

fn section(en: &str, pt: &str, items: Vec<NavItem>) -> Section {
    Section {
        title: Localized::new(en, pt),
        items,
    }
}

/// The `@forgepack/request` and `@forgepack/leaflet` documentation sets.
#[must_use]
pub fn forgepack_packages() -> Vec<DocPackage> {
    vec![request(), leaflet()]
}

fn request() -> DocPackage {
    DocPackage {
        id: "request".to_owned(),
        display_name: "@forgepack/request".to_owned(),
        version: "v1.1.1".to_owned(),
        repository_url: Some("https://github.com/forgepack/request".to_owned()),
        registry_url: Some("https://www.npmjs.com/package/@forgepack/request".to_owned()),
        description: Localized::new(
            "HTTP client with JWT authentication",
            "Cliente HTTP com autenticação JWT",
        ),
        icon: "🔐".to_owned(),
        root: "/docs/request".to_owned(),
        default: true,
        sections: vec![
            section(
                "Overview",
                "Visão Geral",
                vec![
                    item("Overview", "Visão Geral", "/docs/request"),
                    item("Getting Started", "Primeiros Passos", "/docs/request/getting-started"),
                    item("Quick Start", "Início Rápido", "/docs/request/quick-start"),
                ],
            ),
            section(
                "Guides",
                "Guias",
                vec![
                    item("Authentication", "Autenticação", "/docs/request/authentication"),
                    item("Route Protection", "Proteção de Rotas", "/docs/request/route-protection"),
                    item(
                        "Requests & Pagination",
                        "Requisições e Paginação",
                        "/docs/request/requests",
                    ),
                    item("CRUD Operations", "Operações CRUD", "/docs/request/crud-operations"),
                    item(
                        "Token Management",
                        "Gerenciamento de Tokens",
                        "/docs/request/token-management",
                    ),
                ],
            ),
            section(
                "API Reference",
                "Referência da API",
                vec![
                    item("Hooks", "Hooks", "/docs/request/reference/hooks"),
                    item("Components", "Componentes", "/docs/request/reference/components"),
                    item("Services", "Serviços", "/docs/request/reference/services"),
                    item("TypeScript Types", "Tipos TypeScript", "/docs/request/reference/types"),
                    item("Utilities", "Utilitários", "/docs/request/reference/utilities"),
                ],
            ),
            section(
                "Examples",
                "Exemplos",
                vec![
                    item("Login Form", "Formulário de Login", "/docs/request/examples/login-form"),
                    item("Dashboard", "Dashboard", "/docs/request/examples/dashboard"),
                    item("Users List", "Lista de Usuários", "/docs/request/examples/users-list"),
                ],
            ),
        ],
    }
}

fn leaflet() -> DocPackage {
    DocPackage {
        id: "leaflet".to_owned(),
        display_name: "@forgepack/leaflet".to_owned(),
        version: "v1.0.0".to_owned(),
        repository_url: Some("https://github.com/forgepack/leaflet".to_owned()),
        registry_url: Some("https://www.npmjs.com/package/@forgepack/leaflet".to_owned()),
        description: Localized::new(
            "Interactive maps and geospatial data",
            "Mapas interativos e dados geoespaciais",
        ),
        icon: "🗺️".to_owned(),
        root: "/docs/leaflet".to_owned(),
        default: false,
        sections: vec![
            section(
                "Overview",
                "Visão Geral",
                vec![
                    item("Overview", "Visão Geral", "/docs/leaflet"),
                    item("Getting Started", "Primeiros Passos", "/docs/leaflet/getting-started"),
                ],
            ),
            section(
                "Examples",
                "Exemplos",
                vec![
                    item(
                        "Basic Map Setup",
                        "Configuração Básica de Mapa",
                        "/docs/leaflet/examples/basic-map",
                    ),
                    item(
                        "Marker Management",
                        "Gerenciamento de Marcadores",
                        "/docs/leaflet/examples/markers",
                    ),
                    item(
                        "Route Planning",
                        "Planejamento de Rotas",
                        "/docs/leaflet/examples/route-planning",
                    ),
                    item(
                        "Image Overlays",
                        "Sobreposições de Imagem",
                        "/docs/leaflet/examples/image-overlays",
                    ),
                ],
            ),
            section(
                "API Reference",
                "Referência da API",
                vec![
                    item("Components", "Componentes", "/docs/leaflet/reference/components"),
                    item("Hooks", "Hooks", "/docs/leaflet/reference/hooks"),
                    item("Services", "Serviços", "/docs/leaflet/reference/services"),
                    item("TypeScript Types", "Tipos TypeScript", "/docs/leaflet/reference/types"),
                    item("Utilities", "Utilitários", "/docs/leaflet/reference/utilities"),
                ],
            ),
        ],
    }
}
