//! UI string bundles.
//!
//! Only page chrome lives here. Sidebar labels and package descriptions are
//! part of the package registry, and page bodies are markdown files.

/// Header navigation strings.
#[derive(Debug)]
pub struct NavStrings {
    pub home: &'static str,
    pub docs: &'static str,
    pub github: &'static str,
    pub get_started: &'static str,
}

/// Home page hero strings.
#[derive(Debug)]
pub struct HeroStrings {
    pub badge: &'static str,
    pub title: &'static str,
    pub title_highlight: &'static str,
    pub description: &'static str,
    pub cta: &'static str,
    pub secondary: &'static str,
}

/// Home page package list strings.
#[derive(Debug)]
pub struct PackagesStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub view_docs: &'static str,
    pub coming_soon: &'static str,
}

/// Documentation shell strings.
#[derive(Debug)]
pub struct DocsStrings {
    pub on_this_page: &'static str,
    pub next_page: &'static str,
    pub prev_page: &'static str,
    pub contribution_title: &'static str,
    pub found_error: &'static str,
    pub open_issue: &'static str,
    pub open_pr: &'static str,
    pub view_on_registry: &'static str,
    pub placeholder_title: &'static str,
    pub placeholder_body: &'static str,
    pub not_found_title: &'static str,
    pub not_found_body: &'static str,
    pub back_home: &'static str,
    pub copy: &'static str,
    pub copied: &'static str,
}

/// Footer strings.
#[derive(Debug)]
pub struct FooterStrings {
    pub description: &'static str,
    pub resources: &'static str,
    pub documentation: &'static str,
    pub changelog: &'static str,
    pub community: &'static str,
    pub legal: &'static str,
    pub license: &'static str,
    pub copyright: &'static str,
}

/// All UI strings for one language.
#[derive(Debug)]
pub struct Bundle {
    pub nav: NavStrings,
    pub hero: HeroStrings,
    pub packages: PackagesStrings,
    pub docs: DocsStrings,
    pub footer: FooterStrings,
}

pub(crate) static EN: Bundle = Bundle {
    nav: NavStrings {
        home: "Home",
        docs: "Documentation",
        github: "GitHub",
        get_started: "Get Started",
    },
    hero: HeroStrings {
        badge: "Open Source",
        title: "Build faster with",
        title_highlight: "Forgepack",
        description: "Production-ready packages for React and Spring Boot. Eliminate boilerplate, \
                      accelerate development, and ship with confidence.",
        cta: "Get Started",
        secondary: "View on GitHub",
    },
    packages: PackagesStrings {
        title: "Packages",
        subtitle: "Our growing ecosystem of production-ready packages.",
        view_docs: "View Docs",
        coming_soon: "Coming Soon",
    },
    docs: DocsStrings {
        on_this_page: "On this page",
        next_page: "Next",
        prev_page: "Previous",
        contribution_title: "Help improve this page",
        found_error: "Found a mistake or something missing? Let us know or send a fix.",
        open_issue: "Open an issue",
        open_pr: "Open a pull request",
        view_on_registry: "View on npm",
        placeholder_title: "Coming soon",
        placeholder_body: "This page is being written. Check back shortly.",
        not_found_title: "Page not found",
        not_found_body: "The page you are looking for does not exist.",
        back_home: "Back to home",
        copy: "Copy",
        copied: "✓ Copied",
    },
    footer: FooterStrings {
        description: "Production-ready packages for modern web development.",
        resources: "Resources",
        documentation: "Documentation",
        changelog: "Changelog",
        community: "Community",
        legal: "Legal",
        license: "MIT License",
        copyright: "© 2025 Forgepack. All rights reserved.",
    },
};

pub(crate) static PT: Bundle = Bundle {
    nav: NavStrings {
        home: "Início",
        docs: "Documentação",
        github: "GitHub",
        get_started: "Começar",
    },
    hero: HeroStrings {
        badge: "Código Aberto",
        title: "Construa mais rápido com",
        title_highlight: "Forgepack",
        description: "Pacotes prontos para produção para React e Spring Boot. Elimine código \
                      repetitivo, acelere o desenvolvimento e entregue com confiança.",
        cta: "Começar",
        secondary: "Ver no GitHub",
    },
    packages: PackagesStrings {
        title: "Pacotes",
        subtitle: "Explore nosso ecossistema crescente de pacotes prontos para produção.",
        view_docs: "Ver Docs",
        coming_soon: "Em Breve",
    },
    docs: DocsStrings {
        on_this_page: "Nesta página",
        next_page: "Próximo",
        prev_page: "Anterior",
        contribution_title: "Ajude a melhorar esta página",
        found_error: "Encontrou um erro ou algo faltando? Avise-nos ou envie uma correção.",
        open_issue: "Abrir uma issue",
        open_pr: "Abrir um pull request",
        view_on_registry: "Ver no npm",
        placeholder_title: "Em breve",
        placeholder_body: "Esta página está sendo escrita. Volte em breve.",
        not_found_title: "Página não encontrada",
        not_found_body: "A página que você procura não existe.",
        back_home: "Voltar ao início",
        copy: "Copiar",
        copied: "✓ Copiado",
    },
    footer: FooterStrings {
        description: "Pacotes prontos para produção para desenvolvimento web moderno.",
        resources: "Recursos",
        documentation: "Documentação",
        changelog: "Changelog",
        community: "Comunidade",
        legal: "Legal",
        license: "Licença MIT",
        copyright: "© 2025 Forgepack. Todos os direitos reservados.",
    },
};
