//! Language selection for the forgepack site.
//!
//! This crate provides:
//! - [`Language`]: the closed set of supported locales
//! - [`LanguageContext`]: the shared, explicitly injected language setting
//! - [`Localized`]: a string carried in every supported language
//! - [`Bundle`]: UI strings for page chrome (header, sidebar, footer)
//!
//! # Quick Start
//!
//! ```
//! use fp_i18n::{Language, LanguageContext};
//!
//! let ctx = LanguageContext::new(Language::En);
//! assert_eq!(ctx.get().bundle().docs.next_page, "Next");
//!
//! ctx.set(Language::Pt);
//! assert_eq!(ctx.get().bundle().docs.next_page, "Próximo");
//! ```

mod bundle;

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};

pub use bundle::{Bundle, DocsStrings, FooterStrings, HeroStrings, NavStrings, PackagesStrings};

/// Supported site language.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    #[default]
    En,
    /// Portuguese.
    Pt,
}

impl Language {
    /// All supported languages, in toggle order.
    pub const ALL: [Language; 2] = [Language::En, Language::Pt];

    /// Locale tag used in URLs, config files and content directories.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Pt => "pt",
        }
    }

    /// Native display name, used for toggle labels.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Pt => "Português",
        }
    }

    /// UI string bundle for this language.
    #[must_use]
    pub fn bundle(self) -> &'static Bundle {
        match self {
            Self::En => &bundle::EN,
            Self::Pt => &bundle::PT,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Error returned when parsing an unsupported language tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported language: {0} (expected one of: en, pt)")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "pt" => Ok(Self::Pt),
            _ => Err(UnknownLanguage(s.to_owned())),
        }
    }
}

/// Shared language setting.
///
/// Created once at startup with the configured default and handed to every
/// component that renders text. Cloning yields another handle to the same
/// value. The setting lives in memory only.
#[derive(Clone, Debug, Default)]
pub struct LanguageContext {
    current: Arc<RwLock<Language>>,
}

impl LanguageContext {
    /// Create a context holding `initial`.
    #[must_use]
    pub fn new(initial: Language) -> Self {
        Self {
            current: Arc::new(RwLock::new(initial)),
        }
    }

    /// Current language.
    #[must_use]
    pub fn get(&self) -> Language {
        *self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Switch the language, returning the previous value.
    pub fn set(&self, language: Language) -> Language {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let previous = std::mem::replace(&mut *guard, language);
        if previous != language {
            tracing::info!(from = %previous, to = %language, "Language changed");
        }
        previous
    }
}

/// A string available in every supported language.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized {
    /// English text.
    pub en: String,
    /// Portuguese text.
    pub pt: String,
}

impl Localized {
    /// Create a localized string from its translations.
    #[must_use]
    pub fn new(en: impl Into<String>, pt: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            pt: pt.into(),
        }
    }

    /// Same text in every language (product names, code identifiers).
    #[must_use]
    pub fn same(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            en: text.clone(),
            pt: text,
        }
    }

    /// Text for `language`.
    #[must_use]
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::En => &self.en,
            Language::Pt => &self.pt,
        }
    }
}
