//! Line-numbered code samples.
//!
//! Syntax highlighting happens in the browser, keyed on the
//! `language-<tag>` class. The server emits one span per line so the
//! line numbers don't depend on the highlighter.

use std::fmt::Write;

use fp_i18n::Language;

use crate::copy::COPY_ACK_DELAY;
use crate::util::escape_html;

/// Language tag used when a sample doesn't name one.
pub const DEFAULT_CODE_LANGUAGE: &str = "tsx";

/// A code sample to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeBlock<'a> {
    code: &'a str,
    language: &'a str,
    filename: Option<&'a str>,
}

impl<'a> CodeBlock<'a> {
    /// Create a code block with the default language and no filename.
    #[must_use]
    pub fn new(code: &'a str) -> Self {
        Self {
            code,
            language: DEFAULT_CODE_LANGUAGE,
            filename: None,
        }
    }

    /// Set the highlighting language tag.
    #[must_use]
    pub fn with_language(mut self, language: &'a str) -> Self {
        if !language.is_empty() {
            self.language = language;
        }
        self
    }

    /// Show a filename header above the code.
    #[must_use]
    pub fn with_filename(mut self, filename: Option<&'a str>) -> Self {
        self.filename = filename.filter(|f| !f.is_empty());
        self
    }

    /// Parse a fence info string such as `tsx title="src/App.tsx"`.
    ///
    /// The first word is the language; a `title=` (or `filename=`) attribute,
    /// quoted or bare, becomes the filename.
    #[must_use]
    pub fn from_fence(code: &'a str, info: &'a str) -> Self {
        let info = info.trim();
        let (language, rest) = info.split_once(char::is_whitespace).unwrap_or((info, ""));
        Self::new(code)
            .with_language(language)
            .with_filename(
                fence_attribute(rest, "title").or_else(|| fence_attribute(rest, "filename")),
            )
    }

    /// Text written to the clipboard: the sample without surrounding whitespace.
    #[must_use]
    pub fn copy_text(&self) -> &'a str {
        self.code.trim()
    }

    /// Language tag.
    #[must_use]
    pub fn language(&self) -> &'a str {
        self.language
    }

    /// Optional filename.
    #[must_use]
    pub fn filename(&self) -> Option<&'a str> {
        self.filename
    }

    /// Render to HTML, with copy button labels in `language`.
    pub fn render(&self, language: Language, out: &mut String) {
        let strings = &language.bundle().docs;
        let lang = escape_html(self.language);

        write!(
            out,
            r#"<div class="code-block" data-ack-ms="{}">"#,
            COPY_ACK_DELAY.as_millis()
        )
        .unwrap();

        if let Some(filename) = self.filename {
            write!(
                out,
                r#"<div class="code-block-header"><span class="code-filename">{}</span><button type="button" class="copy-btn" data-label="{}" data-copied-label="{}">{}</button></div>"#,
                escape_html(filename),
                escape_html(strings.copy),
                escape_html(strings.copied),
                escape_html(strings.copy),
            )
            .unwrap();
        }

        out.push_str(r#"<div class="code-block-content">"#);
        if self.filename.is_none() {
            write!(
                out,
                r#"<button type="button" class="copy-btn floating" aria-label="{}" data-label="⧉" data-copied-label="✓">⧉</button>"#,
                escape_html(strings.copy),
            )
            .unwrap();
        }

        write!(out, r#"<pre class="language-{lang}"><code class="language-{lang}">"#).unwrap();
        for (i, line) in self.copy_text().lines().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            write!(
                out,
                r#"<span class="line"><span class="line-number">{}</span><span class="line-content">{}</span></span>"#,
                i + 1,
                escape_html(line)
            )
            .unwrap();
        }
        out.push_str("</code></pre></div></div>");
    }
}

/// Value of `key=value` or `key="value"` in a fence attribute string.
///
/// Only whole attribute names match, so `subtitle=` is not `title=`.
fn fence_attribute<'a>(attrs: &'a str, key: &str) -> Option<&'a str> {
    fence_attributes(attrs).find_map(|(name, value)| (name == key).then_some(value))
}

/// Split a fence attribute string into `(name, value)` pairs.
///
/// Bare words without `=` are skipped. Quoted values may contain spaces.
fn fence_attributes(attrs: &str) -> impl Iterator<Item = (&str, &str)> {
    let mut rest = attrs;
    std::iter::from_fn(move || {
        loop {
            rest = rest.trim_start();
            if rest.is_empty() {
                return None;
            }
            let name_end = rest
                .find(|c: char| c.is_whitespace() || c == '=')
                .unwrap_or(rest.len());
            let name = &rest[..name_end];
            let Some(after) = rest[name_end..].strip_prefix('=') else {
                rest = &rest[name_end..];
                continue;
            };
            let (value, remainder) = match after.strip_prefix('"') {
                Some(quoted) => quoted.split_once('"').unwrap_or((quoted, "")),
                None => after.split_once(char::is_whitespace).unwrap_or((after, "")),
            };
            rest = remainder;
            return Some((name, value));
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(block: &CodeBlock<'_>, language: Language) -> String {
        let mut out = String::new();
        block.render(language, &mut out);
        out
    }

    #[test]
    fn test_copy_text_is_trimmed() {
        let block = CodeBlock::new("  const x = 1;  ");
        assert_eq!(block.copy_text(), "const x = 1;");
    }

    #[test]
    fn test_default_language() {
        assert_eq!(CodeBlock::new("x").language(), "tsx");
        assert_eq!(CodeBlock::new("x").with_language("").language(), "tsx");
    }

    #[test]
    fn test_render_numbers_each_line() {
        let html = render(&CodeBlock::new("\na\nb\n").with_language("bash"), Language::En);

        assert!(html.contains(r#"<pre class="language-bash"><code class="language-bash">"#));
        assert!(html.contains(r#"<span class="line-number">1</span><span class="line-content">a</span>"#));
        assert!(html.contains(r#"<span class="line-number">2</span><span class="line-content">b</span>"#));
        assert!(!html.contains(r#"<span class="line-number">3</span>"#));
    }

    #[test]
    fn test_render_escapes_code() {
        let html = render(&CodeBlock::new("<App />"), Language::En);
        assert!(html.contains("&lt;App /&gt;"));
        assert!(!html.contains("<App />"));
    }

    #[test]
    fn test_render_with_filename_uses_header_button() {
        let block = CodeBlock::new("x").with_filename(Some("src/App.tsx"));
        let html = render(&block, Language::En);

        assert!(html.contains(r#"<span class="code-filename">src/App.tsx</span>"#));
        assert!(html.contains(r#"data-copied-label="✓ Copied">Copy</button>"#));
        assert!(!html.contains("floating"));
    }

    #[test]
    fn test_render_without_filename_uses_floating_button() {
        let html = render(&CodeBlock::new("x"), Language::Pt);

        assert!(html.contains(r#"class="copy-btn floating" aria-label="Copiar""#));
        assert!(!html.contains("code-block-header"));
    }

    #[test]
    fn test_render_carries_ack_delay() {
        let html = render(&CodeBlock::new("x"), Language::En);
        assert!(html.starts_with(r#"<div class="code-block" data-ack-ms="2000">"#));
    }

    #[test]
    fn test_from_fence_language_only() {
        let block = CodeBlock::from_fence("x", "bash");
        assert_eq!(block.language(), "bash");
        assert_eq!(block.filename(), None);
    }

    #[test]
    fn test_from_fence_quoted_title() {
        let block = CodeBlock::from_fence("x", r#"tsx title="src/App.tsx""#);
        assert_eq!(block.language(), "tsx");
        assert_eq!(block.filename(), Some("src/App.tsx"));
    }

    #[test]
    fn test_from_fence_bare_filename() {
        let block = CodeBlock::from_fence("x", "ts filename=api.ts");
        assert_eq!(block.filename(), Some("api.ts"));
    }

    #[test]
    fn test_from_fence_ignores_longer_attribute_names() {
        let block = CodeBlock::from_fence("x", r#"tsx subtitle="Setup" title="src/main.tsx""#);
        assert_eq!(block.filename(), Some("src/main.tsx"));

        let block = CodeBlock::from_fence("x", r#"tsx subtitle="Setup""#);
        assert_eq!(block.filename(), None);
    }

    #[test]
    fn test_fence_attributes_skip_bare_words() {
        let pairs: Vec<_> = fence_attributes(r#"showLineNumbers title="My App.tsx" x=1"#).collect();
        assert_eq!(pairs, vec![("title", "My App.tsx"), ("x", "1")]);
    }

    #[test]
    fn test_from_fence_empty_info() {
        let block = CodeBlock::from_fence("x", "");
        assert_eq!(block.language(), DEFAULT_CODE_LANGUAGE);
    }
}
