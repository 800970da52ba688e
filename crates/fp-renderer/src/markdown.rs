//! Markdown content pages.
//!
//! Wraps `pulldown-cmark`'s HTML writer with three changes:
//! - fenced code blocks become [`CodeBlock`]s
//! - `h2`/`h3` headings get anchor IDs and feed the table of contents
//! - the first `h1` is captured as the page title

use std::collections::HashMap;
use std::fmt::Write;

use fp_i18n::Language;
use pulldown_cmark::{
    CodeBlockKind, CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd, html,
};

use crate::code_block::CodeBlock;
use crate::util::{escape_html, slugify};

/// Table of contents entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TocEntry {
    /// Heading level (2 or 3).
    pub level: u8,
    /// Heading text.
    pub title: String,
    /// Anchor ID.
    pub id: String,
}

/// Result of rendering a content page.
#[derive(Clone, Debug, Default)]
pub struct RenderedContent {
    /// Rendered HTML.
    pub html: String,
    /// Text of the first `h1`, if any.
    pub title: Option<String>,
    /// Table of contents.
    pub toc: Vec<TocEntry>,
}

/// Heading being collected.
struct PendingHeading<'a> {
    level: HeadingLevel,
    text: String,
    events: Vec<Event<'a>>,
}

/// Code block being collected.
struct PendingCode {
    info: String,
    code: String,
}

/// Render a markdown page. Copy button labels use `language`.
#[must_use]
pub fn render_markdown(source: &str, language: Language) -> RenderedContent {
    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    let parser = Parser::new_ext(source, options);

    let mut events: Vec<Event<'_>> = Vec::new();
    let mut title = None;
    let mut toc = Vec::new();
    let mut used_ids: HashMap<String, usize> = HashMap::new();
    let mut heading: Option<PendingHeading<'_>> = None;
    let mut code: Option<PendingCode> = None;

    for event in parser {
        if code.is_some() {
            match event {
                Event::Text(text) => {
                    if let Some(pending) = code.as_mut() {
                        pending.code.push_str(&text);
                    }
                }
                Event::End(TagEnd::CodeBlock) => {
                    if let Some(pending) = code.take() {
                        let mut out = String::new();
                        CodeBlock::from_fence(&pending.code, &pending.info)
                            .render(language, &mut out);
                        events.push(Event::Html(CowStr::from(out)));
                    }
                }
                _ => {}
            }
            continue;
        }

        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                let info = match kind {
                    CodeBlockKind::Fenced(info) => info.to_string(),
                    CodeBlockKind::Indented => String::new(),
                };
                code = Some(PendingCode {
                    info,
                    code: String::new(),
                });
            }
            Event::Start(Tag::Heading { level, .. }) => {
                heading = Some(PendingHeading {
                    level,
                    text: String::new(),
                    events: Vec::new(),
                });
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some(pending) = heading.take() {
                    finish_heading(pending, &mut events, &mut title, &mut toc, &mut used_ids);
                }
            }
            other => {
                if let Some(pending) = heading.as_mut() {
                    if let Event::Text(text) | Event::Code(text) = &other {
                        pending.text.push_str(text);
                    }
                    pending.events.push(other);
                } else {
                    events.push(other);
                }
            }
        }
    }

    let mut out = String::with_capacity(source.len() * 2);
    html::push_html(&mut out, events.into_iter());

    RenderedContent {
        html: out,
        title,
        toc,
    }
}

/// Emit a collected heading with an anchor ID.
fn finish_heading<'a>(
    pending: PendingHeading<'a>,
    events: &mut Vec<Event<'a>>,
    title: &mut Option<String>,
    toc: &mut Vec<TocEntry>,
    used_ids: &mut HashMap<String, usize>,
) {
    let level = heading_level_to_num(pending.level);
    let text = pending.text.trim().to_owned();

    if level == 1 && title.is_none() {
        *title = Some(text.clone());
    }

    let id = unique_id(slugify(&text), used_ids);
    if level == 2 || level == 3 {
        toc.push(TocEntry {
            level,
            title: text,
            id: id.clone(),
        });
    }

    let mut open = String::new();
    write!(open, r#"<h{level} id="{}">"#, escape_html(&id)).unwrap();
    events.push(Event::Html(CowStr::from(open)));
    events.extend(pending.events);
    events.push(Event::Html(CowStr::from(format!("</h{level}>\n"))));
}

/// Deduplicate anchor IDs by appending `-1`, `-2`, ...
fn unique_id(base: String, used_ids: &mut HashMap<String, usize>) -> String {
    let base = if base.is_empty() { "section".to_owned() } else { base };
    let count = used_ids.entry(base.clone()).or_insert(0);
    let id = if *count == 0 {
        base
    } else {
        format!("{base}-{count}")
    };
    *count += 1;
    id
}

fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
