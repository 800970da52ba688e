//! Content rendering for the forgepack site.
//!
//! - [`render_markdown`]: converts a content page to HTML, extracting the
//!   title and table of contents
//! - [`CodeBlock`]: line-numbered code sample with a copy button
//! - [`CopyAction`]: copy-to-clipboard with a timed acknowledgement

mod code_block;
mod copy;
mod markdown;
mod util;

pub use code_block::{CodeBlock, DEFAULT_CODE_LANGUAGE};
pub use copy::{COPY_ACK_DELAY, Clipboard, ClipboardError, CopyAction, MemoryClipboard};
pub use markdown::{RenderedContent, TocEntry, render_markdown};
pub use util::{escape_html, slugify};
