//! Copy-to-clipboard for code samples.
//!
//! The acknowledgement is entered only when the clipboard write resolves
//! without error. A rejected write leaves the state as it was.
//!
//! In the served site the copy button runs in the browser (`site.js` in
//! `fp-assets`). [`CopyAction`] models that script so its behavior can be
//! tested here; the script reads [`COPY_ACK_DELAY`] from the `data-ack-ms`
//! attribute written by [`CodeBlock`].
//!
//! [`CodeBlock`]: crate::CodeBlock

use std::future::Future;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use tokio::time::Instant;

/// How long the "copied" acknowledgement stays visible.
pub const COPY_ACK_DELAY: Duration = Duration::from_secs(2);

/// Error returned by a clipboard write.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    /// The host refused clipboard access.
    #[error("Clipboard access denied")]
    Denied,
    /// No clipboard is available.
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
}

/// Destination for copied text.
pub trait Clipboard {
    /// Replace the clipboard contents with `text`.
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), ClipboardError>> + Send;
}

/// In-memory clipboard.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
    deny: bool,
}

impl MemoryClipboard {
    /// Create an empty clipboard that accepts writes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clipboard that rejects every write with [`ClipboardError::Denied`].
    #[must_use]
    pub fn denying() -> Self {
        Self {
            contents: Mutex::new(None),
            deny: true,
        }
    }

    /// Last text written, if any.
    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.contents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Clipboard for MemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.deny {
            return Err(ClipboardError::Denied);
        }
        *self.contents.lock().unwrap_or_else(PoisonError::into_inner) = Some(text.to_owned());
        Ok(())
    }
}

/// Copy button state for one code sample.
#[derive(Debug)]
pub struct CopyAction {
    text: String,
    copied_at: Option<Instant>,
}

impl CopyAction {
    /// Create the action for `code`. Surrounding whitespace is not copied.
    #[must_use]
    pub fn new(code: &str) -> Self {
        Self {
            text: code.trim().to_owned(),
            copied_at: None,
        }
    }

    /// Text that will be written to the clipboard.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Write the text to `clipboard` and start the acknowledgement.
    ///
    /// No retry and no timeout: the error from the clipboard is returned as is.
    pub async fn copy<C: Clipboard>(&mut self, clipboard: &C) -> Result<(), ClipboardError> {
        clipboard.write_text(&self.text).await?;
        self.copied_at = Some(Instant::now());
        tracing::debug!(bytes = self.text.len(), "Code copied to clipboard");
        Ok(())
    }

    /// Whether the "copied" acknowledgement is showing.
    #[must_use]
    pub fn is_acknowledged(&self) -> bool {
        self.copied_at.is_some_and(|at| at.elapsed() < COPY_ACK_DELAY)
    }
}
