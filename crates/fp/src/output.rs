//! Terminal output for `fp` commands.
//!
//! Everything is written to stderr. Colors follow `console`'s detection, so
//! piped output stays plain.

use std::fmt::Display;

use console::{Style, Term};

/// Color of a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Tone {
    Success,
    Warning,
    Error,
    Highlight,
}

impl Tone {
    fn style(self) -> Style {
        match self {
            Self::Success => Style::new().green(),
            Self::Warning => Style::new().yellow(),
            Self::Error => Style::new().red(),
            Self::Highlight => Style::new().cyan().bold(),
        }
    }
}

/// Line for a startup setting, with the label padded so values line up.
fn setting_line(label: &str, value: impl Display) -> String {
    format!("{:<18} {value}", format!("{label}:"))
}

/// Writer for command output.
pub(crate) struct Output {
    term: Term,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    /// Print a message in `tone`.
    pub(crate) fn line(&self, tone: Tone, msg: &str) {
        let _ = self.term.write_line(&tone.style().apply_to(msg).to_string());
    }

    /// Print a `label: value` setting with the label dimmed.
    pub(crate) fn setting(&self, label: &str, value: impl Display) {
        let line = setting_line(label, value);
        let (label, value) = line.split_at(label.len() + 1);
        let _ = self
            .term
            .write_line(&format!("{}{value}", Style::new().dim().apply_to(label)));
    }

    /// Print an error message.
    pub(crate) fn error(&self, msg: &str) {
        self.line(Tone::Error, msg);
    }
}
