//! ANSI styling of rendered records.

/// Escape sequences for the parts of a record declaration.
///
/// [`RecordColors::PLAIN`] leaves the text unstyled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecordColors {
    /// Record names in headers.
    pub name: &'static str,
    /// Field types without an entity reference (`Int`, `String?`).
    pub primitive: &'static str,
    /// Parentheses, colons and commas.
    pub punctuation: &'static str,
    pub reset: &'static str,
}

impl Default for RecordColors {
    fn default() -> Self {
        Self::PLAIN
    }
}

impl RecordColors {
    pub const TERMINAL: Self = Self {
        name: "\x1b[34m",
        primitive: "\x1b[32m",
        punctuation: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const PLAIN: Self = Self {
        name: "",
        primitive: "",
        punctuation: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::TERMINAL } else { Self::PLAIN }
    }

    /// `text` wrapped in `style` and a reset, or bare when styling is off.
    pub(super) fn paint(&self, style: &str, text: &str) -> String {
        if style.is_empty() {
            text.to_string()
        } else {
            format!("{style}{text}{}", self.reset)
        }
    }
}
