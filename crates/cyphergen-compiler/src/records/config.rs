//! Configuration for record emission.

use super::RecordColors;

/// Layout of emitted record declarations.
///
/// The default renders `Name(` / `  field: Type,` / `)`.
#[derive(Clone, Debug)]
pub struct Config {
    /// Indentation unit for fields
    pub(crate) indent: String,
    /// Text before each record name (e.g. `data class `)
    pub(crate) declaration_prefix: String,
    /// Text before each field name (e.g. `val `)
    pub(crate) field_prefix: String,
    /// Color configuration for output
    pub(crate) colors: RecordColors,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent: "  ".to_string(),
            declaration_prefix: String::new(),
            field_prefix: String::new(),
            colors: RecordColors::PLAIN,
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Kotlin data classes: `data class Name(` / `  val field: Type,`.
    pub fn kotlin() -> Self {
        Self::new().declaration_prefix("data class ").field_prefix("val ")
    }

    /// Set the indentation unit.
    pub fn indent(mut self, value: impl Into<String>) -> Self {
        self.indent = value.into();
        self
    }

    /// Set the text emitted before each record name.
    pub fn declaration_prefix(mut self, value: impl Into<String>) -> Self {
        self.declaration_prefix = value.into();
        self
    }

    /// Set the text emitted before each field name.
    pub fn field_prefix(mut self, value: impl Into<String>) -> Self {
        self.field_prefix = value.into();
        self
    }

    /// Set whether to use colored output.
    pub fn colored(mut self, enabled: bool) -> Self {
        self.colors = RecordColors::new(enabled);
        self
    }
}
