//! Configuration for fragment emission.

/// Configuration for fragment emission.
#[derive(Clone, Debug)]
pub struct Config {
    /// Prefix of generated traversal variables
    pub(crate) variable_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            variable_prefix: "v".to_string(),
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prefix of generated variables (`v` yields `v0`, `v1`, ...).
    pub fn variable_prefix(mut self, value: impl Into<String>) -> Self {
        self.variable_prefix = value.into();
        self
    }
}
