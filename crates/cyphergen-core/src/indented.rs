//! Indentation-aware text accumulation.

use std::fmt;

/// String buffer that knows the current indentation depth.
///
/// Text is appended verbatim; only [`IndentedString::newline`] emits
/// indentation, so a scoped [`IndentedString::indented`] region affects every
/// line started inside it.
#[derive(Clone, Debug)]
pub struct IndentedString {
    buf: String,
    unit: String,
    depth: usize,
}

impl Default for IndentedString {
    fn default() -> Self {
        Self::new("  ")
    }
}

impl IndentedString {
    /// Create an empty buffer indenting by `unit` per level.
    pub fn new(unit: impl Into<String>) -> Self {
        Self {
            buf: String::new(),
            unit: unit.into(),
            depth: 0,
        }
    }

    pub fn push(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    pub fn push_char(&mut self, c: char) {
        self.buf.push(c);
    }

    /// Start a new line at the current indentation.
    pub fn newline(&mut self) {
        self.buf.push('\n');
        for _ in 0..self.depth {
            self.buf.push_str(&self.unit);
        }
    }

    /// Run `f` one level deeper.
    pub fn indented<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.depth += 1;
        f(self);
        self.depth -= 1;
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

impl fmt::Write for IndentedString {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push(s);
        Ok(())
    }
}

impl fmt::Display for IndentedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}
