//! Output rendering methods.

use cyphergen_core::IndentedString;

use super::{Config, Record, RecordTree};

impl RecordTree {
    /// Render all records, separated by blank lines.
    ///
    /// Output ends with exactly one newline (or is empty for an empty tree).
    pub fn render(&self, config: &Config) -> String {
        let mut out = IndentedString::new(config.indent.clone());
        for (i, record) in self.records.iter().enumerate() {
            if i > 0 {
                out.newline();
                out.newline();
            }
            self.render_record(&mut out, record, config);
        }

        let mut text = out.finish();
        if !text.is_empty() {
            text.push('\n');
        }
        text
    }

    fn render_record(&self, out: &mut IndentedString, record: &Record, config: &Config) {
        let c = config.colors;

        // Header: Name(
        out.push(&config.declaration_prefix);
        out.push(&c.paint(c.name, &record.name));
        out.push(&c.paint(c.punctuation, "("));

        out.indented(|out| {
            for (field, ty) in &record.fields {
                let style = if ty.entity().is_none() { c.primitive } else { "" };
                let ty = ty.render(&|id| self.ensure_name(id));
                out.newline();
                out.push(&format!(
                    "{}{}{} {}{}",
                    config.field_prefix,
                    field,
                    c.paint(c.punctuation, ":"),
                    c.paint(style, &ty),
                    c.paint(c.punctuation, ","),
                ));
            }
        });

        out.newline();
        out.push(&c.paint(c.punctuation, ")"));
    }
}
