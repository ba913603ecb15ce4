//! CSV renderer: header record followed by one record per row.

use std::borrow::Cow;
use std::io::Write;

use super::dataset::Dataset;
use super::session::Render;
use crate::error::Result;

#[derive(Debug, Clone, Copy)]
pub struct CsvRender {
    delimiter: char,
}

impl Default for CsvRender {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvRender {
    #[must_use]
    pub const fn new() -> Self {
        Self { delimiter: ',' }
    }

    #[must_use]
    pub const fn with_delimiter(delimiter: char) -> Self {
        Self { delimiter }
    }

    fn write_record(&self, out: &mut dyn Write, fields: &[&str]) -> Result<()> {
        let mut line = String::new();
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                line.push(self.delimiter);
            }
            line.push_str(&escape_field(field, self.delimiter));
        }
        line.push('\n');
        out.write_all(line.as_bytes())?;
        Ok(())
    }
}

impl Render for CsvRender {
    fn name(&self) -> &str {
        "csv"
    }

    fn render(&self, data: &Dataset, _pretty: bool, out: &mut dyn Write) -> Result<()> {
        if !data.has_headers() {
            return Ok(());
        }
        let header: Vec<&str> = data.headers().iter().map(String::as_str).collect();
        self.write_record(out, &header)?;
        for record in data.records() {
            self.write_record(out, &record)?;
        }
        Ok(())
    }
}

/// Quote a field if it holds the delimiter, a quote or a line break, or
/// starts with blank space. Embedded quotes are doubled.
#[must_use]
pub fn escape_field(field: &str, delimiter: char) -> Cow<'_, str> {
    let needs_quotes = field.starts_with([' ', '\t'])
        || field
            .chars()
            .any(|c| c == delimiter || matches!(c, '"' | '\r' | '\n'));
    if !needs_quotes {
        return Cow::Borrowed(field);
    }
    Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
}
