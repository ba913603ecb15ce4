//! Header set and accumulated rows for a single renderer instance.

use crate::error::{OutputError, Result};

/// Column schema plus the rows accepted against it, in insertion order.
///
/// Rows are padded to the header length when they are added. If the headers
/// are replaced after rows exist the stored rows are left alone; rendering is
/// driven by the current headers (see [`Dataset::records`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    headers: Option<Vec<String>>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            headers: None,
            rows: Vec::new(),
        }
    }

    pub fn set_headers(&mut self, headers: Vec<String>) {
        self.headers = Some(headers);
    }

    /// Validate and append one row.
    ///
    /// # Errors
    ///
    /// [`OutputError::NoHeaders`] before any headers are set, and
    /// [`OutputError::TooManyValues`] when the row is wider than the headers.
    /// The stored rows are untouched on error.
    pub fn push_row(&mut self, mut values: Vec<String>) -> Result<()> {
        let headers = self.headers.as_ref().ok_or(OutputError::NoHeaders)?;
        if values.len() > headers.len() {
            return Err(OutputError::TooManyValues {
                values: values.len(),
                headers: headers.len(),
            });
        }
        values.resize(headers.len(), String::new());
        self.rows.push(values);
        Ok(())
    }

    #[must_use]
    pub const fn has_headers(&self) -> bool {
        self.headers.is_some()
    }

    /// Current headers; empty when none were set.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        self.headers.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        match &self.headers {
            Some(headers) => headers.len(),
            None => 0,
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    #[must_use]
    pub const fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Cell at `row`/`col`, or `""` when the stored row is shorter.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|values| values.get(col))
            .map_or("", String::as_str)
    }

    /// Rows shaped to exactly the current header width.
    pub fn records(&self) -> impl Iterator<Item = Vec<&str>> + '_ {
        let width = self.width();
        (0..self.rows.len()).map(move |row| (0..width).map(|col| self.cell(row, col)).collect())
    }

    /// One column's values across all rows, in row order.
    pub fn column(&self, col: usize) -> impl Iterator<Item = &str> + '_ {
        (0..self.rows.len()).map(move |row| self.cell(row, col))
    }
}
