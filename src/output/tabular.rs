//! Plain whitespace-aligned columns, no borders.

use std::io::Write;

use console::measure_text_width;

use super::dataset::Dataset;
use super::session::Render;
use crate::error::Result;

/// Spaces between the widest cell of a column and the next column.
pub const COLUMN_PADDING: usize = 2;

/// Elastic tab stops: every column but the last is padded to its widest
/// cell plus [`COLUMN_PADDING`]; the last column is written as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabularRender;

impl Render for TabularRender {
    fn name(&self) -> &str {
        "tabular"
    }

    fn render(&self, data: &Dataset, _pretty: bool, out: &mut dyn Write) -> Result<()> {
        if data.width() == 0 {
            return Ok(());
        }

        let header: Vec<&str> = data.headers().iter().map(String::as_str).collect();
        let lines: Vec<Vec<&str>> = std::iter::once(header).chain(data.records()).collect();

        let mut widths = vec![0usize; data.width()];
        for line in &lines {
            for (width, cell) in widths.iter_mut().zip(line) {
                *width = (*width).max(measure_text_width(cell));
            }
        }

        let last = data.width() - 1;
        for line in &lines {
            let mut text = String::new();
            for (col, cell) in line.iter().enumerate() {
                text.push_str(cell);
                if col < last {
                    let pad = widths[col] + COLUMN_PADDING - measure_text_width(cell);
                    text.extend(std::iter::repeat_n(' ', pad));
                }
            }
            writeln!(out, "{text}")?;
        }
        Ok(())
    }
}
