//! Bordered grid renderer for human readers.
//!
//! Columns are sized to the widest header or cell, headers are upper-cased
//! and text is left-aligned. Widths are measured on visible text only, so
//! cells may carry ANSI color codes without breaking the layout.

use std::io::Write;

use console::{Alignment, AnsiCodeIterator, measure_text_width, pad_str};

use super::borders::{BorderChars, BorderStyle};
use super::dataset::Dataset;
use super::session::Render;
use crate::error::Result;

#[derive(Debug, Clone, Copy, Default)]
pub struct TableRender {
    style: BorderStyle,
}

impl TableRender {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            style: BorderStyle::Square,
        }
    }

    #[must_use]
    pub const fn with_style(style: BorderStyle) -> Self {
        Self { style }
    }

    #[must_use]
    pub const fn style(&self) -> BorderStyle {
        self.style
    }
}

impl Render for TableRender {
    fn name(&self) -> &str {
        "table"
    }

    fn color_support(&self) -> bool {
        true
    }

    fn render(&self, data: &Dataset, _pretty: bool, out: &mut dyn Write) -> Result<()> {
        if data.width() == 0 {
            return Ok(());
        }

        let header: Vec<String> = data.headers().iter().map(|h| uppercase_visible(h)).collect();
        let header_cells: Vec<&str> = header.iter().map(String::as_str).collect();
        let records: Vec<Vec<&str>> = data.records().collect();

        let mut widths: Vec<usize> = header_cells.iter().map(|h| cell_width(h)).collect();
        for record in &records {
            for (width, cell) in widths.iter_mut().zip(record) {
                *width = (*width).max(cell_width(cell));
            }
        }

        let glyphs = self.style.chars();
        rule(out, &widths, glyphs.horizontal, glyphs.top_left, glyphs.top_tee, glyphs.top_right)?;
        row(out, &widths, &header_cells, &glyphs)?;
        if !records.is_empty() {
            rule(out, &widths, glyphs.horizontal, glyphs.left_tee, glyphs.cross, glyphs.right_tee)?;
        }
        for record in &records {
            row(out, &widths, record, &glyphs)?;
        }
        rule(
            out,
            &widths,
            glyphs.horizontal,
            glyphs.bottom_left,
            glyphs.bottom_tee,
            glyphs.bottom_right,
        )?;
        Ok(())
    }
}

fn rule(
    out: &mut dyn Write,
    widths: &[usize],
    fill: char,
    left: char,
    join: char,
    right: char,
) -> Result<()> {
    let mut line = String::new();
    line.push(left);
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            line.push(join);
        }
        line.extend(std::iter::repeat_n(fill, width + 2));
    }
    line.push(right);
    writeln!(out, "{line}")?;
    Ok(())
}

/// One logical row; multi-line cells make it several physical lines.
fn row(out: &mut dyn Write, widths: &[usize], cells: &[&str], glyphs: &BorderChars) -> Result<()> {
    let split: Vec<Vec<&str>> = cells.iter().map(|cell| cell.split('\n').collect()).collect();
    let height = split.iter().map(Vec::len).max().unwrap_or(1);

    for line_idx in 0..height {
        let mut line = String::new();
        line.push(glyphs.vertical);
        for (col, width) in widths.iter().enumerate() {
            let text = split
                .get(col)
                .and_then(|lines| lines.get(line_idx))
                .copied()
                .unwrap_or("");
            line.push(' ');
            line.push_str(&pad_str(text, *width, Alignment::Left, None));
            line.push(' ');
            line.push(glyphs.vertical);
        }
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn cell_width(cell: &str) -> usize {
    cell.split('\n').map(measure_text_width).max().unwrap_or(0)
}

/// Upper-case visible text, leaving ANSI escape sequences as they are.
fn uppercase_visible(text: &str) -> String {
    AnsiCodeIterator::new(text)
        .map(|(part, is_ansi)| {
            if is_ansi {
                part.to_string()
            } else {
                part.to_uppercase()
            }
        })
        .collect()
}
