//! outputter render - Render delimited rows in the selected format

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use clap::Args;
use tracing::debug;

use crate::app::AppContext;
use crate::error::{OutputError, Result};
use crate::output::style_status;

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Read rows from this file instead of stdin
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// Write the rendered output to this file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Column titles (comma-separated); otherwise the first line is the header
    #[arg(long, value_delimiter = ',')]
    pub headers: Option<Vec<String>>,

    /// Input field delimiter (a single character, or "\t" / "tab")
    #[arg(long, short = 'd', default_value = "\\t", value_parser = parse_delimiter)]
    pub delimiter: char,

    /// Column holding execution status words to color
    #[arg(long)]
    pub status_column: Option<String>,
}

pub fn run(ctx: &AppContext, args: &RenderArgs) -> Result<()> {
    let text = read_input(args.input.as_deref())?;
    let mut lines = parse_lines(&text, args.delimiter).into_iter();

    let headers = match &args.headers {
        Some(headers) => Some(headers.clone()),
        None => lines.next().map(|(_, header)| header),
    };

    let out = ctx.outputter()?;
    if let Some(path) = &args.output {
        let file = File::create(path)?;
        out.set_writer(Box::new(BufWriter::new(file)))?;
    }

    let Some(headers) = headers else {
        debug!("no header line in input");
        return out.draw();
    };

    let status_idx = match &args.status_column {
        Some(name) => Some(
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| OutputError::Input(format!("unknown status column {name}")))?,
        ),
        None => None,
    };
    let to_stdout = args.output.is_none();
    let colorize = status_idx.filter(|_| ctx.use_color(out.as_ref(), to_stdout));

    out.set_headers(headers);
    for (line, mut values) in lines {
        if let Some(idx) = colorize {
            if let Some(cell) = values.get_mut(idx) {
                *cell = style_status(cell);
            }
        }
        out.add_row(values).map_err(|err| err.at_line(line))?;
    }

    debug!(format = out.format_name(), rows = out.row_count(), "rendering");
    out.draw()
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|err| OutputError::Input(format!("read {}: {err}", path.display()))),
        None => Ok(io::read_to_string(io::stdin())?),
    }
}

/// Split non-empty lines into fields, keeping 1-based line numbers. A line
/// holding only delimiters is a row of empty fields.
#[must_use]
pub fn parse_lines(text: &str, delimiter: char) -> Vec<(usize, Vec<String>)> {
    text.lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(idx, line)| {
            let fields = line.split(delimiter).map(str::to_string).collect();
            (idx + 1, fields)
        })
        .collect()
}

fn parse_delimiter(raw: &str) -> std::result::Result<char, String> {
    match raw {
        "\\t" | "tab" => Ok('\t'),
        _ => {
            let mut chars = raw.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(c),
                _ => Err(format!("delimiter must be a single character, got {raw:?}")),
            }
        }
    }
}
