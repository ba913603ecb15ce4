//! The output contract every renderer satisfies, and the shared session
//! state that implements it for any [`Render`] format.
//!
//! A caller drives an outputter in four steps:
//!
//! 1. `set_headers` once with the column titles,
//! 2. `add_row` once per record (values already converted to strings),
//! 3. optionally `set_pretty` / `set_writer`,
//! 4. `draw` to write everything to the destination sink.
//!
//! `draw` never clears the accumulated data, so it can be repeated. The sink
//! can be replaced at any time, including after a draw; later draws go to
//! the new sink.

use std::io::{self, Write};

use parking_lot::Mutex;
use tracing::trace;

use super::dataset::Dataset;
use crate::error::Result;

/// Destination a renderer writes to when drawn.
pub type Sink = Box<dyn Write + Send>;

/// Format-specific rendering of a [`Dataset`].
///
/// Implement this to add a custom format, then wrap it in a [`Session`] and
/// register a factory with the output registry.
pub trait Render: Send + Sync {
    /// Registry name of the format.
    fn name(&self) -> &str;

    /// Whether ANSI color escapes embedded in cells survive this format.
    fn color_support(&self) -> bool {
        false
    }

    /// Write the whole dataset to `out`. `pretty` is only meaningful for
    /// formats with a pretty mode.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    fn render(&self, data: &Dataset, pretty: bool, out: &mut dyn Write) -> Result<()>;
}

/// Common operations shared by all output formats.
pub trait Outputter: Send + Sync {
    fn format_name(&self) -> &str;

    /// Replace the column schema. Rows already added are not re-validated.
    fn set_headers(&self, headers: Vec<String>);

    /// Append one row.
    ///
    /// # Errors
    ///
    /// `NoHeaders` before `set_headers`, `TooManyValues` when the row has
    /// more values than headers. Short rows are padded with empty strings.
    fn add_row(&self, values: Vec<String>) -> Result<()>;

    /// Enable indented output for formats that have one. Idempotent.
    fn set_pretty(&self);

    /// Replace the destination sink. Always succeeds.
    ///
    /// # Errors
    ///
    /// None of the built-in formats fail here.
    fn set_writer(&self, sink: Sink) -> Result<()>;

    fn color_support(&self) -> bool;

    /// Render all headers and rows to the sink and flush it.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or writing to the sink fails.
    fn draw(&self) -> Result<()>;

    fn headers(&self) -> Vec<String>;

    fn row_count(&self) -> usize;

    fn is_pretty(&self) -> bool;
}

/// Convenience wrappers taking any string-like items.
pub trait OutputterExt: Outputter {
    fn set_headers_from<I, S>(&self, headers: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_headers(headers.into_iter().map(Into::into).collect());
    }

    /// # Errors
    ///
    /// Same as [`Outputter::add_row`].
    fn add_row_from<I, S>(&self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_row(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Outputter + ?Sized> OutputterExt for T {}

struct SessionState {
    data: Dataset,
    sink: Sink,
    pretty: bool,
}

/// A renderer instance: one format plus its accumulated data, guarded by an
/// instance-scoped lock.
pub struct Session<R> {
    render: R,
    state: Mutex<SessionState>,
}

impl<R: Render> Session<R> {
    /// New session writing to standard output.
    #[must_use]
    pub fn new(render: R) -> Self {
        Self::with_writer(render, Box::new(io::stdout()))
    }

    #[must_use]
    pub fn with_writer(render: R, sink: Sink) -> Self {
        Self {
            render,
            state: Mutex::new(SessionState {
                data: Dataset::new(),
                sink,
                pretty: false,
            }),
        }
    }

    /// Render the current data to a string without touching the sink.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render_to_string(&self) -> Result<String> {
        let state = self.state.lock();
        let mut buf = Vec::new();
        self.render.render(&state.data, state.pretty, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl<R: Render> Outputter for Session<R> {
    fn format_name(&self) -> &str {
        self.render.name()
    }

    fn set_headers(&self, headers: Vec<String>) {
        self.state.lock().data.set_headers(headers);
    }

    fn add_row(&self, values: Vec<String>) -> Result<()> {
        self.state.lock().data.push_row(values)
    }

    fn set_pretty(&self) {
        self.state.lock().pretty = true;
    }

    fn set_writer(&self, sink: Sink) -> Result<()> {
        self.state.lock().sink = sink;
        Ok(())
    }

    fn color_support(&self) -> bool {
        self.render.color_support()
    }

    fn draw(&self) -> Result<()> {
        // Held across render and write so a concurrent add_row is either
        // fully before or fully after this draw.
        let mut guard = self.state.lock();
        let state = &mut *guard;

        let mut buf = Vec::new();
        self.render.render(&state.data, state.pretty, &mut buf)?;
        state.sink.write_all(&buf)?;
        state.sink.flush()?;

        trace!(
            target: "outputter",
            format = self.render.name(),
            rows = state.data.row_count(),
            bytes = buf.len(),
            "drawn"
        );
        Ok(())
    }

    fn headers(&self) -> Vec<String> {
        self.state.lock().data.headers().to_vec()
    }

    fn row_count(&self) -> usize {
        self.state.lock().data.row_count()
    }

    fn is_pretty(&self) -> bool {
        self.state.lock().pretty
    }
}
