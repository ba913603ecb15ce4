//! Error types shared by the renderers, the registry and the CLI.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("no headers set; call set_headers before adding rows")]
    NoHeaders,

    #[error("too many values: row has {values} values but only {headers} headers are set")]
    TooManyValues { values: usize, headers: usize },

    #[error("unknown outputter: {0}")]
    UnknownOutputter(String),

    #[error("invalid outputter: {0}")]
    InvalidOutputter(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("input error: {0}")]
    Input(String),

    #[error("line {line}: {source}")]
    Row {
        line: usize,
        #[source]
        source: Box<OutputError>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl OutputError {
    /// Attach a 1-based input line number to a row-level failure.
    #[must_use]
    pub fn at_line(self, line: usize) -> Self {
        Self::Row {
            line,
            source: Box::new(self),
        }
    }

    /// The underlying error, looking through any line context.
    #[must_use]
    pub fn root(&self) -> &Self {
        match self {
            Self::Row { source, .. } => source.root(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, OutputError>;
