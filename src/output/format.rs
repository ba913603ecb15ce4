//! The closed set of formats shipped with the crate.

use std::str::FromStr;

use super::csv::CsvRender;
use super::json::{JsonRender, JsonShortRender};
use super::session::{Outputter, Session};
use super::table::TableRender;
use super::tabular::TabularRender;
use crate::error::OutputError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinFormat {
    Table,
    Tabular,
    Csv,
    Json,
    JsonShort,
}

impl BuiltinFormat {
    pub const ALL: [Self; 5] = [
        Self::Table,
        Self::Tabular,
        Self::Csv,
        Self::Json,
        Self::JsonShort,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Tabular => "tabular",
            Self::Csv => "csv",
            Self::Json => "json",
            Self::JsonShort => "jsonshort",
        }
    }

    #[must_use]
    pub const fn color_support(self) -> bool {
        matches!(self, Self::Table)
    }

    /// Structured output meant for other programs rather than people.
    #[must_use]
    pub const fn is_machine_readable(self) -> bool {
        matches!(self, Self::Csv | Self::Json | Self::JsonShort)
    }

    #[must_use]
    pub const fn supports_pretty(self) -> bool {
        matches!(self, Self::Json | Self::JsonShort)
    }

    /// Fresh instance writing to standard output.
    #[must_use]
    pub fn outputter(self) -> Box<dyn Outputter> {
        match self {
            Self::Table => Box::new(Session::new(TableRender::new())),
            Self::Tabular => Box::new(Session::new(TabularRender)),
            Self::Csv => Box::new(Session::new(CsvRender::new())),
            Self::Json => Box::new(Session::new(JsonRender)),
            Self::JsonShort => Box::new(Session::new(JsonShortRender)),
        }
    }
}

impl FromStr for BuiltinFormat {
    type Err = OutputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| OutputError::UnknownOutputter(s.to_string()))
    }
}

impl std::fmt::Display for BuiltinFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
