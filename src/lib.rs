//! outputter - pluggable output renderers for job-scheduler CLI tooling.
//!
//! Command results arrive as a header list plus rows of strings and are
//! rendered as a bordered table, aligned plain columns, CSV, JSON objects or
//! column-oriented JSON. Formats are looked up by name in an
//! [`output::OutputRegistry`], which also accepts custom formats.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod test_utils;

pub use error::{OutputError, Result};
