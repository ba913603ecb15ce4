//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

pub mod commands;

pub use commands::Commands;

use crate::output::ColorMode;

#[derive(Parser, Debug)]
#[command(name = "outputter", version, about = "Render tabular results as table, CSV or JSON")]
pub struct Cli {
    /// Output format (table, tabular, csv, json, jsonshort, or a custom one)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<String>,

    /// Indent JSON output (`--pretty=false` overrides the config file)
    #[arg(
        long,
        global = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_name = "BOOL"
    )]
    pub pretty: Option<bool>,

    /// When to color cells in color-capable formats
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorArg>,

    /// Path to a config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress logging
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorArg {
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorMode {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
