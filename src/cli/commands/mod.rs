//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - run() function to execute the command

use clap::Subcommand;

pub mod formats;
pub mod render;

use crate::app::AppContext;
use crate::error::Result;

/// # Errors
///
/// Propagates the failing command's error.
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Render(args) => render::run(ctx, args),
        Commands::Formats(args) => formats::run(ctx, args),
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render delimited rows from a file or stdin in the selected format
    Render(render::RenderArgs),

    /// List the registered output formats
    Formats(formats::FormatsArgs),
}
