//! outputter formats - List registered output formats

use clap::Args;

use crate::app::AppContext;
use crate::error::Result;
use crate::output::{DEFAULT_OUTPUTTER, OutputRegistry, Outputter, OutputterExt};

#[derive(Args, Debug)]
pub struct FormatsArgs {}

pub fn run(ctx: &AppContext, _args: &FormatsArgs) -> Result<()> {
    let out = ctx.outputter()?;
    list_formats(&ctx.registry, out.as_ref())?;
    out.draw()
}

/// Add one row per registered format: name, default marker, color support.
///
/// # Errors
///
/// Returns an error if a registered factory cannot be instantiated.
pub fn list_formats(registry: &OutputRegistry, out: &dyn Outputter) -> Result<()> {
    out.set_headers_from(["format", "default", "color"]);
    for name in registry.outputters() {
        let color = registry.new_outputter(&name)?.color_support();
        let is_default = name == DEFAULT_OUTPUTTER.name();
        out.add_row_from([name, yes_no(is_default).to_string(), yes_no(color).to_string()])?;
    }
    Ok(())
}

const fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
