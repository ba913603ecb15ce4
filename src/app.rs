use tracing::debug;

use crate::config::Config;
use crate::error::Result;
use crate::output::{
    BorderStyle, ColorDecision, ColorDetector, ColorEnvironment, ColorMode, OutputRegistry,
    Outputter, Session, TableRender,
};

/// Composition root: configuration plus the format registry, resolved once
/// per invocation.
pub struct AppContext {
    pub config: Config,
    pub registry: OutputRegistry,
    pub format: String,
    pub pretty: bool,
    pub color: ColorMode,
}

impl AppContext {
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub fn from_cli(cli: &crate::cli::Cli) -> Result<Self> {
        let config = Config::load(cli.config.as_deref())?;
        let format = cli
            .format
            .clone()
            .unwrap_or_else(|| config.output.format.clone());
        let pretty = cli.pretty.unwrap_or(config.output.pretty);
        let color = cli.color.map_or(config.output.color, ColorMode::from);

        Ok(Self::new(config, format, pretty, color))
    }

    #[must_use]
    pub fn new(config: Config, format: String, pretty: bool, color: ColorMode) -> Self {
        let registry = build_registry(config.output.table_style);
        debug!(format = %format, pretty, color = ?color, "output selected");
        Self {
            config,
            registry,
            format,
            pretty,
            color,
        }
    }

    /// Fresh outputter for the selected format, pretty mode applied.
    ///
    /// # Errors
    ///
    /// [`crate::OutputError::UnknownOutputter`] if the format is not
    /// registered.
    pub fn outputter(&self) -> Result<Box<dyn Outputter>> {
        let out = self.registry.new_outputter(&self.format)?;
        if self.pretty {
            out.set_pretty();
        }
        Ok(out)
    }

    /// Whether cells should be colored for `out`. `to_stdout` is false when
    /// the sink was replaced, e.g. by a file.
    #[must_use]
    pub fn use_color(&self, out: &dyn Outputter, to_stdout: bool) -> bool {
        self.color_decision(out, ColorEnvironment::from_env(), to_stdout)
            .use_color
    }

    /// Color decision against an explicit environment. A sink other than
    /// stdout never counts as a terminal.
    #[must_use]
    pub fn color_decision(
        &self,
        out: &dyn Outputter,
        mut env: ColorEnvironment,
        to_stdout: bool,
    ) -> ColorDecision {
        if !to_stdout {
            env.stdout_is_terminal = false;
        }
        ColorDetector::with_env(out.color_support(), self.color, env).decide()
    }
}

/// Built-in formats, with `table` using the configured border style.
#[must_use]
pub fn build_registry(table_style: BorderStyle) -> OutputRegistry {
    let registry = OutputRegistry::new();
    if table_style != BorderStyle::default() {
        // Registered first so it takes the `table` name from the built-in.
        match registry.register_output("table", move || {
            Box::new(Session::new(TableRender::with_style(table_style)))
        }) {
            Ok(true) => debug!(style = %table_style, "table style registered"),
            Ok(false) => debug!("table already registered, style {table_style} ignored"),
            Err(err) => debug!(error = %err, "table style not registered"),
        }
    }
    registry.register_builtins();
    registry
}
