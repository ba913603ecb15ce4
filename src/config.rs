use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{OutputError, Result};
use crate::output::{BorderStyle, ColorMode};

/// Format used when neither the config nor the command line picks one.
pub const DEFAULT_FORMAT: &str = "table";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Defaults, then the explicit file (`--config` or `OUTPUTTER_CONFIG`) or
    /// the global file, then environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`OutputError::Config`] for unreadable or malformed files and
    /// invalid environment values.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("OUTPUTTER_CONFIG").ok().map(PathBuf::from));

        let path = explicit.or_else(global_config_path);
        if let Some(path) = path {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        }

        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Parse a config file's contents on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`OutputError::Config`] if `raw` is not valid config TOML.
    pub fn from_toml(raw: &str) -> Result<Self> {
        let patch: ConfigPatch = toml::from_str(raw)
            .map_err(|err| OutputError::Config(format!("parse config: {err}")))?;
        let mut config = Self::default();
        config.merge_patch(patch);
        Ok(config)
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| OutputError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw).map_err(|err| {
            OutputError::Config(format!("parse config {}: {err}", path.display()))
        })?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.output {
            self.output.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(value) = env_string("OUTPUTTER_FORMAT") {
            self.output.format = value;
        }
        if let Some(value) = env_bool("OUTPUTTER_PRETTY")? {
            self.output.pretty = value;
        }
        if let Some(value) = env_string("OUTPUTTER_COLOR") {
            self.output.color = value.parse()?;
        }
        if let Some(value) = env_string("OUTPUTTER_TABLE_STYLE") {
            self.output.table_style = value.parse()?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: String,
    pub pretty: bool,
    pub color: ColorMode,
    pub table_style: BorderStyle,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_FORMAT.to_string(),
            pretty: false,
            color: ColorMode::Auto,
            table_style: BorderStyle::Square,
        }
    }
}

impl OutputConfig {
    fn merge(&mut self, patch: OutputPatch) {
        if let Some(value) = patch.format {
            self.format = value;
        }
        if let Some(value) = patch.pretty {
            self.pretty = value;
        }
        if let Some(value) = patch.color {
            self.color = value;
        }
        if let Some(value) = patch.table_style {
            self.table_style = value;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub output: Option<OutputPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct OutputPatch {
    pub format: Option<String>,
    pub pretty: Option<bool>,
    pub color: Option<ColorMode>,
    pub table_style: Option<BorderStyle>,
}

fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("outputter/config.toml"))
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn env_bool(key: &str) -> Result<Option<bool>> {
    env_string(key).map(|value| parse_bool(key, &value)).transpose()
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(OutputError::Config(format!(
            "invalid {key} value {value} (expected true|false)"
        ))),
    }
}
