//! Decide whether callers should embed ANSI color in cell values.
//!
//! A format's `color_support()` only says colors are *safe* for it. Whether
//! they are *wanted* also depends on the user's choice and the terminal, so
//! the final decision combines all three. Formats without color support
//! always stay plain.

use std::io::IsTerminal;
use std::str::FromStr;

use rich_rust::color::ColorSystem;
use serde::{Deserialize, Serialize};

use crate::error::OutputError;

/// User preference for colored cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl FromStr for ColorMode {
    type Err = OutputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            _ => Err(OutputError::Config(format!(
                "invalid color mode {s} (expected auto|always|never)"
            ))),
        }
    }
}

/// Why color was enabled or disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorDecisionReason {
    /// The output format cannot carry escape codes.
    FormatUnsupported,
    /// Color mode `never`.
    Disabled,
    /// Color mode `always`.
    Forced,
    /// NO_COLOR is set.
    EnvNoColor,
    /// Output is piped or redirected.
    NotTerminal,
    /// The terminal reports no color system.
    NoColorSystem,
    /// Color-capable format on a color terminal.
    TerminalDefault,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorDecision {
    pub use_color: bool,
    pub reason: ColorDecisionReason,
}

impl ColorDecision {
    const fn color(reason: ColorDecisionReason) -> Self {
        Self {
            use_color: true,
            reason,
        }
    }

    const fn plain(reason: ColorDecisionReason) -> Self {
        Self {
            use_color: false,
            reason,
        }
    }
}

/// Environment snapshot used for color detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorEnvironment {
    pub no_color: bool,
    pub stdout_is_terminal: bool,
    pub has_color_system: bool,
}

impl ColorEnvironment {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            no_color: std::env::var_os("NO_COLOR").is_some(),
            stdout_is_terminal: std::io::stdout().is_terminal(),
            has_color_system: detect_color_system().is_some(),
        }
    }

    /// Construct a custom environment (useful for tests).
    #[must_use]
    pub const fn new(no_color: bool, stdout_is_terminal: bool, has_color_system: bool) -> Self {
        Self {
            no_color,
            stdout_is_terminal,
            has_color_system,
        }
    }
}

pub struct ColorDetector {
    color_support: bool,
    mode: ColorMode,
    env: ColorEnvironment,
}

impl ColorDetector {
    /// Detector reading the current process environment.
    #[must_use]
    pub fn new(color_support: bool, mode: ColorMode) -> Self {
        Self::with_env(color_support, mode, ColorEnvironment::from_env())
    }

    #[must_use]
    pub const fn with_env(color_support: bool, mode: ColorMode, env: ColorEnvironment) -> Self {
        Self {
            color_support,
            mode,
            env,
        }
    }

    #[must_use]
    pub const fn decide(&self) -> ColorDecision {
        if !self.color_support {
            return ColorDecision::plain(ColorDecisionReason::FormatUnsupported);
        }
        match self.mode {
            ColorMode::Never => return ColorDecision::plain(ColorDecisionReason::Disabled),
            ColorMode::Always => return ColorDecision::color(ColorDecisionReason::Forced),
            ColorMode::Auto => {}
        }
        if self.env.no_color {
            return ColorDecision::plain(ColorDecisionReason::EnvNoColor);
        }
        if !self.env.stdout_is_terminal {
            return ColorDecision::plain(ColorDecisionReason::NotTerminal);
        }
        if !self.env.has_color_system {
            return ColorDecision::plain(ColorDecisionReason::NoColorSystem);
        }
        ColorDecision::color(ColorDecisionReason::TerminalDefault)
    }

    #[must_use]
    pub const fn should_use_color(&self) -> bool {
        self.decide().use_color
    }
}

#[must_use]
pub fn detect_color_system() -> Option<ColorSystem> {
    rich_rust::terminal::detect_color_system()
}
