//! Color well-known execution status words for color-capable formats.

use console::{Color, style};

/// Color for a status word, if it is one we know.
#[must_use]
pub fn status_color(value: &str) -> Option<Color> {
    match value.trim().to_lowercase().as_str() {
        "succeeded" | "success" | "ok" => Some(Color::Green),
        "failed" | "failure" => Some(Color::Red),
        "running" => Some(Color::Cyan),
        "aborted" | "timedout" => Some(Color::Yellow),
        "scheduled" | "queued" => Some(Color::Blue),
        _ => None,
    }
}

/// Wrap a known status word in ANSI color; anything else is returned as-is.
///
/// Styling is forced: check the color decision before calling this.
#[must_use]
pub fn style_status(value: &str) -> String {
    match status_color(value) {
        Some(color) => style(value).fg(color).force_styling(true).to_string(),
        None => value.to_string(),
    }
}
