//! Config file parsing and precedence.

use outputter::OutputError;
use outputter::config::{Config, DEFAULT_FORMAT};
use outputter::output::{BorderStyle, ColorMode};
use outputter::test_utils::{TestCase, run_table_tests};
use tempfile::tempdir;

#[test]
fn test_table_style_values() {
    let cases = vec![
        TestCase {
            name: "square",
            input: "square",
            expected: Some(BorderStyle::Square),
            should_panic: false,
        },
        TestCase {
            name: "rounded",
            input: "rounded",
            expected: Some(BorderStyle::Rounded),
            should_panic: false,
        },
        TestCase {
            name: "heavy",
            input: "heavy",
            expected: Some(BorderStyle::Heavy),
            should_panic: false,
        },
        TestCase {
            name: "double",
            input: "double",
            expected: Some(BorderStyle::Double),
            should_panic: false,
        },
        TestCase {
            name: "ascii",
            input: "ascii",
            expected: Some(BorderStyle::Ascii),
            should_panic: false,
        },
        TestCase {
            name: "unknown style",
            input: "dotted",
            expected: None,
            should_panic: false,
        },
    ];

    run_table_tests(cases, |style| {
        Config::from_toml(&format!("[output]\ntable_style = \"{style}\"\n"))
            .ok()
            .map(|config| config.output.table_style)
    })
    .unwrap();
}

#[test]
fn test_color_mode_values() {
    let cases = vec![
        TestCase {
            name: "auto",
            input: "auto",
            expected: Some(ColorMode::Auto),
            should_panic: false,
        },
        TestCase {
            name: "always",
            input: "always",
            expected: Some(ColorMode::Always),
            should_panic: false,
        },
        TestCase {
            name: "never",
            input: "never",
            expected: Some(ColorMode::Never),
            should_panic: false,
        },
        TestCase {
            name: "case sensitive in files",
            input: "ALWAYS",
            expected: None,
            should_panic: false,
        },
    ];

    run_table_tests(cases, |mode| {
        Config::from_toml(&format!("[output]\ncolor = \"{mode}\"\n"))
            .ok()
            .map(|config| config.output.color)
    })
    .unwrap();
}

#[test]
fn test_empty_file_is_defaults() {
    assert_eq!(Config::from_toml("").unwrap(), Config::default());
    assert_eq!(Config::default().output.format, DEFAULT_FORMAT);
}

#[test]
fn test_unknown_format_name_is_accepted_by_config() {
    // Format names are resolved against the registry later, not here.
    let config = Config::from_toml("[output]\nformat = \"custom\"\n").unwrap();
    assert_eq!(config.output.format, "custom");
}

#[test]
fn test_malformed_toml() {
    let err = Config::from_toml("[output\nformat =").unwrap_err();
    assert!(matches!(err, OutputError::Config(_)));
    assert!(err.to_string().starts_with("configuration error"));
}

#[test]
fn test_load_explicit_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[output]\npretty = true\ntable_style = \"double\"\n").unwrap();

    let config = Config::load(Some(&path)).unwrap();
    assert_eq!(config.output.table_style, BorderStyle::Double);
}

#[test]
fn test_load_unreadable_path_is_config_error() {
    let dir = tempdir().unwrap();
    // A directory exists but cannot be read as a file.
    let err = Config::load(Some(dir.path())).unwrap_err();
    assert!(matches!(err, OutputError::Config(_)));
}
