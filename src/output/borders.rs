//! Border glyph sets for the table renderer.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OutputError;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BorderStyle {
    #[default]
    Square,
    Rounded,
    Heavy,
    Double,
    Ascii,
}

impl BorderStyle {
    pub const ALL: [Self; 5] = [
        Self::Square,
        Self::Rounded,
        Self::Heavy,
        Self::Double,
        Self::Ascii,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::Rounded => "rounded",
            Self::Heavy => "heavy",
            Self::Double => "double",
            Self::Ascii => "ascii",
        }
    }

    #[must_use]
    pub const fn chars(self) -> BorderChars {
        match self {
            Self::Square => BorderChars {
                top_left: '\u{250c}',
                top_right: '\u{2510}',
                bottom_left: '\u{2514}',
                bottom_right: '\u{2518}',
                horizontal: '\u{2500}',
                vertical: '\u{2502}',
                top_tee: '\u{252c}',
                bottom_tee: '\u{2534}',
                left_tee: '\u{251c}',
                right_tee: '\u{2524}',
                cross: '\u{253c}',
            },
            Self::Rounded => BorderChars {
                top_left: '\u{256d}',
                top_right: '\u{256e}',
                bottom_left: '\u{2570}',
                bottom_right: '\u{256f}',
                ..Self::Square.chars()
            },
            Self::Heavy => BorderChars {
                top_left: '\u{250f}',
                top_right: '\u{2513}',
                bottom_left: '\u{2517}',
                bottom_right: '\u{251b}',
                horizontal: '\u{2501}',
                vertical: '\u{2503}',
                top_tee: '\u{2533}',
                bottom_tee: '\u{253b}',
                left_tee: '\u{2523}',
                right_tee: '\u{252b}',
                cross: '\u{254b}',
            },
            Self::Double => BorderChars {
                top_left: '\u{2554}',
                top_right: '\u{2557}',
                bottom_left: '\u{255a}',
                bottom_right: '\u{255d}',
                horizontal: '\u{2550}',
                vertical: '\u{2551}',
                top_tee: '\u{2566}',
                bottom_tee: '\u{2569}',
                left_tee: '\u{2560}',
                right_tee: '\u{2563}',
                cross: '\u{256c}',
            },
            Self::Ascii => BorderChars {
                top_left: '+',
                top_right: '+',
                bottom_left: '+',
                bottom_right: '+',
                horizontal: '-',
                vertical: '|',
                top_tee: '+',
                bottom_tee: '+',
                left_tee: '+',
                right_tee: '+',
                cross: '+',
            },
        }
    }
}

impl FromStr for BorderStyle {
    type Err = OutputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|style| style.name() == key)
            .ok_or_else(|| {
                OutputError::Config(format!(
                    "invalid table style {s} (expected square|rounded|heavy|double|ascii)"
                ))
            })
    }
}

impl std::fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderChars {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
    pub top_tee: char,
    pub bottom_tee: char,
    pub left_tee: char,
    pub right_tee: char,
    pub cross: char,
}
