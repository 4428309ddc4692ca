//! Export formats and token types.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ExportError;

/// Target language of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Css,
    Scss,
    Js,
    Tailwind,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Css,
        ExportFormat::Scss,
        ExportFormat::Js,
        ExportFormat::Tailwind,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ExportFormat::Css => "css",
            ExportFormat::Scss => "scss",
            ExportFormat::Js => "js",
            ExportFormat::Tailwind => "tailwind",
        }
    }

    /// Conventional file extension for the generated output.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Css => "css",
            ExportFormat::Scss => "scss",
            ExportFormat::Js => "js",
            ExportFormat::Tailwind => "config.js",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExportFormat::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ExportError::UnknownFormat(s.to_string()))
    }
}

/// Kind of value an exported token carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ExportType {
    Color,
    Spacing,
    Sizing,
    BorderRadius,
    Typography,
    LineHeight,
}

impl ExportType {
    pub fn as_str(self) -> &'static str {
        match self {
            ExportType::Color => "color",
            ExportType::Spacing => "spacing",
            ExportType::Sizing => "sizing",
            ExportType::BorderRadius => "borderRadius",
            ExportType::Typography => "typography",
            ExportType::LineHeight => "lineHeight",
        }
    }

    /// Key of the Tailwind `theme.extend` section tokens of this type go in.
    pub fn tailwind_key(self) -> &'static str {
        match self {
            ExportType::Color => "colors",
            ExportType::Spacing => "spacing",
            ExportType::Sizing => "size",
            ExportType::BorderRadius => "borderRadius",
            ExportType::Typography => "fontSize",
            ExportType::LineHeight => "lineHeight",
        }
    }
}

impl fmt::Display for ExportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Infers an export type from a token's group or path name.
///
/// Checks, in order, for `font`, `line-height`, `space` or `spacing`,
/// `radius` and `size` (case-insensitive). Anything else is reported as a colour, even
/// names with no colour meaning at all.
///
/// ```rust
/// use swatchbook::export::{determine_type, ExportType};
///
/// assert_eq!(determine_type("spacing.md"), ExportType::Spacing);
/// assert_eq!(determine_type("font-size.lg"), ExportType::Typography);
/// assert_eq!(determine_type("shadow.sm"), ExportType::Color);
/// ```
pub fn determine_type(name: &str) -> ExportType {
    let name = name.to_lowercase();
    if name.contains("font") {
        ExportType::Typography
    } else if name.contains("line-height") {
        ExportType::LineHeight
    } else if name.contains("space") || name.contains("spacing") {
        ExportType::Spacing
    } else if name.contains("radius") {
        ExportType::BorderRadius
    } else if name.contains("size") {
        ExportType::Sizing
    } else {
        ExportType::Color
    }
}
