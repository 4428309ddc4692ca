//! Output mode selection.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// How command output is presented.
///
/// - `Auto`: styled when stdout is a terminal, plain otherwise
/// - `Term`: always styled with ANSI codes
/// - `Text`: never styled
/// - `Json`: the underlying records serialized as JSON, no templates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    #[default]
    Auto,
    Term,
    Text,
    Json,
}

impl OutputMode {
    pub const NAMES: [&'static str; 4] = ["auto", "term", "text", "json"];

    /// Returns `true` if styles should emit ANSI codes.
    pub fn should_use_color(self) -> bool {
        match self {
            OutputMode::Auto => console::colors_enabled(),
            OutputMode::Term => true,
            OutputMode::Text | OutputMode::Json => false,
        }
    }

    pub fn is_structured(self) -> bool {
        self == OutputMode::Json
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OutputMode::Auto => "auto",
            OutputMode::Term => "term",
            OutputMode::Text => "text",
            OutputMode::Json => "json",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(OutputMode::Auto),
            "term" => Ok(OutputMode::Term),
            "text" => Ok(OutputMode::Text),
            "json" => Ok(OutputMode::Json),
            other => Err(format!(
                "unknown output mode '{}' (expected {})",
                other,
                Self::NAMES.join(", ")
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        for name in OutputMode::NAMES {
            let mode: OutputMode = name.parse().unwrap();
            assert_eq!(mode.as_str(), name);
        }
        assert!("html".parse::<OutputMode>().is_err());
    }

    #[test]
    fn test_color_by_mode() {
        assert!(OutputMode::Term.should_use_color());
        assert!(!OutputMode::Text.should_use_color());
        assert!(!OutputMode::Json.should_use_color());
    }

    #[test]
    fn test_deserialize_lowercase() {
        let mode: OutputMode = serde_yaml::from_str("json").unwrap();
        assert_eq!(mode, OutputMode::Json);
    }
}
