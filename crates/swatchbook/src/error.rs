//! Errors raised at the crate boundary.
//!
//! Token processing itself never fails; these cover loading a document from
//! text or disk and rendering export output.

use std::path::PathBuf;

use thiserror::Error;

use crate::export::ExportFormat;

/// Error returned when a token document cannot be loaded.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The input is not valid JSON.
    #[error("invalid JSON token document: {0}")]
    Json(#[from] serde_json::Error),

    /// The input is not valid YAML.
    #[error("invalid YAML token document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The file could not be read.
    #[error("failed to read token document {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file extension does not name a supported format.
    #[error("unsupported token document extension {extension:?} (expected .json, .yaml or .yml)")]
    UnsupportedExtension { extension: String },
}

/// Error returned when export output cannot be produced.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The output template failed to render.
    #[error("failed to render {format} export: {source}")]
    Template {
        format: ExportFormat,
        #[source]
        source: minijinja::Error,
    },

    /// The requested format name is not known.
    #[error("unknown export format {0:?} (expected css, scss, js or tailwind)")]
    UnknownFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_extension_display() {
        let err = DocumentError::UnsupportedExtension {
            extension: "toml".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("toml"));
        assert!(msg.contains(".json"));
    }

    #[test]
    fn test_unknown_format_display() {
        let err = ExportError::UnknownFormat("less".to_string());
        assert!(err.to_string().contains("less"));
    }

    #[test]
    fn test_json_error_converts() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: DocumentError = source.into();
        assert!(err.to_string().starts_with("invalid JSON"));
    }
}
