//! Token documents and their top-level sets.

use std::path::Path;

use serde_json::Value;

use crate::error::DocumentError;
use crate::tree::TokenNode;

/// Top-level keys that hold export metadata rather than token data.
pub const RESERVED_KEYS: &[&str] = &["global", "$themes", "$metadata"];

/// Returns `true` if a top-level key is metadata and must not be traversed.
pub fn is_reserved_key(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}

/// A parsed design-token export.
///
/// The document is an immutable snapshot: every derived structure (alias
/// table, classification, search index, export list) is recomputed from it.
///
/// # Example
///
/// ```rust
/// use swatchbook::TokenDocument;
///
/// let doc = TokenDocument::from_json_str(r##"{
///     "Foundation": { "base": { "blue": { "500": { "value": "#1369e9", "type": "color" } } } },
///     "$metadata": { "tokenSetOrder": ["Foundation"] }
/// }"##).unwrap();
///
/// let names: Vec<&str> = doc.sets().map(|(name, _)| name).collect();
/// assert_eq!(names, vec!["Foundation"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TokenDocument {
    root: TokenNode,
}

impl TokenDocument {
    /// Wraps an already-typed root node.
    pub fn new(root: TokenNode) -> Self {
        Self { root }
    }

    /// Builds a document from parsed JSON. A non-object root yields an
    /// empty document.
    pub fn from_value(value: &Value) -> Self {
        Self::new(TokenNode::from_value(value))
    }

    /// Parses a JSON export.
    pub fn from_json_str(source: &str) -> Result<Self, DocumentError> {
        let value: Value = serde_json::from_str(source)?;
        Ok(Self::from_value(&value))
    }

    /// Parses a YAML export.
    pub fn from_yaml_str(source: &str) -> Result<Self, DocumentError> {
        let value: Value = serde_yaml::from_str(source)?;
        Ok(Self::from_value(&value))
    }

    /// Reads and parses a file, choosing the format from its extension
    /// (`.json`, `.yaml` or `.yml`).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let source = std::fs::read_to_string(path).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let document = match extension.as_str() {
            "json" => Self::from_json_str(&source)?,
            "yaml" | "yml" => Self::from_yaml_str(&source)?,
            _ => return Err(DocumentError::UnsupportedExtension { extension }),
        };

        tracing::debug!(
            path = %path.display(),
            sets = document.sets().count(),
            "loaded token document"
        );
        Ok(document)
    }

    /// Returns the raw root node, reserved keys included.
    pub fn root(&self) -> &TokenNode {
        &self.root
    }

    /// Iterates token sets in document order, skipping reserved keys.
    pub fn sets(&self) -> impl Iterator<Item = (&str, &TokenNode)> {
        self.root
            .children()
            .filter(|(name, _)| !is_reserved_key(name))
    }

    /// Looks up a token set by name. Reserved keys are never returned.
    pub fn set(&self, name: &str) -> Option<&TokenNode> {
        if is_reserved_key(name) {
            return None;
        }
        self.root.get(name)
    }

    /// Returns `true` if the document has no token sets.
    pub fn is_empty(&self) -> bool {
        self.sets().next().is_none()
    }
}

impl From<TokenNode> for TokenDocument {
    fn from(root: TokenNode) -> Self {
        Self::new(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_sets_skip_reserved_keys() {
        let doc = TokenDocument::from_value(&json!({
            "global": {"a": {"value": "1", "type": "x"}},
            "Colors/Value": {},
            "$themes": [],
            "Spacing/Mode 1": {},
            "$metadata": {}
        }));

        let names: Vec<&str> = doc.sets().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Colors/Value", "Spacing/Mode 1"]);
        assert!(doc.set("global").is_none());
        assert!(doc.set("Colors/Value").is_some());
    }

    #[test]
    fn test_non_object_root_is_empty() {
        for raw in [json!(null), json!([1, 2]), json!("tokens")] {
            let doc = TokenDocument::from_value(&raw);
            assert!(doc.is_empty());
        }
    }

    #[test]
    fn test_from_json_str_rejects_invalid_json() {
        let result = TokenDocument::from_json_str("{ not json");
        assert!(matches!(result, Err(DocumentError::Json(_))));
    }

    #[test]
    fn test_from_yaml_str() {
        let doc = TokenDocument::from_yaml_str(
            "Spacing:\n  spacing:\n    sm:\n      value: 8px\n      type: spacing\n",
        )
        .unwrap();
        let set = doc.set("Spacing").expect("set");
        assert!(set.get("spacing").and_then(|g| g.get("sm")).is_some_and(TokenNode::is_token));
    }

    #[test]
    fn test_from_path_json() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r##"{{"Base": {{"white": {{"value": "#fff", "type": "color"}}}}}}"##
        )
        .unwrap();

        let doc = TokenDocument::from_path(file.path()).unwrap();
        assert!(doc.set("Base").is_some());
    }

    #[test]
    fn test_from_path_unsupported_extension() {
        let file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        let result = TokenDocument::from_path(file.path());
        assert!(matches!(
            result,
            Err(DocumentError::UnsupportedExtension { .. })
        ));
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = TokenDocument::from_path("/definitely/not/here/tokens.json");
        assert!(matches!(result, Err(DocumentError::Io { .. })));
    }
}
