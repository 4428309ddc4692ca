//! The alias lookup table.

use indexmap::IndexMap;

use crate::document::TokenDocument;
use crate::tree::flatten;

/// Lookup table from token path to raw token value.
///
/// Built once per document with [`AliasTable::build`] and passed explicitly
/// to every resolver call. Each leaf is inserted twice: under its path within
/// its set, and under `"{set}.{path}"`. Later insertions for the same key
/// overwrite earlier ones, so shadowing across sets is last-write-wins.
///
/// Entries keep their first insertion position, which is what the suffix
/// fallback of [`AliasTable::lookup`] scans in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    entries: IndexMap<String, String>,
}

impl AliasTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the table for a whole document.
    ///
    /// Reserved top-level keys are skipped. This never fails: anything that
    /// is not a token or a group is simply not indexed.
    pub fn build(document: &TokenDocument) -> Self {
        let mut table = Self::new();

        for (set_name, set) in document.sets() {
            for flat in flatten(set, "") {
                let qualified = format!("{}.{}", set_name, flat.path);
                table.insert(flat.path, flat.token.value.clone());
                table.insert(qualified, flat.token.value.clone());
            }
        }

        tracing::debug!(entries = table.len(), "built alias table");
        table
    }

    /// Inserts or overwrites an entry.
    pub fn insert(&mut self, path: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(path.into(), value.into());
    }

    /// Exact lookup.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    /// Looks up a reference path.
    ///
    /// Tries the exact key first, then falls back to the first entry whose
    /// key ends with `reference`, which lets partially-qualified references
    /// such as `{blue.500}` find `Foundation.base.blue.500`.
    pub fn lookup(&self, reference: &str) -> Option<&str> {
        if reference.is_empty() {
            return None;
        }

        self.get(reference).or_else(|| {
            self.entries
                .iter()
                .find(|(key, _)| key.ends_with(reference))
                .map(|(_, value)| value.as_str())
        })
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AliasTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (path, value) in iter {
            table.insert(path, value);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_inserts_bare_and_qualified_paths() {
        let doc = TokenDocument::from_value(&json!({
            "Foundation": {"base": {"blue": {"500": {"value": "#1369e9", "type": "color"}}}}
        }));
        let table = AliasTable::build(&doc);

        assert_eq!(table.len(), 2);
        assert_eq!(table.get("base.blue.500"), Some("#1369e9"));
        assert_eq!(table.get("Foundation.base.blue.500"), Some("#1369e9"));
    }

    #[test]
    fn test_build_skips_reserved_sets() {
        let doc = TokenDocument::from_value(&json!({
            "global": {"a": {"value": "1px", "type": "dimension"}},
            "$metadata": {"tokenSetOrder": ["global"]}
        }));
        assert!(AliasTable::build(&doc).is_empty());
    }

    #[test]
    fn test_build_is_last_write_wins() {
        let doc = TokenDocument::from_value(&json!({
            "Light": {"bg": {"value": "#ffffff", "type": "color"}},
            "Dark": {"bg": {"value": "#000000", "type": "color"}}
        }));
        let table = AliasTable::build(&doc);

        assert_eq!(table.get("bg"), Some("#000000"));
        assert_eq!(table.get("Light.bg"), Some("#ffffff"));
        assert_eq!(table.get("Dark.bg"), Some("#000000"));
    }

    #[test]
    fn test_build_on_malformed_input() {
        let doc = TokenDocument::from_value(&json!({"Set": [1, 2, 3], "Other": "text"}));
        assert!(AliasTable::build(&doc).is_empty());
    }

    #[test]
    fn test_lookup_exact_before_suffix() {
        let table: AliasTable = [
            ("Foundation.blue.500", "#suffix"),
            ("blue.500", "#exact"),
        ]
        .into_iter()
        .collect();

        assert_eq!(table.lookup("blue.500"), Some("#exact"));
    }

    #[test]
    fn test_lookup_suffix_takes_first_entry() {
        let table: AliasTable = [
            ("Foundation.base.blue.500", "#1369e9"),
            ("Other.blue.500", "#000000"),
        ]
        .into_iter()
        .collect();

        assert_eq!(table.lookup("blue.500"), Some("#1369e9"));
        assert_eq!(table.lookup("green.500"), None);
    }

    #[test]
    fn test_lookup_empty_reference() {
        let table: AliasTable = [("a", "1")].into_iter().collect();
        assert_eq!(table.lookup(""), None);
    }
}
