//! Flat searchable records built from the region walk.

use serde::Serialize;

use crate::alias::{resolve, AliasTable};
use crate::document::TokenDocument;
use crate::regions::{region_tokens, Region};

/// One entry of the search index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchableToken {
    /// `"{category}:{path}"`. Unique unless two sets define the same path
    /// in the same region.
    pub id: String,
    /// CSS variable without the leading `--`.
    pub name: String,
    /// Resolved value.
    pub value: String,
    pub css_variable: String,
    #[serde(rename = "type")]
    pub token_type: String,
    pub category: Region,
    /// Resolved value for colour tokens, for drawing a swatch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
}

/// Builds the search index for a document.
///
/// ```rust
/// use swatchbook::search::index_tokens;
/// use swatchbook::TokenDocument;
/// use serde_json::json;
///
/// let doc = TokenDocument::from_value(&json!({
///     "Foundation": { "base": { "blue": { "500": { "value": "#1369e9", "type": "color" } } } }
/// }));
///
/// let index = index_tokens(&doc);
/// assert_eq!(index[0].id, "foundation:blue.500");
/// assert_eq!(index[0].name, "base-blue-500");
/// assert_eq!(index[0].preview.as_deref(), Some("#1369e9"));
/// ```
pub fn index_tokens(document: &TokenDocument) -> Vec<SearchableToken> {
    index_tokens_with(document, &AliasTable::build(document))
}

/// Builds the search index with an already-built alias table.
pub fn index_tokens_with(document: &TokenDocument, table: &AliasTable) -> Vec<SearchableToken> {
    let index: Vec<SearchableToken> = region_tokens(document)
        .into_iter()
        .map(|entry| {
            let value = resolve(&entry.token.value, table);
            let preview = (entry.token.token_type == "color").then(|| value.clone());
            SearchableToken {
                id: format!("{}:{}", entry.region, entry.path),
                name: entry
                    .css_variable
                    .trim_start_matches("--")
                    .to_string(),
                value,
                token_type: entry.token.token_type.clone(),
                category: entry.region,
                preview,
                css_variable: entry.css_variable,
            }
        })
        .collect();

    tracing::debug!(records = index.len(), "built search index");
    index
}
