//! The flat export list.

use serde::Serialize;

use super::format::{determine_type, ExportType};
use crate::alias::{resolve, AliasTable};
use crate::document::TokenDocument;
use crate::regions::{region_tokens, Region};

/// One token of an export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportToken {
    /// Output identifier: the CSS variable without the leading `--`.
    pub name: String,
    /// Raw value, possibly an alias.
    pub value: String,
    pub resolved_value: String,
    pub css_variable: String,
    #[serde(rename = "type")]
    pub token_type: ExportType,
    pub category: Region,
}

impl ExportToken {
    pub fn is_alias(&self) -> bool {
        crate::alias::is_alias(&self.value)
    }
}

/// Flattens a document into export records, in document order.
///
/// Base and semantic tokens are always colours. Other foundation and
/// component tokens get their type from [`determine_type`] over their path.
pub fn flatten_for_export(document: &TokenDocument) -> Vec<ExportToken> {
    flatten_for_export_with(document, &AliasTable::build(document))
}

/// Like [`flatten_for_export`], with an already-built alias table.
pub fn flatten_for_export_with(document: &TokenDocument, table: &AliasTable) -> Vec<ExportToken> {
    let tokens: Vec<ExportToken> = region_tokens(document)
        .into_iter()
        .map(|entry| {
            let token_type = match (entry.region, entry.namespace) {
                (Region::Semantic, _) | (Region::Foundation, Some(_)) => ExportType::Color,
                _ => determine_type(&entry.path),
            };
            ExportToken {
                name: entry.css_variable.trim_start_matches("--").to_string(),
                value: entry.token.value.clone(),
                resolved_value: resolve(&entry.token.value, table),
                token_type,
                category: entry.region,
                css_variable: entry.css_variable,
            }
        })
        .collect();

    tracing::debug!(tokens = tokens.len(), "flattened tokens for export");
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_export_types_by_region() {
        let doc = TokenDocument::from_value(&json!({
            "Foundation": {
                "base": {"space": {"value": "#123456", "type": "color"}},
                "spacing": {"md": {"value": "16px", "type": "spacing"}},
                "border-radius": {"sm": {"value": "4px", "type": "borderRadius"}},
                "font-size": {"body": {"value": "16px", "type": "fontSizes"}},
                "line-height": {"body": {"value": "1.5", "type": "lineHeights"}},
                "shadow": {"sm": {"value": "0 1px 2px #0003", "type": "boxShadow"}}
            },
            "Semantic": {
                "text": {"size": {"value": "{base.space}", "type": "color"}}
            },
            "Components": {
                "button": {
                    "padding": {"x": {"value": "12px", "type": "spacing"}},
                    "icon-size": {"md": {"value": "20px", "type": "sizing"}}
                }
            }
        }));

        let tokens = flatten_for_export(&doc);
        let types: Vec<(&str, ExportType)> = tokens
            .iter()
            .map(|t| (t.name.as_str(), t.token_type))
            .collect();
        assert_eq!(
            types,
            vec![
                ("base-space", ExportType::Color),
                ("spacing-md", ExportType::Spacing),
                ("border-radius-sm", ExportType::BorderRadius),
                ("font-size-body", ExportType::Typography),
                ("line-height-body", ExportType::LineHeight),
                ("shadow-sm", ExportType::Color),
                ("text-size", ExportType::Color),
                ("button-padding-x", ExportType::Color),
                ("button-icon-size-md", ExportType::Sizing),
            ]
        );
    }

    #[test]
    fn test_values_kept_raw_and_resolved() {
        let doc = TokenDocument::from_value(&json!({
            "Foundation": {"base": {"blue": {"value": "#00f", "type": "color"}}},
            "Semantic": {"fill": {"accent": {"value": "{base.blue}", "type": "color"}}}
        }));
        let tokens = flatten_for_export(&doc);
        assert_eq!(tokens[1].value, "{base.blue}");
        assert_eq!(tokens[1].resolved_value, "#00f");
        assert!(tokens[1].is_alias());
        assert!(!tokens[0].is_alias());
    }

    #[test]
    fn test_empty_document() {
        assert!(flatten_for_export(&TokenDocument::from_value(&json!(null))).is_empty());
    }
}
