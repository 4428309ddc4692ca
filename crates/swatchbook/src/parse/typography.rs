//! Typography tokens.

use serde::Serialize;

use crate::alias::{resolve, AliasTable};
use crate::document::TokenDocument;
use crate::naming::to_css_variable;
use crate::tree::flatten;

/// Type tags treated as typography.
pub const TYPOGRAPHY_TYPES: &[&str] = &[
    "typography",
    "fontFamilies",
    "fontFamily",
    "fontWeights",
    "fontWeight",
    "fontSizes",
    "fontSize",
    "lineHeights",
    "lineHeight",
    "letterSpacing",
    "paragraphSpacing",
    "textCase",
    "textDecoration",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypographyToken {
    /// Name of the token set the token was found in.
    pub set: String,
    /// Path within the set.
    pub path: String,
    pub value: String,
    pub resolved_value: String,
    #[serde(rename = "type")]
    pub token_type: String,
    pub css_variable: String,
}

/// Collects every typography-typed token in the document, in document order.
///
/// Composite `typography` values are kept as their compact JSON text.
pub fn parse_typography(document: &TokenDocument, table: &AliasTable) -> Vec<TypographyToken> {
    let tokens: Vec<TypographyToken> = document
        .sets()
        .flat_map(|(set, node)| {
            flatten(node, "")
                .into_iter()
                .filter(|flat| TYPOGRAPHY_TYPES.contains(&flat.token.token_type.as_str()))
                .map(move |flat| TypographyToken {
                    set: set.to_string(),
                    css_variable: to_css_variable(&flat.path, None),
                    resolved_value: resolve(&flat.token.value, table),
                    value: flat.token.value.clone(),
                    token_type: flat.token.token_type.clone(),
                    path: flat.path,
                })
        })
        .collect();

    tracing::debug!(tokens = tokens.len(), "parsed typography");
    tokens
}
