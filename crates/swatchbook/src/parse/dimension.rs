//! Spacing, size and radius scales.

use serde::Serialize;

use crate::alias::{resolve, AliasTable};
use crate::naming::{numeric_prefix, to_css_variable};
use crate::tree::{flatten, TokenNode};

/// Type tag some exports put on every dimension-like token. Accepted by all
/// dimension parsers in addition to their specific tag.
pub const GENERIC_DIMENSION_TYPE: &str = "dimension";

/// One step of a dimension scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionToken {
    /// Path within the parsed group.
    pub name: String,
    pub value: String,
    pub resolved_value: String,
    #[serde(rename = "type")]
    pub token_type: String,
    pub css_variable: String,
    /// Leading number of the resolved value; the sort key.
    pub magnitude: f64,
}

/// Parses a dimension group into a scale sorted by magnitude.
///
/// A leaf is kept when its type is `expected_type` or
/// [`GENERIC_DIMENSION_TYPE`]. Records are sorted ascending by the leading
/// number of their resolved value; equal magnitudes keep document order.
///
/// ```rust
/// use swatchbook::parse::parse_dimensions;
/// use swatchbook::tree::TokenNode;
/// use swatchbook::AliasTable;
/// use serde_json::json;
///
/// let group = TokenNode::from_value(&json!({
///     "sm": { "value": "8px", "type": "spacing" },
///     "xs": { "value": "4px", "type": "spacing" },
///     "lg": { "value": "16px", "type": "spacing" }
/// }));
///
/// let scale = parse_dimensions(&group, "spacing", "spacing", &AliasTable::new());
/// let names: Vec<&str> = scale.iter().map(|t| t.name.as_str()).collect();
/// assert_eq!(names, vec!["xs", "sm", "lg"]);
/// ```
pub fn parse_dimensions(
    node: &TokenNode,
    expected_type: &str,
    namespace: &str,
    table: &AliasTable,
) -> Vec<DimensionToken> {
    let mut scale: Vec<DimensionToken> = flatten(node, "")
        .into_iter()
        .filter(|flat| {
            let ty = flat.token.token_type.as_str();
            ty == expected_type || ty == GENERIC_DIMENSION_TYPE
        })
        .map(|flat| {
            let resolved_value = resolve(&flat.token.value, table);
            DimensionToken {
                css_variable: to_css_variable(&flat.path, Some(namespace)),
                magnitude: numeric_prefix(&resolved_value),
                resolved_value,
                value: flat.token.value.clone(),
                token_type: flat.token.token_type.clone(),
                name: flat.path,
            }
        })
        .collect();

    // `sort_by` is stable, which keeps ties in document order.
    scale.sort_by(|a, b| a.magnitude.total_cmp(&b.magnitude));
    scale
}

/// Parses a spacing group (`spacing` tokens, `--spacing-*` variables).
pub fn parse_spacing(node: &TokenNode, table: &AliasTable) -> Vec<DimensionToken> {
    parse_dimensions(node, "spacing", "spacing", table)
}

/// Parses a size group (`sizing` tokens, `--size-*` variables).
pub fn parse_sizes(node: &TokenNode, table: &AliasTable) -> Vec<DimensionToken> {
    parse_dimensions(node, "sizing", "size", table)
}

/// Parses a radius group (`borderRadius` tokens, `--radius-*` variables).
pub fn parse_radius(node: &TokenNode, table: &AliasTable) -> Vec<DimensionToken> {
    parse_dimensions(node, "borderRadius", "radius", table)
}
