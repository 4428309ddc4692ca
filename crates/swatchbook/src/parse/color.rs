//! Colour parsers.

use std::cmp::Ordering;

use indexmap::IndexMap;
use serde::Serialize;

use crate::alias::{resolve, AliasTable};
use crate::naming::to_css_variable;
use crate::tree::{flatten, TokenNode};

/// Namespace every base colour variable is emitted under, regardless of the
/// set or group it came from.
pub const BASE_COLOR_NAMESPACE: &str = "base";

/// Group keys holding semantic colours; each key is also the namespace.
pub const SEMANTIC_NAMESPACES: &[&str] = &["fill", "stroke", "text"];

/// Shade names preferred as a family's representative colour.
const PRIMARY_SHADES: &[&str] = &["500", "50"];

/// One shade of a colour family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorShade {
    /// Last path segment, e.g. `500`.
    pub shade: String,
    /// Full path within the parsed group, e.g. `blue.500`, including any
    /// prefix the group was parsed under.
    pub path: String,
    pub value: String,
    pub resolved_value: String,
    pub css_variable: String,
}

/// Colour tokens sharing a name prefix, ordered by shade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorFamily {
    pub name: String,
    /// Resolved value of the representative shade.
    pub primary_color: String,
    pub shades: Vec<ColorShade>,
}

impl ColorFamily {
    /// Looks up a shade by name.
    pub fn shade(&self, shade: &str) -> Option<&ColorShade> {
        self.shades.iter().find(|s| s.shade == shade)
    }
}

/// A semantic colour such as `fill.primary.default`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SemanticColor {
    /// Path within the semantic group.
    pub name: String,
    /// `fill`, `stroke`, `text`, or whatever the caller supplied.
    pub namespace: String,
    pub value: String,
    pub resolved_value: String,
    pub css_variable: String,
}

/// Parses base colours into families.
///
/// Colour-typed leaves are grouped by all but their last path segment.
/// A single-segment leaf (e.g. `white`) forms a family of its own name.
/// Families keep the order in which they are first seen; shades are sorted
/// numerically when the shade name is an integer, lexically otherwise, with
/// integer shades first.
///
/// The representative colour is the first shade named `500` or `50`, else
/// the shade at the midpoint of the sorted list.
///
/// ```rust
/// use swatchbook::parse::parse_base_colors;
/// use swatchbook::tree::TokenNode;
/// use swatchbook::AliasTable;
/// use serde_json::json;
///
/// let base = TokenNode::from_value(&json!({
///     "blue": {
///         "600": { "value": "#0f57c2", "type": "color" },
///         "500": { "value": "#1369e9", "type": "color" }
///     }
/// }));
///
/// let families = parse_base_colors(&base, &AliasTable::new());
/// assert_eq!(families[0].name, "blue");
/// assert_eq!(families[0].primary_color, "#1369e9");
/// assert_eq!(families[0].shades[0].css_variable, "--base-blue-500");
/// ```
pub fn parse_base_colors(node: &TokenNode, table: &AliasTable) -> Vec<ColorFamily> {
    parse_color_families(node, "", Some(BASE_COLOR_NAMESPACE), table)
}

/// Parses colour families below `prefix`, named under `namespace`.
///
/// [`parse_base_colors`] is this with no prefix and the `base` namespace.
/// Colour groups outside `base` keep their group key as the path prefix and
/// take no namespace, matching how search and export name them.
///
/// ```rust
/// use swatchbook::parse::parse_color_families;
/// use swatchbook::tree::TokenNode;
/// use swatchbook::AliasTable;
/// use serde_json::json;
///
/// let brand = TokenNode::from_value(&json!({
///     "red": { "500": { "value": "#ef4444", "type": "color" } }
/// }));
///
/// let families = parse_color_families(&brand, "brand", None, &AliasTable::new());
/// assert_eq!(families[0].name, "brand.red");
/// assert_eq!(families[0].shades[0].css_variable, "--brand-red-500");
/// ```
pub fn parse_color_families(
    node: &TokenNode,
    prefix: &str,
    namespace: Option<&str>,
    table: &AliasTable,
) -> Vec<ColorFamily> {
    let mut families: IndexMap<String, Vec<ColorShade>> = IndexMap::new();

    for flat in flatten(node, prefix) {
        if flat.token.token_type != "color" {
            continue;
        }

        let (family, shade) = match flat.path.rsplit_once('.') {
            Some((family, shade)) => (family.to_string(), shade.to_string()),
            None => (flat.path.clone(), flat.path.clone()),
        };

        families.entry(family).or_default().push(ColorShade {
            shade,
            css_variable: to_css_variable(&flat.path, namespace),
            resolved_value: resolve(&flat.token.value, table),
            value: flat.token.value.clone(),
            path: flat.path,
        });
    }

    families
        .into_iter()
        .map(|(name, mut shades)| {
            shades.sort_by(|a, b| compare_shades(&a.shade, &b.shade));
            let primary_color = primary_shade(&shades)
                .map(|shade| shade.resolved_value.clone())
                .unwrap_or_default();
            ColorFamily {
                name,
                primary_color,
                shades,
            }
        })
        .collect()
}

/// Parses a semantic colour group into flat records.
///
/// Only colour-typed leaves are kept. CSS variables are namespaced with
/// `namespace`.
pub fn parse_semantic_colors(
    node: &TokenNode,
    namespace: &str,
    table: &AliasTable,
) -> Vec<SemanticColor> {
    flatten(node, "")
        .into_iter()
        .filter(|flat| flat.token.token_type == "color")
        .map(|flat| SemanticColor {
            css_variable: to_css_variable(&flat.path, Some(namespace)),
            namespace: namespace.to_string(),
            resolved_value: resolve(&flat.token.value, table),
            value: flat.token.value.clone(),
            name: flat.path,
        })
        .collect()
}

/// Orders shade names: integers numerically, then everything else lexically.
fn compare_shades(a: &str, b: &str) -> Ordering {
    match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

fn primary_shade(shades: &[ColorShade]) -> Option<&ColorShade> {
    shades
        .iter()
        .find(|shade| PRIMARY_SHADES.contains(&shade.shade.as_str()))
        .or_else(|| shades.get(shades.len() / 2))
}
