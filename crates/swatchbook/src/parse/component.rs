//! Component variants and dimension groups.

use indexmap::IndexMap;
use serde::Serialize;

use crate::alias::{resolve, AliasTable};
use crate::naming::to_css_variable;
use crate::tree::{join_path, leaves, TokenNode};

/// Type tags that make a token dimension-like.
pub const DIMENSION_TYPES: &[&str] = &["dimension", "spacing", "sizing", "borderRadius"];

/// One token inside a component variant or dimension group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentToken {
    /// Path below the variant or dimension group. Equal to the group key
    /// when the group is itself a single token.
    pub path: String,
    pub value: String,
    pub resolved_value: String,
    #[serde(rename = "type")]
    pub token_type: String,
    pub css_variable: String,
}

/// Everything known about one component, merged across token sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComponentSpec {
    pub name: String,
    /// Variant name (e.g. `primary`, `ghost`) to its tokens.
    pub variants: IndexMap<String, Vec<ComponentToken>>,
    /// Dimension group name (e.g. `padding`) to its tokens.
    pub dimensions: IndexMap<String, Vec<ComponentToken>>,
}

impl ComponentSpec {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }
}

/// Returns `true` if every child of `node` is a dimension-typed token.
///
/// Only groups qualify. An empty group qualifies vacuously.
pub fn is_dimension_group(node: &TokenNode) -> bool {
    node.as_group().is_some_and(|children| {
        children.values().all(|child| {
            child
                .as_token()
                .is_some_and(|token| DIMENSION_TYPES.contains(&token.token_type.as_str()))
        })
    })
}

/// Parses component groups into per-component specs.
///
/// Each group's children are component names; each component's children
/// are either dimension groups (see [`is_dimension_group`]) or variants.
/// Components with the same name are merged across groups. A variant or
/// dimension key seen again replaces the earlier entry wholesale.
///
/// Components are returned in the order their names are first seen.
///
/// ```rust
/// use swatchbook::parse::parse_components;
/// use swatchbook::tree::TokenNode;
/// use swatchbook::AliasTable;
/// use serde_json::json;
///
/// let group = TokenNode::from_value(&json!({
///     "button": {
///         "primary": { "background": { "value": "#1369e9", "type": "color" } },
///         "padding": { "x": { "value": "16px", "type": "spacing" } }
///     }
/// }));
///
/// let specs = parse_components([&group], &AliasTable::new());
/// assert_eq!(specs[0].name, "button");
/// assert!(specs[0].variants.contains_key("primary"));
/// assert!(specs[0].dimensions.contains_key("padding"));
/// ```
pub fn parse_components<'a, I>(groups: I, table: &AliasTable) -> Vec<ComponentSpec>
where
    I: IntoIterator<Item = &'a TokenNode>,
{
    let mut specs: IndexMap<String, ComponentSpec> = IndexMap::new();

    for group in groups {
        for (component, node) in group.children() {
            let spec = specs
                .entry(component.to_string())
                .or_insert_with(|| ComponentSpec::new(component));

            for (key, child) in node.children() {
                let tokens = component_tokens(component, key, child, table);
                if is_dimension_group(child) {
                    spec.dimensions.insert(key.to_string(), tokens);
                } else {
                    spec.variants.insert(key.to_string(), tokens);
                }
            }
        }
    }

    tracing::debug!(components = specs.len(), "parsed components");
    specs.into_values().collect()
}

fn component_tokens(
    component: &str,
    key: &str,
    node: &TokenNode,
    table: &AliasTable,
) -> Vec<ComponentToken> {
    let root = if node.is_token() { key } else { "" };

    leaves(node, root)
        .into_iter()
        .map(|flat| {
            let full_path = if node.is_token() {
                join_path(component, key)
            } else {
                join_path(&join_path(component, key), &flat.path)
            };
            ComponentToken {
                css_variable: to_css_variable(&full_path, None),
                resolved_value: resolve(&flat.token.value, table),
                value: flat.token.value.clone(),
                token_type: flat.token.token_type.clone(),
                path: flat.path,
            }
        })
        .collect()
}
