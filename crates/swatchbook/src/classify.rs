//! Group classification.
//!
//! Each immediate child of a token set is assigned exactly one [`Category`],
//! which decides the specialized parser that handles it. Rules are checked
//! in a fixed order and the first match wins:
//!
//! | Order | Rule | Category |
//! |-------|------|----------|
//! | 1 | has a direct `base`, `fill`, `stroke` or `text` child | `colors` |
//! | 2 | no leaf tokens at any depth | `other` |
//! | 3 | a leaf typed `color` | `colors` |
//! | 4 | a leaf typed `spacing`, or name contains `space`/`spacing` | `spacing` |
//! | 5 | a leaf typed `sizing`, or name contains `size`/`width`/`height` | `sizes` |
//! | 6 | a leaf typed `borderRadius`, or name contains `radius`/`border` | `radius` |
//! | 7 | a direct child that is itself a group | `components` |
//! | 8 | anything else | `other` |
//!
//! Name checks are case-insensitive substring matches; type tags match
//! exactly.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::Serialize;

use crate::document::TokenDocument;
use crate::tree::{flatten, TokenNode};

/// Direct child keys that mark a group as colours.
pub const SEMANTIC_COLOR_KEYS: &[&str] = &["base", "fill", "stroke", "text"];

/// The category a token group is handled as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Colors,
    Spacing,
    Sizes,
    Radius,
    Components,
    Other,
}

impl Category {
    /// All categories, in tie-break order.
    pub const ALL: [Category; 6] = [
        Category::Colors,
        Category::Spacing,
        Category::Sizes,
        Category::Radius,
        Category::Components,
        Category::Other,
    ];

    /// Returns the lowercase category name.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Colors => "colors",
            Category::Spacing => "spacing",
            Category::Sizes => "sizes",
            Category::Radius => "radius",
            Category::Components => "components",
            Category::Other => "other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies one token group.
///
/// `group` is an immediate child of a token set and `name` is its key.
/// Deterministic: the same input always yields the same category.
///
/// # Example
///
/// ```rust
/// use swatchbook::classify::{classify_group, Category};
/// use swatchbook::tree::TokenNode;
/// use serde_json::json;
///
/// let group = TokenNode::from_value(&json!({
///     "sm": { "value": "8px", "type": "dimension" }
/// }));
/// assert_eq!(classify_group(&group, "Spacing"), Category::Spacing);
/// ```
pub fn classify_group(group: &TokenNode, name: &str) -> Category {
    if SEMANTIC_COLOR_KEYS.iter().any(|key| group.get(key).is_some()) {
        return Category::Colors;
    }

    let leaves = flatten(group, "");
    if leaves.is_empty() {
        return Category::Other;
    }

    let types: HashSet<&str> = leaves
        .iter()
        .map(|leaf| leaf.token.token_type.as_str())
        .collect();
    let name = name.to_lowercase();
    let name_has = |needles: &[&str]| needles.iter().any(|needle| name.contains(needle));

    let category = if types.contains("color") {
        Category::Colors
    } else if types.contains("spacing") || name_has(&["space", "spacing"]) {
        Category::Spacing
    } else if types.contains("sizing") || name_has(&["size", "width", "height"]) {
        Category::Sizes
    } else if types.contains("borderRadius") || name_has(&["radius", "border"]) {
        Category::Radius
    } else if group.children().any(|(_, child)| child.as_group().is_some()) {
        Category::Components
    } else {
        Category::Other
    };

    tracing::trace!(group = %name, %category, "classified group");
    category
}

/// A token set's immediate child groups bucketed by [`Category`].
///
/// Each bucket maps the original group name to its raw subtree, in document
/// order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClassifiedGroups<'a> {
    pub colors: IndexMap<&'a str, &'a TokenNode>,
    pub spacing: IndexMap<&'a str, &'a TokenNode>,
    pub sizes: IndexMap<&'a str, &'a TokenNode>,
    pub radius: IndexMap<&'a str, &'a TokenNode>,
    pub components: IndexMap<&'a str, &'a TokenNode>,
    pub other: IndexMap<&'a str, &'a TokenNode>,
}

impl<'a> ClassifiedGroups<'a> {
    /// Returns the bucket for a category.
    pub fn bucket(&self, category: Category) -> &IndexMap<&'a str, &'a TokenNode> {
        match category {
            Category::Colors => &self.colors,
            Category::Spacing => &self.spacing,
            Category::Sizes => &self.sizes,
            Category::Radius => &self.radius,
            Category::Components => &self.components,
            Category::Other => &self.other,
        }
    }

    fn bucket_mut(&mut self, category: Category) -> &mut IndexMap<&'a str, &'a TokenNode> {
        match category {
            Category::Colors => &mut self.colors,
            Category::Spacing => &mut self.spacing,
            Category::Sizes => &mut self.sizes,
            Category::Radius => &mut self.radius,
            Category::Components => &mut self.components,
            Category::Other => &mut self.other,
        }
    }

    /// Returns the category a group name was placed in, if any.
    pub fn category_of(&self, name: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|category| self.bucket(*category).contains_key(name))
    }

    /// Total number of classified groups.
    pub fn len(&self) -> usize {
        Category::ALL
            .into_iter()
            .map(|category| self.bucket(category).len())
            .sum()
    }

    /// Returns `true` if no groups were classified.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A classified token set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedSet<'a> {
    pub name: &'a str,
    pub groups: ClassifiedGroups<'a>,
}

/// Classifies every immediate child group of one token set.
pub fn classify_set(set: &TokenNode) -> ClassifiedGroups<'_> {
    let mut groups = ClassifiedGroups::default();
    for (name, group) in set.children() {
        let category = classify_group(group, name);
        groups.bucket_mut(category).insert(name, group);
    }
    groups
}

/// Classifies every token set of a document, in document order.
pub fn classify_document(document: &TokenDocument) -> Vec<ClassifiedSet<'_>> {
    document
        .sets()
        .map(|(name, set)| ClassifiedSet {
            name,
            groups: classify_set(set),
        })
        .collect()
}
