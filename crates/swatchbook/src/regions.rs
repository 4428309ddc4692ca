//! Structural walk over the three well-known regions of a token document.
//!
//! Search and export do not use the classifier. They rely on the usual
//! layout of a design-tool export instead:
//!
//! | where | region | namespace | path |
//! |-------|--------|-----------|------|
//! | `{set}.base` | foundation | `base` | below `base` |
//! | `{set}.fill` / `stroke` / `text` | semantic | the key | below the key |
//! | any child of a set named `*component*` | component | none | component name first |
//! | any other child of a set | foundation | none | group name first |
//!
//! A set child that itself holds `base`, `fill`, `stroke` or `text` keys is
//! opened one level, and its children follow the rules above as if they
//! were set children.
//!
//! Documents missing any of these sections simply produce fewer records.

use serde::Serialize;

use crate::document::TokenDocument;
use crate::naming::to_css_variable;
use crate::parse::{BASE_COLOR_NAMESPACE, SEMANTIC_NAMESPACES};
use crate::tree::{leaves, Token, TokenNode};

/// The three regions a token can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Foundation,
    Semantic,
    Component,
}

impl Region {
    pub fn as_str(self) -> &'static str {
        match self {
            Region::Foundation => "foundation",
            Region::Semantic => "semantic",
            Region::Component => "component",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token located by the region walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionToken<'a> {
    pub region: Region,
    /// `base`, `fill`, `stroke`, `text`, or `None`.
    pub namespace: Option<&'static str>,
    /// The set child the token was found under.
    pub group: &'a str,
    /// Path used for naming. Excludes the namespace key for base and
    /// semantic tokens.
    pub path: String,
    pub css_variable: String,
    pub token: &'a Token,
}

/// Returns `true` if a set name marks the component region.
pub fn is_component_set(name: &str) -> bool {
    name.to_lowercase().contains("component")
}

/// Returns `true` for a group that is not itself a namespace key but holds
/// one as a direct child.
pub fn holds_namespace_keys(key: &str, node: &TokenNode) -> bool {
    !is_namespace_key(key) && node.children().any(|(child, _)| is_namespace_key(child))
}

fn is_namespace_key(key: &str) -> bool {
    key == BASE_COLOR_NAMESPACE || SEMANTIC_NAMESPACES.contains(&key)
}

/// Walks every set of the document and tags each token with its region.
///
/// Tokens come out in document order.
pub fn region_tokens(document: &TokenDocument) -> Vec<RegionToken<'_>> {
    let mut out = Vec::new();

    for (set_name, set) in document.sets() {
        let component_set = is_component_set(set_name);

        for (group, node) in set.children() {
            if component_set {
                push_leaves(&mut out, Region::Component, None, group, group, node);
            } else if holds_namespace_keys(group, node) {
                for (key, child) in node.children() {
                    push_foundation(&mut out, group, key, child);
                }
            } else {
                push_foundation(&mut out, group, group, node);
            }
        }
    }

    tracing::debug!(tokens = out.len(), "walked token regions");
    out
}

fn push_foundation<'a>(
    out: &mut Vec<RegionToken<'a>>,
    group: &'a str,
    key: &'a str,
    node: &'a TokenNode,
) {
    let (region, namespace) = if key == BASE_COLOR_NAMESPACE {
        (Region::Foundation, Some(BASE_COLOR_NAMESPACE))
    } else if let Some(ns) = SEMANTIC_NAMESPACES.iter().find(|ns| **ns == key) {
        (Region::Semantic, Some(*ns))
    } else {
        (Region::Foundation, None)
    };
    push_leaves(out, region, namespace, group, key, node);
}

fn push_leaves<'a>(
    out: &mut Vec<RegionToken<'a>>,
    region: Region,
    namespace: Option<&'static str>,
    group: &'a str,
    key: &'a str,
    node: &'a TokenNode,
) {
    // Paths start below a namespace key. A token sitting directly under one
    // has no path of its own and is named after the key.
    let root = if namespace.is_some() && !node.is_token() {
        ""
    } else {
        key
    };

    for flat in leaves(node, root) {
        out.push(RegionToken {
            region,
            namespace,
            group,
            css_variable: to_css_variable(&flat.path, namespace),
            path: flat.path,
            token: flat.token,
        });
    }
}
