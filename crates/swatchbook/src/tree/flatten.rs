//! Depth-first traversal of the token tree.

use super::node::{Token, TokenNode};

/// A leaf token reached by traversal, with the dot-joined key path to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatToken<'a> {
    /// Keys traversed from the traversal root, joined with `.`.
    pub path: String,
    /// The leaf token.
    pub token: &'a Token,
}

/// Joins a key onto a path prefix with `.`.
///
/// An empty prefix yields the key unchanged.
pub fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

/// Collects every leaf token below `node` in document order.
///
/// Paths are the keys traversed from `node`, joined with `.` and prefixed by
/// `prefix` when it is non-empty. Only children are visited: a token passed
/// as the root itself yields nothing, and so do unparseable nodes and empty
/// groups.
///
/// # Example
///
/// ```rust
/// use swatchbook::tree::{flatten, TokenNode};
/// use serde_json::json;
///
/// let node = TokenNode::from_value(&json!({
///     "blue": { "500": { "value": "#1369e9", "type": "color" } }
/// }));
///
/// let flat = flatten(&node, "base");
/// assert_eq!(flat.len(), 1);
/// assert_eq!(flat[0].path, "base.blue.500");
/// ```
pub fn flatten<'a>(node: &'a TokenNode, prefix: &str) -> Vec<FlatToken<'a>> {
    let mut out = Vec::new();
    walk(node, prefix, &mut out);
    out
}

/// Like [`flatten`], but a token passed as the root yields itself under
/// `path`.
///
/// Used where a group's child may be either a single token or a further
/// group and both should be reported.
pub fn leaves<'a>(node: &'a TokenNode, path: &str) -> Vec<FlatToken<'a>> {
    match node {
        TokenNode::Token(token) => vec![FlatToken {
            path: path.to_string(),
            token,
        }],
        other => flatten(other, path),
    }
}

fn walk<'a>(node: &'a TokenNode, prefix: &str, out: &mut Vec<FlatToken<'a>>) {
    for (key, child) in node.children() {
        let path = join_path(prefix, key);
        match child {
            TokenNode::Token(token) => out.push(FlatToken { path, token }),
            TokenNode::Group(_) => walk(child, &path, out),
            TokenNode::Unparseable(_) => {}
        }
    }
}
