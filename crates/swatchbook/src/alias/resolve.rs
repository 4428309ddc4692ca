//! Bounded-depth alias resolution.

use serde::Serialize;

use super::table::AliasTable;

/// Maximum number of alias hops followed before giving up.
pub const MAX_ALIAS_DEPTH: usize = 10;

/// Returns the reference path of an alias-shaped value.
///
/// A value is alias-shaped when it is wrapped in a single pair of braces,
/// e.g. `{color.blue.500}`. Values such as `{a} {b}` that merely start and
/// end with braces are literals.
///
/// ```rust
/// use swatchbook::alias::alias_reference;
///
/// assert_eq!(alias_reference("{color.blue.500}"), Some("color.blue.500"));
/// assert_eq!(alias_reference("#1369e9"), None);
/// ```
pub fn alias_reference(value: &str) -> Option<&str> {
    let inner = value.strip_prefix('{')?.strip_suffix('}')?;
    if inner.contains(['{', '}']) {
        return None;
    }
    Some(inner.trim())
}

/// Returns `true` if the value is an alias reference.
pub fn is_alias(value: &str) -> bool {
    alias_reference(value).is_some()
}

/// How a resolution ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionStatus {
    /// The input was not an alias.
    Literal,
    /// One or more hops reached a literal value.
    Resolved,
    /// A reference had no exact or suffix match.
    Unresolved,
    /// The hop budget ran out, typically because of a cycle.
    DepthExceeded,
}

/// The outcome of resolving a value, with the hop count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// The last value reached. Still alias-shaped unless `status` is
    /// `Literal` or `Resolved`.
    pub value: String,
    /// Number of table lookups that succeeded.
    pub hops: usize,
    pub status: ResolutionStatus,
}

impl Resolution {
    /// Returns `true` if the final value is a literal.
    pub fn is_resolved(&self) -> bool {
        matches!(
            self.status,
            ResolutionStatus::Literal | ResolutionStatus::Resolved
        )
    }
}

/// Resolves a value through the table with the default depth budget.
///
/// Literals are returned unchanged. Unresolvable references return the last
/// value seen; callers that need to tell the two apart can check
/// [`is_alias`] on the result or use [`resolve_detailed`].
///
/// ```rust
/// use swatchbook::alias::{resolve, AliasTable};
///
/// let table: AliasTable = [("color.blue.500", "#1369e9")].into_iter().collect();
/// assert_eq!(resolve("{color.blue.500}", &table), "#1369e9");
/// assert_eq!(resolve("#ffffff", &table), "#ffffff");
/// ```
pub fn resolve(value: &str, table: &AliasTable) -> String {
    resolve_with_depth(value, table, MAX_ALIAS_DEPTH)
}

/// Resolves a value with an explicit hop budget.
pub fn resolve_with_depth(value: &str, table: &AliasTable, max_depth: usize) -> String {
    resolve_detailed(value, table, max_depth).value
}

/// Resolves a value and reports how resolution ended.
///
/// Each hop strips the braces, looks the path up with
/// [`AliasTable::lookup`] (exact, then suffix) and continues while the result
/// is still alias-shaped. At most `max_depth` hops are taken.
pub fn resolve_detailed(value: &str, table: &AliasTable, max_depth: usize) -> Resolution {
    let mut current = value.to_string();
    let mut hops = 0;

    loop {
        let Some(reference) = alias_reference(&current) else {
            let status = if hops == 0 {
                ResolutionStatus::Literal
            } else {
                ResolutionStatus::Resolved
            };
            return Resolution {
                value: current,
                hops,
                status,
            };
        };

        if hops >= max_depth {
            tracing::trace!(value, max_depth, "alias depth exceeded");
            return Resolution {
                value: current,
                hops,
                status: ResolutionStatus::DepthExceeded,
            };
        }

        match table.lookup(reference) {
            Some(next) => {
                current = next.to_string();
                hops += 1;
            }
            None => {
                tracing::trace!(reference, "unresolved alias");
                return Resolution {
                    value: current,
                    hops,
                    status: ResolutionStatus::Unresolved,
                };
            }
        }
    }
}
