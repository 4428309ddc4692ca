//! Alias diagnostics.

use serde::Serialize;

use super::resolve::alias_reference;
use super::table::AliasTable;
use crate::document::TokenDocument;
use crate::tree::flatten;

/// A problem found while following a token's alias chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AliasIssue {
    /// A reference matches no table entry, exactly or by suffix.
    Unresolved { path: String, reference: String },
    /// The chain revisits a reference it already followed.
    CycleDetected { path: String, chain: Vec<String> },
}

impl AliasIssue {
    /// The set-qualified path of the token the issue was found on.
    pub fn path(&self) -> &str {
        match self {
            AliasIssue::Unresolved { path, .. } | AliasIssue::CycleDetected { path, .. } => path,
        }
    }
}

impl std::fmt::Display for AliasIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AliasIssue::Unresolved { path, reference } => {
                write!(f, "token '{}' references unknown token '{}'", path, reference)
            }
            AliasIssue::CycleDetected { path, chain } => {
                write!(
                    f,
                    "token '{}' has a cyclic alias chain: {}",
                    path,
                    chain.join(" -> ")
                )
            }
        }
    }
}

/// Checks every token's alias chain for dangling references and cycles.
///
/// Uses the same lookup rules as the resolver. Unlike the resolver, which
/// only bounds depth, this pass tracks the chain and stops at the first
/// repeated reference, so each token yields at most one issue. Paths are
/// reported as `"{set}.{path}"` in document order.
pub fn lint(document: &TokenDocument, table: &AliasTable) -> Vec<AliasIssue> {
    let mut issues = Vec::new();

    for (set_name, set) in document.sets() {
        for flat in flatten(set, "") {
            if let Some(issue) = check_chain(set_name, &flat.path, &flat.token.value, table) {
                issues.push(issue);
            }
        }
    }

    tracing::debug!(issues = issues.len(), "linted aliases");
    issues
}

fn check_chain(set_name: &str, path: &str, value: &str, table: &AliasTable) -> Option<AliasIssue> {
    let mut chain: Vec<String> = Vec::new();
    let mut current = value;

    while let Some(reference) = alias_reference(current) {
        let seen = chain.iter().any(|previous| previous == reference);
        chain.push(reference.to_string());
        if seen {
            return Some(AliasIssue::CycleDetected {
                path: format!("{}.{}", set_name, path),
                chain,
            });
        }

        match table.lookup(reference) {
            Some(next) => current = next,
            None => {
                return Some(AliasIssue::Unresolved {
                    path: format!("{}.{}", set_name, path),
                    reference: reference.to_string(),
                })
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn lint_value(raw: serde_json::Value) -> Vec<AliasIssue> {
        let doc = TokenDocument::from_value(&raw);
        let table = AliasTable::build(&doc);
        lint(&doc, &table)
    }

    #[test]
    fn test_lint_clean_document() {
        let issues = lint_value(json!({
            "Core": {
                "blue": {"value": "#1369e9", "type": "color"},
                "primary": {"value": "{blue}", "type": "color"}
            }
        }));
        assert!(issues.is_empty());
    }

    #[test]
    fn test_lint_unresolved_reference() {
        let issues = lint_value(json!({
            "Core": {"primary": {"value": "{brand.missing}", "type": "color"}}
        }));
        assert_eq!(
            issues,
            vec![AliasIssue::Unresolved {
                path: "Core.primary".to_string(),
                reference: "brand.missing".to_string(),
            }]
        );
    }

    #[test]
    fn test_lint_cycle() {
        let issues = lint_value(json!({
            "Core": {
                "a": {"value": "{b}", "type": "color"},
                "b": {"value": "{a}", "type": "color"}
            }
        }));
        assert_eq!(issues.len(), 2);
        match &issues[0] {
            AliasIssue::CycleDetected { path, chain } => {
                assert_eq!(path, "Core.a");
                assert_eq!(chain, &vec!["b", "a", "b"]);
            }
            other => panic!("expected cycle, got {:?}", other),
        }
    }

    #[test]
    fn test_lint_self_reference() {
        let issues = lint_value(json!({"Core": {"a": {"value": "{a}", "type": "color"}}}));
        assert!(matches!(&issues[0], AliasIssue::CycleDetected { chain, .. } if chain.len() == 2));
    }

    #[test]
    fn test_issue_display() {
        let unresolved = AliasIssue::Unresolved {
            path: "Core.primary".to_string(),
            reference: "brand.missing".to_string(),
        };
        assert!(unresolved.to_string().contains("brand.missing"));

        let cycle = AliasIssue::CycleDetected {
            path: "Core.a".to_string(),
            chain: vec!["b".to_string(), "a".to_string(), "b".to_string()],
        };
        assert!(cycle.to_string().contains("b -> a -> b"));
        assert_eq!(cycle.path(), "Core.a");
    }
}
