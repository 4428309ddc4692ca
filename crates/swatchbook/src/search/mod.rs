//! Token search.
//!
//! [`index_tokens`] flattens a document into [`SearchableToken`] records;
//! [`search_tokens`] scores a query against each record's name, value and
//! CSS variable with [`fuzzy_match`] and returns the best matches first.
//!
//! ```rust
//! use swatchbook::search::{index_tokens, search_tokens, DEFAULT_SEARCH_LIMIT};
//! use swatchbook::TokenDocument;
//! use serde_json::json;
//!
//! let doc = TokenDocument::from_value(&json!({
//!     "Foundation": { "base": {
//!         "blue": { "500": { "value": "#1369e9", "type": "color" } },
//!         "glue": { "200": { "value": "#eeeeee", "type": "color" } }
//!     } }
//! }));
//!
//! let index = index_tokens(&doc);
//! let results = search_tokens("blue", &index, DEFAULT_SEARCH_LIMIT);
//! assert_eq!(results[0].token.name, "base-blue-500");
//! ```

pub mod fuzzy;
pub mod index;

use serde::Serialize;

pub use fuzzy::{fuzzy_match, highlight_match, highlight_match_with, match_range, EXACT_SCORE};
pub use index::{index_tokens, index_tokens_with, SearchableToken};

/// Result count used when the caller has no preference.
pub const DEFAULT_SEARCH_LIMIT: usize = 50;

/// Which field of a record produced its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchField {
    Name,
    Value,
    CssVariable,
}

impl MatchField {
    /// The matched text of `token`.
    pub fn text(self, token: &SearchableToken) -> &str {
        match self {
            MatchField::Name => &token.name,
            MatchField::Value => &token.value,
            MatchField::CssVariable => &token.css_variable,
        }
    }
}

/// A scored search hit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult<'a> {
    pub token: &'a SearchableToken,
    pub score: f64,
    pub matched: MatchField,
}

/// Scores `query` against every record and returns the best `limit` hits.
///
/// Each record's score is the maximum over its name, value and CSS
/// variable; on equal field scores the earlier field wins. Zero scores are
/// dropped. Results are sorted by descending score, ties keeping index order.
pub fn search_tokens<'a>(
    query: &str,
    tokens: &'a [SearchableToken],
    limit: usize,
) -> Vec<SearchResult<'a>> {
    let mut results: Vec<SearchResult<'a>> = tokens
        .iter()
        .filter_map(|token| {
            let (matched, score) = [MatchField::Name, MatchField::Value, MatchField::CssVariable]
                .into_iter()
                .map(|field| (field, fuzzy_match(query, field.text(token))))
                .fold((MatchField::Name, 0.0), |best, candidate| {
                    if candidate.1 > best.1 {
                        candidate
                    } else {
                        best
                    }
                });
            (score > 0.0).then_some(SearchResult {
                token,
                score,
                matched,
            })
        })
        .collect();

    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    results.truncate(limit);

    tracing::debug!(query, hits = results.len(), "searched tokens");
    results
}
