//! # Swatchbook - Design Token Resolution and Export
//!
//! Swatchbook reads a design-tool token export (a nested JSON or YAML tree
//! of `{value, type}` leaves), resolves `{alias}` references between
//! tokens, sorts groups into categories and builds the derived structures a
//! documentation view needs: colour families, dimension scales, component
//! variants, a fuzzy search index and code exports.
//!
//! ## Pipeline
//!
//! ```text
//! raw tree -> TokenDocument -> AliasTable -> classify -> parse::* -> display
//!                                        \-> search::index_tokens -> search_tokens
//!                                        \-> export::flatten_for_export -> generate
//! ```
//!
//! Everything after loading is a pure function of the document. Malformed
//! input yields empty results; unresolved aliases come back as their last
//! alias-shaped value. The only fallible operations are parsing a document
//! ([`DocumentError`]) and rendering export templates ([`ExportError`]).
//!
//! ## Quick Start
//!
//! ```rust
//! use swatchbook::{AliasTable, TokenDocument};
//! use swatchbook::parse::parse_base_colors;
//!
//! let doc = TokenDocument::from_json_str(r##"{
//!     "Foundation": {
//!         "base": {
//!             "blue": {
//!                 "500": { "value": "#1369e9", "type": "color" },
//!                 "600": { "value": "{blue.500}", "type": "color" }
//!             }
//!         }
//!     }
//! }"##).unwrap();
//!
//! let table = AliasTable::build(&doc);
//! let base = doc.set("Foundation").and_then(|set| set.get("base")).unwrap();
//! let families = parse_base_colors(base, &table);
//!
//! assert_eq!(families[0].name, "blue");
//! assert_eq!(families[0].shades[1].resolved_value, "#1369e9");
//! assert_eq!(families[0].shades[1].css_variable, "--base-blue-600");
//! ```

pub mod alias;
pub mod classify;
pub mod document;
pub mod error;
pub mod export;
pub mod naming;
pub mod parse;
pub mod regions;
pub mod search;
pub mod tree;
pub mod util;

pub use alias::{resolve, AliasIssue, AliasTable, Resolution, ResolutionStatus, MAX_ALIAS_DEPTH};
pub use classify::{classify_document, classify_group, classify_set, Category, ClassifiedGroups};
pub use document::TokenDocument;
pub use error::{DocumentError, ExportError};
pub use export::{flatten_for_export, generate, ExportFormat, ExportToken, ExportType};
pub use naming::to_css_variable;
pub use regions::Region;
pub use search::{index_tokens, search_tokens, SearchResult, SearchableToken};
pub use tree::{Token, TokenNode};
