//! Alias resolution.
//!
//! Token values may reference other tokens with `{dot.delimited.path}`.
//! This module provides:
//!
//! - [`AliasTable`]: Every token path (bare and set-qualified) mapped to its raw value
//! - [`resolve`] / [`resolve_detailed`]: Bounded-depth reference following
//! - [`lint`]: Reports dangling and cyclic references
//!
//! Resolution never fails. An unknown reference resolves to the last value
//! seen, which may still be alias-shaped, and chains are cut off after
//! [`MAX_ALIAS_DEPTH`] hops so cycles always terminate.

mod lint;
mod resolve;
mod table;

pub use lint::{lint, AliasIssue};
pub use resolve::{
    alias_reference, is_alias, resolve, resolve_detailed, resolve_with_depth, Resolution,
    ResolutionStatus, MAX_ALIAS_DEPTH,
};
pub use table::AliasTable;
