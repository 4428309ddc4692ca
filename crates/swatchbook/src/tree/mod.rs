//! Token tree primitives.
//!
//! This module provides the typed view of a raw token export:
//!
//! - [`TokenNode`]: A node that is either a leaf [`Token`], a nested group, or
//!   something that could not be interpreted as either
//! - [`flatten`] / [`leaves`]: Depth-first traversal to `(path, token)` pairs
//!
//! Raw JSON is converted into [`TokenNode`] once, at the document boundary.
//! Every consumer after that matches on the variant instead of probing for
//! `value`/`type` keys again.

mod flatten;
mod node;

pub use flatten::{flatten, join_path, leaves, FlatToken};
pub use node::{is_token, Token, TokenNode};
