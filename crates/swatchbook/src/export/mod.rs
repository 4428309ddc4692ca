//! Flat export list and code generators.
//!
//! [`flatten_for_export`] walks the document regions into [`ExportToken`]s;
//! [`generate`] renders them as CSS custom properties, SCSS variables, an ES
//! module or a Tailwind config.
//!
//! ```rust
//! use swatchbook::export::{flatten_for_export, generate, ExportFormat};
//! use swatchbook::TokenDocument;
//! use serde_json::json;
//!
//! let doc = TokenDocument::from_value(&json!({
//!     "Foundation": { "base": { "blue": { "value": "#1369e9", "type": "color" } } },
//!     "Semantic": { "fill": { "accent": { "value": "{base.blue}", "type": "color" } } }
//! }));
//!
//! let tokens = flatten_for_export(&doc);
//! let css = generate(ExportFormat::Css, &tokens).unwrap();
//! assert!(css.contains("--fill-accent: var(--base-blue);"));
//! ```

pub mod flatten;
pub mod format;
pub mod generate;

pub use flatten::{flatten_for_export, flatten_for_export_with, ExportToken};
pub use format::{determine_type, ExportFormat, ExportType};
pub use generate::{
    alias_variable_name, generate, generate_css, generate_js, generate_scss, generate_tailwind,
    rewrite_alias, Exporter,
};
