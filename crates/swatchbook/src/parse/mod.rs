//! Specialized parsers from raw token groups to display-ready records.
//!
//! - [`color`]: Base colour families with ordered shades, and semantic colours
//! - [`dimension`]: Spacing, size and radius scales sorted by magnitude
//! - [`component`]: Component variants and dimension groups, merged by name
//! - [`typography`]: Typography tokens across the whole document
//!
//! Every parser takes the document's [`AliasTable`](crate::AliasTable) and
//! records both the raw and the resolved value. Malformed input produces
//! empty output.

pub mod color;
pub mod component;
pub mod dimension;
pub mod typography;

pub use color::{
    parse_base_colors, parse_color_families, parse_semantic_colors, ColorFamily, ColorShade,
    SemanticColor, BASE_COLOR_NAMESPACE, SEMANTIC_NAMESPACES,
};
pub use component::{
    is_dimension_group, parse_components, ComponentSpec, ComponentToken, DIMENSION_TYPES,
};
pub use dimension::{
    parse_dimensions, parse_radius, parse_sizes, parse_spacing, DimensionToken,
    GENERIC_DIMENSION_TYPE,
};
pub use typography::{parse_typography, TypographyToken, TYPOGRAPHY_TYPES};
