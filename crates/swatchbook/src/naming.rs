//! CSS custom-property naming and dimension magnitudes.

use once_cell::sync::Lazy;
use regex::Regex;

/// Path separators replaced by a hyphen: `/`, `.`, and runs of whitespace.
static SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+|[/.]").expect("separator pattern is valid"));

/// Leading signed decimal, as `parseFloat` would read it.
static LEADING_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?")
        .expect("number pattern is valid")
});

/// Normalizes a token path to a lowercase, hyphen-separated name.
///
/// ```rust
/// use swatchbook::naming::kebab_name;
///
/// assert_eq!(kebab_name("Brand/Primary.Hover State"), "brand-primary-hover-state");
/// ```
pub fn kebab_name(path: &str) -> String {
    SEPARATORS.replace_all(path, "-").to_lowercase()
}

/// Maps a token path and namespace to a CSS custom-property name.
///
/// The path is normalized with [`kebab_name`] and prefixed by
/// `--{namespace}-`, or just `--` when the namespace is absent or empty.
///
/// ```rust
/// use swatchbook::naming::to_css_variable;
///
/// assert_eq!(to_css_variable("blue.500", Some("base")), "--base-blue-500");
/// assert_eq!(to_css_variable("spacing.sm", None), "--spacing-sm");
/// ```
pub fn to_css_variable(path: &str, namespace: Option<&str>) -> String {
    let name = kebab_name(path);
    match namespace.filter(|ns| !ns.is_empty()) {
        Some(ns) => format!("--{}-{}", kebab_name(ns), name),
        None => format!("--{}", name),
    }
}

/// Extracts the leading signed number from a dimension-like value.
///
/// Only meant for ordering: units are ignored and anything without a leading
/// number counts as `0`.
///
/// ```rust
/// use swatchbook::naming::numeric_prefix;
///
/// assert_eq!(numeric_prefix("16px"), 16.0);
/// assert_eq!(numeric_prefix("-4px"), -4.0);
/// assert_eq!(numeric_prefix("auto"), 0.0);
/// ```
pub fn numeric_prefix(value: &str) -> f64 {
    LEADING_NUMBER
        .find(value)
        .and_then(|m| m.as_str().trim().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Returns the segment after the last `.` of a path.
pub fn last_segment(path: &str) -> &str {
    path.rsplit('.').next().unwrap_or(path)
}
