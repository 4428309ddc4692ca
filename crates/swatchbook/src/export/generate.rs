//! Code generators for the export list.

use indexmap::IndexMap;
use minijinja::{AutoEscape, Environment};
use serde::Serialize;

use super::flatten::ExportToken;
use super::format::ExportFormat;
use crate::alias::alias_reference;
use crate::error::ExportError;
use crate::naming::{kebab_name, last_segment};

/// Reference endings naming a spatial quantity. Such tokens are not
/// namespaced under `base`, so a leading `base-` is dropped when rewriting.
const SPATIAL_MARKERS: &[&str] = &[
    "space",
    "spacing",
    "size",
    "radius",
    "line-height",
    "border-width",
];

const CSS_TEMPLATE: &str = concat!(
    ":root {\n",
    "{% for token in tokens %}  {{ token.name }}: {{ token.value }};\n{% endfor %}",
    "}\n",
);

const SCSS_TEMPLATE: &str =
    "{% for token in tokens %}${{ token.name }}: {{ token.value }};\n{% endfor %}";

const JS_TEMPLATE: &str = concat!(
    "export const tokens = {\n",
    "{% for token in tokens %}  {{ token.name }}: {{ token.value }},\n{% endfor %}",
    "};\n",
    "\n",
    "export default tokens;\n",
);

const TAILWIND_TEMPLATE: &str = concat!(
    "module.exports = {\n",
    "  theme: {\n",
    "    extend: {\n",
    "{% for section in sections %}",
    "      {{ section.key }}: {\n",
    "{% for token in section.tokens %}        {{ token.name }}: {{ token.value }},\n{% endfor %}",
    "      },\n",
    "{% endfor %}",
    "    },\n",
    "  },\n",
    "};\n",
);

#[derive(Serialize)]
struct Line {
    name: String,
    value: String,
}

#[derive(Serialize)]
struct Section {
    key: &'static str,
    tokens: Vec<Line>,
}

/// Holds the compiled output templates.
///
/// Build one with [`Exporter::new`] and reuse it for several exports, or
/// call [`generate`] for a one-off.
pub struct Exporter {
    env: Environment<'static>,
}

impl Exporter {
    pub fn new() -> Result<Self, ExportError> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);

        for format in ExportFormat::ALL {
            env.add_template(format.as_str(), template_source(format))
                .map_err(|source| ExportError::Template { format, source })?;
        }

        Ok(Self { env })
    }

    /// Renders `tokens` in the given format.
    pub fn render(&self, format: ExportFormat, tokens: &[ExportToken]) -> Result<String, ExportError> {
        let template = self
            .env
            .get_template(format.as_str())
            .map_err(|source| ExportError::Template { format, source })?;

        let rendered = match format {
            ExportFormat::Css | ExportFormat::Scss => template.render(minijinja::context! {
                tokens => stylesheet_lines(format, tokens),
            }),
            ExportFormat::Js => template.render(minijinja::context! {
                tokens => tokens.iter().map(module_line).collect::<Vec<_>>(),
            }),
            ExportFormat::Tailwind => template.render(minijinja::context! {
                sections => tailwind_sections(tokens),
            }),
        };

        let output = rendered.map_err(|source| ExportError::Template { format, source })?;
        tracing::debug!(%format, tokens = tokens.len(), bytes = output.len(), "generated export");
        Ok(output)
    }
}

fn template_source(format: ExportFormat) -> &'static str {
    match format {
        ExportFormat::Css => CSS_TEMPLATE,
        ExportFormat::Scss => SCSS_TEMPLATE,
        ExportFormat::Js => JS_TEMPLATE,
        ExportFormat::Tailwind => TAILWIND_TEMPLATE,
    }
}

fn stylesheet_lines(format: ExportFormat, tokens: &[ExportToken]) -> Vec<Line> {
    tokens
        .iter()
        .map(|token| Line {
            name: match format {
                ExportFormat::Css => token.css_variable.clone(),
                _ => token.name.clone(),
            },
            value: rewrite_alias(&token.value, format),
        })
        .collect()
}

fn module_line(token: &ExportToken) -> Line {
    Line {
        name: quote(&token.name),
        value: quote(&token.resolved_value),
    }
}

fn tailwind_sections(tokens: &[ExportToken]) -> Vec<Section> {
    let mut sections: IndexMap<&'static str, Vec<Line>> = IndexMap::new();
    for token in tokens {
        sections
            .entry(token.token_type.tailwind_key())
            .or_default()
            .push(module_line(token));
    }
    sections
        .into_iter()
        .map(|(key, tokens)| Section { key, tokens })
        .collect()
}

fn quote(text: &str) -> String {
    serde_json::Value::String(text.to_string()).to_string()
}

/// Output name of the token an alias reference points at.
///
/// The reference path is kebab-cased. When its last segment names a
/// spatial quantity, a leading `base-` is removed.
///
/// ```rust
/// use swatchbook::export::alias_variable_name;
///
/// assert_eq!(alias_variable_name("base.blue.500"), "base-blue-500");
/// assert_eq!(alias_variable_name("base.space-4"), "space-4");
/// ```
pub fn alias_variable_name(reference: &str) -> String {
    let name = kebab_name(reference);
    let last = last_segment(reference).to_lowercase();

    if SPATIAL_MARKERS.iter().any(|marker| last.contains(marker)) {
        if let Some(stripped) = name.strip_prefix("base-") {
            return stripped.to_string();
        }
    }
    name
}

/// Rewrites an alias value into the target language's reference syntax.
///
/// `{a.b.c}` becomes `var(--a-b-c)` for CSS and `$a-b-c` for SCSS. Literals,
/// and every value in other formats, are returned unchanged.
pub fn rewrite_alias(value: &str, format: ExportFormat) -> String {
    match (alias_reference(value), format) {
        (Some(reference), ExportFormat::Css) => {
            format!("var(--{})", alias_variable_name(reference))
        }
        (Some(reference), ExportFormat::Scss) => format!("${}", alias_variable_name(reference)),
        _ => value.to_string(),
    }
}

/// Renders `tokens` in `format` with a fresh [`Exporter`].
pub fn generate(format: ExportFormat, tokens: &[ExportToken]) -> Result<String, ExportError> {
    Exporter::new()?.render(format, tokens)
}

/// CSS custom properties in a `:root` block. Aliases become `var(--x)`.
pub fn generate_css(tokens: &[ExportToken]) -> Result<String, ExportError> {
    generate(ExportFormat::Css, tokens)
}

/// SCSS variables. Aliases become `$x`.
pub fn generate_scss(tokens: &[ExportToken]) -> Result<String, ExportError> {
    generate(ExportFormat::Scss, tokens)
}

/// An ES module exporting resolved values as `tokens` and as the default.
pub fn generate_js(tokens: &[ExportToken]) -> Result<String, ExportError> {
    generate(ExportFormat::Js, tokens)
}

/// A Tailwind config extending the theme with resolved values, grouped by
/// theme key.
pub fn generate_tailwind(tokens: &[ExportToken]) -> Result<String, ExportError> {
    generate(ExportFormat::Tailwind, tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::ExportType;
    use crate::regions::Region;

    fn token(name: &str, value: &str, resolved: &str, token_type: ExportType) -> ExportToken {
        ExportToken {
            name: name.to_string(),
            value: value.to_string(),
            resolved_value: resolved.to_string(),
            css_variable: format!("--{}", name),
            token_type,
            category: Region::Foundation,
        }
    }

    fn sample() -> Vec<ExportToken> {
        vec![
            token("base-blue-500", "#1369e9", "#1369e9", ExportType::Color),
            token("fill-accent", "{base.blue.500}", "#1369e9", ExportType::Color),
            token("spacing-md", "16px", "16px", ExportType::Spacing),
            token("button-gap", "{base.space-4}", "16px", ExportType::Spacing),
        ]
    }

    #[test]
    fn test_css() {
        let css = generate_css(&sample()).unwrap();
        assert_eq!(
            css,
            ":root {\n  --base-blue-500: #1369e9;\n  --fill-accent: var(--base-blue-500);\n  \
             --spacing-md: 16px;\n  --button-gap: var(--space-4);\n}\n"
        );
    }

    #[test]
    fn test_scss() {
        let scss = generate_scss(&sample()).unwrap();
        assert_eq!(
            scss,
            "$base-blue-500: #1369e9;\n$fill-accent: $base-blue-500;\n\
             $spacing-md: 16px;\n$button-gap: $space-4;\n"
        );
    }

    #[test]
    fn test_js_uses_resolved_values() {
        let js = generate_js(&sample()).unwrap();
        assert!(js.starts_with("export const tokens = {\n"));
        assert!(js.contains("  \"fill-accent\": \"#1369e9\",\n"));
        assert!(js.ends_with("};\n\nexport default tokens;\n"));
    }

    #[test]
    fn test_tailwind_groups_by_theme_key() {
        let tailwind = generate_tailwind(&sample()).unwrap();
        assert_eq!(
            tailwind,
            "module.exports = {\n  theme: {\n    extend: {\n\
             \x20     colors: {\n\
             \x20       \"base-blue-500\": \"#1369e9\",\n\
             \x20       \"fill-accent\": \"#1369e9\",\n\
             \x20     },\n\
             \x20     spacing: {\n\
             \x20       \"spacing-md\": \"16px\",\n\
             \x20       \"button-gap\": \"16px\",\n\
             \x20     },\n\
             \x20   },\n  },\n};\n"
        );
    }

    #[test]
    fn test_empty_exports() {
        assert_eq!(generate_css(&[]).unwrap(), ":root {\n}\n");
        assert_eq!(generate_scss(&[]).unwrap(), "");
        assert!(generate_tailwind(&[]).unwrap().contains("extend: {\n    },"));
    }

    #[test]
    fn test_values_are_not_html_escaped() {
        let tokens = vec![token("font-stack", "\"Inter\", <sans>", "x", ExportType::Typography)];
        let css = generate_css(&tokens).unwrap();
        assert!(css.contains("--font-stack: \"Inter\", <sans>;"));
    }

    #[test]
    fn test_js_quotes_special_characters() {
        let tokens = vec![token("font-body", "x", "\"Inter\", sans", ExportType::Typography)];
        let js = generate_js(&tokens).unwrap();
        assert!(js.contains(r#""font-body": "\"Inter\", sans","#));
    }

    #[test]
    fn test_rewrite_alias() {
        assert_eq!(rewrite_alias("{a.b.c}", ExportFormat::Css), "var(--a-b-c)");
        assert_eq!(rewrite_alias("{a.b.c}", ExportFormat::Scss), "$a-b-c");
        assert_eq!(rewrite_alias("{a.b.c}", ExportFormat::Js), "{a.b.c}");
        assert_eq!(rewrite_alias("#fff", ExportFormat::Css), "#fff");
    }

    #[test]
    fn test_alias_variable_name_strips_base_for_spatial() {
        assert_eq!(alias_variable_name("base.border-radius-sm"), "border-radius-sm");
        assert_eq!(alias_variable_name("base.line-height-tight"), "line-height-tight");
        assert_eq!(alias_variable_name("base.size.lg"), "base-size-lg");
        assert_eq!(alias_variable_name("other.space-4"), "other-space-4");
    }
}
