//! Panel templates, one per command.
//!
//! Rendered with `trim_blocks` and `lstrip_blocks`, so block tags on their
//! own line leave no trace in the output.

use minijinja::Error;

use crate::render::Renderer;

pub const COLORS: &str = "colors";
pub const SCALES: &str = "scales";
pub const COMPONENTS: &str = "components";
pub const TYPOGRAPHY: &str = "typography";
pub const CLASSIFY: &str = "classify";
pub const SEARCH: &str = "search";
pub const LINT: &str = "lint";

const COLORS_TEMPLATE: &str = r#"{{ "Colour families" | style("heading") }}
{% for family in families %}
{{ family.primary_color | swatch }}{{ family.name | style("path") }} {{ family.primary_color | style("muted") }}
{% for shade in family.shades %}
  {{ shade.resolved_value | swatch }}{{ shade.shade | pad(6) }} {{ shade.css_variable | fit(36) | pad(36) | style("variable") }} {{ shade.resolved_value | style("unresolved" if shade.resolved_value is alias else "value") }}
{% endfor %}
{% else %}
{{ "  none" | style("muted") }}
{% endfor %}
{% if semantic %}

{{ "Semantic colours" | style("heading") }}
{% for color in semantic %}
  {{ color.resolved_value | swatch }}{{ color.css_variable | fit(40) | pad(40) | style("variable") }} {{ color.resolved_value | style("unresolved" if color.resolved_value is alias else "value") }}
{% endfor %}
{% endif %}"#;

const SCALES_TEMPLATE: &str = r#"{% for scale in scales %}
{% if not loop.first %}

{% endif %}
{{ scale.category | style("category") }} {{ (scale.set ~ " / " ~ scale.group) | style("heading") }}
{% for token in scale.tokens %}
  {{ token.name | fit(24) | pad(24) | style("path") }} {{ token.resolved_value | fit(14) | pad(14) | style("value") }} {{ token.css_variable | style("variable") }}
{% endfor %}
{% else %}
{{ "No spacing, size or radius groups found." | style("muted") }}
{% endfor %}"#;

const COMPONENTS_TEMPLATE: &str = r#"{% for component in components %}
{% if not loop.first %}

{% endif %}
{{ component.name | style("heading") }}
{% for variant in component.variants %}
  {{ variant.name | style("category") }}
{% for token in variant.tokens %}
    {{ token.resolved_value | swatch }}{{ token.path | fit(24) | pad(24) | style("path") }} {{ token.resolved_value | fit(width - 40) | style("value") }}
{% endfor %}
{% endfor %}
{% for group in component.dimensions %}
  {{ group.name | style("category") }} {{ "dimensions" | style("muted") }}
{% for token in group.tokens %}
    {{ token.path | fit(24) | pad(24) | style("path") }} {{ token.resolved_value | style("value") }}
{% endfor %}
{% endfor %}
{% else %}
{{ "No components found." | style("muted") }}
{% endfor %}"#;

const TYPOGRAPHY_TEMPLATE: &str = r#"{% for token in tokens %}
{{ token.path | fit(28) | pad(28) | style("path") }} {{ token["type"] | pad(16) | style("category") }} {{ token.resolved_value | fit(width - 48) | style("value") }}
{% else %}
{{ "No typography tokens found." | style("muted") }}
{% endfor %}"#;

const CLASSIFY_TEMPLATE: &str = r#"{% for set in sets %}
{{ set.name | style("heading") }}
{% for group in set.groups %}
  {{ group.name | fit(32) | pad(32) | style("path") }} {{ group.category | style("category") }}
{% endfor %}
{% else %}
{{ "No token sets found." | style("muted") }}
{% endfor %}"#;

const SEARCH_TEMPLATE: &str = r#"{% for result in results %}
{{ result.token.preview | swatch }}{{ result.token.name | fit(36) | highlight(query) | pad(36) }} {{ result.token.value | fit(20) | pad(20) | style("value") }} {{ result.token.category | pad(10) | style("category") }} {{ result.score | fixed(2) | style("score") }}
{% else %}
{{ ("No tokens match '" ~ query ~ "'.") | style("muted") }}
{% endfor %}"#;

const LINT_TEMPLATE: &str = r#"{% for issue in issues %}
{% if issue.kind == "unresolved" %}
{{ issue.path | style("path") }}: unknown reference {{ ("{" ~ issue.reference ~ "}") | style("unresolved") }}
{% else %}
{{ issue.path | style("path") }}: alias cycle {{ issue.chain | join(" -> ") | style("unresolved") }}
{% endif %}
{% else %}
{{ "No alias issues found." | style("muted") }}
{% endfor %}"#;

/// Registers every panel template.
pub fn register(renderer: &mut Renderer) -> Result<(), Error> {
    renderer.add_template(COLORS, COLORS_TEMPLATE)?;
    renderer.add_template(SCALES, SCALES_TEMPLATE)?;
    renderer.add_template(COMPONENTS, COMPONENTS_TEMPLATE)?;
    renderer.add_template(TYPOGRAPHY, TYPOGRAPHY_TEMPLATE)?;
    renderer.add_template(CLASSIFY, CLASSIFY_TEMPLATE)?;
    renderer.add_template(SEARCH, SEARCH_TEMPLATE)?;
    renderer.add_template(LINT, LINT_TEMPLATE)?;
    Ok(())
}
