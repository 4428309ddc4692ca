//! Serializable data behind each panel.
//!
//! Each view is what `--output json` prints and what the matching template
//! in [`crate::panels`] renders.

use serde::Serialize;
use swatchbook::alias::AliasIssue;
use swatchbook::classify::{classify_document, Category, ClassifiedSet};
use swatchbook::parse::{
    parse_base_colors, parse_color_families, parse_components, parse_radius,
    parse_semantic_colors, parse_sizes, parse_spacing, parse_typography, ColorFamily,
    ComponentSpec, ComponentToken, DimensionToken, SemanticColor, TypographyToken,
    BASE_COLOR_NAMESPACE, SEMANTIC_NAMESPACES,
};
use swatchbook::regions::{holds_namespace_keys, is_component_set};
use swatchbook::search::SearchResult;
use swatchbook::tree::TokenNode;
use swatchbook::{AliasTable, TokenDocument};

#[derive(Debug, Serialize)]
pub struct ColorsView {
    pub families: Vec<ColorFamily>,
    pub semantic: Vec<SemanticColor>,
}

impl ColorsView {
    /// Parses every group classified as colours.
    ///
    /// Variables are named the way search and export name them: `base` is
    /// namespaced `base`, `fill`, `stroke` and `text` by their own key, and
    /// any other group keeps its key as the first path segment. A group
    /// holding those keys is opened up one level. Colour groups of a
    /// component set are named from the component.
    pub fn build(document: &TokenDocument, table: &AliasTable) -> Self {
        let mut view = ColorsView {
            families: Vec::new(),
            semantic: Vec::new(),
        };

        for set in classify_document(document) {
            let component_set = is_component_set(set.name);
            for (name, group) in set.groups.bucket(Category::Colors) {
                if component_set {
                    view.families
                        .extend(parse_color_families(group, name, None, table));
                } else if holds_namespace_keys(name, group) {
                    for (key, child) in group.children() {
                        view.add_group(key, child, table);
                    }
                } else {
                    view.add_group(name, group, table);
                }
            }
        }

        view
    }

    fn add_group(&mut self, key: &str, group: &TokenNode, table: &AliasTable) {
        if key == BASE_COLOR_NAMESPACE {
            self.families.extend(parse_base_colors(group, table));
        } else if SEMANTIC_NAMESPACES.contains(&key) {
            self.semantic
                .extend(parse_semantic_colors(group, key, table));
        } else {
            self.families
                .extend(parse_color_families(group, key, None, table));
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Scale {
    pub set: String,
    pub group: String,
    pub category: Category,
    pub tokens: Vec<DimensionToken>,
}

type DimensionParser = fn(&TokenNode, &AliasTable) -> Vec<DimensionToken>;

#[derive(Debug, Serialize)]
pub struct ScalesView {
    pub scales: Vec<Scale>,
}

impl ScalesView {
    pub fn build(document: &TokenDocument, table: &AliasTable) -> Self {
        let parsers: [(Category, DimensionParser); 3] = [
            (Category::Spacing, parse_spacing),
            (Category::Sizes, parse_sizes),
            (Category::Radius, parse_radius),
        ];
        let mut scales = Vec::new();

        for ClassifiedSet { name: set, groups } in classify_document(document) {
            for (category, parse) in parsers {
                for (group, node) in groups.bucket(category) {
                    scales.push(Scale {
                        set: set.to_string(),
                        group: group.to_string(),
                        category,
                        tokens: parse(*node, table),
                    });
                }
            }
        }

        ScalesView { scales }
    }
}

#[derive(Debug, Serialize)]
pub struct TokenGroup {
    pub name: String,
    pub tokens: Vec<ComponentToken>,
}

#[derive(Debug, Serialize)]
pub struct ComponentView {
    pub name: String,
    pub variants: Vec<TokenGroup>,
    pub dimensions: Vec<TokenGroup>,
}

impl From<ComponentSpec> for ComponentView {
    fn from(spec: ComponentSpec) -> Self {
        ComponentView {
            name: spec.name,
            variants: token_groups(spec.variants),
            dimensions: token_groups(spec.dimensions),
        }
    }
}

fn token_groups<I>(groups: I) -> Vec<TokenGroup>
where
    I: IntoIterator<Item = (String, Vec<ComponentToken>)>,
{
    groups
        .into_iter()
        .map(|(name, tokens)| TokenGroup { name, tokens })
        .collect()
}

#[derive(Debug, Serialize)]
pub struct ComponentsView {
    pub components: Vec<ComponentView>,
}

impl ComponentsView {
    /// Parses component sets, plus any group elsewhere classified as a
    /// component, treating that group as a single component.
    pub fn build(document: &TokenDocument, table: &AliasTable) -> Self {
        let mut containers: Vec<TokenNode> = Vec::new();

        for ClassifiedSet { name, groups } in classify_document(document) {
            if is_component_set(name) {
                if let Some(set) = document.set(name) {
                    containers.push(set.clone());
                }
                continue;
            }
            let loose = groups.bucket(Category::Components);
            if !loose.is_empty() {
                containers.push(TokenNode::Group(
                    loose
                        .iter()
                        .map(|(name, node)| (name.to_string(), (*node).clone()))
                        .collect(),
                ));
            }
        }

        let components = parse_components(&containers, table)
            .into_iter()
            .map(ComponentView::from)
            .collect();
        ComponentsView { components }
    }
}

#[derive(Debug, Serialize)]
pub struct TypographyView {
    pub tokens: Vec<TypographyToken>,
}

impl TypographyView {
    pub fn build(document: &TokenDocument, table: &AliasTable) -> Self {
        TypographyView {
            tokens: parse_typography(document, table),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GroupCategory {
    pub name: String,
    pub category: Category,
}

#[derive(Debug, Serialize)]
pub struct SetCategories {
    pub name: String,
    pub groups: Vec<GroupCategory>,
}

#[derive(Debug, Serialize)]
pub struct ClassifyView {
    pub sets: Vec<SetCategories>,
}

impl ClassifyView {
    /// Lists each set's groups in document order with their category.
    pub fn build(document: &TokenDocument) -> Self {
        let sets = classify_document(document)
            .into_iter()
            .map(|ClassifiedSet { name, groups }| {
                let order: Vec<&str> = document
                    .set(name)
                    .map(|set| set.children().map(|(key, _)| key).collect())
                    .unwrap_or_default();
                SetCategories {
                    name: name.to_string(),
                    groups: order
                        .into_iter()
                        .filter_map(|group| {
                            groups.category_of(group).map(|category| GroupCategory {
                                name: group.to_string(),
                                category,
                            })
                        })
                        .collect(),
                }
            })
            .collect();
        ClassifyView { sets }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchView<'a> {
    pub query: String,
    pub results: Vec<SearchResult<'a>>,
}

#[derive(Debug, Serialize)]
pub struct LintView {
    pub issues: Vec<AliasIssue>,
}
