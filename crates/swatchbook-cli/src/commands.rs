//! Command handlers.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::ArgMatches;
use serde::Serialize;
use swatchbook::alias::lint;
use swatchbook::export::{flatten_for_export_with, generate, ExportFormat};
use swatchbook::search::{index_tokens_with, search_tokens, DEFAULT_SEARCH_LIMIT};
use swatchbook::{AliasTable, TokenDocument};

use crate::config::Config;
use crate::output::OutputMode;
use crate::panels;
use crate::render::{terminal_width, Renderer};
use crate::theme::default_theme;
use crate::views::{
    ClassifyView, ColorsView, ComponentsView, LintView, ScalesView, SearchView, TypographyView,
};

/// What a command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Text for stdout. Empty when the command wrote elsewhere.
    pub output: String,
    /// `false` when the command ran but found problems.
    pub success: bool,
}

impl Outcome {
    fn ok(output: String) -> Self {
        Self {
            output,
            success: true,
        }
    }
}

/// Runs the subcommand `name` with its matches.
pub fn run(name: &str, matches: &ArgMatches, config: &Config, mode: OutputMode) -> Result<Outcome> {
    let document = load_document(matches, config)?;
    let table = AliasTable::build(&document);
    tracing::info!(command = name, %mode, "running");

    match name {
        "colors" => present(mode, panels::COLORS, &ColorsView::build(&document, &table)),
        "scales" => present(mode, panels::SCALES, &ScalesView::build(&document, &table)),
        "components" => present(
            mode,
            panels::COMPONENTS,
            &ComponentsView::build(&document, &table),
        ),
        "typography" => present(
            mode,
            panels::TYPOGRAPHY,
            &TypographyView::build(&document, &table),
        ),
        "classify" => present(mode, panels::CLASSIFY, &ClassifyView::build(&document)),
        "search" => search(matches, config, mode, &document, &table),
        "export" => export(matches, &document, &table),
        "lint" => {
            let issues = lint(&document, &table);
            let success = issues.is_empty();
            let mut outcome = present(mode, panels::LINT, &LintView { issues })?;
            outcome.success = success;
            Ok(outcome)
        }
        other => bail!("unknown command '{}'", other),
    }
}

fn search(
    matches: &ArgMatches,
    config: &Config,
    mode: OutputMode,
    document: &TokenDocument,
    table: &AliasTable,
) -> Result<Outcome> {
    let query = matches
        .get_one::<String>("query")
        .context("missing search query")?;
    let limit = matches
        .get_one::<usize>("limit")
        .copied()
        .or(config.search_limit)
        .unwrap_or(DEFAULT_SEARCH_LIMIT);

    let index = index_tokens_with(document, table);
    let results = search_tokens(query, &index, limit);
    present(
        mode,
        panels::SEARCH,
        &SearchView {
            query: query.clone(),
            results,
        },
    )
}

fn export(matches: &ArgMatches, document: &TokenDocument, table: &AliasTable) -> Result<Outcome> {
    let format: ExportFormat = matches
        .get_one::<String>("format")
        .context("missing export format")?
        .parse()?;

    let tokens = flatten_for_export_with(document, table);
    let code = generate(format, &tokens)?;

    match matches.get_one::<PathBuf>("out") {
        Some(path) => {
            std::fs::write(path, &code)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), %format, "wrote export");
            Ok(Outcome::ok(String::new()))
        }
        None => Ok(Outcome::ok(code)),
    }
}

fn load_document(matches: &ArgMatches, config: &Config) -> Result<TokenDocument> {
    let path = matches
        .get_one::<PathBuf>("file")
        .cloned()
        .or_else(|| config.tokens.clone())
        .context("no token file given; pass FILE or set `tokens` in swatchbook.yaml")?;

    TokenDocument::from_path(&path)
        .with_context(|| format!("failed to load tokens from {}", path.display()))
}

/// Serializes `data` as JSON or renders it with the panel `template`.
fn present<T: Serialize>(mode: OutputMode, template: &str, data: &T) -> Result<Outcome> {
    if mode.is_structured() {
        return Ok(Outcome::ok(serde_json::to_string_pretty(data)?));
    }

    let mut renderer = Renderer::new(default_theme(), mode, terminal_width())?;
    panels::register(&mut renderer)?;
    let output = renderer
        .render(template, data)
        .with_context(|| format!("failed to render {} panel", template))?;
    Ok(Outcome::ok(output))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::build_command;
    use std::fs;

    const TOKENS: &str = r##"{
        "Foundation": {
            "base": {
                "blue": {
                    "500": {"value": "#1369e9", "type": "color"},
                    "600": {"value": "#0f57c2", "type": "color"}
                }
            },
            "spacing": {
                "md": {"value": "16px", "type": "spacing"},
                "sm": {"value": "8px", "type": "spacing"}
            }
        },
        "Semantic": {
            "fill": {"accent": {"value": "{base.blue.500}", "type": "color"}},
            "text": {"ghost": {"value": "{missing}", "type": "color"}}
        },
        "Components": {
            "button": {
                "primary": {"bg": {"value": "{fill.accent}", "type": "color"}},
                "padding": {"x": {"value": "12px", "type": "spacing"}}
            }
        }
    }"##;

    fn run_args(args: &[&str], mode: OutputMode) -> Result<Outcome> {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("tokens.json");
        fs::write(&file, TOKENS).unwrap();

        let mut argv: Vec<String> = vec!["swatchbook".to_string()];
        argv.extend(args.iter().map(|a| a.replace("{file}", &file.to_string_lossy())));
        let matches = build_command().try_get_matches_from(argv).unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        run(name, sub, &Config::default(), mode)
    }

    #[test]
    fn test_colors_text_panel() {
        let out = run_args(&["colors", "{file}"], OutputMode::Text).unwrap();
        assert!(out.success);
        assert!(out.output.contains("Colour families"));
        assert!(out.output.contains("--base-blue-500"));
        assert!(out.output.contains("--fill-accent"));
        assert!(!out.output.contains('\x1b'));
    }

    #[test]
    fn test_scales_sorted() {
        let out = run_args(&["scales", "{file}"], OutputMode::Text).unwrap();
        let sm = out.output.find("--spacing-sm").unwrap();
        let md = out.output.find("--spacing-md").unwrap();
        assert!(sm < md);
    }

    #[test]
    fn test_components_panel() {
        let out = run_args(&["components", "{file}"], OutputMode::Text).unwrap();
        assert!(out.output.contains("button"));
        assert!(out.output.contains("primary"));
        assert!(out.output.contains("padding"));
    }

    #[test]
    fn test_search_json() {
        let out = run_args(&["search", "blue", "{file}", "-n", "1"], OutputMode::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out.output).unwrap();
        assert_eq!(value["query"], "blue");
        assert_eq!(value["results"].as_array().unwrap().len(), 1);
        assert_eq!(value["results"][0]["token"]["name"], "base-blue-500");
    }

    #[test]
    fn test_search_no_results() {
        let out = run_args(&["search", "zzz", "{file}"], OutputMode::Text).unwrap();
        assert!(out.output.contains("No tokens match 'zzz'."));
    }

    #[test]
    fn test_lint_fails_on_dangling_alias() {
        let out = run_args(&["lint", "{file}"], OutputMode::Text).unwrap();
        assert!(!out.success);
        assert!(out.output.contains("Semantic.text.ghost: unknown reference {missing}"));
    }

    #[test]
    fn test_classify_panel() {
        let out = run_args(&["classify", "{file}"], OutputMode::Text).unwrap();
        assert!(out.output.contains("Foundation"));
        assert!(out.output.contains("spacing"));
    }

    #[test]
    fn test_typography_empty() {
        let out = run_args(&["typography", "{file}"], OutputMode::Text).unwrap();
        assert_eq!(out.output.trim(), "No typography tokens found.");
    }

    #[test]
    fn test_export_to_stdout() {
        let out = run_args(&["export", "--format", "scss", "{file}"], OutputMode::Auto).unwrap();
        assert!(out.output.contains("$fill-accent: $base-blue-500;\n"));
    }

    #[test]
    fn test_export_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("tokens.css");
        let target_arg = target.to_string_lossy().to_string();
        let out = run_args(
            &["export", "-f", "css", "{file}", "--out", &target_arg],
            OutputMode::Auto,
        )
        .unwrap();
        assert!(out.output.is_empty());
        assert!(fs::read_to_string(&target).unwrap().starts_with(":root {"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let matches = build_command()
            .try_get_matches_from(["swatchbook", "colors"])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        let err = run(name, sub, &Config::default(), OutputMode::Text).unwrap_err();
        assert!(err.to_string().contains("no token file given"));
    }
}
