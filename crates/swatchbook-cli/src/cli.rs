//! Command-line definition.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use swatchbook::ExportFormat;

use crate::output::OutputMode;

/// Builds the `swatchbook` command tree.
pub fn build_command() -> Command {
    let formats: Vec<&'static str> = ExportFormat::ALL.iter().map(|f| f.as_str()).collect();

    Command::new("swatchbook")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Browse, search and export design tokens")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Config file (default: ./swatchbook.yaml if present)"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .value_name("MODE")
                .global(true)
                .value_parser(OutputMode::NAMES)
                .help("Output mode: auto, term, text, or json"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("Log more to stderr (-v info, -vv debug, -vvv trace)"),
        )
        .subcommand(with_file(
            Command::new("colors").about("Colour families and semantic colours"),
        ))
        .subcommand(with_file(
            Command::new("scales").about("Spacing, size and radius scales"),
        ))
        .subcommand(with_file(
            Command::new("components").about("Component variants and dimension groups"),
        ))
        .subcommand(with_file(
            Command::new("typography").about("Typography tokens"),
        ))
        .subcommand(with_file(
            Command::new("classify").about("Category of every group in every token set"),
        ))
        .subcommand(
            Command::new("search")
                .about("Fuzzy search over names, values and CSS variables")
                .arg(
                    Arg::new("query")
                        .required(true)
                        .value_name("QUERY")
                        .help("Text to search for"),
                )
                .arg(file_arg())
                .arg(
                    Arg::new("limit")
                        .short('n')
                        .long("limit")
                        .value_name("N")
                        .value_parser(value_parser!(usize))
                        .help("Maximum number of results"),
                ),
        )
        .subcommand(with_file(
            Command::new("export")
                .about("Generate CSS, SCSS, JS or Tailwind code")
                .arg(
                    Arg::new("format")
                        .short('f')
                        .long("format")
                        .required(true)
                        .value_name("FORMAT")
                        .value_parser(formats)
                        .help("Output language"),
                )
                .arg(
                    Arg::new("out")
                        .short('o')
                        .long("out")
                        .value_name("PATH")
                        .value_parser(value_parser!(PathBuf))
                        .help("Write to a file instead of stdout"),
                ),
        ))
        .subcommand(with_file(
            Command::new("lint").about("Report dangling and cyclic aliases"),
        ))
}

fn file_arg() -> Arg {
    Arg::new("file")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Token file (.json, .yaml, .yml); defaults to `tokens` from the config")
}

fn with_file(cmd: Command) -> Command {
    cmd.arg(file_arg())
}

/// Flags shared by every command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalArgs {
    pub config: Option<PathBuf>,
    pub output: Option<OutputMode>,
    pub verbose: u8,
}

impl GlobalArgs {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let output = matches
            .get_one::<String>("output")
            .map(|name| name.parse::<OutputMode>().map_err(|e| anyhow!(e)))
            .transpose()?;

        Ok(Self {
            config: matches.get_one::<PathBuf>("config").cloned(),
            output,
            verbose: matches.get_count("verbose"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ArgMatches {
        build_command().try_get_matches_from(args).unwrap()
    }

    #[test]
    fn test_command_is_well_formed() {
        build_command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let matches = parse(&["swatchbook", "colors", "t.json", "--output", "json", "-vv"]);
        let globals = GlobalArgs::from_matches(&matches).unwrap();
        assert_eq!(globals.output, Some(OutputMode::Json));
        assert_eq!(globals.verbose, 2);
        assert_eq!(globals.config, None);
    }

    #[test]
    fn test_search_args() {
        let matches = parse(&["swatchbook", "search", "blue", "t.json", "--limit", "5"]);
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "search");
        assert_eq!(sub.get_one::<String>("query").map(String::as_str), Some("blue"));
        assert_eq!(sub.get_one::<usize>("limit"), Some(&5));
        assert_eq!(sub.get_one::<PathBuf>("file"), Some(&PathBuf::from("t.json")));
    }

    #[test]
    fn test_export_requires_known_format() {
        assert!(build_command()
            .try_get_matches_from(["swatchbook", "export", "--format", "xml"])
            .is_err());
        assert!(build_command()
            .try_get_matches_from(["swatchbook", "export", "-f", "tailwind"])
            .is_ok());
    }

    #[test]
    fn test_file_is_optional() {
        let matches = parse(&["swatchbook", "lint"]);
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(sub.get_one::<PathBuf>("file"), None);
    }
}
