//! `swatchbook`: terminal documentation panels, search and export for a
//! design token file.

mod cli;
mod commands;
mod config;
mod logging;
mod output;
mod panels;
mod render;
mod theme;
mod views;

use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};

use crate::cli::{build_command, GlobalArgs};
use crate::config::Config;

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(2)
        }
    }
}

fn run(matches: &clap::ArgMatches) -> Result<ExitCode> {
    let globals = GlobalArgs::from_matches(matches)?;
    let cwd = std::env::current_dir().context("failed to read working directory")?;
    let config = Config::load(globals.config.as_deref(), &cwd)?;

    logging::init(globals.verbose, config.log_level.as_deref());

    let mode = globals.output.or(config.output).unwrap_or_default();
    let (name, sub) = matches.subcommand().context("no command given")?;
    let outcome = commands::run(name, sub, &config, mode)?;

    if !outcome.output.is_empty() {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(outcome.output.as_bytes())?;
        if !outcome.output.ends_with('\n') {
            stdout.write_all(b"\n")?;
        }
    }

    Ok(if outcome.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}
