// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Nerb CLI entry point.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use nerb::cli::{Cli, Command};
use nerb::discovery;
use nerb::error::ExitCode;
use nerb::{Error, Nerb};

mod cmd_extract;
mod cmd_groups;
mod cmd_isolate;

fn init_logging() {
    let filter = EnvFilter::try_from_env("NERB_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("nerb: {}", e);
            match e.downcast_ref::<nerb::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Extract(args)) => cmd_extract::run(&cli, args),
        Some(Command::Isolate(args)) => cmd_isolate::run(&cli, args),
        Some(Command::Groups(args)) => {
            cmd_groups::run(&cli, args)?;
            Ok(ExitCode::Success)
        }
    }
}

/// Resolve the pattern config and compile it.
fn load_nerb(cli: &Cli) -> anyhow::Result<Nerb> {
    let cwd = std::env::current_dir()?;
    let path = discovery::resolve_config(cli.config.as_deref(), &cwd)?;
    tracing::debug!("loading pattern config from {}", path.display());
    Ok(Nerb::from_path(&path, !cli.no_word_boundaries)?)
}

/// Read a whole input file, or stdin when `path` is `None`.
fn read_input(path: Option<&Path>) -> nerb::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|source| Error::Io {
                    path: PathBuf::from(nerb::output::STDIN_LABEL),
                    source,
                })?;
            Ok(text)
        }
    }
}
