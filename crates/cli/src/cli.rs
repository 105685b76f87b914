// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Named entity extraction from hand-written regex vocabularies
#[derive(Parser)]
#[command(name = "nerb")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific pattern config file
    #[arg(short = 'C', long = "config", global = true, env = "NERB_CONFIG")]
    pub config: Option<PathBuf>,

    /// Match terms anywhere, not only as whole words
    #[arg(long, global = true)]
    pub no_word_boundaries: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Extract named entities from text
    Extract(ExtractArgs),
    /// Match a single term of an entity group
    Isolate(IsolateArgs),
    /// List entity groups and their terms
    Groups(GroupsArgs),
}

#[derive(clap::Args)]
pub struct ExtractArgs {
    /// Files to read (stdin when none are given)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Entity group to extract (all groups when omitted)
    #[arg(short, long)]
    pub group: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct IsolateArgs {
    /// File to read (stdin when omitted)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Entity group holding the term
    #[arg(short, long)]
    pub group: String,

    /// Term name to isolate
    #[arg(short, long)]
    pub term: String,

    /// Result shape: search, finditer, or findall
    #[arg(short, long, default_value = "search")]
    pub method: String,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct GroupsArgs {
    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
