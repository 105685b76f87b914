// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Groups command implementation.

use std::io::Write;

use nerb::cli::{Cli, GroupsArgs, OutputFormat};
use nerb::output::{json, text};

/// Run the groups command.
pub fn run(cli: &Cli, args: &GroupsArgs) -> anyhow::Result<()> {
    let nerb = crate::load_nerb(cli)?;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    match args.output {
        OutputFormat::Text => text::write_groups(&mut handle, &nerb)?,
        OutputFormat::Json => json::write_groups(&mut handle, &nerb)?,
    }
    handle.flush()?;
    Ok(())
}
