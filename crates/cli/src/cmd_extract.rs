// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Extract command implementation.

use std::io::Write;
use std::path::Path;

use rayon::prelude::*;

use nerb::cli::{Cli, ExtractArgs, OutputFormat};
use nerb::error::ExitCode;
use nerb::output::{ExtractReport, json, text};
use nerb::{NamedEntityList, Nerb};

/// Run the extract command.
pub fn run(cli: &Cli, args: &ExtractArgs) -> anyhow::Result<ExitCode> {
    let nerb = crate::load_nerb(cli)?;

    // Fail before reading any input when the group is unknown
    if let Some(ref group) = args.group {
        nerb.group(group)?;
    }

    let reports = if args.paths.is_empty() {
        vec![extract_one(&nerb, args.group.as_deref(), None)?]
    } else {
        args.paths
            .par_iter()
            .map(|path| extract_one(&nerb, args.group.as_deref(), Some(path)))
            .collect::<nerb::Result<Vec<_>>>()?
    };

    let total: usize = reports.iter().map(|r| r.entities.len()).sum();
    tracing::debug!("extracted {} entities from {} inputs", total, reports.len());

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    match args.output {
        OutputFormat::Text => text::write_reports(&mut handle, &reports)?,
        OutputFormat::Json => json::write_reports(&mut handle, &reports)?,
    }
    handle.flush()?;
    Ok(ExitCode::Success)
}

fn extract_one(
    nerb: &Nerb,
    group: Option<&str>,
    path: Option<&Path>,
) -> nerb::Result<ExtractReport> {
    let text = crate::read_input(path)?;
    let entities: NamedEntityList = match group {
        Some(group) => nerb.extract(group, &text)?,
        None => nerb.extract_all(&text),
    };
    Ok(ExtractReport::new(path.map(Path::to_path_buf), entities))
}
