// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Isolate command implementation.

use std::io::Write;

use nerb::IsolateMethod;
use nerb::cli::{Cli, IsolateArgs, OutputFormat};
use nerb::error::ExitCode;
use nerb::output::json::IsolateOutput;
use nerb::output::{json, text};

/// Run the isolate command. Exits with `NoMatch` when the term never matched.
pub fn run(cli: &Cli, args: &IsolateArgs) -> anyhow::Result<ExitCode> {
    let method: IsolateMethod = args.method.parse()?;
    let nerb = crate::load_nerb(cli)?;

    let input = crate::read_input(args.path.as_deref())?;
    let isolated = nerb.isolate(&args.group, &args.term, &input, method)?;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    match args.output {
        OutputFormat::Text => text::write_isolated(&mut handle, isolated.as_ref())?,
        OutputFormat::Json => {
            let output = IsolateOutput {
                group: &args.group,
                term: &args.term,
                method: method.as_str(),
                result: isolated.as_ref().map(Into::into),
            };
            json::write_isolated(&mut handle, &output)?;
        }
    }
    handle.flush()?;

    Ok(match isolated {
        Some(_) => ExitCode::Success,
        None => ExitCode::NoMatch,
    })
}
