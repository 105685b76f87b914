// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! One tab-separated record per line:
//! ```text
//! [<source>\t]<entity>\t<name>\t<start>\t<end>\t<string>
//! ```
//! The source column only appears when more than one input was read.

use std::borrow::Cow;
use std::io::Write;

use super::ExtractReport;
use crate::isolate::{Isolated, TermMatch};
use crate::recognizer::Nerb;

/// Write extracted entities of every input.
pub fn write_reports<W: Write>(writer: &mut W, reports: &[ExtractReport]) -> std::io::Result<()> {
    let show_source = reports.len() > 1;
    for report in reports {
        for entity in &report.entities {
            if show_source {
                write!(writer, "{}\t", report.source_label())?;
            }
            writeln!(
                writer,
                "{}\t{}\t{}\t{}\t{}",
                entity.entity(),
                entity.name(),
                entity.start(),
                entity.end(),
                escape(entity.string())
            )?;
        }
    }
    Ok(())
}

/// Write an isolated result. Nothing is written for `None`.
pub fn write_isolated<W: Write>(
    writer: &mut W,
    isolated: Option<&Isolated<'_, '_>>,
) -> std::io::Result<()> {
    match isolated {
        None => Ok(()),
        Some(Isolated::Match(m)) => write_term_match(writer, m),
        Some(Isolated::Matches(matches)) => {
            for m in matches {
                write_term_match(writer, m)?;
            }
            Ok(())
        }
        Some(Isolated::Rows(rows)) => {
            for row in rows {
                let cells: Vec<Cow<'_, str>> = row.iter().map(|cell| escape(cell)).collect();
                writeln!(writer, "{}", cells.join("\t"))?;
            }
            Ok(())
        }
    }
}

fn write_term_match<W: Write>(writer: &mut W, m: &TermMatch<'_, '_>) -> std::io::Result<()> {
    writeln!(
        writer,
        "{}\t{}\t{}\t{}",
        m.term(),
        m.start(),
        m.end(),
        escape(m.as_str())
    )
}

/// Write one `<group>\t<flags>\t<term>` line per declared term.
pub fn write_groups<W: Write>(writer: &mut W, nerb: &Nerb) -> std::io::Result<()> {
    for group in nerb.groups() {
        for term in group.names() {
            writeln!(writer, "{}\t{}\t{}", group.name(), group.flags(), term)?;
        }
    }
    Ok(())
}

/// Escape characters that would break the line-per-record layout.
fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(['\\', '\t', '\n', '\r']) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 4);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
