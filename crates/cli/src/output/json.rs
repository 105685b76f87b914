// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! Every command writes a single pretty-printed document followed by a
//! newline.

use std::io::Write;

use serde::Serialize;

use super::ExtractReport;
use crate::entity::{NamedEntityList, Span};
use crate::isolate::{Isolated, TermMatch};
use crate::recognizer::Nerb;

#[derive(Debug, Serialize)]
struct ExtractOutput<'a> {
    inputs: Vec<InputOutput<'a>>,
}

#[derive(Debug, Serialize)]
struct InputOutput<'a> {
    source: String,
    entities: &'a NamedEntityList,
}

/// Isolated result for JSON output.
#[derive(Debug, Serialize)]
pub struct IsolateOutput<'a> {
    pub group: &'a str,
    pub term: &'a str,
    pub method: &'a str,
    pub result: Option<IsolatedOutput<'a>>,
}

/// Shape of an isolated result: one match, many, or capture rows.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum IsolatedOutput<'a> {
    Match(MatchOutput<'a>),
    Matches(Vec<MatchOutput<'a>>),
    Rows(&'a [Vec<&'a str>]),
}

/// A single term match.
#[derive(Debug, Serialize)]
pub struct MatchOutput<'a> {
    pub string: &'a str,
    pub span: Span,
}

impl<'a> From<&'a TermMatch<'_, 'a>> for MatchOutput<'a> {
    fn from(m: &'a TermMatch<'_, 'a>) -> Self {
        Self {
            string: m.as_str(),
            span: m.span(),
        }
    }
}

impl<'a> From<&'a Isolated<'_, 'a>> for IsolatedOutput<'a> {
    fn from(isolated: &'a Isolated<'_, 'a>) -> Self {
        match isolated {
            Isolated::Match(m) => IsolatedOutput::Match(m.into()),
            Isolated::Matches(ms) => IsolatedOutput::Matches(ms.iter().map(Into::into).collect()),
            Isolated::Rows(rows) => IsolatedOutput::Rows(rows),
        }
    }
}

/// Entity group listing for JSON output.
#[derive(Debug, Serialize)]
struct GroupOutput<'a> {
    name: &'a str,
    flags: String,
    terms: &'a [String],
}

fn write_document<W: Write, T: Serialize>(writer: &mut W, value: &T) -> std::io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)
}

/// Write extracted entities of every input.
pub fn write_reports<W: Write>(writer: &mut W, reports: &[ExtractReport]) -> std::io::Result<()> {
    let output = ExtractOutput {
        inputs: reports
            .iter()
            .map(|report| InputOutput {
                source: report.source_label().into_owned(),
                entities: &report.entities,
            })
            .collect(),
    };
    write_document(writer, &output)
}

/// Write an isolated result; `None` becomes `"result": null`.
pub fn write_isolated<W: Write>(writer: &mut W, output: &IsolateOutput<'_>) -> std::io::Result<()> {
    write_document(writer, output)
}

/// Write declared groups with their flags and term names.
pub fn write_groups<W: Write>(writer: &mut W, nerb: &Nerb) -> std::io::Result<()> {
    let groups: Vec<GroupOutput<'_>> = nerb
        .groups()
        .iter()
        .map(|group| GroupOutput {
            name: group.name(),
            flags: group.flags().to_string(),
            terms: group.names(),
        })
        .collect();
    write_document(writer, &groups)
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
