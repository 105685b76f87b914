// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for extraction, isolation and group listings.

use std::borrow::Cow;
use std::path::PathBuf;

use crate::entity::NamedEntityList;

pub mod json;
pub mod text;

/// Label used for standard input.
pub const STDIN_LABEL: &str = "-";

/// Entities extracted from one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractReport {
    /// Input path, `None` for stdin.
    pub source: Option<PathBuf>,
    pub entities: NamedEntityList,
}

impl ExtractReport {
    pub fn new(source: Option<PathBuf>, entities: NamedEntityList) -> Self {
        Self { source, entities }
    }

    /// Display label of the input.
    pub fn source_label(&self) -> Cow<'_, str> {
        match &self.source {
            Some(path) => path.to_string_lossy(),
            None => Cow::Borrowed(STDIN_LABEL),
        }
    }
}
