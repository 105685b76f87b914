// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compile one entity group into a single regex.

use regex::{Captures, Regex, RegexBuilder};

use super::boundary::{
    ascii_perl_classes, inject_ascii_word_boundaries, inject_word_boundaries,
    top_level_alternatives,
};
use super::{RegexFlags, SymbolTable};
use crate::config::GroupConfig;

/// Error during entity group compilation.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("group declares no terms")]
    EmptyGroup,

    #[error("terms '{first}' and '{second}' both map to capture symbol '{symbol}'")]
    SymbolCollision {
        first: String,
        second: String,
        symbol: String,
    },

    #[error("invalid flag '{token}' (allowed values: {})", .valid.join(", "))]
    InvalidFlag { token: String, valid: Vec<String> },

    #[error("invalid flag value {bits} (allowed flags: {})", .valid.join(", "))]
    InvalidFlagBits { bits: i64, valid: Vec<String> },

    #[error("invalid regex pattern: {0}")]
    InvalidRegex(#[from] regex::Error),
}

/// An entity group compiled into one alternation of named term captures.
#[derive(Debug, Clone)]
pub struct CompiledEntityGroup {
    name: String,
    regex: Regex,
    names: Vec<String>,
    symbols: SymbolTable,
    /// Capture index of each term, in declaration order.
    slots: Vec<usize>,
    flags: RegexFlags,
}

impl CompiledEntityGroup {
    /// Compile a group's terms into a single regex.
    ///
    /// Terms become `(?P<symbol>pattern)` alternatives in declaration order,
    /// so at any position the earliest declared term that matches wins.
    pub fn compile(group: &GroupConfig, word_boundaries: bool) -> Result<Self, CompileError> {
        let flags = RegexFlags::resolve(group.flag_directive())?;
        if group.terms().is_empty() {
            return Err(CompileError::EmptyGroup);
        }

        let symbols = SymbolTable::build(group.terms().iter().map(|t| t.name()))?;
        let verbose = flags.contains(RegexFlags::VERBOSE);
        let ascii = flags.contains(RegexFlags::ASCII);

        let alternatives: Vec<String> = group
            .terms()
            .iter()
            .zip(symbols.iter())
            .map(|(term, (_, symbol))| {
                let pattern = if ascii {
                    ascii_perl_classes(term.pattern(), verbose)
                } else {
                    term.pattern().to_string()
                };
                let body = match (word_boundaries, ascii) {
                    (false, _) => pattern,
                    (true, false) => inject_word_boundaries(&pattern, verbose),
                    (true, true) => inject_ascii_word_boundaries(&pattern, verbose),
                };
                // A trailing verbose comment must not swallow the `)`
                let close = if verbose { "\n)" } else { ")" };
                tracing::trace!(
                    group = group.name(),
                    term = term.name(),
                    alternatives = top_level_alternatives(term.pattern(), verbose),
                    "term pattern"
                );
                format!("(?P<{symbol}>{body}{close}")
            })
            .collect();
        let pattern = alternatives.join("|");

        let mut builder = RegexBuilder::new(&pattern);
        flags.apply(&mut builder);
        let regex = builder.build()?;

        let mut slots = vec![0; symbols.len()];
        for (idx, capture) in regex.capture_names().enumerate() {
            let position = capture
                .and_then(|symbol| symbols.name_for(symbol))
                .and_then(|name| symbols.position(name));
            if let Some(position) = position {
                slots[position] = idx;
            }
        }

        tracing::debug!(
            group = group.name(),
            terms = symbols.len(),
            %flags,
            word_boundaries,
            "compiled entity group"
        );

        Ok(Self {
            name: group.name().to_string(),
            regex,
            names: group.terms().iter().map(|t| t.name().to_string()).collect(),
            symbols,
            slots,
            flags,
        })
    }

    /// Entity group name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The compiled regex.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Term names in declaration order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn flags(&self) -> RegexFlags {
        self.flags
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Declaration index of a term, if declared in this group.
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.symbols.position(term)
    }

    /// Index of the term whose capture participated in `caps`.
    pub(crate) fn matched_term(&self, caps: &Captures<'_>) -> Option<usize> {
        self.slots.iter().position(|&slot| caps.get(slot).is_some())
    }

    /// Capture index for the term at `index`.
    pub(crate) fn slot(&self, index: usize) -> usize {
        self.slots[index]
    }
}

#[cfg(test)]
#[path = "compiler_tests.rs"]
mod tests;
