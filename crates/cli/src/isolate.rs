// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Matching restricted to a single term of a group.
//!
//! The group's whole regex still runs, so a term only reports the matches it
//! wins under leftmost-first priority, never matches another term took.

use std::fmt;
use std::str::FromStr;

use regex::{Captures, Match};

use crate::entity::Span;
use crate::error::{Error, Result};
use crate::pattern::CompiledEntityGroup;

/// How isolated results are shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IsolateMethod {
    /// First match of the term.
    #[default]
    Search,
    /// Every match of the term.
    Finditer,
    /// Per-term capture rows of the matches the term won.
    Findall,
}

impl IsolateMethod {
    pub const NAMES: &'static [&'static str] = &["search", "finditer", "findall"];

    pub fn as_str(self) -> &'static str {
        match self {
            IsolateMethod::Search => "search",
            IsolateMethod::Finditer => "finditer",
            IsolateMethod::Findall => "findall",
        }
    }
}

impl FromStr for IsolateMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "search" => Ok(IsolateMethod::Search),
            "finditer" => Ok(IsolateMethod::Finditer),
            "findall" => Ok(IsolateMethod::Findall),
            _ => Err(Error::UnknownMethod {
                method: s.to_string(),
                valid: Self::NAMES,
            }),
        }
    }
}

impl fmt::Display for IsolateMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One match won by an isolated term.
#[derive(Debug)]
pub struct TermMatch<'g, 't> {
    term: &'g str,
    whole: Match<'t>,
    captures: Captures<'t>,
}

impl<'g, 't> TermMatch<'g, 't> {
    /// Term name that won the match.
    pub fn term(&self) -> &'g str {
        self.term
    }

    pub fn as_str(&self) -> &'t str {
        self.whole.as_str()
    }

    pub fn start(&self) -> usize {
        self.whole.start()
    }

    pub fn end(&self) -> usize {
        self.whole.end()
    }

    pub fn span(&self) -> Span {
        Span::new(self.whole.start(), self.whole.end())
    }

    /// All capture groups of the match, including those inside the term.
    pub fn captures(&self) -> &Captures<'t> {
        &self.captures
    }
}

/// Result of isolating a term.
#[derive(Debug)]
pub enum Isolated<'g, 't> {
    Match(TermMatch<'g, 't>),
    Matches(Vec<TermMatch<'g, 't>>),
    /// Capture value of every term per match, `""` where a term did not
    /// participate.
    Rows(Vec<Vec<&'t str>>),
}

impl CompiledEntityGroup {
    fn resolve_term(&self, term: &str) -> Result<usize> {
        self.term_index(term).ok_or_else(|| Error::UnknownTerm {
            group: self.name().to_string(),
            term: term.to_string(),
            valid: self.names().to_vec(),
        })
    }

    fn term_matches<'g, 't>(
        &'g self,
        term: usize,
        text: &'t str,
    ) -> impl Iterator<Item = TermMatch<'g, 't>> {
        self.regex().captures_iter(text).filter_map(move |captures| {
            if self.matched_term(&captures) != Some(term) {
                return None;
            }
            let whole = captures.get(0)?;
            Some(TermMatch {
                term: &self.names()[term],
                whole,
                captures,
            })
        })
    }

    /// First match won by `term`.
    pub fn search<'g, 't>(
        &'g self,
        term: &str,
        text: &'t str,
    ) -> Result<Option<TermMatch<'g, 't>>> {
        let idx = self.resolve_term(term)?;
        Ok(self.term_matches(idx, text).next())
    }

    /// Every match won by `term`, or `None` when there are none.
    pub fn finditer<'g, 't>(
        &'g self,
        term: &str,
        text: &'t str,
    ) -> Result<Option<Vec<TermMatch<'g, 't>>>> {
        let idx = self.resolve_term(term)?;
        let matches: Vec<_> = self.term_matches(idx, text).collect();
        Ok((!matches.is_empty()).then_some(matches))
    }

    /// Capture rows of the matches where `term` captured non-empty text,
    /// or `None` when there are none.
    pub fn findall<'t>(&self, term: &str, text: &'t str) -> Result<Option<Vec<Vec<&'t str>>>> {
        let idx = self.resolve_term(term)?;
        let slot = self.slot(idx);
        let rows: Vec<Vec<&'t str>> = self
            .regex()
            .captures_iter(text)
            .filter(|caps| caps.get(slot).is_some_and(|m| !m.as_str().is_empty()))
            .map(|caps| {
                (0..self.names().len())
                    .map(|i| caps.get(self.slot(i)).map_or("", |m| m.as_str()))
                    .collect()
            })
            .collect();
        Ok((!rows.is_empty()).then_some(rows))
    }

    /// Isolate `term` using `method`.
    pub fn isolate<'g, 't>(
        &'g self,
        term: &str,
        text: &'t str,
        method: IsolateMethod,
    ) -> Result<Option<Isolated<'g, 't>>> {
        Ok(match method {
            IsolateMethod::Search => self.search(term, text)?.map(Isolated::Match),
            IsolateMethod::Finditer => self.finditer(term, text)?.map(Isolated::Matches),
            IsolateMethod::Findall => self.findall(term, text)?.map(Isolated::Rows),
        })
    }
}

#[cfg(test)]
#[path = "isolate_tests.rs"]
mod tests;
