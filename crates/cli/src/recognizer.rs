// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled entity groups addressable by name.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use crate::config::PatternConfig;
use crate::entity::NamedEntityList;
use crate::error::{Error, Result};
use crate::isolate::{IsolateMethod, Isolated};
use crate::pattern::CompiledEntityGroup;

/// Named Entity Regex Builder.
///
/// Compiles every group of a [`PatternConfig`] once; extraction and
/// isolation then run against the compiled regexes. A `Nerb` is immutable
/// after construction and can be shared across threads.
///
/// ```
/// use nerb::{GroupConfig, Nerb, PatternConfig};
///
/// let config = PatternConfig::new()
///     .group(GroupConfig::new("ARTIST").term("Pink Floyd", r"Pink\sFloyd"));
/// let nerb = Nerb::new(&config)?;
///
/// let found = nerb.extract("ARTIST", "I love Pink Floyd.")?;
/// assert_eq!(found[0].name(), "Pink Floyd");
/// assert_eq!((found[0].start(), found[0].end()), (7, 17));
/// # Ok::<(), nerb::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Nerb {
    groups: Vec<CompiledEntityGroup>,
    index: HashMap<String, usize>,
    word_boundaries: bool,
}

impl Nerb {
    /// Compile `config` with word boundaries around every term.
    pub fn new(config: &PatternConfig) -> Result<Self> {
        Self::with_word_boundaries(config, true)
    }

    /// Compile `config`, optionally injecting word boundaries.
    pub fn with_word_boundaries(config: &PatternConfig, word_boundaries: bool) -> Result<Self> {
        let groups = config
            .groups()
            .iter()
            .map(|group| {
                CompiledEntityGroup::compile(group, word_boundaries).map_err(|source| {
                    Error::Compilation {
                        group: group.name().to_string(),
                        source,
                    }
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let index = groups
            .iter()
            .enumerate()
            .map(|(i, g)| (g.name().to_string(), i))
            .collect();

        Ok(Self {
            groups,
            index,
            word_boundaries,
        })
    }

    /// Load and compile a pattern config file.
    pub fn from_path(path: &Path, word_boundaries: bool) -> Result<Self> {
        Self::with_word_boundaries(&PatternConfig::load(path)?, word_boundaries)
    }

    /// Compiled group by name.
    pub fn group(&self, name: &str) -> Result<&CompiledEntityGroup> {
        self.index
            .get(name)
            .map(|&i| &self.groups[i])
            .ok_or_else(|| Error::UnknownGroup {
                group: name.to_string(),
                valid: self.entity_list().into_iter().map(String::from).collect(),
            })
    }

    /// Compiled groups in declaration order.
    pub fn groups(&self) -> &[CompiledEntityGroup] {
        &self.groups
    }

    /// Group names in declaration order.
    pub fn entity_list(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.name()).collect()
    }

    pub fn word_boundaries(&self) -> bool {
        self.word_boundaries
    }

    /// Extract the entities of one group from `text`.
    pub fn extract(&self, group: &str, text: &str) -> Result<NamedEntityList> {
        Ok(self.group(group)?.extract(text))
    }

    /// Extract every group, ordered by position.
    ///
    /// Entities starting at the same offset keep group declaration order.
    pub fn extract_all(&self, text: &str) -> NamedEntityList {
        let mut all = self
            .groups
            .iter()
            .fold(NamedEntityList::new(), |acc, g| acc + g.extract(text));
        all.sort_by_key(|e| e.start(), false);
        all
    }

    /// Apply `method` to one term of a group.
    pub fn isolate<'g, 't>(
        &'g self,
        group: &str,
        term: &str,
        text: &'t str,
        method: IsolateMethod,
    ) -> Result<Option<Isolated<'g, 't>>> {
        self.group(group)?.isolate(term, text, method)
    }
}

impl fmt::Display for Nerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Nerb(entities: {:?})", self.entity_list())
    }
}

#[cfg(test)]
#[path = "recognizer_tests.rs"]
mod tests;
