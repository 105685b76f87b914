// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Extracted named entities.

use std::collections::BTreeSet;
use std::fmt;
use std::ops::{Add, Index, Range};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Half-open byte range `[start, end)` of a match in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Convert byte offsets in `text` to character offsets.
    ///
    /// Returns `None` if either offset is out of bounds or not on a char
    /// boundary.
    pub fn to_char_span(&self, text: &str) -> Option<Span> {
        if !text.is_char_boundary(self.start) || !text.is_char_boundary(self.end) {
            return None;
        }
        let start = text.get(..self.start)?.chars().count();
        let len = text.get(self.start..self.end)?.chars().count();
        Some(Span::new(start, start + len))
    }
}

impl From<(usize, usize)> for Span {
    fn from((start, end): (usize, usize)) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A term match: which term, in which group, where.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawEntity")]
pub struct NamedEntity {
    name: String,
    entity: String,
    string: String,
    span: Span,
}

impl NamedEntity {
    pub(crate) fn new(name: &str, entity: &str, string: &str, span: Span) -> Self {
        Self {
            name: name.to_string(),
            entity: entity.to_string(),
            string: string.to_string(),
            span,
        }
    }

    /// Term name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entity group name.
    pub fn entity(&self) -> &str {
        &self.entity
    }

    /// Matched text.
    pub fn string(&self) -> &str {
        &self.string
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn start(&self) -> usize {
        self.span.start
    }

    pub fn end(&self) -> usize {
        self.span.end
    }
}

impl fmt::Display for NamedEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NamedEntity(name={:?}, entity={:?}, string={:?}, span=({}, {}))",
            self.name, self.entity, self.string, self.span.start, self.span.end
        )
    }
}

/// Unchecked entity shape used while deserializing.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawEntity {
    name: String,
    entity: String,
    string: String,
    span: Span,
}

impl TryFrom<RawEntity> for NamedEntity {
    type Error = String;

    fn try_from(raw: RawEntity) -> std::result::Result<Self, String> {
        if raw.span.start > raw.span.end {
            return Err(format!("span {} starts after it ends", raw.span));
        }
        if raw.span.len() != raw.string.len() {
            return Err(format!(
                "span {} does not cover {} bytes of {:?}",
                raw.span,
                raw.string.len(),
                raw.string
            ));
        }
        Ok(Self {
            name: raw.name,
            entity: raw.entity,
            string: raw.string,
            span: raw.span,
        })
    }
}

impl TryFrom<serde_json::Value> for NamedEntity {
    type Error = Error;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        let found = describe(&value);
        serde_json::from_value(value).map_err(|e| Error::ListType {
            found: format!("{found} ({e})"),
        })
    }
}

fn describe(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Ordered list of named entities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamedEntityList {
    entities: Vec<NamedEntity>,
}

impl NamedEntityList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, entity: NamedEntity) {
        self.entities.push(entity);
    }

    /// Append every entity from another list or any entity iterator.
    pub fn extend<I>(&mut self, entities: I)
    where
        I: IntoIterator<Item = NamedEntity>,
    {
        self.entities.extend(entities);
    }

    /// Append an untyped value, rejecting anything that is not an entity.
    pub fn append_value(&mut self, value: serde_json::Value) -> Result<()> {
        self.entities.push(NamedEntity::try_from(value)?);
        Ok(())
    }

    /// Append untyped values. Nothing is appended unless all are entities.
    pub fn extend_values<I>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = serde_json::Value>,
    {
        let checked = values
            .into_iter()
            .map(NamedEntity::try_from)
            .collect::<Result<Vec<_>>>()?;
        self.entities.extend(checked);
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&NamedEntity> {
        self.entities.get(index)
    }

    /// Sub-list for a range of positions.
    pub fn slice(&self, range: Range<usize>) -> Option<Self> {
        self.entities.get(range).map(|s| Self {
            entities: s.to_vec(),
        })
    }

    /// Sub-list of the given positions, in the given order.
    ///
    /// Positions may repeat. Returns `None` if any is out of range.
    pub fn select(&self, indices: &[usize]) -> Option<Self> {
        indices
            .iter()
            .map(|&i| self.entities.get(i).cloned())
            .collect::<Option<Vec<_>>>()
            .map(|entities| Self { entities })
    }

    /// Distinct entity group names.
    pub fn unique_entities(&self) -> BTreeSet<&str> {
        self.entities.iter().map(|e| e.entity()).collect()
    }

    /// Distinct term names.
    pub fn unique_names(&self) -> BTreeSet<&str> {
        self.entities.iter().map(|e| e.name()).collect()
    }

    /// Stable in-place sort by `key`, descending when `reverse` is set.
    pub fn sort_by_key<K, F>(&mut self, mut key: F, reverse: bool)
    where
        F: FnMut(&NamedEntity) -> K,
        K: Ord,
    {
        if reverse {
            self.entities.sort_by(|a, b| key(b).cmp(&key(a)));
        } else {
            self.entities.sort_by(|a, b| key(a).cmp(&key(b)));
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NamedEntity> {
        self.entities.iter()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn as_slice(&self) -> &[NamedEntity] {
        &self.entities
    }
}

impl From<Vec<NamedEntity>> for NamedEntityList {
    fn from(entities: Vec<NamedEntity>) -> Self {
        Self { entities }
    }
}

impl FromIterator<NamedEntity> for NamedEntityList {
    fn from_iter<I: IntoIterator<Item = NamedEntity>>(iter: I) -> Self {
        Self {
            entities: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for NamedEntityList {
    type Item = NamedEntity;
    type IntoIter = std::vec::IntoIter<NamedEntity>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.into_iter()
    }
}

impl<'a> IntoIterator for &'a NamedEntityList {
    type Item = &'a NamedEntity;
    type IntoIter = std::slice::Iter<'a, NamedEntity>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}

impl Index<usize> for NamedEntityList {
    type Output = NamedEntity;

    fn index(&self, index: usize) -> &NamedEntity {
        &self.entities[index]
    }
}

impl Add for NamedEntityList {
    type Output = NamedEntityList;

    fn add(mut self, other: NamedEntityList) -> NamedEntityList {
        self.entities.extend(other.entities);
        self
    }
}

impl Add<&NamedEntityList> for &NamedEntityList {
    type Output = NamedEntityList;

    fn add(self, other: &NamedEntityList) -> NamedEntityList {
        self.iter().chain(other.iter()).cloned().collect()
    }
}

impl fmt::Display for NamedEntityList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entities.is_empty() {
            return f.write_str("NamedEntityList([])");
        }
        writeln!(f, "NamedEntityList(")?;
        for (i, entity) in self.entities.iter().enumerate() {
            writeln!(f, "    [{i}] {entity}")?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
#[path = "entity_tests.rs"]
mod tests;
