// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Term name to capture symbol mapping.

use std::collections::HashMap;

use super::CompileError;

/// Turn a term name into a valid capture group name.
///
/// Characters other than ASCII alphanumerics and `_` become `_`. A leading
/// `_` is added when the result would be empty or start with a digit.
pub fn sanitize_symbol(name: &str) -> String {
    let mut symbol: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if symbol.chars().next().is_none_or(|c| c.is_ascii_digit()) {
        symbol.insert(0, '_');
    }
    symbol
}

/// Bijection between a group's term names and their capture symbols.
///
/// Entries keep declaration order.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    entries: Vec<(String, String)>,
    by_name: HashMap<String, usize>,
    by_symbol: HashMap<String, usize>,
}

impl SymbolTable {
    /// Build the table for the given term names, failing on collisions.
    pub fn build<'a, I>(names: I) -> Result<Self, CompileError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut table = Self::default();
        for name in names {
            table.insert(name)?;
        }
        Ok(table)
    }

    fn insert(&mut self, name: &str) -> Result<(), CompileError> {
        let symbol = sanitize_symbol(name);
        if let Some(&idx) = self.by_symbol.get(&symbol) {
            return Err(CompileError::SymbolCollision {
                first: self.entries[idx].0.clone(),
                second: name.to_string(),
                symbol,
            });
        }
        let idx = self.entries.len();
        self.by_name.insert(name.to_string(), idx);
        self.by_symbol.insert(symbol.clone(), idx);
        self.entries.push((name.to_string(), symbol));
        Ok(())
    }

    pub fn symbol_for(&self, name: &str) -> Option<&str> {
        self.by_name
            .get(name)
            .map(|&idx| self.entries[idx].1.as_str())
    }

    pub fn name_for(&self, symbol: &str) -> Option<&str> {
        self.by_symbol
            .get(symbol)
            .map(|&idx| self.entries[idx].0.as_str())
    }

    /// Declaration index of a term name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// `(name, symbol)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, s)| (n.as_str(), s.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "symbol_tests.rs"]
mod tests;
