// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern configuration.
//!
//! A pattern config maps entity group names to term patterns:
//!
//! ```yaml
//! ARTIST:
//!   Pink Floyd: Pink\sFloyd
//!   Miles Davis: Miles\sDavis
//! GENRE:
//!   _flags: [IGNORECASE, MULTILINE]
//!   Jazz: (?:smooth\s)?jazz
//! ```
//!
//! Declaration order is significant and preserved for every format.

mod parse;

use std::path::Path;

use crate::error::{Error, Result};
use crate::pattern::RegexFlags;

pub use parse::FLAGS_KEY;

/// Matching flag directive for a group, as written in the config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagsDirective {
    /// A single flag token, e.g. `IGNORECASE`.
    Token(String),
    /// Flag tokens to combine.
    Tokens(Vec<String>),
    /// Tokens and bit values to combine, from a list holding both.
    Mixed(Vec<FlagsDirective>),
    /// Already-resolved flag bits.
    Bits(i64),
}

impl From<&str> for FlagsDirective {
    fn from(token: &str) -> Self {
        FlagsDirective::Token(token.to_string())
    }
}

impl From<Vec<&str>> for FlagsDirective {
    fn from(tokens: Vec<&str>) -> Self {
        FlagsDirective::Tokens(tokens.into_iter().map(String::from).collect())
    }
}

impl From<RegexFlags> for FlagsDirective {
    fn from(flags: RegexFlags) -> Self {
        FlagsDirective::Bits(i64::from(flags.bits()))
    }
}

/// A named term and its pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermConfig {
    name: String,
    pattern: String,
}

impl TermConfig {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

/// Terms of one entity group plus its optional flag directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupConfig {
    name: String,
    terms: Vec<TermConfig>,
    flags: Option<FlagsDirective>,
}

impl GroupConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            terms: Vec::new(),
            flags: None,
        }
    }

    /// Add a term, replacing the pattern of an existing term of that name.
    pub fn term(mut self, name: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.insert_term(name, pattern);
        self
    }

    /// Set the group's flag directive.
    pub fn flags(mut self, flags: impl Into<FlagsDirective>) -> Self {
        self.flags = Some(flags.into());
        self
    }

    pub fn insert_term(&mut self, name: impl Into<String>, pattern: impl Into<String>) {
        let term = TermConfig::new(name, pattern);
        match self.terms.iter_mut().find(|t| t.name == term.name) {
            Some(existing) => *existing = term,
            None => self.terms.push(term),
        }
    }

    pub fn set_flags(&mut self, flags: Option<FlagsDirective>) {
        self.flags = flags;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn terms(&self) -> &[TermConfig] {
        &self.terms
    }

    pub fn flag_directive(&self) -> Option<&FlagsDirective> {
        self.flags.as_ref()
    }
}

/// Ordered collection of entity group configs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternConfig {
    groups: Vec<GroupConfig>,
}

impl PatternConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a group, replacing an existing group of the same name.
    pub fn group(mut self, group: GroupConfig) -> Self {
        self.insert_group(group);
        self
    }

    pub fn insert_group(&mut self, group: GroupConfig) {
        match self.groups.iter_mut().find(|g| g.name == group.name) {
            Some(existing) => *existing = group,
            None => self.groups.push(group),
        }
    }

    pub fn groups(&self) -> &[GroupConfig] {
        &self.groups
    }

    pub fn get(&self, name: &str) -> Option<&GroupConfig> {
        self.groups.iter().find(|g| g.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut GroupConfig> {
        self.groups.iter_mut().find(|g| g.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Build from an already-parsed mapping.
    pub fn from_value(value: &serde_yaml::Value) -> Result<Self> {
        parse::parse_pattern_config(value)
    }

    /// Parse config text in the given format.
    pub fn parse(content: &str, format: ConfigFormat, path: Option<&Path>) -> Result<Self> {
        let value = format.parse_value(content).map_err(|message| Error::Config {
            message,
            path: path.map(Path::to_path_buf),
        })?;
        Self::from_value(&value)
    }

    /// Load a config file, choosing the format from its extension.
    pub fn load(path: &Path) -> Result<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        tracing::debug!("loading {:?} pattern config from {}", format, path.display());
        Self::parse(&content, format, Some(path))
    }
}

/// Supported config file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
    Json,
}

impl ConfigFormat {
    const EXTENSIONS: &'static [(&'static str, ConfigFormat)] = &[
        ("yaml", ConfigFormat::Yaml),
        ("yml", ConfigFormat::Yaml),
        ("toml", ConfigFormat::Toml),
        ("json", ConfigFormat::Json),
    ];

    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        ext.as_deref()
            .and_then(|ext| {
                Self::EXTENSIONS
                    .iter()
                    .find(|(e, _)| *e == ext)
                    .map(|(_, format)| *format)
            })
            .ok_or_else(|| Error::ConfigType {
                found: format!("'{}'", path.display()),
                expected: format!(
                    "a mapping or a path ending in {}",
                    Self::EXTENSIONS
                        .iter()
                        .map(|(e, _)| format!(".{e}"))
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            })
    }

    /// Parse text into an order-preserving value tree.
    fn parse_value(self, content: &str) -> std::result::Result<serde_yaml::Value, String> {
        match self {
            ConfigFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
