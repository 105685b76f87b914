// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Named entity extraction from hand-written regex vocabularies.
//!
//! A pattern config groups term patterns by entity; each group compiles to
//! one regex whose named captures identify the term that matched.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod entity;
pub mod error;
pub mod extract;
pub mod isolate;
pub mod output;
pub mod pattern;
pub mod recognizer;

pub use config::{ConfigFormat, FlagsDirective, GroupConfig, PatternConfig, TermConfig};
pub use entity::{NamedEntity, NamedEntityList, Span};
pub use error::{Error, ExitCode, Result};
pub use isolate::{IsolateMethod, Isolated, TermMatch};
pub use pattern::{CompileError, CompiledEntityGroup, RegexFlags};
pub use recognizer::Nerb;

#[cfg(test)]
pub mod test_utils;
