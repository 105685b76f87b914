// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Matching flags for an entity group.
//!
//! Flag values use the conventional regex flag numbering so that integer
//! directives written for other tools keep their meaning.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use regex::RegexBuilder;

use super::CompileError;
use crate::config::FlagsDirective;

/// Resolved set of matching flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegexFlags(u32);

/// Token names and the flag each one sets.
const TOKENS: &[(&str, &str, RegexFlags)] = &[
    ("IGNORECASE", "I", RegexFlags::IGNORECASE),
    ("MULTILINE", "M", RegexFlags::MULTILINE),
    ("DOTALL", "S", RegexFlags::DOTALL),
    ("UNICODE", "U", RegexFlags::UNICODE),
    ("VERBOSE", "X", RegexFlags::VERBOSE),
    ("ASCII", "A", RegexFlags::ASCII),
];

impl RegexFlags {
    pub const NONE: Self = Self(0);
    pub const IGNORECASE: Self = Self(2);
    pub const MULTILINE: Self = Self(8);
    pub const DOTALL: Self = Self(16);
    /// Unicode matching is the engine default; accepted for compatibility.
    pub const UNICODE: Self = Self(32);
    pub const VERBOSE: Self = Self(64);
    /// Perl classes and word boundaries match ASCII only. Applied by
    /// rewriting the pattern, not through the builder.
    pub const ASCII: Self = Self(256);

    const ALL: u32 = 2 | 8 | 16 | 32 | 64 | 256;

    /// Raw flag bits.
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Build from raw bits, rejecting bits with no meaning here.
    pub fn from_bits(bits: i64) -> Result<Self, CompileError> {
        match u32::try_from(bits) {
            Ok(b) if b & !Self::ALL == 0 => Ok(Self(b)),
            _ => Err(CompileError::InvalidFlagBits {
                bits,
                valid: valid_tokens(),
            }),
        }
    }

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Parse a single flag token such as `IGNORECASE` or `i`.
    pub fn parse_token(token: &str) -> Result<Self, CompileError> {
        let upper = token.trim().to_ascii_uppercase();
        TOKENS
            .iter()
            .find(|(long, short, _)| upper == *long || upper == *short)
            .map(|(_, _, flag)| *flag)
            .ok_or_else(|| CompileError::InvalidFlag {
                token: token.to_string(),
                valid: valid_tokens(),
            })
    }

    /// Resolve a group's flag directive.
    ///
    /// An absent directive means case-insensitive matching.
    pub fn resolve(directive: Option<&FlagsDirective>) -> Result<Self, CompileError> {
        match directive {
            None => Ok(Self::IGNORECASE),
            Some(FlagsDirective::Bits(bits)) => Self::from_bits(*bits),
            Some(FlagsDirective::Token(token)) => Self::parse_token(token),
            Some(FlagsDirective::Tokens(tokens)) => tokens
                .iter()
                .try_fold(Self::NONE, |acc, t| -> Result<Self, CompileError> {
                    Ok(acc | Self::parse_token(t)?)
                }),
            Some(FlagsDirective::Mixed(items)) => items
                .iter()
                .try_fold(Self::NONE, |acc, item| -> Result<Self, CompileError> {
                    Ok(acc | Self::resolve(Some(item))?)
                }),
        }
    }

    /// Apply these flags to a regex builder.
    pub fn apply(self, builder: &mut RegexBuilder) {
        builder
            .case_insensitive(self.contains(Self::IGNORECASE))
            .multi_line(self.contains(Self::MULTILINE))
            .dot_matches_new_line(self.contains(Self::DOTALL))
            .ignore_whitespace(self.contains(Self::VERBOSE));
    }
}

impl Default for RegexFlags {
    fn default() -> Self {
        Self::IGNORECASE
    }
}

impl BitOr for RegexFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for RegexFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for RegexFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = TOKENS
            .iter()
            .filter(|(_, _, flag)| self.contains(*flag))
            .map(|(long, _, _)| *long)
            .collect();
        if names.is_empty() {
            f.write_str("NONE")
        } else {
            f.write_str(&names.join("|"))
        }
    }
}

fn valid_tokens() -> Vec<String> {
    TOKENS.iter().map(|(long, _, _)| long.to_string()).collect()
}

#[cfg(test)]
#[path = "flags_tests.rs"]
mod tests;
