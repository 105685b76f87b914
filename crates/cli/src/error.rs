// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use crate::pattern::CompileError;

/// Nerb error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Pattern config is neither a mapping nor a recognized file reference
    #[error("{found} is not a valid pattern config: expected {expected}")]
    ConfigType { found: String, expected: String },

    /// Config file could not be parsed
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Entity group was never declared
    #[error("unknown entity group '{group}' (allowed values: {})", join(.valid))]
    UnknownGroup { group: String, valid: Vec<String> },

    /// Term is not declared in the entity group
    #[error("'{term}' is not a valid term for '{group}' (allowed values: {})", join(.valid))]
    UnknownTerm {
        group: String,
        term: String,
        valid: Vec<String>,
    },

    /// Isolation method outside search/finditer/findall
    #[error("'{method}' is not a valid method (allowed values: {})", .valid.join(", "))]
    UnknownMethod {
        method: String,
        valid: &'static [&'static str],
    },

    /// Value handed to a `NamedEntityList` is not a named entity
    #[error("NamedEntityList holds NamedEntity values, got {found}")]
    ListType { found: String },

    /// Entity group failed to compile
    #[error("failed to compile entity group '{group}': {source}")]
    Compilation {
        group: String,
        #[source]
        source: CompileError,
    },

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type using nerb Error
pub type Result<T> = std::result::Result<T, Error>;

fn join(values: &[String]) -> String {
    values.join(", ")
}

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Isolation found no match
    NoMatch = 1,
    /// Configuration or argument error
    ConfigError = 2,
    /// Internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::ConfigType { .. }
            | Error::Config { .. }
            | Error::Compilation { .. }
            | Error::UnknownGroup { .. }
            | Error::UnknownTerm { .. }
            | Error::UnknownMethod { .. }
            | Error::Argument(_) => ExitCode::ConfigError,
            Error::ListType { .. } | Error::Io { .. } => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
