// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern compilation for entity groups.
//!
//! Each entity group becomes one `regex::Regex`:
//! - flags resolved from the group's `_flags` directive
//! - term names mapped to capture symbols through a bijection
//! - word boundaries injected at top-level alternations
//! - terms joined as named alternatives in declaration order

pub mod boundary;
pub mod compiler;
pub mod flags;
pub mod symbol;

pub use boundary::{ascii_perl_classes, inject_ascii_word_boundaries, inject_word_boundaries};
pub use compiler::{CompileError, CompiledEntityGroup};
pub use flags::RegexFlags;
pub use symbol::{SymbolTable, sanitize_symbol};
