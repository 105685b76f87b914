// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern config discovery.
//!
//! Walks from the current directory up to the git root looking for a
//! `nerb.{yaml,yml,toml,json}` file.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Config file names, in lookup order.
pub const CONFIG_NAMES: &[&str] = &["nerb.yaml", "nerb.yml", "nerb.toml", "nerb.json"];

/// Find a pattern config starting from `start_dir` and walking up to git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for name in CONFIG_NAMES {
            let config_path = current.join(name);
            if config_path.exists() {
                return Some(config_path);
            }
        }

        // Stop at git root
        if current.join(".git").exists() {
            return None;
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// Resolve config path from CLI arg, env var, or discovery.
///
/// Priority:
/// 1. CLI flag `-C`/`--config` (handled by clap with env = "NERB_CONFIG")
/// 2. Discovery from current directory up to git root
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<PathBuf> {
    match explicit {
        Some(path) => {
            if path.exists() {
                Ok(path.to_path_buf())
            } else {
                Err(Error::Config {
                    message: format!("config file not found: {}", path.display()),
                    path: Some(path.to_path_buf()),
                })
            }
        }
        None => find_config(cwd).ok_or_else(|| Error::Config {
            message: format!(
                "no pattern config found (looked for {} from {}); pass --config",
                CONFIG_NAMES.join(", "),
                cwd.display()
            ),
            path: None,
        }),
    }
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
