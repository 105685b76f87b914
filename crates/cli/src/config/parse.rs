// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parse helper functions for pattern configuration.

use serde_yaml::Value;

use super::{FlagsDirective, GroupConfig, PatternConfig};
use crate::error::{Error, Result};

/// Reserved group key carrying the group's matching flags.
pub const FLAGS_KEY: &str = "_flags";

/// Describe a value's type for error messages.
fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "list",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

/// Render a mapping key as a name.
fn key_name(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn type_error(what: String, value: &Value, expected: &str) -> Error {
    Error::ConfigType {
        found: format!("{} ({})", what, type_name(value)),
        expected: expected.to_string(),
    }
}

/// Parse a full pattern config from a value tree.
pub(super) fn parse_pattern_config(value: &Value) -> Result<PatternConfig> {
    let Value::Mapping(groups) = value else {
        return Err(type_error(
            "pattern config".to_string(),
            value,
            "a mapping of entity groups",
        ));
    };

    let mut config = PatternConfig::new();
    for (key, group) in groups {
        let name = key_name(key).ok_or_else(|| {
            type_error("entity group key".to_string(), key, "a string")
        })?;
        config.insert_group(parse_group_config(&name, group)?);
    }
    Ok(config)
}

/// Parse one entity group mapping, pulling out the flags directive.
fn parse_group_config(name: &str, value: &Value) -> Result<GroupConfig> {
    let Value::Mapping(terms) = value else {
        return Err(type_error(
            format!("entity group '{name}'"),
            value,
            "a mapping of term names to patterns",
        ));
    };

    let mut group = GroupConfig::new(name);
    for (key, pattern) in terms {
        let term = key_name(key).ok_or_else(|| {
            type_error(format!("term key in '{name}'"), key, "a string")
        })?;
        if term == FLAGS_KEY {
            group.set_flags(Some(parse_flags_directive(name, pattern)?));
            continue;
        }
        let Value::String(pattern) = pattern else {
            return Err(type_error(
                format!("pattern for '{name}.{term}'"),
                pattern,
                "a string",
            ));
        };
        group.insert_term(term, pattern.as_str());
    }
    Ok(group)
}

/// Parse a `_flags` value: a token, an integer, or a list of either.
fn parse_flags_directive(group: &str, value: &Value) -> Result<FlagsDirective> {
    let expected = "a flag name, an integer, or a list of flag names and integers";
    let what = || format!("'{FLAGS_KEY}' of '{group}'");
    let scalar = |item: &Value| match item {
        Value::String(token) => Ok(FlagsDirective::Token(token.clone())),
        Value::Number(n) => n
            .as_i64()
            .map(FlagsDirective::Bits)
            .ok_or_else(|| type_error(what(), item, expected)),
        other => Err(type_error(what(), other, expected)),
    };
    match value {
        Value::Sequence(items) => {
            let items = items.iter().map(scalar).collect::<Result<Vec<_>>>()?;
            let tokens: Option<Vec<String>> = items
                .iter()
                .map(|item| match item {
                    FlagsDirective::Token(token) => Some(token.clone()),
                    _ => None,
                })
                .collect();
            Ok(match tokens {
                Some(tokens) => FlagsDirective::Tokens(tokens),
                None => FlagsDirective::Mixed(items),
            })
        }
        other => scalar(other),
    }
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
