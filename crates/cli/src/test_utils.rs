// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared unit test utilities.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;

use tempfile::TempDir;

use crate::config::{GroupConfig, PatternConfig};

/// Music vocabulary used across unit tests.
pub fn music_config() -> PatternConfig {
    PatternConfig::new()
        .group(
            GroupConfig::new("ARTIST")
                .term("Coheed", r"Coheed(?:\s(?:and|\&)\sCambria)?")
                .term("Dream Theater", r"Dream\sTheater")
                .term("Foo Fighters", r"Foo\sFighters")
                .term(
                    "The Grateful Dead",
                    r"(?:[Tt]he\s)?Grateful\sDead|[Tt]he\sWarlocks",
                )
                .term("Incubus", r"Incubus")
                .term("Jay Z", r"Jay(?:\s|-)Z|Shawn(?:\sCorey)?\sCarter")
                .term("Mars Volta", r"Mars\sVolta")
                .term("Miles Davis", r"Miles\sDavis")
                .term("Pink Floyd", r"Pink\sFloyd")
                .term("Thelonious Monk", r"Thelonious\sMonk")
                .term("The Who", r"[Tt]he\sWho"),
        )
        .group(
            GroupConfig::new("GENRE")
                .flags("IGNORECASE")
                .term("Hip Hop", r"rap|hip\shop")
                .term("Jazz", r"(?:smooth\s)?jazz")
                .term("Pop", r"pop(?:ular)?")
                .term(
                    "Rock",
                    r"(?:(?:prog(?:ressive)?|alternative|punk)\s)?rock|rock\s(?:and|\&|n)\sroll",
                ),
        )
}

/// Text mentioning several artists and genres.
pub const MUSIC_TEXT: &str = "Miles Davis is my favorite jazz artist. \
     Incubus is great, but I like progressive rock and am a big fan of Coheed.";

/// Creates a temp directory holding a pattern config file.
pub fn temp_config(file_name: &str, content: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(file_name), content).unwrap();
    dir
}
