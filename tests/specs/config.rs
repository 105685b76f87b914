//! Specs for pattern config discovery and loading.

use crate::prelude::*;

const NOTES_GENRES: &str = "GENRE\tJazz\t27\t31\tjazz\nGENRE\tRock\t69\t85\tprogressive rock\n";

#[test]
fn toml_config_is_discovered() {
    extract()
        .on("music-toml")
        .args(&["-g", "GENRE", "notes.txt"])
        .passes()
        .stdout_eq(NOTES_GENRES);
}

#[test]
fn json_config_is_discovered() {
    extract()
        .on("music-json")
        .args(&["-g", "GENRE", "notes.txt"])
        .passes()
        .stdout_eq(NOTES_GENRES);
}

#[test]
fn config_found_in_ancestor_directory() {
    let temp = Project::with_config("GENRE:\n  Jazz: jazz\n");
    temp.file("deep/nested/.keep", "");
    extract()
        .pwd(temp.path().join("deep/nested"))
        .stdin("jazz")
        .passes()
        .stdout_eq("GENRE\tJazz\t0\t4\tjazz\n");
}

#[test]
fn explicit_config_flag_wins() {
    let temp = Project::with_config("GENRE:\n  Jazz: jazz\n");
    temp.file("other.yaml", "MOOD:\n  Calm: calm\n");
    extract()
        .pwd(temp.path())
        .args(&["-C", "other.yaml"])
        .stdin("calm jazz")
        .passes()
        .stdout_eq("MOOD\tCalm\t0\t4\tcalm\n");
}

#[test]
fn config_env_var_sets_path() {
    let temp = Project::empty();
    temp.file("vocab/moods.json", r#"{"MOOD": {"Calm": "calm"}}"#);
    let config = temp.path().join("vocab/moods.json");
    groups()
        .pwd(temp.path())
        .env("NERB_CONFIG", config.to_str().unwrap())
        .passes()
        .stdout_eq("MOOD\tIGNORECASE\tCalm\n");
}

#[test]
fn missing_config_is_config_error() {
    let temp = Project::empty();
    groups()
        .pwd(temp.path())
        .exits(2)
        .stderr_has("no pattern config found");
}

#[test]
fn missing_explicit_config_is_config_error() {
    let temp = Project::empty();
    groups()
        .pwd(temp.path())
        .args(&["--config", "nope.yaml"])
        .exits(2)
        .stderr_has("nope.yaml");
}

#[test]
fn unknown_extension_is_rejected() {
    let temp = Project::empty();
    temp.file("vocab.ini", "[GENRE]\n");
    groups()
        .pwd(temp.path())
        .args(&["-C", "vocab.ini"])
        .exits(2)
        .stderr_has("not a valid pattern config");
}

#[test]
fn unparseable_yaml_is_config_error() {
    let temp = Project::with_config("GENRE: [unclosed\n");
    groups().pwd(temp.path()).exits(2).stderr_has("config error");
}

#[test]
fn non_string_pattern_is_rejected() {
    let temp = Project::with_config("GENRE:\n  Jazz: 42\n");
    groups().pwd(temp.path()).exits(2);
}

#[test]
fn invalid_flag_names_group() {
    let temp = Project::with_config("GENRE:\n  _flags: LOUD\n  Rock: rock\n");
    groups()
        .pwd(temp.path())
        .exits(2)
        .stderr_has("failed to compile entity group 'GENRE'");
}

#[test]
fn invalid_regex_names_group() {
    let temp = Project::with_config("GENRE:\n  Rock: 'ro(ck'\n");
    groups()
        .pwd(temp.path())
        .exits(2)
        .stderr_has("failed to compile entity group 'GENRE'");
}

#[test]
fn empty_group_fails_to_compile() {
    let temp = Project::with_config("GENRE: {}\n");
    groups()
        .pwd(temp.path())
        .exits(2)
        .stderr_has("'GENRE'");
}

#[test]
fn symbol_collision_fails_to_compile() {
    let temp = Project::with_config("GENRE:\n  Hip Hop: rap\n  Hip-Hop: hiphop\n");
    groups()
        .pwd(temp.path())
        .exits(2)
        .stderr_has("failed to compile entity group 'GENRE'");
}

/// NERB_LOG enables debug logging to stderr
#[test]
fn log_env_enables_debug_output() {
    groups()
        .on("music")
        .env("NERB_LOG", "debug")
        .passes()
        .stderr_has("DEBUG");
}

#[test]
fn logging_is_off_by_default() {
    groups()
        .on("music")
        .passes()
        .stderr_has(predicates::str::is_empty());
}
