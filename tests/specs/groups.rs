//! Specs for `nerb groups`.

use crate::prelude::*;

#[test]
fn lists_terms_with_group_flags() {
    let run = groups().on("music").passes();
    let stdout = run.stdout();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 15);
    assert_eq!(lines[0], "ARTIST\tIGNORECASE\tCoheed");
    assert_eq!(lines[10], "ARTIST\tIGNORECASE\tThe Who");
    assert_eq!(lines[14], "GENRE\tIGNORECASE\tRock");
}

#[test]
fn json_lists_groups_in_declaration_order() {
    let run = groups().on("music").json().passes();
    let json = run.json();
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["ARTIST", "GENRE"]);
    assert_eq!(json[1]["terms"][0], "Hip Hop");
}

#[test]
fn explicit_empty_flags_show_none() {
    let temp = Project::with_config("GENRE:\n  _flags: []\n  Rock: rock\n");
    groups()
        .pwd(temp.path())
        .passes()
        .stdout_eq("GENRE\tNONE\tRock\n");
}

#[test]
fn combined_flags_are_listed() {
    let temp = Project::with_config("GENRE:\n  _flags: [I, X]\n  Rock: rock\n");
    groups()
        .pwd(temp.path())
        .passes()
        .stdout_eq("GENRE\tIGNORECASE|VERBOSE\tRock\n");
}
