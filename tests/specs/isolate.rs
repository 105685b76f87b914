//! Specs for `nerb isolate`.

use crate::prelude::*;

#[test]
fn search_prints_first_match() {
    isolate("GENRE", "Rock")
        .on("music")
        .args(&["notes.txt"])
        .passes()
        .stdout_eq("Rock\t69\t85\tprogressive rock\n");
}

#[test]
fn finditer_prints_every_match() {
    isolate("ARTIST", "The Grateful Dead")
        .on("music")
        .args(&["--method", "finditer", "reviews.txt"])
        .passes()
        .stdout_eq(
            "The Grateful Dead\t35\t52\tThe Grateful Dead\nThe Grateful Dead\t63\t75\tthe Warlocks\n",
        );
}

#[test]
fn findall_prints_capture_rows() {
    isolate("GENRE", "Jazz")
        .on("music")
        .args(&["-m", "findall", "notes.txt"])
        .passes()
        .stdout_eq("\tjazz\t\t\n");
}

/// No match exits 1 with empty output
#[test]
fn absent_term_exits_no_match() {
    isolate("GENRE", "Hip Hop")
        .on("music")
        .args(&["notes.txt"])
        .exits(1)
        .stdout_eq("");
}

#[test]
fn absent_term_json_result_is_null() {
    let run = isolate("ARTIST", "Pink Floyd")
        .on("music")
        .args(&["-m", "finditer", "notes.txt"])
        .json()
        .exits(1);
    let json = run.json();
    assert_eq!(json["group"], "ARTIST");
    assert_eq!(json["term"], "Pink Floyd");
    assert_eq!(json["method"], "finditer");
    assert!(json["result"].is_null());
}

#[test]
fn json_search_result_has_span() {
    let run = isolate("ARTIST", "Incubus")
        .on("music")
        .args(&["notes.txt"])
        .json()
        .passes();
    let json = run.json();
    assert_eq!(json["result"]["string"], "Incubus");
    assert_eq!(json["result"]["span"]["start"], 40);
    assert_eq!(json["result"]["span"]["end"], 47);
}

#[test]
fn reads_stdin_without_path() {
    isolate("GENRE", "Pop")
        .on("music")
        .stdin("I like popular music")
        .passes()
        .stdout_eq("Pop\t7\t14\tpopular\n");
}

#[test]
fn unknown_term_lists_valid_terms() {
    isolate("GENRE", "Polka")
        .on("music")
        .args(&["notes.txt"])
        .exits(2)
        .stderr_has("'Polka' is not a valid term for 'GENRE'")
        .stderr_has("Hip Hop, Jazz, Pop, Rock");
}

#[test]
fn unknown_method_lists_valid_methods() {
    isolate("GENRE", "Rock")
        .on("music")
        .args(&["-m", "match", "notes.txt"])
        .exits(2)
        .stderr_has("search, finditer, findall");
}

#[test]
fn unknown_group_exits_with_config_error() {
    isolate("SONG", "Rock")
        .on("music")
        .args(&["notes.txt"])
        .exits(2)
        .stderr_has("unknown entity group 'SONG'");
}
