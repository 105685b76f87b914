//! Specs for `nerb extract`.

use crate::prelude::*;

const NOTES_ALL: &str = "\
ARTIST\tMiles Davis\t0\t11\tMiles Davis
GENRE\tJazz\t27\t31\tjazz
ARTIST\tIncubus\t40\t47\tIncubus
GENRE\tRock\t69\t85\tprogressive rock
ARTIST\tCoheed\t106\t112\tCoheed
";

/// Without --group every group is extracted, merged by position
#[test]
fn extracts_all_groups_in_text_order() {
    extract().on("music").args(&["notes.txt"]).passes().stdout_eq(NOTES_ALL);
}

#[test]
fn extracts_single_group() {
    extract()
        .on("music")
        .args(&["--group", "GENRE", "notes.txt"])
        .passes()
        .stdout_eq("GENRE\tJazz\t27\t31\tjazz\nGENRE\tRock\t69\t85\tprogressive rock\n");
}

#[test]
fn multiple_inputs_are_labelled_and_keep_argument_order() {
    extract()
        .on("music")
        .args(&["-g", "ARTIST", "notes.txt", "reviews.txt"])
        .passes()
        .stdout_eq(
            "\
notes.txt\tARTIST\tMiles Davis\t0\t11\tMiles Davis
notes.txt\tARTIST\tIncubus\t40\t47\tIncubus
notes.txt\tARTIST\tCoheed\t106\t112\tCoheed
reviews.txt\tARTIST\tDream Theater\t0\t13\tDream Theater
reviews.txt\tARTIST\tThe Grateful Dead\t35\t52\tThe Grateful Dead
reviews.txt\tARTIST\tThe Grateful Dead\t63\t75\tthe Warlocks
",
        );
}

#[test]
fn reads_stdin_without_paths() {
    extract()
        .on("music")
        .args(&["-g", "GENRE"])
        .stdin("rap and rock n roll")
        .passes()
        .stdout_eq("GENRE\tHip Hop\t0\t3\trap\nGENRE\tRock\t8\t12\trock\n");
}

#[test]
fn empty_input_prints_nothing() {
    extract().on("music").stdin("").passes().stdout_eq("");
}

#[test]
fn json_output_is_one_document() {
    let run = extract().on("music").args(&["notes.txt"]).json().passes();
    let json = run.json();
    let input = &json["inputs"][0];
    assert_eq!(input["source"], "notes.txt");
    let entities = input["entities"].as_array().unwrap();
    assert_eq!(entities.len(), 5);
    assert_eq!(entities[3]["name"], "Rock");
    assert_eq!(entities[3]["entity"], "GENRE");
    assert_eq!(entities[3]["string"], "progressive rock");
    assert_eq!(entities[3]["span"]["start"], 69);
    assert_eq!(entities[3]["span"]["end"], 85);
}

#[test]
fn json_stdin_source_is_dash() {
    let run = extract().on("music").stdin("jazz").json().passes();
    assert_eq!(run.json()["inputs"][0]["source"], "-");
}

/// Word boundaries keep terms from matching inside longer words
#[test]
fn word_boundaries_on_by_default() {
    extract()
        .on("music")
        .args(&["-g", "GENRE"])
        .stdin("progrock and rocky")
        .passes()
        .stdout_eq("");
}

#[test]
fn no_word_boundaries_matches_inside_words() {
    extract()
        .on("music")
        .args(&["-g", "GENRE", "--no-word-boundaries"])
        .stdin("progrock")
        .passes()
        .stdout_eq("GENRE\tRock\t4\t8\trock\n");
}

#[test]
fn unknown_group_exits_with_config_error() {
    extract()
        .on("music")
        .args(&["-g", "SONG", "notes.txt"])
        .exits(2)
        .stderr_has("unknown entity group 'SONG'")
        .stderr_has("ARTIST, GENRE");
}

#[test]
fn missing_input_file_is_internal_error() {
    extract()
        .on("music")
        .args(&["missing.txt"])
        .exits(3)
        .stderr_has("missing.txt");
}
