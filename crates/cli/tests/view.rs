//! End-to-end tests for the offline `view` subcommand.

use assert_cmd::Command;
use predicates::str::contains;
use std::fs;

const RECORDS: &str = r#"[
    {"caseName": "Roe v. Wade", "court": "Supreme Court",
     "dateFiled": "1973-01-22", "wordCount": 12345,
     "pdfUrl": "https://example.org/roe.pdf",
     "text": "The plaintiffs lack standing.\n\nUnrelated closing text."},
    {"caseName": "Smith v. Jones", "court": "Ninth Circuit",
     "syllabus": "Certification under Rule 23 is reviewed."}
]"#;

#[test]
fn view_renders_a_static_case_page() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("records.json");
    let output = dir.path().join("cases.html");
    fs::write(&input, RECORDS).unwrap();

    Command::cargo_bin("courtfinder")
        .unwrap()
        .args(["view", input.to_str().unwrap(), "-o", output.to_str().unwrap()])
        .assert()
        .success()
        .stdout(contains("Wrote"));

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("<li class=\"case-item active\" data-index=\"0\">"));
    assert!(html.contains("<span class=\"pdf-badge\">PDF</span>"));
    assert!(html.contains("highlight-injury"));
    assert!(html.contains("12,345 words"));
    assert!(html.contains("2 cases"));
}

#[test]
fn view_filter_hides_non_matching_rows_but_keeps_selection_detail() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("records.json");
    let output = dir.path().join("cases.html");
    fs::write(&input, RECORDS).unwrap();

    Command::cargo_bin("courtfinder")
        .unwrap()
        .args([
            "view",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "--query",
            "smith",
        ])
        .assert()
        .success();

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("Smith v. Jones"));
    // Row 0 is filtered out of the list, but the detail pane still shows it.
    assert!(!html.contains("data-index=\"0\""));
    assert!(html.contains("The plaintiffs lack standing."));
}

#[test]
fn view_surfaces_a_load_error_for_malformed_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("records.json");
    let output = dir.path().join("cases.html");
    fs::write(&input, "{\"not\": \"an array\"}").unwrap();

    Command::cargo_bin("courtfinder")
        .unwrap()
        .args(["view", input.to_str().unwrap(), "-o", output.to_str().unwrap()])
        .assert()
        .success();

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("Failed to load cases"));
    assert!(!html.contains("<li class=\"case-item"));
}
