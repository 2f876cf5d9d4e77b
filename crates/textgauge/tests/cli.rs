//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

const FOX: &str = "The quick brown fox jumps over the lazy dog.";

/// Write `content` to `name` inside a fresh temp dir.
fn doc(name: &str, content: &str) -> (TempDir, String) {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join(name);
    std::fs::write(&path, content).unwrap();
    let path = path.to_str().unwrap().to_string();
    (tmp, path)
}

/// Run a command with `--json` and parse stdout.
fn json_output(args: &[&str]) -> Value {
    let output = cmd().args(args).arg("--json").output().unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Options:"));
}

#[test]
fn help_lists_scoring_commands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("readability"))
        .stdout(predicate::str::contains("tone"))
        .stdout(predicate::str::contains("plagiarism"))
        .stdout(predicate::str::contains("analyze"));
}

#[test]
fn long_help_lists_environment_variables() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("TEXTGAUGE_LOG_DIR"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn no_arguments_shows_help_and_fails() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let json = json_output(&["info"]);
    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["config"]["reference_corpus"].is_string());
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn quiet_flag_accepted() {
    cmd().args(["--quiet", "info"]).assert().success();
}

#[test]
fn multiple_verbose_flags_accepted() {
    cmd().args(["-vv", "info"]).assert().success();
}

#[test]
fn color_never_accepted() {
    cmd().args(["--color", "never", "info"]).assert().success();
}

#[test]
fn invalid_color_rejected() {
    cmd()
        .args(["--color", "plaid", "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

// =============================================================================
// Readability
// =============================================================================

#[test]
fn readability_json_classifies_short_sentence() {
    let (_tmp, path) = doc("short.txt", "The cat sat.");
    let json = json_output(&["readability", &path]);

    assert_eq!(json["summary"]["overall_readability"], "Very Easy");
    assert_eq!(json["summary"]["sentence_complexity"], "Simple");
    assert_eq!(json["summary"]["education_level"], "Elementary School");
    assert_eq!(json["raw_scores"]["gunning_fog_index"], 1.2);
    assert_eq!(json["counts"]["words"], 3);
}

#[test]
fn readability_text_output_shows_labels() {
    let (_tmp, path) = doc("short.txt", "The cat sat.");
    cmd()
        .args(["--color", "never", "readability", &path])
        .assert()
        .success()
        .stdout(predicate::str::contains("Very Easy"))
        .stdout(predicate::str::contains("Flesch Reading Ease"));
}

#[test]
fn readability_max_grade_passes_simple_text() {
    let (_tmp, path) = doc("short.txt", "The cat sat on the mat. The dog ran.");
    cmd()
        .args(["--color", "never", "readability", &path, "--max-grade", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS:"));
}

#[test]
fn readability_max_grade_fails_dense_text() {
    let (_tmp, path) = doc(
        "dense.txt",
        "The committee's comprehensive deliberations regarding international environmental regulations necessitated extraordinary administrative coordination.",
    );
    cmd()
        .args(["readability", &path, "--max-grade", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("averages grade"));
}

#[test]
fn readability_json_reports_max_grade_failure() {
    let (_tmp, path) = doc(
        "dense.txt",
        "The committee's comprehensive deliberations regarding international environmental regulations necessitated extraordinary administrative coordination.",
    );
    let output = cmd()
        .args(["--json", "readability", &path, "--max-grade", "1"])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).expect("invalid JSON output");
    assert_eq!(json["over_max"], true);
    assert_eq!(json["max_grade"], 1.0);
    assert!(json["raw_scores"]["average_grade"].as_f64().unwrap() > 1.0);
}

#[test]
fn readability_json_within_max_grade_succeeds() {
    let (_tmp, path) = doc("short.txt", "The cat sat on the mat. The dog ran.");
    let json = json_output(&["readability", &path, "--max-grade", "8"]);
    assert_eq!(json["over_max"], false);
    assert_eq!(json["summary"]["sentence_complexity"], "Simple");
}

#[test]
fn readability_strips_markdown() {
    let (_tmp, path) = doc(
        "notes.md",
        "# A Very Long Heading With Many Words\n\nThe cat sat.\n\n```\nlet value = compute_everything();\n```\n",
    );
    let json = json_output(&["readability", &path]);
    assert_eq!(json["counts"]["words"], 3);
    assert_eq!(json["counts"]["sentences"], 1);
}

#[test]
fn empty_file_is_rejected() {
    let (_tmp, path) = doc("empty.txt", "   \n\n");
    cmd()
        .args(["readability", &path])
        .assert()
        .failure()
        .stderr(predicate::str::contains("text must not be empty"));
}

#[test]
fn missing_file_is_reported() {
    cmd()
        .args(["readability", "/nonexistent/essay.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

// =============================================================================
// Tone
// =============================================================================

#[test]
fn tone_json_reports_negative_text() {
    let (_tmp, path) = doc(
        "review.txt",
        "The service was terrible and the food was awful.",
    );
    let json = json_output(&["tone", &path]);
    assert_eq!(json["summary"]["dominant_tone"], "Highly Negative");
    assert!(json["tone_value"].as_f64().unwrap() < -0.6);
    assert_eq!(json["truncated"], false);
}

#[test]
fn tone_text_output_shows_label() {
    let (_tmp, path) = doc("plain.txt", "The cat sat on the mat.");
    cmd()
        .args(["--color", "never", "tone", &path])
        .assert()
        .success()
        .stdout(predicate::str::contains("Neutral"));
}

// =============================================================================
// Plagiarism
// =============================================================================

#[test]
fn plagiarism_flags_reference_text() {
    let (_tmp, path) = doc("fox.txt", FOX);
    let json = json_output(&["plagiarism", &path]);
    assert_eq!(json["summary"]["plagiarism_score"], "100.0%");
    assert_eq!(json["summary"]["verdict"], "Flagged");
    assert_eq!(json["closest_reference"], FOX);
}

#[test]
fn plagiarism_text_output_shows_match_on_request() {
    let (_tmp, path) = doc("fox.txt", FOX);
    cmd()
        .args(["--color", "never", "plagiarism", &path, "--show-match"])
        .assert()
        .success()
        .stdout(predicate::str::contains("100.0%"))
        .stdout(predicate::str::contains("Closest reference:"));
}

// =============================================================================
// Analyze
// =============================================================================

#[test]
fn analyze_runs_every_check_by_default() {
    let (_tmp, path) = doc("essay.txt", "The cat sat on the mat. It was warm.");
    let json = json_output(&["analyze", &path]);

    assert!(json["readability"].is_object());
    assert!(json["tone"].is_object());
    assert!(json["plagiarism"].is_object());
    assert!(json["grammar"].is_object());
    assert!(json["metrics"]["flesch_reading_ease"].is_number());
    assert!(json["classification"]["overall_readability"].is_object());
}

#[test]
fn analyze_checks_limit_output() {
    let (_tmp, path) = doc("essay.txt", "The cat sat on the mat.");
    let json = json_output(&["analyze", &path, "--checks", "tone,plagiarism"]);

    assert!(json.get("readability").is_none());
    assert!(json.get("grammar").is_none());
    assert!(json["tone"].is_object());
    assert!(json["plagiarism"].is_object());
}

#[test]
fn analyze_reports_grammar_issues() {
    let (_tmp, path) = doc("essay.txt", "He are late. They was early.");
    let json = json_output(&["analyze", &path, "--checks", "grammar"]);
    let issues = json["grammar"]["issues"].as_array().unwrap();
    assert!(issues.len() >= 2);
    assert_eq!(issues[0]["kind"], "subject_verb_agreement");
}

#[test]
fn unknown_check_name_fails() {
    let (_tmp, path) = doc("essay.txt", "The cat sat on the mat.");
    cmd()
        .args(["analyze", &path, "--checks", "readablity"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn analyze_text_output_has_sections() {
    let (_tmp, path) = doc("essay.txt", "The cat sat on the mat.");
    cmd()
        .args(["--color", "never", "analyze", &path])
        .assert()
        .success()
        .stdout(predicate::str::contains("Readability:"))
        .stdout(predicate::str::contains("Tone:"))
        .stdout(predicate::str::contains("Similarity:"))
        .stdout(predicate::str::contains("Grammar:"));
}

#[test]
fn output_is_deterministic() {
    let (_tmp, path) = doc(
        "essay.txt",
        "Writing clearly is hard. Good editors help a great deal, and practice helps more.",
    );
    let first = json_output(&["analyze", &path]);
    let second = json_output(&["analyze", &path]);
    assert_eq!(first, second);
}
