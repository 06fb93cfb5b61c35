// postwash/tests/cli_integration_tests.rs
//! Command-line integration tests for the `postwash` binary.
//!
//! These execute the real executable with `assert_cmd`, feeding drafts via
//! stdin or temporary files and asserting on stdout, stderr, and exit status.
//! `tempfile` keeps the file-based tests isolated.

use anyhow::Result;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

use assert_cmd::Command;

/// Helper to run the `postwash` binary with stdin input and arguments.
fn run_postwash(input: &str, args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = Command::cargo_bin("postwash").unwrap();
    cmd.args(args);
    cmd.write_stdin(input.as_bytes());
    cmd.assert()
}

#[test]
fn sanitize_normalizes_typography_from_stdin() {
    run_postwash("It\u{2019}s a big day\u{2014}truly", &["sanitize"])
        .success()
        .stdout("It's a big day-truly\n");
}

#[test]
fn sanitize_removes_leaked_instruction_lines() {
    let input = "Keep it under 50 words.\nShipping the new release today.";
    run_postwash(input, &["sanitize"])
        .success()
        .stdout("Shipping the new release today.\n")
        .stdout(predicate::str::contains("Keep it under").not());
}

#[test]
fn sanitize_caps_hashtags_with_relocation() {
    let input = "Big #A news #B today #C and #D more #E done";
    run_postwash(input, &["sanitize"])
        .success()
        .stdout("Big news today and more done\n\n#A #B #C\n");
}

#[test]
fn sanitize_honors_cap_overrides() {
    let input = "one two three four five six";
    run_postwash(input, &["sanitize", "--max-words", "3"])
        .success()
        .stdout("one two three\n");
}

#[test]
fn sanitize_keep_urls_flag_preserves_links() {
    let input = "Read https://example.com/x now";
    run_postwash(input, &["sanitize", "--keep-urls"])
        .success()
        .stdout("Read https://example.com/x now\n");
    run_postwash(input, &["sanitize"])
        .success()
        .stdout("Read now\n");
}

#[test]
fn sanitize_writes_to_an_output_file() -> Result<()> {
    let output = NamedTempFile::new()?;
    run_postwash(
        "Plain draft text",
        &["sanitize", "-o", output.path().to_str().unwrap()],
    )
    .success();

    let written = fs::read_to_string(output.path())?;
    assert_eq!(written, "Plain draft text\n");
    Ok(())
}

#[test]
fn sanitize_reads_from_an_input_file() -> Result<()> {
    let mut input = NamedTempFile::new()?;
    write!(input, "hashtag Launch is live")?;

    run_postwash("", &["sanitize", "-i", input.path().to_str().unwrap()])
        .success()
        .stdout("#Launch is live\n");
    Ok(())
}

#[test]
fn sanitize_attaches_a_source_footer_once() {
    let args = [
        "sanitize",
        "--source-title",
        "Launch notes",
        "--source-link",
        "https://example.com/launch",
        "--keep-urls",
    ];
    run_postwash("The release is out.", &args)
        .success()
        .stdout("The release is out.\n\nSource: Launch notes\nhttps://example.com/launch\n");

    // A draft that already carries the link is left alone.
    run_postwash(
        "The release is out. See https://example.com/launch",
        &args,
    )
    .success()
    .stdout("The release is out. See https://example.com/launch\n");
}

#[test]
fn sanitize_exits_with_a_distinct_code_when_everything_is_removed() {
    let input = "Keep it under 50 words.\nTone: breathless";
    run_postwash(input, &["sanitize", "-q"]).code(2);
}

#[test]
fn sanitize_fallback_synthesizes_a_draft() {
    let input = "Keep it under 50 words.\nTone: breathless";
    run_postwash(input, &["sanitize", "-q", "--fallback"])
        .success()
        .stdout(predicate::str::starts_with("Key takeaway:"));
}

#[test]
fn sanitize_diff_shows_removed_lines() {
    let input = "Keep it under 50 words.\nReal content here.";
    run_postwash(input, &["sanitize", "-q", "--diff"])
        .success()
        .stdout(predicate::str::contains("-Keep it under 50 words."))
        .stdout(predicate::str::contains("Real content here."));
}

#[test]
fn sanitize_merges_a_config_overlay_file() -> Result<()> {
    let mut config = NamedTempFile::new()?;
    writeln!(config, "leakage_patterns:\n  - \"internal note:\"")?;

    let input = "Internal note: do not publish\nShip it.";
    run_postwash(
        input,
        &["sanitize", "--config", config.path().to_str().unwrap()],
    )
    .success()
    .stdout("Ship it.\n");
    Ok(())
}

#[test]
fn scrub_rewrites_hashtag_words() {
    run_postwash("hashtag Launch", &["scrub"])
        .success()
        .stdout("#Launch\n");
}

#[test]
fn scrub_strips_high_control_characters() {
    run_postwash("be\u{0080}fore af\u{009F}ter", &["scrub"])
        .success()
        .stdout("before after\n");
}

#[test]
fn markup_strips_emphasis_and_rewrites_lists() {
    let input = "**Bold** claim\n1. first\n2. second";
    run_postwash(input, &["markup"])
        .success()
        .stdout("Bold claim\n\u{2013} first\n\u{2013} second\n");
}

#[test]
fn scan_emits_json_to_stdout() {
    let input = "Tone: flat\nreal words here #one #two";
    let assert = run_postwash(input, &["scan", "--json-stdout"]).success();

    let output = assert.get_output().stdout.clone();
    let stats: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(stats["words"], 7);
    assert_eq!(stats["hashtags"], 2);
    assert_eq!(stats["leakage_lines"], 1);
    assert_eq!(stats["control_chars"], 0);
}

#[test]
fn scan_writes_json_to_a_file() -> Result<()> {
    let json_file = NamedTempFile::new()?;
    run_postwash(
        "draft #tag",
        &[
            "scan",
            "-q",
            "--json-file",
            json_file.path().to_str().unwrap(),
        ],
    )
    .success();

    let stats: serde_json::Value = serde_json::from_str(&fs::read_to_string(json_file.path())?)?;
    assert_eq!(stats["words"], 2);
    assert_eq!(stats["hashtags"], 1);
    Ok(())
}

#[test]
fn scan_rejects_conflicting_json_flags() {
    run_postwash(
        "text",
        &["scan", "--json-stdout", "--json-file", "out.json"],
    )
    .failure();
}

#[test]
fn no_arguments_prints_help() {
    let mut cmd = Command::cargo_bin("postwash").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
