//! Integration tests for the unitext CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn unitext() -> Command {
    Command::cargo_bin("unitext").unwrap()
}

#[test]
fn test_show_words_from_arguments() {
    unitext()
        .args(["show", "word", "hello", "world"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#0 offset 0 span 0-5 codepoints 5 value: hello"))
        .stdout(predicate::str::contains("#1 offset 5 span 6-11 codepoints 5 value: world"))
        .stdout(predicate::str::contains("{U+0068 (Ll Letter Lowercase) : ALetter}"));
}

#[test]
fn test_show_graphemes_compact() {
    unitext()
        .args(["show", "grapheme", "--compact", "e\u{0301}x"])
        .assert()
        .success()
        .stdout(predicate::str::contains("span 0-2 codepoints 2"))
        .stdout(predicate::str::contains("U+0065 U+0301"))
        .stdout(predicate::str::contains("#1 offset 2 span 2-3"));
}

#[test]
fn test_show_sentences_from_file() {
    unitext()
        .args(["show", "sentence", "-i", &fixture_path("word-sample.txt")])
        .assert()
        .success()
        .stdout(predicate::str::contains("value: The quick brown fox. "))
        .stdout(predicate::str::contains("#1 offset 21"));
}

#[test]
fn test_show_word_categories_flag() {
    unitext()
        .args(["show", "word", "--categories", "number", "abc 42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("value: 42"))
        .stdout(predicate::str::contains("value: abc").not());
}

#[test]
fn test_show_json_output() {
    unitext()
        .args(["-f", "json", "show", "word", "it's"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["))
        .stdout(predicate::str::contains("\"text\": \"it's\""))
        .stdout(predicate::str::contains("\"kind\": \"word\""));
}

#[test]
fn test_show_without_input() {
    unitext()
        .args(["show", "word"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("give text arguments"));
}

#[test]
fn test_show_missing_file() {
    unitext()
        .args(["show", "word", "-i", "nonexistent.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_codepoint_hex_and_text() {
    unitext()
        .args(["codepoint", "U+0041", "\u{1F600}"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#0 U+0041 - A"))
        .stdout(predicate::str::contains("category Lu: Letter Uppercase"))
        .stdout(predicate::str::contains("casefold: a"))
        .stdout(predicate::str::contains("#1 U+1F600"))
        .stdout(predicate::str::contains("Extended_Pictographic"));
}

#[test]
fn test_codepoint_out_of_range() {
    unitext()
        .args(["codepoint", "0x110000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_breaktest_passes() {
    unitext()
        .args(["breaktest", "grapheme", &fixture_path("grapheme-break-sample.txt")])
        .assert()
        .success()
        .stdout(predicate::str::contains("6 passed"));
}

#[test]
fn test_breaktest_failures_exit_code() {
    unitext()
        .args(["breaktest", "grapheme", &fixture_path("grapheme-break-wrong.txt")])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("1 tests failed, 1 passed:"))
        .stderr(predicate::str::contains("Line 3 got unexpected break at 1"));
}

#[test]
fn test_breaktest_malformed_file() {
    unitext()
        .args(["breaktest", "grapheme", &fixture_path("grapheme-break-malformed.txt")])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Line 1"));
}

#[test]
fn test_tokenize_default_tokenizer() {
    unitext()
        .args(["tokenize", "Hello, World"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0-5 Hello"))
        .stdout(predicate::str::contains("7-12 World"));
}

#[test]
fn test_tokenize_casefold_colocated() {
    unitext()
        .args(["tokenize", "-t", "casefold", "-a", "colocate", "Hello world"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0-5 Hello | hello"))
        .stdout(predicate::str::contains("6-11 world\n"));
}

#[test]
fn test_tokenize_json_without_offsets() {
    unitext()
        .args(["-f", "json", "tokenize", "-t", "casefold", "--no-offsets", "STRASSE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"token\": \"strasse\""))
        .stdout(predicate::str::contains("span").not());
}

#[test]
fn test_tokenize_bad_reason() {
    unitext()
        .args(["tokenize", "-r", "sideways", "text"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_tokenize_unknown_tokenizer() {
    unitext()
        .args(["tokenize", "-t", "porter", "text"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("porter"));
}

#[test]
fn test_tokenize_list() {
    unitext()
        .args(["tokenize", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("casefold"))
        .stdout(predicate::str::contains("unicode_words"));
}

#[test]
fn test_config_file_defaults() {
    unitext()
        .args(["-c", &fixture_path("config.toml"), "tokenize", "The fox"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"token\":\"The\""))
        .stdout(predicate::str::contains("\"colocated\":[\"the\"]"));
}

#[test]
fn test_config_word_categories() {
    unitext()
        .args(["-c", &fixture_path("config.toml"), "show", "word", "-i", &fixture_path("word-sample.txt")])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"text\":\"It's\""))
        .stdout(predicate::str::contains("\"text\":\"3.14\"").not());
}

#[test]
fn test_format_flag_overrides_config() {
    unitext()
        .args(["-c", &fixture_path("config.toml"), "-f", "text", "tokenize", "The fox"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0-3 The | the"));
}

#[test]
fn test_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("bad.toml");
    fs::write(&config, "[output]\nwidth = 0\n").unwrap();

    unitext()
        .arg("-c")
        .arg(&config)
        .args(["show", "word", "text"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_benchmark_small() {
    unitext()
        .args(["-q", "benchmark", "--size", "0.001", &fixture_path("word-sample.txt")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unicode rules version"))
        .stdout(predicate::str::contains("sentence chars per second"))
        .stdout(predicate::str::contains("grapheme chars per second"));
}

#[test]
fn test_benchmark_with_seed() {
    unitext()
        .args(["-q", "-f", "json", "benchmark", "--size", "0.001", "--seed", "42"])
        .arg(fixture_path("word-sample.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"word\""))
        .stdout(predicate::str::contains("\"chars\": 1000"));
}

#[test]
fn test_benchmark_empty_file() {
    let temp_dir = TempDir::new().unwrap();
    let empty = temp_dir.path().join("empty.txt");
    fs::write(&empty, "").unwrap();

    unitext()
        .arg("benchmark")
        .arg(&empty)
        .assert()
        .failure()
        .stderr(predicate::str::contains("is empty"));
}

#[test]
fn test_help_lists_commands() {
    unitext()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("breaktest"))
        .stdout(predicate::str::contains("tokenize"));
}
