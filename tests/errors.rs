use assert_cmd::Command;
use predicates::prelude::*;
use std::time::Duration;

fn cargo_bin() -> Command { Command::cargo_bin("bfi").unwrap() }

#[test]
fn test_unmatched_open_bracket_error() {
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg("[+")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Parse error: unmatched bracket '['"))
        .stderr(predicate::str::contains("at position 0"))
        .stderr(predicate::str::contains("^"))
        // Bracket validation happens before execution, so the '+' never runs
        // and nothing is written to stdout.
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_unmatched_close_bracket_error() {
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg("+]")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Parse error: unmatched bracket ']'"))
        .stderr(predicate::str::contains("at position 1"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_caret_aligns_under_the_offending_bracket() {
    // The context excerpt is "  +]" and the caret sits one column in.
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg("+]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("  +]"))
        .stderr(predicate::str::contains("   ^"));
}

#[test]
fn test_error_position_indexes_the_cleaned_stream() {
    // The '[' sits at raw offset 8 but is the first instruction once the
    // comment text is discarded.
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg("comment [")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("at position 0"));
}
