//! End-to-end tests for the axc binary.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_demo_trace() {
    let expected = "\
Next token is: 11, Next lexeme is: G
Next token is: 25, Next lexeme is: (
Next token is: 10, Next lexeme is: 8
Next token is: 99, Next lexeme is: %
Next token is: 10, Next lexeme is: 2
Next token is: 26, Next lexeme is: )
Next token is: 22, Next lexeme is: -
Next token is: 10, Next lexeme is: 3
Next token is: -1, Next lexeme is: EOF
";
    Command::cargo_bin("axc")
        .unwrap()
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_explicit_expression() {
    Command::cargo_bin("axc")
        .unwrap()
        .arg("x1 = 42")
        .assert()
        .success()
        .stdout(predicate::str::contains("Next token is: 11, Next lexeme is: x1"))
        .stdout(predicate::str::contains("Next token is: 20, Next lexeme is: ="))
        .stdout(predicate::str::contains("Next token is: 10, Next lexeme is: 42"))
        .stdout(predicate::str::contains("Next token is: -1, Next lexeme is: EOF"));
}

#[test]
fn test_leading_minus_expression_after_separator() {
    let expected = "\
Next token is: 22, Next lexeme is: -
Next token is: 10, Next lexeme is: 3
Next token is: 21, Next lexeme is: +
Next token is: 10, Next lexeme is: 2
Next token is: -1, Next lexeme is: EOF
";
    Command::cargo_bin("axc")
        .unwrap()
        .args(["--", "-3+2"])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_overlong_lexeme_warns_on_stderr() {
    let input = "a".repeat(200);
    Command::cargo_bin("axc")
        .unwrap()
        .arg(&input)
        .assert()
        .success()
        .stderr(predicate::str::contains("lexeme is too long"))
        .stderr(predicate::str::contains("W0101"));
}

#[test]
fn test_unknown_option_fails() {
    Command::cargo_bin("axc")
        .unwrap()
        .arg("--frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown option"));
}

#[test]
fn test_help() {
    Command::cargo_bin("axc")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: axc"));
}
