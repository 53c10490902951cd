//! End-to-end tests of the `caesarbreak` binary: output and exit status.

use std::io::Write;
use std::process::{Command, Output};

fn caesarbreak(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_caesarbreak"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run caesarbreak")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn breaks_ciphertext_argument() {
    let output = caesarbreak(&["HAAHJR AOL LHZA DHSS HA KHDU"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Shift: 7\nPlaintext: ATTACK THE EAST WALL AT DAWN\nOperations: 1430\n"
    );
}

#[test]
fn spanish_language_option() {
    let output = caesarbreak(&[
        "--language",
        "spanish",
        "JXYJJXZSYJCYTRZDQFWLTJSQJSLZFOJHFXHFXYJQQFST",
    ]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.starts_with("Shift: 5\n"));
    assert!(out.contains("Plaintext: ESTEESUNTEXTOMUYLARGOENLENGUAJECASCASTELLANO\n"));
}

#[test]
fn missing_ciphertext_is_usage_error() {
    let output = caesarbreak(&[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Ciphertext must not be empty"));
}

#[test]
fn empty_ciphertext_is_usage_error() {
    let output = caesarbreak(&[""]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn unknown_metric_is_rejected() {
    let output = caesarbreak(&["--metric", "cosine", "KHOOR"]);
    assert!(!output.status.success());
}

#[test]
fn encode_subcommand() {
    let output = caesarbreak(&["encode", "--shift", "3", "Hello, World!"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "KHOOR, ZRUOG!\n");

    let output = caesarbreak(&["encode", "--shift", "-3", "KHOOR"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "HELLO\n");
}

#[test]
fn table_file_option() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", r#"{"E": 0.5, "T": 0.3, "A": 0.2}"#).unwrap();
    let path = file.path().to_str().unwrap();

    let output = caesarbreak(&["--table", path, "WKH WHDP"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("Shift: 3\n"));

    let output = caesarbreak(&["--table", "/nonexistent/table.json", "WKH"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn scores_flag_prints_chart() {
    let output = caesarbreak(&["--scores", "HAAHJR AOL LHZA DHSS HA KHDU"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.lines().any(|l| l.starts_with(" 7 ") && l.ends_with(" <")));
}

#[test]
fn simulate_subcommand_prints_summary() {
    let output = caesarbreak(&[
        "simulate", "--lengths", "300,600", "--trials", "2", "--seed", "1",
    ]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("| Length L |"));
    assert!(out.contains("|      300 |"));
    assert!(out.contains("|      600 |"));
}

#[test]
fn help_lists_language_and_metric_values() {
    let output = caesarbreak(&["-h"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("[possible values: english, spanish]"));
    assert!(out.contains("[possible values: squared, absolute]"));
    assert!(out.contains("caesarbreak -- simulate"));
}

#[test]
fn invalid_metric_error_names_the_accepted_values() {
    let output = caesarbreak(&["--metric", "cosine", "KHOOR"]);
    assert_eq!(output.status.code(), Some(2));
    let err = String::from_utf8_lossy(&output.stderr);
    assert!(err.contains("squared"));
    assert!(err.contains("absolute"));
}

#[test]
fn language_and_metric_aliases_are_accepted() {
    let output = caesarbreak(&[
        "--language",
        "ES",
        "--metric",
        "sae",
        "JXYJJXZSYJCYTRZDQFWLTJSQJSLZFOJHFXHFXYJQQFST",
    ]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("Shift: 5\n"));
}

#[test]
fn ciphertext_named_like_a_subcommand_after_double_dash() {
    let output = caesarbreak(&["--", "simulate"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.starts_with("Shift: "));
    assert!(out.ends_with("Operations: 910\n"));
    assert!(!out.contains("| Length L |"));
}
