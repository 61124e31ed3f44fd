use std::process::{Command, Output};

use pretty_assertions::assert_eq;

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_nthprime"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn nth_prints_prime() {
    let output = run_cli(&["--log-level", "off", "nth", "100"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "541\n");
}

#[test]
fn list_formats() {
    let output = run_cli(&["--log-level", "off", "list", "5"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "2\n3\n5\n7\n11\n");

    let output = run_cli(&["--log-level", "off", "list", "5", "--format", "csv"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "2,3,5,7,11\n");
}

#[test]
fn invalid_counts_fail() {
    for count in ["0", "-5", "abc", "2.5"] {
        let output = run_cli(&["nth", count]);
        assert_eq!(output.status.code(), Some(1), "count {count}");
        assert!(output.stdout.is_empty());
        let stderr = String::from_utf8(output.stderr).unwrap();
        assert!(stderr.contains("invalid argument"), "{stderr}");
    }
}

#[test]
fn logs_go_to_stderr() {
    let output = run_cli(&["--log-level", "info", "nth", "3"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "5\n");
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Prime number 3 is 5"), "{stderr}");
}

#[test]
fn unknown_format_is_rejected() {
    let output = run_cli(&["list", "3", "--format", "json"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
