// e2e/demo_cli.rs — black-box tests of the `flag-demo` binary.
//
// Runs the demo through std::process::Command and checks exit codes, stdout
// and the diagnostics written to stderr.

use std::path::PathBuf;
use std::process::{Command, Output};

/// Locate the `flag-demo` binary produced by Cargo.
fn demo_bin() -> PathBuf {
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_flag-demo") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop();
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("flag-demo");
    p
}

fn run(args: &[&str]) -> Output {
    Command::new(demo_bin())
        .args(args)
        .env_remove("FLAG_LOG")
        .output()
        .expect("failed to run flag-demo")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

// ── Successful runs ──────────────────────────────────────────────────────────

#[test]
fn defaults_without_arguments() {
    let out = run(&[]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out), "l: no\nn: 5\nbar: baz\nscale: 1\n");
    assert!(stderr(&out).is_empty(), "stderr: {}", stderr(&out));
}

#[test]
fn every_flag_kind() {
    let out = run(&[
        "-l", "--n=42", "-bar", "qux", "-scale", "2.5", "-foo", "hi", "-color", "auto", "-플래그",
        "x", "file", "--", "-l",
    ]);
    assert_eq!(out.status.code(), Some(0), "stderr: {}", stderr(&out));
    assert_eq!(
        stdout(&out),
        "foo: hi\nl: yes\nn: 42\nbar: qux\nscale: 2.5\nArguments: `file`, `-l`\n"
    );
}

#[test]
fn alias_sets_the_canonical_flag() {
    let out = run(&["-num", "7"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(stdout(&out).contains("n: 7\n"));
}

#[test]
fn help_exits_zero() {
    let out = run(&["a", "-help"]);
    assert_eq!(out.status.code(), Some(0));
    let text = stdout(&out);
    assert!(text.starts_with("Usage: "), "stdout: {}", text);
    assert!(text.contains("    -n, -num int\n        # of iterations\n"));
    assert!(text.contains("    -color COLOR\n"));
    assert!(text.contains("    -no-help\n"));
    assert!(!text.contains("l: no"));
}

// ── Failures ─────────────────────────────────────────────────────────────────

#[test]
fn unknown_flag_gets_a_suggestion() {
    let out = run(&["--fooo"]);
    assert_eq!(out.status.code(), Some(1));
    let err = stderr(&out);
    assert!(
        err.contains("unrecognized option ‘--fooo’; did you mean ‘--foo’?"),
        "stderr: {}",
        err
    );
    assert!(err.contains(" -help' for more information."));
    assert!(stdout(&out).is_empty());
}

#[test]
fn rejected_color_lists_choices() {
    let out = run(&["-color", "sometimes"]);
    assert_eq!(out.status.code(), Some(1));
    let err = stderr(&out);
    assert!(err.contains("invalid argument ‘sometimes’ for ‘-color’\nValid arguments are:\n"));
    assert!(err.contains("  - ‘auto’, ‘tty’, ‘if-tty’\n"));
}

#[test]
fn out_of_range_integer() {
    let out = run(&["-n", "99999999999"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("invalid argument ‘99999999999’ for ‘-n’\nvalue too large\n"));
}

#[test]
fn missing_and_unexpected_values() {
    let out = run(&["-bar"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("option ‘-bar’ requires an argument"));

    let out = run(&["--l=yes"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("option ‘--l’ doesn't allow an argument"));
}

// ── Logging ──────────────────────────────────────────────────────────────────

#[test]
fn debug_logging_goes_to_stderr() {
    let out = Command::new(demo_bin())
        .args(["-l"])
        .env("FLAG_LOG", "debug")
        .output()
        .expect("failed to run flag-demo");
    assert_eq!(out.status.code(), Some(0));
    let err = stderr(&out);
    assert!(err.contains("registered option"), "stderr: {}", err);
    assert!(err.contains("parsing arguments"));
    assert_eq!(stdout(&out), "l: yes\nn: 5\nbar: baz\nscale: 1\n");
}
