//! Runtime tests driving [`crate::run`] with in-memory streams.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use recomment_core::HeaderTemplate;
use rstest::{fixture, rstest};
use tempfile::TempDir;

/// Captured result of one CLI invocation.
struct Invocation {
    exit: ExitCode,
    stdout: String,
    stderr: String,
}

fn invoke(args: &[OsString]) -> Invocation {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let argv = std::iter::once(OsString::from("recomment")).chain(args.iter().cloned());
    let exit = crate::run(argv, &mut stdout, &mut stderr);
    Invocation {
        exit,
        stdout: String::from_utf8(stdout).expect("stdout utf8"),
        stderr: String::from_utf8(stderr).expect("stderr utf8"),
    }
}

#[fixture]
fn scratch() -> TempDir {
    TempDir::new().expect("temp dir")
}

fn header_text() -> String {
    HeaderTemplate::GOSTDJS
        .lines()
        .iter()
        .map(|line| format!("{line}\n"))
        .collect()
}

fn seed(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("seed file");
    path
}

#[rstest]
fn rewrites_each_path_and_confirms(scratch: TempDir) {
    let first = seed(scratch.path(), "a.js", &format!("{}// a\nx\n", header_text()));
    let second = seed(scratch.path(), "b.js", &format!("{}y\n", header_text()));

    let result = invoke(&[first.clone().into(), second.clone().into()]);

    assert_eq!(result.exit, ExitCode::SUCCESS);
    assert_eq!(
        result.stdout,
        format!(
            "rewrote comments in {}\nrewrote comments in {}\n",
            first.display(),
            second.display()
        )
    );
    assert!(result.stderr.is_empty(), "unexpected stderr: {}", result.stderr);
    assert_eq!(
        fs::read_to_string(&first).expect("read"),
        format!("{}/**\n * a\n */\nx\n", header_text())
    );
}

#[rstest]
fn stops_at_first_failing_path(scratch: TempDir) {
    let bad = seed(scratch.path(), "bad.js", "package main\n");
    let later_contents = format!("{}// untouched\nx\n", header_text());
    let later = seed(scratch.path(), "later.js", &later_contents);

    let result = invoke(&[bad.clone().into(), later.clone().into()]);

    assert_eq!(result.exit, ExitCode::FAILURE);
    assert!(result.stdout.is_empty());
    assert_eq!(
        result.stderr,
        format!(
            "{} line 0: first lines of file do not contain the version preamble\n",
            bad.display()
        )
    );
    assert_eq!(fs::read_to_string(&later).expect("read"), later_contents);
}

#[rstest]
fn earlier_paths_stay_committed_after_later_failure(scratch: TempDir) {
    let good = seed(scratch.path(), "good.js", &format!("{}// c\nx\n", header_text()));
    let missing = scratch.path().join("missing.js");

    let result = invoke(&[good.clone().into(), missing.clone().into()]);

    assert_eq!(result.exit, ExitCode::FAILURE);
    assert!(result.stdout.contains("good.js"));
    assert!(result.stderr.starts_with(&format!("{} line -1:", missing.display())));
    assert!(fs::read_to_string(&good).expect("read").contains("/**"));
}

#[rstest]
fn close_trailing_block_flag_closes_open_block(scratch: TempDir) {
    let path = seed(scratch.path(), "tail.js", &format!("{}x\n// tail\n", header_text()));

    let result = invoke(&[OsString::from("--close-trailing-block"), path.clone().into()]);

    assert_eq!(result.exit, ExitCode::SUCCESS);
    assert_eq!(
        fs::read_to_string(&path).expect("read"),
        format!("{}x\n/**\n * tail\n */\n", header_text())
    );
}

#[test]
fn no_paths_is_a_successful_no_op() {
    let result = invoke(&[]);
    assert_eq!(result.exit, ExitCode::SUCCESS);
    assert!(result.stdout.is_empty());
}

#[test]
fn help_goes_to_stdout() {
    let result = invoke(&[OsString::from("--help")]);
    assert_eq!(result.exit, ExitCode::SUCCESS);
    assert!(result.stdout.contains("--close-trailing-block"));
}

#[rstest]
#[case(&["--no-such-flag"])]
#[case(&["--log-format", "xml", "a.js"])]
#[case(&["--log-filter", "recomment=loud", "a.js"])]
fn invalid_arguments_fail(#[case] args: &[&str]) {
    let argv: Vec<OsString> = args.iter().map(OsString::from).collect();
    let result = invoke(&argv);
    assert_eq!(result.exit, ExitCode::FAILURE);
    assert!(!result.stderr.is_empty());
}
