/// Command-line tests: run the built `confa` binary and check its stdout,
/// stderr, and exit status.
///
/// Sources are passed on stdin, with `-c`, or through files created in a
/// temporary directory.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Path to the `confa` binary built by this Cargo workspace.
fn confa_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_confa"))
}

/// Run the binary with `args`, feeding `stdin` to it.
fn run_confa(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(confa_binary())
        .args(args)
        .env_remove("CONFA_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn confa binary");
    {
        let input = child.stdin.as_mut().expect("stdin not open");
        input.write_all(stdin.as_bytes()).expect("write to stdin");
    }
    child.wait_with_output().expect("wait failed")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("write fixture");
    path
}

// ── Test cases ────────────────────────────────────────────────────────────────

#[test]
fn converts_stdin() {
    let out = run_confa(&[], "CONST := 10\nnumbers = [1; 2; CONST]\n");
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(stdout(&out), "numbers = [1, 2, 10]\n");
}

#[test]
fn dash_reads_stdin() {
    let out = run_confa(&["-"], "value = 1");
    assert_eq!(stdout(&out), "value = 1\n");
}

#[test]
fn converts_inline_source() {
    let out = run_confa(&["-c", "PI := 3.14\ndata = { key = 'value'; another = PI }"], "");
    assert!(out.status.success());
    assert_eq!(stdout(&out), "[data]\nkey = 'value'\nanother = 3.14\n");
}

#[test]
fn converts_file_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_file(dir.path(), "in.conf", "CONST := 10\nresult := |CONST 2 *|\nvalue = result\n");
    let output = dir.path().join("out.toml");

    let out = run_confa(
        &["-o", output.to_str().unwrap(), input.to_str().unwrap()],
        "",
    );
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(stdout(&out), "");
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "value = 20\n");
}

#[test]
fn syntax_error_exits_nonzero() {
    let out = run_confa(&[], "CONST := 42\ninvalid line\n");
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout(&out), "");
    assert_eq!(
        stderr(&out).trim_end(),
        "confa: invalid syntax on line 2: invalid line"
    );
}

#[test]
fn line_comment_mode_flag() {
    let src = "(comment\nnot a setting\n)\nvalue = 1\n";
    let block = run_confa(&[], src);
    assert_eq!(stdout(&block), "value = 1\n");

    let line = run_confa(&["-l"], src);
    assert_eq!(line.status.code(), Some(1));
    assert!(stderr(&line).contains("line 1: not a setting"));
}

#[test]
fn missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.conf");
    let out = run_confa(&[missing.to_str().unwrap()], "");
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).starts_with("confa: "));
    assert!(stderr(&out).contains("nope.conf"));
}

#[test]
fn bad_option_prints_usage() {
    let out = run_confa(&["-z"], "");
    assert_eq!(out.status.code(), Some(2));
    let err = stderr(&out);
    assert!(err.contains("unknown option: -z"));
    assert!(err.contains("Usage: confa"));
}

#[test]
fn debug_flag_logs_to_stderr_only() {
    let out = run_confa(&["-d"], "value = 1\n");
    assert!(out.status.success());
    assert_eq!(stdout(&out), "value = 1\n");
    assert!(stderr(&out).contains("source processed"));
}
