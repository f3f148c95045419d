//! End-to-end runs of the compiled binary.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn marsnum(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_marsnum"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("MARSNUM_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn marsnum");
    // The child may exit before draining stdin (strict mode, bad --input).
    let _ = child.stdin.take().expect("stdin").write_all(stdin.as_bytes());
    child.wait_with_output().expect("wait for marsnum")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn stdin_batch_contract() {
    let output = marsnum(&[], "4\n29\n5\nelo nov\n115\n");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "hel mar\nmay\n115\nelo nov\n");
}

#[test]
fn bad_lines_still_exit_zero() {
    let output = marsnum(&[], "2\nxyz\n0\n");
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "error: unknown low digit name \"xyz\"\ntret\n"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("some lines could not be converted"), "{stderr}");
}

#[test]
fn invalid_utf8_line_gets_its_own_error() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_marsnum"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn marsnum");
    let _ = child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"3\n5\n\xff\xfe\n13\n");
    let output = child.wait_with_output().expect("wait for marsnum");

    assert!(output.status.success());
    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "may");
    assert!(lines[1].starts_with("error: line is not valid UTF-8"));
    assert_eq!(lines[2], "tam tret");
}

#[test]
fn strict_flag_exits_one() {
    let output = marsnum(&["--strict"], "2\nxyz\n0\n");
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("line 1"));
}

#[test]
fn truncated_input_exits_one_after_partial_output() {
    let output = marsnum(&[], "3\n1\n");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "jan\n");
}

#[test]
fn convert_subcommand() {
    let output = marsnum(&["convert", "13", "tam", "hel jan"], "");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "tam tret\n13\n27\n");
}

#[test]
fn input_flag_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"1\njou dec\n").unwrap();
    let path = file.path().to_str().unwrap();

    let output = marsnum(&["--input", path], "");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "168\n");
}

#[test]
fn missing_input_file_fails() {
    let output = marsnum(&["--input", "/nonexistent/marsnum-input"], "");
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("opening"));
}

#[test]
fn table_subcommand_plain_when_piped() {
    let output = marsnum(&["table"], "");
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.starts_with("value\tlow\thigh\n"));
    assert!(text.contains("1\tjan\ttam\n"));
}

#[test]
fn table_subcommand_json() {
    let output = marsnum(&["table", "--format", "json"], "");
    assert!(output.status.success());
    assert_eq!(stdout(&output).lines().count(), 25);
}
