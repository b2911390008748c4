use std::io::Write;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

const LOG: &str = "\
1407564301|www.nba.com
1407564300|www.nba.com
1407564301|sports.yahoo.com
";

const REPORT: &str = "\
09/08/2014 GMT
www.nba.com 2
sports.yahoo.com 1
";

fn write_log(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn dailyhits(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dailyhits"))
        .args(args)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn good_file_exits_zero_with_report_on_stdout() {
    let file = write_log(LOG);
    let output = dailyhits(&[file.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), REPORT);
    assert_eq!(stderr(&output), "");
}

#[test]
fn empty_file_exits_zero_with_no_output() {
    let file = write_log("");
    let output = dailyhits(&[file.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "");
}

#[test]
fn missing_file_exits_non_zero_without_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.log");
    let output = dailyhits(&[path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains("input file not found"));
}

#[test]
fn skipped_line_warns_on_stderr_only() {
    let file = write_log(&format!("{LOG}garbage\n"));
    let output = dailyhits(&[file.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), REPORT);
    let stderr = stderr(&output);
    assert!(stderr.contains("Skipping malformed line"), "stderr: {stderr}");
    assert!(!stderr.contains('\u{1b}'), "stderr has ANSI escapes: {stderr:?}");
}

#[test]
fn strict_abort_exits_non_zero_without_stdout() {
    let file = write_log(&format!("{LOG}garbage\n"));
    let output = dailyhits(&["--strict", file.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains("malformed line 4"));
}

#[test]
fn zero_top_is_rejected() {
    let file = write_log(LOG);
    let output = dailyhits(&["--top", "0", file.path().to_str().unwrap()]);

    assert_ne!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "");
}
