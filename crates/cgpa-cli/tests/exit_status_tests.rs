//! Exit status contract tests
//!
//! Runs the built `cgpa` binary with scripted stdin and checks the exit
//! status together with what lands on stdout and stderr.

use std::io::Write;
use std::process::{Command, Stdio};

fn cgpa_bin() -> &'static str {
    env!("CARGO_BIN_EXE_cgpa")
}

fn run_cgpa(args: &[&str], stdin: &str) -> (i32, String, String) {
    let mut child = Command::new(cgpa_bin())
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("CGPA_CREDIT_POLICY")
        .env_remove("CGPA_MAX_ATTEMPTS")
        .env("NO_COLOR", "1")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn cgpa");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();

    let output = child.wait_with_output().unwrap();
    let code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (code, stdout, stderr)
}

#[test]
fn zero_subjects_exits_with_failure() {
    let (code, stdout, stderr) = run_cgpa(&["--no-color"], "0\n");
    assert_eq!(code, 1, "stdout: {stdout}\nstderr: {stderr}");
    assert!(
        stderr.contains("Error: Total credits cannot be zero."),
        "stderr: {stderr}"
    );
    assert!(!stdout.contains("Your CGPA is"), "stdout: {stdout}");
}

#[test]
fn all_zero_credits_exits_with_failure() {
    let (code, stdout, stderr) = run_cgpa(&["calculate", "--no-color"], "2\nO 0\nA 0\n");
    assert_eq!(code, 1, "stdout: {stdout}\nstderr: {stderr}");
    assert!(stderr.contains("Error: Total credits cannot be zero."));
    assert!(!stdout.contains("Your CGPA is"));
}

#[test]
fn overflowing_credits_exit_with_failure() {
    let (code, stdout, stderr) = run_cgpa(&["--no-color"], "2\nO 1e308\nO 1e308\n");
    assert_eq!(code, 1, "stdout: {stdout}\nstderr: {stderr}");
    assert!(stderr.contains("Error: Credit totals are too large to average"));
    assert!(!stdout.contains("NaN"));
}

#[test]
fn normal_run_exits_with_success() {
    let (code, stdout, stderr) = run_cgpa(&["--no-color"], "2\nA 4\nB+ 3\n");
    assert_eq!(code, 0, "stdout: {stdout}\nstderr: {stderr}");
    // 53 / 7
    assert!(stdout.contains("Your CGPA is: 7.57"), "stdout: {stdout}");
    assert!(stdout.contains("Good, keep improving!"));
    assert!(!stderr.contains("Error:"));
}

#[test]
fn json_run_keeps_stdout_parseable() {
    let (code, stdout, stderr) = run_cgpa(&["--json"], "1\nO 4\n");
    assert_eq!(code, 0, "stderr: {stderr}");
    let report: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(report["cgpa"], 10.0);
    assert!(stderr.contains("Enter grade"));
}
