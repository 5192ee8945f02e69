// crates/mpfhf-cli/tests/hash_invert_roundtrip.rs

use std::process::Command;

fn run(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_mpfhf-cli"))
        .args(args)
        .output()
        .expect("spawn command")
}

fn run_ok(args: &[&str]) -> String {
    let out = run(args);
    assert!(
        out.status.success(),
        "command failed: status={:?}\nstdout:\n{}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8(out.stdout).expect("utf8 stdout")
}

#[test]
fn hash_prints_pinned_digest() {
    let stdout = run_ok(&["hash", "--message", "01", "--size", "1"]);
    assert_eq!(stdout, "r = 0\ns = 100\n");
}

#[test]
fn invert_recovers_a_preimage() {
    let stdout = run_ok(&["invert", "--r", "0", "--s", "100", "--len", "2"]);
    assert_eq!(stdout.trim_end(), "01");
}

#[test]
fn invert_reports_no_solution_as_failure() {
    let out = run(&["invert", "--r", "1", "--s", "0", "--len", "1"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("no message of length 1"), "stderr:\n{stderr}");
}

#[test]
fn roundtrip_command_agrees_with_itself() {
    let stdout = run_ok(&["roundtrip", "--message", "10110100", "--size", "3"]);
    assert!(stdout.starts_with("ok:"), "stdout:\n{stdout}");
}

#[test]
fn rejects_non_binary_message() {
    let out = run(&["hash", "--message", "01x", "--size", "2"]);
    assert!(!out.status.success());
}
