use assert_cmd::Command;
use predicates::prelude::*;

fn count_bits() -> Command {
    Command::new(env!("CARGO_BIN_EXE_count_bits"))
}

#[test]
fn shows_help() {
    count_bits()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("count_bits"));
}

#[test]
fn bare_invocation_runs_self_test() {
    count_bits()
        .assert()
        .code(0)
        .stdout(predicate::str::contains("self-test passed: 5 cases"));
}

#[test]
fn self_test_json_reports_every_case() {
    let output = count_bits()
        .args(["self-test", "--format", "json"])
        .assert()
        .code(0)
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["exit_code"], 0);
    assert_eq!(report["outcome"]["status"], "passed");
    assert_eq!(report["checks"].as_array().unwrap().len(), 5);
}

#[test]
fn self_test_verbose_lists_cases() {
    count_bits()
        .args(["self-test", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[5] count(0xFFFF) = 16"));
}

#[test]
fn counts_values_from_args() {
    count_bits()
        .args(["count", "--format", "csv", "0x5555", "0", "0x00FF", "0xFF00", "0xFFFF"])
        .assert()
        .success()
        .stdout(predicate::str::contains("21845,0x5555,8"))
        .stdout(predicate::str::contains("0,0x0000,0"))
        .stdout(predicate::str::contains("65535,0xFFFF,16"));
}

#[test]
fn counts_values_from_stdin() {
    count_bits()
        .args(["count", "--stdin", "--format", "jsonl"])
        .write_stdin("0x1FFFF\n0b101\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""bits":16"#))
        .stdout(predicate::str::contains(r#""type":"total""#));
}

#[test]
fn invalid_stdin_value_fails_with_context() {
    count_bits()
        .args(["count", "--stdin"])
        .write_stdin("12 oops\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("stdin line 1"));
}

#[test]
fn hello_prints_greeting_without_newline() {
    count_bits().arg("hello").assert().success().stdout("Hello World!!");
}

#[cfg(target_os = "linux")]
#[test]
fn self_test_status_ignores_unwritable_stdout() {
    let full = std::fs::OpenOptions::new().write(true).open("/dev/full").unwrap();
    let output = std::process::Command::new(env!("CARGO_BIN_EXE_count_bits"))
        .arg("self-test")
        .stdout(full)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to write self-test report"));
}
