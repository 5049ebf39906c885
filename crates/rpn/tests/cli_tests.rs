// Command-line behavior of the `rpn` binary
#![cfg(feature = "cli")]

use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rpn"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run rpn")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

// ═══════════════════════════════════════════════════════════════════════
// Success
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_cli_prints_value() {
    let output = run(&["5", "10", "+", "3", "*"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "45");
}

#[test]
fn test_cli_operator_words() {
    let output = run(&["20", "4", "div", "7", "4", "MOD", "add"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "8");
}

#[test]
fn test_cli_minus_is_sub_and_negative_is_operand() {
    let output = run(&["2", "3", "-"]);
    assert_eq!(stdout(&output), "-1");

    let output = run(&["-7", "2", "%"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "-1");
}

#[test]
fn test_cli_json_value() {
    let output = run(&["--json", "5", "10", "+", "3", "*"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_json(&output), json!({ "value": 45 }));
}

// ═══════════════════════════════════════════════════════════════════════
// Evaluation Failures
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_cli_eval_error_exit_code() {
    let output = run(&["5", "0", "/"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains("division by zero"));
}

#[test]
fn test_cli_json_eval_error() {
    let output = run(&["--json", "5", "0", "%"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout_json(&output),
        json!({
            "error": {
                "kind": "division_by_zero",
                "message": "division by zero in '%' at token 2",
                "position": 2
            }
        })
    );
}

#[test]
fn test_cli_json_malformed() {
    let output = run(&["--json", "5", "10"]);
    assert_eq!(output.status.code(), Some(1));
    let json = stdout_json(&output);
    assert_eq!(json["error"]["kind"], "malformed_expression");
    assert_eq!(json["error"]["position"], 2);
}

// ═══════════════════════════════════════════════════════════════════════
// Token Failures
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_cli_json_invalid_token_position() {
    let output = run(&["--json", "5", "foo", "+"]);
    assert_eq!(output.status.code(), Some(1));
    let json = stdout_json(&output);
    assert_eq!(json["error"]["kind"], "invalid_token");
    assert_eq!(json["error"]["position"], 1);
}

#[test]
fn test_cli_dash_word_is_an_invalid_token() {
    let output = run(&["--json", "5", "-x", "+"]);
    assert_eq!(output.status.code(), Some(1));
    let json = stdout_json(&output);
    assert_eq!(json["error"]["kind"], "invalid_token");
    assert_eq!(json["error"]["position"], 1);
    assert!(json["error"]["message"]
        .as_str()
        .unwrap()
        .contains("'-x'"));
}

#[test]
fn test_cli_invalid_token_plain() {
    let output = run(&["1", "2", "^"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("token 2"));
    assert!(stderr(&output).contains("'^'"));
}

// ═══════════════════════════════════════════════════════════════════════
// Tracing
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_cli_trace_logs_each_step() {
    let output = run(&["--trace", "5", "10", "+"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "15");
    let log = stderr(&output);
    assert!(log.contains("| 5 10"), "{}", log);
    assert!(log.contains("| 15"), "{}", log);
}

#[test]
fn test_cli_no_trace_by_default() {
    let output = run(&["5", "10", "+"]);
    assert_eq!(stderr(&output), "");
}
