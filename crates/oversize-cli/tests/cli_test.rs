//! End-to-end tests of the `oversize-checker` binary

use serde_json::{json, Value};
use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::TempDir;

/// Command with an isolated config directory
fn checker(home: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_oversize-checker"));
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_invoke_prints_response_json() {
    let home = TempDir::new().unwrap();
    let output = checker(&home)
        .args(["invoke", "--context", r#"{"arguments": {"length": 70, "width": 30, "height": 20, "weight": 2000}}"#])
        .output()
        .unwrap();
    assert!(output.status.success());
    let out: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(out["reasoning"], json!(["Length (70.0) is > 60 inches"]));
}

#[test]
fn test_rejection_still_exits_zero() {
    let home = TempDir::new().unwrap();
    let output = checker(&home)
        .args(["check", "--weight", "heavy"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let out: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(out["oversized"], json!(false));
    assert!(out["error"].as_str().unwrap().starts_with("Invalid input"));
}

#[test]
fn test_describe_lists_tool_properties() {
    let home = TempDir::new().unwrap();
    let output = checker(&home).arg("describe").output().unwrap();
    assert!(output.status.success());
    let out: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(out["toolName"], json!("check_package_oversized"));
    assert_eq!(out["toolProperties"].as_array().unwrap().len(), 4);
}

#[test]
fn test_describe_properties_prints_registration_string() {
    let home = TempDir::new().unwrap();
    let output = checker(&home)
        .args(["describe", "--properties"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let out: Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> = out
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["propertyName"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["length", "width", "height", "weight"]);
}

#[test]
fn test_serve_answers_each_line() {
    let home = TempDir::new().unwrap();
    let mut child = checker(&home)
        .arg("serve")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();
    {
        let mut stdin = child.stdin.take().unwrap();
        writeln!(stdin, r#"{{"arguments": {{"weight": 5000}}}}"#).unwrap();
        writeln!(stdin, r#"{{"arguments": {{"length": 1}}}}"#).unwrap();
    }
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    let oversized: Vec<bool> = text
        .lines()
        .map(|line| serde_json::from_str::<Value>(line).unwrap()["oversized"].as_bool().unwrap())
        .collect();
    assert_eq!(oversized, vec![true, false]);
}
