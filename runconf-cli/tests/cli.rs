//! Integration tests for the `parse`, `get` and `validate` commands.

mod common;

use common::TestEnv;
use predicates::prelude::*;

// ============================================================================
// parse
// ============================================================================

#[test]
fn test_parse_args_text_output() {
    let env = TestEnv::new();

    env.command("parse")
        .args(["--", "-port", "8080", "--verbose"])
        .assert()
        .success()
        .stdout("port=8080\nverbose=true\n");
}

#[test]
fn test_parse_ignores_unregistered_tokens() {
    let env = TestEnv::new();

    env.command("parse")
        .args(["--", "-port", "1", "--debug", "-timeout", "5", "stray"])
        .assert()
        .success()
        .stdout("port=1\n");
}

#[test]
fn test_parse_file_then_args() {
    let env = TestEnv::new();
    let file = env.write_file("app.conf", "# defaults\n-port 80\n-host example.org\n");

    env.command("parse")
        .arg("--file")
        .arg(&file)
        .args(["--", "-port", "8080"])
        .assert()
        .success()
        .stdout("host=example.org\nport=8080\n");
}

#[test]
fn test_parse_json_output() {
    let env = TestEnv::new();

    let output = env
        .command("parse")
        .args(["--format", "json", "--", "-port", "8080", "--verbose"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["entries"]["port"], "8080");
    assert_eq!(value["entries"]["verbose"], "true");
    assert_eq!(value["stats"]["parameters_set"], 1);
    assert_eq!(value["stats"]["flags_set"], 1);
}

#[test]
fn test_parse_no_verify_warns() {
    let env = TestEnv::new();

    env.command("parse")
        .args(["--no-verify", "--", "--verbose"])
        .assert()
        .success()
        .stdout("verbose=true\n")
        .stderr(predicate::str::contains("missing required parameter: port"));
}

#[test]
fn test_parse_verbose_dumps_entries() {
    let env = TestEnv::new();

    env.command("parse")
        .args(["--verbose", "--", "-port", "8080"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[port] = [8080]"));
}

#[test]
fn test_schema_from_env() {
    let env = TestEnv::new();

    env.command_bare()
        .env("RUNCONF_SCHEMA", &env.schema)
        .args(["parse", "--", "-port", "1"])
        .assert()
        .success()
        .stdout("port=1\n");
}

// ============================================================================
// get
// ============================================================================

#[test]
fn test_get_int() {
    let env = TestEnv::new();

    env.command("get")
        .args(["--key", "port", "--as", "int", "--", "-port", "8080"])
        .assert()
        .success()
        .stdout("8080\n");
}

#[test]
fn test_get_double() {
    let env = TestEnv::new();

    env.command("get")
        .args(["--key", "ratio", "--as", "double", "--", "-ratio", "0.25"])
        .assert()
        .success()
        .stdout("0.25\n");
}

#[test]
fn test_get_flag_absent_is_false() {
    let env = TestEnv::new();

    env.command("get")
        .args(["--key", "verbose", "--as", "flag"])
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn test_get_string_default() {
    let env = TestEnv::new();

    env.command("get")
        .args(["--key", "host", "--", "-host", "example.org"])
        .assert()
        .success()
        .stdout("example.org\n");
}

// ============================================================================
// validate
// ============================================================================

#[test]
fn test_validate_valid_schema() {
    let env = TestEnv::new();

    env.command_bare()
        .arg("validate")
        .arg(&env.schema)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Registry is valid: 3 parameter(s), 1 required, 1 flag(s)",
        ));
}

#[test]
fn test_completions_bash() {
    let env = TestEnv::new();

    env.command_bare()
        .args(["--quiet", "completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("runconf"));
}
