//! End-to-end tests that invoke the compiled `confload` binary

use assert_cmd::Command;
use conf_test_utils::{TestDocs, make_executable};
use predicates::prelude::*;
use serde_json::json;

/// Get a Command for the confload binary with shell lookups and colors disabled
fn confload() -> Command {
    let mut cmd = Command::cargo_bin("confload").expect("Failed to find confload binary");
    cmd.env("CONFLOAD_DISABLE_SUBPROCESS", "1")
        .env("NO_COLOR", "1")
        .env_remove("CLICOLOR_FORCE")
        .env_remove("RUST_LOG");
    cmd
}

fn structured(pairs: &[(&str, &str)]) -> serde_json::Value {
    let records: Vec<_> = pairs
        .iter()
        .map(|(k, v)| json!({"key": k, "value": v}))
        .collect();
    json!({ "General": records })
}

// ============================================================================
// detect / validate
// ============================================================================

#[test]
fn test_help_lists_commands() {
    confload()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("detect"))
        .stdout(predicate::str::contains("resolve"));
}

#[test]
fn test_detect_prints_schema_name() {
    let docs = TestDocs::new();
    let file = docs.write(
        "env.json",
        &json!({"id": "1", "name": "dev", "values": [{"key": "a", "value": "b"}]}),
    );

    confload()
        .arg("detect")
        .arg(&file)
        .assert()
        .success()
        .stdout("postman\n");
}

#[test]
fn test_detect_unknown_shape_fails() {
    let docs = TestDocs::new();
    let file = docs.write("odd.json", &json!({"General": 5}));

    confload()
        .arg("detect")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No schema matches"));
}

#[test]
fn test_detect_malformed_json_reports_location() {
    let docs = TestDocs::new();
    let file = docs.write_raw("bad.json", "{\"General\": [");

    confload()
        .arg("detect")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed JSON"))
        .stderr(predicate::str::contains("line 1"));
}

#[test]
fn test_validate_clean_document() {
    let docs = TestDocs::new();
    let file = docs.write("a.json", &structured(&[("a", "1")]));

    confload()
        .arg("validate")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("OK"));
}

#[test]
fn test_validate_reports_findings_and_fails() {
    let docs = TestDocs::new();
    let file = docs.write(
        "tools.json",
        &json!({"tools": {"git": {"path": "git", "required": "yes"}}}),
    );

    confload()
        .args(["validate", "--json"])
        .arg(&file)
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"schema\": \"executable\""))
        .stdout(predicate::str::contains("tools.git.required"));
}

// ============================================================================
// load / get
// ============================================================================

#[test]
fn test_load_merges_in_order() {
    let docs = TestDocs::new();
    let a = docs.write("a.json", &structured(&[("shared", "a"), ("only_a", "x")]));
    let b = docs.write("b.json", &structured(&[("shared", "b")]));

    let output = confload()
        .args(["load", "--json"])
        .arg(&a)
        .arg(&b)
        .output()
        .unwrap();

    assert!(output.status.success());
    let merged: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(merged, json!({"General": {"shared": "b", "only_a": "x"}}));
}

#[test]
fn test_load_text_listing() {
    let docs = TestDocs::new();
    let a = docs.write("a.json", &structured(&[("name", "alpha")]));

    confload()
        .arg("load")
        .arg(&a)
        .assert()
        .success()
        .stdout(predicate::str::contains("[General]"))
        .stdout(predicate::str::contains("name = alpha"))
        .stderr(predicate::str::contains("loaded"));
}

#[test]
fn test_load_stops_at_first_failure() {
    let docs = TestDocs::new();
    let bad = docs.write_raw("bad.json", "nope");
    let good = docs.write("good.json", &structured(&[("a", "1")]));

    confload()
        .arg("load")
        .arg(&bad)
        .arg(&good)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_load_keep_going_prints_rest_and_fails() {
    let docs = TestDocs::new();
    let bad = docs.write_raw("bad.json", "nope");
    let good = docs.write("good.json", &structured(&[("a", "1")]));

    confload()
        .args(["load", "--keep-going"])
        .arg(&bad)
        .arg(&good)
        .assert()
        .failure()
        .stdout(predicate::str::contains("a = 1"))
        .stderr(predicate::str::contains("1 of 2 document(s) failed"));
}

#[test]
fn test_get_substitutes_placeholders() {
    let docs = TestDocs::new();
    let file = docs.write("a.json", &structured(&[("cache", "[HOME]/.cache")]));

    confload()
        .args(["get", "General", "cache", "--set", "[HOME]=/home/me", "--file"])
        .arg(&file)
        .assert()
        .success()
        .stdout("/home/me/.cache\n");
}

#[test]
fn test_get_default_when_missing() {
    let docs = TestDocs::new();
    let file = docs.write("a.json", &structured(&[("a", "1")]));

    confload()
        .args(["get", "General", "missing", "--default", "fallback", "-f"])
        .arg(&file)
        .assert()
        .success()
        .stdout("fallback\n");

    confload()
        .args(["get", "General", "missing", "-f"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no value at General.missing"));
}

#[test]
fn test_get_json_keeps_type() {
    let docs = TestDocs::new();
    let file = docs.write(
        "a.json",
        &json!({"General": [{"key": "n", "value": "42", "type": "int"}]}),
    );

    confload()
        .args(["get", "General", "n", "--json", "-f"])
        .arg(&file)
        .assert()
        .success()
        .stdout("42\n");
}

#[test]
fn test_required_missing_executable_fails_load() {
    let docs = TestDocs::new();
    let file = docs.write(
        "tools.json",
        &json!({"tools": {"ghost": {"path": "this-will-never-exist-xyz", "required": true}}}),
    );

    confload()
        .env("PATH", docs.path())
        .arg("load")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("this-will-never-exist-xyz"));
}

// ============================================================================
// resolve / schemas
// ============================================================================

#[test]
fn test_resolve_absolute_path() {
    let docs = TestDocs::new();
    let tool = make_executable(docs.path(), "tool");

    confload()
        .arg("resolve")
        .arg(&tool)
        .assert()
        .success()
        .stdout(predicate::str::contains(tool.file_name().unwrap().to_str().unwrap()));
}

#[cfg(unix)]
#[test]
fn test_resolve_walks_path() {
    let docs = TestDocs::new();
    let tool = make_executable(docs.path(), "confload-test-tool");

    confload()
        .env("PATH", docs.path())
        .args(["resolve", "confload-test-tool"])
        .assert()
        .success()
        .stdout(format!("{}\n", tool.display()));
}

#[test]
fn test_resolve_unknown_command_fails() {
    let docs = TestDocs::new();

    confload()
        .env("PATH", docs.path())
        .args(["--no-subprocess", "resolve", "this-will-never-exist-xyz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("executable not found"));
}

#[test]
fn test_schemas_in_priority_order() {
    let output = confload().arg("schemas").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    let postman = stdout.find("postman").unwrap();
    let structured = stdout.find("advanced-structured").unwrap();
    assert!(postman < structured);
    assert!(stdout.trim_end().ends_with("structured"));
}
