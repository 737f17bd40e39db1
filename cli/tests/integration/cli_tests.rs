//! Integration tests for the CLI surface: help, version, info, errors.

#![allow(clippy::expect_used)]

use predicates::prelude::*;

use crate::maven_deploy;

// --- Help and version tests ---

#[test]
fn test_cli_no_args_shows_help_and_exits_two() {
    maven_deploy()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Deploy Maven artifacts as a release hook"));
}

#[test]
fn test_cli_help_lists_commands() {
    maven_deploy()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("execute"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("info"));
}

#[test]
fn test_version_command_shows_version() {
    maven_deploy()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "maven-deploy {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_version_command_json_outputs_valid_json() {
    let output = maven_deploy()
        .args(["version", "--json"])
        .output()
        .expect("run");
    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(value["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_no_color_env_accepts_any_value() {
    for value in ["1", "true", "yes"] {
        maven_deploy()
            .env("NO_COLOR", value)
            .arg("version")
            .assert()
            .success()
            .stdout(predicate::str::contains("maven-deploy"));
    }
}

#[test]
fn test_no_color_flag_still_parses() {
    maven_deploy()
        .env_remove("NO_COLOR")
        .args(["version", "--no-color"])
        .assert()
        .success();
}

#[test]
fn test_unknown_command_fails() {
    maven_deploy().arg("publish").assert().code(2);
}

// --- Info ---

#[test]
fn test_info_json_advertises_post_publish_and_schema() {
    let output = maven_deploy()
        .args(["info", "--json"])
        .output()
        .expect("run");
    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(value["name"], "maven");
    assert_eq!(value["hooks"], serde_json::json!(["post-publish"]));
    assert_eq!(
        value["config_schema"]["required"],
        serde_json::json!(["group_id", "artifact_id"])
    );
    assert_eq!(
        value["config_schema"]["properties"]["pom_path"]["default"],
        "pom.xml"
    );
}

#[test]
fn test_info_human_shows_description() {
    maven_deploy()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("Publish artifacts to Maven Central (Java)"));
}

// --- CLI-level errors ---

#[test]
fn test_missing_config_file_is_an_error() {
    maven_deploy()
        .args(["validate", "--config", "/nonexistent/maven-deploy.yaml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: cannot read /nonexistent/maven-deploy.yaml"));
}

#[test]
fn test_missing_config_file_json_error_object() {
    let output = maven_deploy()
        .args(["validate", "--json", "--config", "/nonexistent/maven-deploy.yaml"])
        .output()
        .expect("run");
    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(value["error"], true);
    assert_eq!(value["code"], "command_failed");
    assert!(
        value["message"]
            .as_str()
            .expect("message")
            .contains("cannot read /nonexistent/maven-deploy.yaml")
    );
}

#[test]
fn test_invalid_runtime_setting_is_an_error() {
    maven_deploy()
        .env("MAVEN_DEPLOY_COMMAND_TIMEOUT_SECS", "forever")
        .arg("info")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("MAVEN_DEPLOY_"));
}
