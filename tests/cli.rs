//! CLI integration tests. None of these reach the network.

use std::io::Write as _;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn apigw() -> Command {
    let mut cmd = cargo_bin_cmd!("apigw");
    cmd.env("AWS_REGION", "eu-west-2")
        .env("AWS_ACCESS_KEY_ID", "AKIDEXAMPLE")
        .env("AWS_SECRET_ACCESS_KEY", "secret")
        .env("AWS_EC2_METADATA_DISABLED", "true")
        .env("AWS_CONFIG_FILE", "/nonexistent")
        .env("AWS_SHARED_CREDENTIALS_FILE", "/nonexistent")
        .env_remove("AWS_PROFILE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_lists_the_operations() {
    apigw()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("get-model"))
        .stdout(predicate::str::contains("delete-vpc-link"))
        .stdout(predicate::str::contains("update-api-key"))
        .stdout(predicate::str::contains("update-client-certificate"))
        .stdout(predicate::str::contains("batch"));
}

#[test]
fn invalid_selector_fails_before_dispatch() {
    apigw()
        .args(["get-model", "--rest-api-id", "abc123", "--model-name", "User"])
        .args(["--select", "^VpcLinkId"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid selector"));
}

#[test]
fn missing_required_parameter_fails() {
    apigw()
        .args(["get-model", "--model-name", "User"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("missing required parameter `RestApiId`"));
}

#[test]
fn destructive_operations_abort_without_a_terminal() {
    apigw()
        .args(["delete-vpc-link", "--vpc-link-id", "vpc-1"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn completions_are_generated() {
    apigw()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("apigw"));
}

#[test]
fn failing_batch_items_set_the_exit_code() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# nothing here is dispatched").unwrap();
    writeln!(file, r#"{{"operation": "GetModel", "parameters": {{"ModelName": "User"}}}}"#).unwrap();
    writeln!(file, "not json").unwrap();
    writeln!(
        file,
        r#"{{"operation": "DeleteVpcLink", "parameters": {{"VpcLinkId": "vpc-1"}}}}"#
    )
    .unwrap();

    apigw()
        .arg("batch")
        .arg(file.path())
        .write_stdin("")
        .assert()
        .code(4)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("line 2:"))
        .stderr(predicate::str::contains("line 3:"))
        .stderr(predicate::str::contains("2 of 3 batch items failed"));
}

#[test]
fn batch_stops_when_the_global_selector_is_invalid() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"{{"operation": "GetModel", "parameters": {{"RestApiId": "a", "ModelName": "b"}}}}"#
    )
    .unwrap();

    apigw()
        .arg("batch")
        .arg(file.path())
        .args(["--select", "^VpcLinkId"])
        .write_stdin("")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid selector"));
}
