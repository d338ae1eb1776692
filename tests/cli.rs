//
//  jira-client
//  tests/cli.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn jira() -> Command {
    let mut cmd = Command::cargo_bin("jira").unwrap();
    cmd.env_remove("JIRA_CONFIG").env_remove("JIRA_DEBUG");
    cmd
}

#[test]
fn test_version_flag() {
    jira()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_version_command() {
    jira()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("jira version "));
}

#[test]
fn test_unknown_command_is_usage_error() {
    jira().arg("frobnicate").assert().code(2);
}

#[test]
fn test_missing_config_file_exits_with_config_code() {
    jira()
        .args(["--config", "/nonexistent/jira/config.toml", "whoami"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn test_invalid_config_file_exits_with_config_code() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "host = \"jira.example.com\"\nunknown_key = true").unwrap();

    jira()
        .args(["server-info", "--config"])
        .arg(file.path())
        .assert()
        .code(3);
}

#[test]
fn test_config_from_environment() {
    jira()
        .env("JIRA_CONFIG", "/nonexistent/jira/config.toml")
        .arg("whoami")
        .assert()
        .code(3);
}
