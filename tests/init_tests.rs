//! Integration tests for init and config commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{init_at, tagtrail_cmd};

#[test]
fn test_init_creates_config() {
    let temp = TempDir::new().unwrap();

    tagtrail_cmd()
        .arg("init")
        .arg(temp.path())
        .arg("--owner")
        .arg("vacation")
        .assert()
        .success()
        .stdout(predicate::str::contains("Owner: vacation"));

    assert!(temp.path().join(".tagtrail").is_dir());

    let content = fs::read_to_string(temp.path().join(".tagtrail/config.toml")).unwrap();
    assert!(content.contains("owner = \"vacation\""));
    assert!(content.contains("auto_checkpoint = false"));
}

#[test]
fn test_init_defaults_owner_to_directory_name() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("recipes");

    tagtrail_cmd()
        .arg("init")
        .arg(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Owner: recipes"));
}

#[test]
fn test_init_already_initialized_fails() {
    let temp = TempDir::new().unwrap();

    init_at(temp.path());

    tagtrail_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn test_config_set_and_get_owner() {
    let temp = TempDir::new().unwrap();
    init_at(temp.path());

    tagtrail_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("owner")
        .arg("inbox")
        .assert()
        .success()
        .stdout(predicate::str::contains("Set owner = inbox"));

    tagtrail_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("owner")
        .assert()
        .success()
        .stdout(predicate::str::contains("inbox"));
}

#[test]
fn test_config_list() {
    let temp = TempDir::new().unwrap();
    init_at(temp.path());

    tagtrail_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("owner = "))
        .stdout(predicate::str::contains("auto_checkpoint = false"))
        .stdout(predicate::str::contains("created = "));
}

#[test]
fn test_config_created_is_read_only() {
    let temp = TempDir::new().unwrap();
    init_at(temp.path());

    tagtrail_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("created")
        .arg("2025-01-01T00:00:00Z")
        .assert()
        .failure()
        .stderr(predicate::str::contains("read-only"));
}

#[test]
fn test_config_unknown_key() {
    let temp = TempDir::new().unwrap();
    init_at(temp.path());

    tagtrail_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("mode")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: 'mode'"));
}

#[test]
fn test_commands_outside_tagtrail_directory_fail() {
    let temp = TempDir::new().unwrap();

    tagtrail_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Not a tagtrail directory"));
}

#[test]
fn test_tagtrail_root_env_is_used() {
    let temp = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();
    init_at(temp.path());

    tagtrail_cmd()
        .current_dir(elsewhere.path())
        .env("TAGTRAIL_ROOT", temp.path())
        .arg("add")
        .arg("work")
        .assert()
        .success();

    assert!(fs::read_to_string(temp.path().join(".tagtrail/tags.toml"))
        .unwrap()
        .contains("@work"));
}
