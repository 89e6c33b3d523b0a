//! Integration tests for `ygit add` and `ygit setup` against a real
//! local repository.

mod common;

use assert_cmd::Command;
use common::TestRemote;
use predicates::prelude::*;

fn ygit_cmd() -> Command {
    Command::cargo_bin("ygit").unwrap()
}

#[test]
fn test_add_records_remote_under_host_name() {
    let scratch = TestRemote::new();
    let local = scratch.init_local_repo("local");

    ygit_cmd()
        .args([
            "add",
            "user@host.xz:/srv/git/proj.git",
            "-l",
            &local.display().to_string(),
        ])
        .assert()
        .success();

    let repo = git2::Repository::open(&local).unwrap();
    let remote = repo.find_remote("host.xz").unwrap();
    assert_eq!(remote.url(), Some("user@host.xz:/srv/git/proj.git"));

    let config = repo.config().unwrap().snapshot().unwrap();
    assert_eq!(config.get_str("branch.master.remote").unwrap(), "host.xz");
    assert_eq!(
        config.get_str("branch.master.merge").unwrap(),
        "refs/heads/master"
    );
}

#[test]
fn test_add_with_explicit_name_and_mirror() {
    let scratch = TestRemote::new();
    let local = scratch.init_local_repo("local");

    ygit_cmd()
        .args([
            "add",
            "/srv/git/proj.git",
            "-n",
            "backup",
            "--mirror",
            "-l",
            &local.display().to_string(),
        ])
        .assert()
        .success();

    let repo = git2::Repository::open(&local).unwrap();
    assert!(repo.find_remote("backup").is_ok());
    let config = repo.config().unwrap().snapshot().unwrap();
    assert!(config.get_bool("remote.backup.mirror").unwrap());
}

#[test]
fn test_add_outside_repository_fails_with_hint() {
    let scratch = TestRemote::new();
    let not_a_repo = scratch.create_dir("plain");

    ygit_cmd()
        .args([
            "add",
            "host.xz:proj",
            "-l",
            &not_a_repo.display().to_string(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not in a git repository"));
}

#[test]
fn test_add_same_name_twice_fails() {
    let scratch = TestRemote::new();
    let local = scratch.init_local_repo("local");
    let local_arg = local.display().to_string();

    ygit_cmd()
        .args(["add", "host.xz:a", "-n", "origin", "-l", &local_arg])
        .assert()
        .success();
    ygit_cmd()
        .args(["add", "host.xz:b", "-n", "origin", "-l", &local_arg])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to add remote"));
}

#[test]
fn test_setup_creates_initializes_and_registers() {
    let scratch = TestRemote::new();
    let local = scratch.init_local_repo("local");
    let url = scratch.url("remote-proj");

    ygit_cmd()
        .args([
            "setup",
            &url,
            "-n",
            "upstream",
            "-l",
            &local.display().to_string(),
        ])
        .assert()
        .success();

    let created = git2::Repository::open(scratch.path.join("remote-proj.git")).unwrap();
    assert!(created.is_bare());

    let repo = git2::Repository::open(&local).unwrap();
    let remote = repo.find_remote("upstream").unwrap();
    assert_eq!(remote.url(), Some(url.as_str()));
}

#[test]
fn test_add_dry_run_records_nothing() {
    let scratch = TestRemote::new();
    let local = scratch.init_local_repo("local");

    ygit_cmd()
        .args([
            "add",
            "host.xz:proj",
            "-l",
            &local.display().to_string(),
            "--dry-run",
        ])
        .assert()
        .success();

    let repo = git2::Repository::open(&local).unwrap();
    assert!(repo.find_remote("host.xz").is_err());
}
