mod common;

use assert_cmd::Command;
use common::TestRepo;
use predicates::str::contains;

fn cmd() -> Command {
    Command::cargo_bin("branchsweep").unwrap()
}

#[test]
fn help_goes_to_stdout_with_success() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("--execute"))
        .stdout(contains("--force"));
}

#[test]
fn version_goes_to_stdout_with_success() {
    for flag in ["--version", "-V"] {
        cmd()
            .arg(flag)
            .assert()
            .success()
            .stdout(contains(env!("CARGO_PKG_VERSION")));
    }
}

#[test]
fn short_help_flag() {
    cmd().arg("-h").assert().success().stdout(contains("--dry-run"));
}

#[test]
fn unknown_flag_exits_with_one() {
    cmd()
        .arg("--everything")
        .assert()
        .code(1)
        .stderr(contains("--everything"));
}

#[test]
fn dry_run_and_execute_conflict() {
    cmd().args(["--dry-run", "--execute"]).assert().code(1);
}

#[test]
fn refuses_to_run_off_main() {
    let repo = TestRepo::new();
    repo.git(&["checkout", "-b", "feature"]);

    repo.cmd()
        .arg("--execute")
        .assert()
        .code(1)
        .stderr(contains("Not on the trunk branch"));

    assert!(repo.branches().contains(&"feature".to_string()));
}

#[test]
fn dry_run_reports_without_deleting() {
    let repo = TestRepo::new();
    repo.git(&["branch", "merged-one"]);

    repo.cmd()
        .assert()
        .success()
        .stdout(contains("[DRY] merged-one: would delete (merged)"))
        .stdout(contains("Would delete local branches: 1"));

    assert!(repo.branches().contains(&"merged-one".to_string()));
}

#[test]
fn execute_deletes_merged_and_keeps_unevaluated() {
    let repo = TestRepo::new();
    repo.git(&["branch", "merged-one"]);
    repo.git(&["checkout", "-b", "unmerged-one"]);
    std::fs::write(repo.root.join("wip.txt"), "wip").unwrap();
    repo.git(&["add", "wip.txt"]);
    repo.git(&["commit", "-m", "WIP"]);
    repo.git(&["checkout", "main"]);

    repo.cmd()
        .arg("--execute")
        .assert()
        .success()
        .stdout(contains("[DEL] merged-one: deleted (merged)"))
        .stdout(contains("[SKIP] unmerged-one: PR status unavailable"))
        .stdout(contains("Deleted local branches: 1"));

    let branches = repo.branches();
    assert!(!branches.contains(&"merged-one".to_string()));
    assert!(branches.contains(&"unmerged-one".to_string()));
}

#[test]
fn merged_branch_with_stale_upstream_is_deleted() {
    let repo = TestRepo::with_origin();
    repo.git(&["checkout", "-b", "feature-x"]);
    repo.commit("one.txt", "Pushed work");
    repo.git(&["push", "-u", "origin", "feature-x"]);
    repo.commit("two.txt", "Local-only work");
    repo.git(&["checkout", "main"]);
    repo.git(&["merge", "--ff-only", "feature-x"]);
    repo.git(&["push", "origin", "main"]);

    repo.cmd()
        .arg("--execute")
        .assert()
        .success()
        .stdout(contains("[DEL] feature-x: deleted (merged)"))
        .stdout(contains("[DEL] origin/feature-x: deleted (merged)"))
        .stdout(contains("Deleted local branches: 1"))
        .stdout(contains("Deleted remote branches: 1"));

    assert!(!repo.branches().contains(&"feature-x".to_string()));
    assert!(!repo.remote_branches().contains(&"origin/feature-x".to_string()));
}

#[test]
fn invalid_config_is_fatal() {
    let repo = TestRepo::new();
    let bad = repo.root.join("bad-config.json");
    std::fs::write(&bad, r#"{"remote": {"name": ""}}"#).unwrap();

    repo.cmd()
        .env("BRANCHSWEEP_CONFIG", &bad)
        .assert()
        .code(1)
        .stderr(contains("Configuration error"));
}
