use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A throwaway repository plus an isolated config pointing at a hosting CLI
/// that does not exist, so runs never reach the network.
pub struct TestRepo {
    tmp: TempDir,
    pub root: PathBuf,
    config: PathBuf,
}

impl TestRepo {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().join("repo");
        fs::create_dir_all(&root).expect("create repo dir");

        git(&root, &["init", "--initial-branch=main"]);
        git(&root, &["config", "user.name", "Test User"]);
        git(&root, &["config", "user.email", "test@example.com"]);
        git(&root, &["config", "commit.gpgsign", "false"]);
        fs::write(root.join("README.md"), "# fixture").expect("write readme");
        git(&root, &["add", "README.md"]);
        git(&root, &["commit", "-m", "Initial commit"]);

        let config = tmp.path().join("config.json");
        fs::write(
            &config,
            r#"{"hosting": {"command": "branchsweep-missing-hosting-cli", "noreply_domain": "users.noreply.github.com", "pr_list_limit": 10}}"#,
        )
        .expect("write config");

        Self {
            tmp,
            root,
            config,
        }
    }

    /// Same as [`TestRepo::new`] with a bare `origin` that already has `main`.
    pub fn with_origin() -> Self {
        let repo = Self::new();
        let remote = repo.tmp.path().join("origin.git");
        fs::create_dir_all(&remote).expect("create remote dir");
        git(&remote, &["init", "--bare", "--initial-branch=main"]);
        repo.git(&["remote", "add", "origin", remote.to_str().expect("utf-8 path")]);
        repo.git(&["push", "-u", "origin", "main"]);
        repo
    }

    pub fn commit(&self, file: &str, message: &str) {
        fs::write(self.root.join(file), message).expect("write file");
        self.git(&["add", file]);
        self.git(&["commit", "-m", message]);
    }

    pub fn remote_branches(&self) -> Vec<String> {
        self.git(&["branch", "-r", "--format=%(refname:short)"])
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn git(&self, args: &[&str]) -> String {
        git(&self.root, args)
    }

    pub fn branches(&self) -> Vec<String> {
        self.git(&["branch", "--format=%(refname:short)"])
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("branchsweep").expect("binary built");
        cmd.current_dir(&self.root)
            .env("BRANCHSWEEP_CONFIG", &self.config)
            .env("BRANCHSWEEP_NON_INTERACTIVE", "1")
            .env("NO_COLOR", "1");
        cmd
    }
}

pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = std::process::Command::new("git")
        .current_dir(dir)
        .args(args)
        .output()
        .expect("run git");
    assert!(
        output.status.success(),
        "git {} failed: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
