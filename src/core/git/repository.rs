use crate::utils::error::{Result, SweepError};
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Clone)]
pub struct GitRepository {
    pub root: PathBuf,
}

impl GitRepository {
    pub fn discover() -> Result<Self> {
        let current_dir = std::env::current_dir().map_err(|e| {
            SweepError::git_operation(format!("Failed to get current directory: {}", e))
        })?;

        Self::discover_from(&current_dir)
    }

    pub fn discover_from(path: &Path) -> Result<Self> {
        let output = Command::new("git")
            .current_dir(path)
            .args(["rev-parse", "--show-toplevel"])
            .output()
            .map_err(|e| SweepError::git_operation(format!("Failed to execute git: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SweepError::git_operation(format!(
                "Not a git repository or git not found: {}",
                stderr.trim()
            )));
        }

        let root = String::from_utf8_lossy(&output.stdout).trim().to_string();
        Ok(Self {
            root: PathBuf::from(root),
        })
    }

    pub fn get_current_branch(&self) -> Result<String> {
        execute_git_command(self, &["rev-parse", "--abbrev-ref", "HEAD"])
    }

    /// `git config user.email`, or `None` when the key is unset.
    pub fn get_user_email(&self) -> Result<Option<String>> {
        let output = run_git(self, &["config", "--get", "user.email"])?;

        // git config exits 1 when the key is missing
        if output.status.code() == Some(1) {
            return Ok(None);
        }
        if !output.status.success() {
            return Err(command_failure(&["config", "--get", "user.email"], &output));
        }

        let email = String::from_utf8_lossy(&output.stdout).trim().to_string();
        Ok(if email.is_empty() { None } else { Some(email) })
    }

    pub fn remote_exists(&self, remote: &str) -> Result<bool> {
        let remotes = execute_git_command(self, &["remote"])?;
        Ok(remotes.lines().any(|line| line.trim() == remote))
    }

    pub fn fetch_prune(&self, remote: &str) -> Result<()> {
        execute_git_command(self, &["fetch", "--prune", remote]).map(|_| ())
    }

    pub fn pull_ff_only(&self, remote: &str, branch: &str) -> Result<()> {
        execute_git_command(self, &["pull", "--ff-only", remote, branch]).map(|_| ())
    }
}

fn run_git(repo: &GitRepository, args: &[&str]) -> Result<std::process::Output> {
    tracing::debug!(args = %args.join(" "), "git");
    Command::new("git")
        .current_dir(&repo.root)
        .args(args)
        .output()
        .map_err(|e| SweepError::git_operation(format!("Failed to execute git: {}", e)))
}

fn command_failure(args: &[&str], output: &std::process::Output) -> SweepError {
    let stderr = String::from_utf8_lossy(&output.stderr);
    SweepError::git_operation(format!(
        "Git command failed ({}): {}",
        args.join(" "),
        stderr.trim()
    ))
}

pub fn execute_git_command(repo: &GitRepository, args: &[&str]) -> Result<String> {
    let output = run_git(repo, args)?;

    if !output.status.success() {
        return Err(command_failure(args, &output));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(stdout.trim().to_string())
}
