//! In-memory collaborators and git fixtures shared by the test suites.

use crate::core::git::VersionControl;
use crate::core::hosting::{HostingClient, HostingUser, PullRequestRecord};
use crate::core::sweep::executor::Confirmer;
use crate::core::sweep::types::PrState;
use crate::ui::{StatusSink, Tag};
use crate::utils::{Result, SweepError};
use chrono::{TimeZone, Utc};
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
struct MockBranch {
    name: String,
    author: String,
    merged: bool,
}

/// Scripted [`VersionControl`] that records every mutating call.
pub struct MockVcs {
    current_branch: String,
    user_email: Option<String>,
    remotes: Vec<String>,
    local: Vec<MockBranch>,
    remote_branches: Vec<MockBranch>,
    failing_deletes: HashSet<String>,
    fail_sync: bool,
    deleted_local: RefCell<Vec<(String, bool)>>,
    deleted_remote: RefCell<Vec<(String, String)>>,
    syncs: RefCell<Vec<String>>,
}

impl Default for MockVcs {
    fn default() -> Self {
        Self::new()
    }
}

impl MockVcs {
    pub fn new() -> Self {
        Self {
            current_branch: "main".to_string(),
            user_email: Some("alice@example.com".to_string()),
            remotes: Vec::new(),
            local: Vec::new(),
            remote_branches: Vec::new(),
            failing_deletes: HashSet::new(),
            fail_sync: false,
            deleted_local: RefCell::new(Vec::new()),
            deleted_remote: RefCell::new(Vec::new()),
            syncs: RefCell::new(Vec::new()),
        }
    }

    pub fn with_current_branch(mut self, branch: &str) -> Self {
        self.current_branch = branch.to_string();
        self
    }

    pub fn with_user_email(mut self, email: &str) -> Self {
        self.user_email = Some(email.to_string());
        self
    }

    pub fn without_user_email(mut self) -> Self {
        self.user_email = None;
        self
    }

    pub fn with_remote(mut self, remote: &str) -> Self {
        self.remotes.push(remote.to_string());
        self
    }

    pub fn with_local(mut self, name: &str, author: &str, merged: bool) -> Self {
        self.local.push(MockBranch {
            name: name.to_string(),
            author: author.to_string(),
            merged,
        });
        self
    }

    pub fn with_remote_branch(mut self, name: &str, author: &str, merged: bool) -> Self {
        self.remote_branches.push(MockBranch {
            name: name.to_string(),
            author: author.to_string(),
            merged,
        });
        self
    }

    pub fn with_failing_delete(mut self, name: &str) -> Self {
        self.failing_deletes.insert(name.to_string());
        self
    }

    pub fn with_failing_sync(mut self) -> Self {
        self.fail_sync = true;
        self
    }

    pub fn deleted_local(&self) -> Vec<(String, bool)> {
        self.deleted_local.borrow().clone()
    }

    pub fn deleted_remote(&self) -> Vec<(String, String)> {
        self.deleted_remote.borrow().clone()
    }

    pub fn syncs(&self) -> Vec<String> {
        self.syncs.borrow().clone()
    }

    fn names(branches: &[MockBranch], merged_only: bool) -> Vec<String> {
        let mut names = vec!["main".to_string()];
        names.extend(
            branches
                .iter()
                .filter(|b| !merged_only || b.merged)
                .map(|b| b.name.clone()),
        );
        names
    }

    fn author(branches: &[MockBranch], name: &str) -> Result<String> {
        branches
            .iter()
            .find(|b| b.name == name)
            .map(|b| b.author.clone())
            .ok_or_else(|| SweepError::git_operation(format!("unknown revision '{}'", name)))
    }

    fn check_delete(&self, name: &str) -> Result<()> {
        if self.failing_deletes.contains(name) {
            return Err(SweepError::git_operation(format!(
                "branch '{}' not found\nhint: the branch may already be gone",
                name
            )));
        }
        Ok(())
    }
}

impl VersionControl for MockVcs {
    fn current_branch(&self) -> Result<String> {
        Ok(self.current_branch.clone())
    }

    fn user_email(&self) -> Result<Option<String>> {
        Ok(self.user_email.clone())
    }

    fn remote_exists(&self, remote: &str) -> Result<bool> {
        Ok(self.remotes.iter().any(|r| r == remote))
    }

    fn fetch_prune(&self, remote: &str) -> Result<()> {
        if self.fail_sync {
            return Err(SweepError::git_operation("fetch failed: network unreachable"));
        }
        self.syncs
            .borrow_mut()
            .push(format!("fetch --prune {}", remote));
        Ok(())
    }

    fn pull_ff_only(&self, remote: &str, branch: &str) -> Result<()> {
        if self.fail_sync {
            return Err(SweepError::git_operation("pull failed: not possible to fast-forward"));
        }
        self.syncs
            .borrow_mut()
            .push(format!("pull --ff-only {} {}", remote, branch));
        Ok(())
    }

    fn list_local_branches(&self, merged_into: Option<&str>) -> Result<Vec<String>> {
        Ok(Self::names(&self.local, merged_into.is_some()))
    }

    fn list_remote_branches(
        &self,
        _remote: &str,
        merged_into: Option<&str>,
    ) -> Result<Vec<String>> {
        let mut names = Self::names(&self.remote_branches, merged_into.is_some());
        names.push("HEAD".to_string());
        Ok(names)
    }

    fn local_author_email(&self, name: &str) -> Result<String> {
        Self::author(&self.local, name)
    }

    fn remote_author_email(&self, _remote: &str, name: &str) -> Result<String> {
        Self::author(&self.remote_branches, name)
    }

    fn delete_local_branch(&self, name: &str, force: bool) -> Result<()> {
        self.check_delete(name)?;
        self.deleted_local
            .borrow_mut()
            .push((name.to_string(), force));
        Ok(())
    }

    fn delete_remote_branch(&self, remote: &str, name: &str) -> Result<()> {
        self.check_delete(name)?;
        self.deleted_remote
            .borrow_mut()
            .push((remote.to_string(), name.to_string()));
        Ok(())
    }
}

/// Scripted [`HostingClient`]. Branches without a scripted PR have none.
pub struct MockHosting {
    available: bool,
    user: Option<HostingUser>,
    prs: HashMap<String, PrState>,
    failures: HashSet<String>,
    lookups: RefCell<Vec<String>>,
    user_lookups: Cell<usize>,
}

impl Default for MockHosting {
    fn default() -> Self {
        Self::new()
    }
}

impl MockHosting {
    pub fn new() -> Self {
        Self {
            available: true,
            user: None,
            prs: HashMap::new(),
            failures: HashSet::new(),
            lookups: RefCell::new(Vec::new()),
            user_lookups: Cell::new(0),
        }
    }

    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }

    pub fn with_user(mut self, user: HostingUser) -> Self {
        self.user = Some(user);
        self
    }

    pub fn with_pr(mut self, branch: &str, state: PrState) -> Self {
        self.prs.insert(branch.to_string(), state);
        self
    }

    pub fn with_failure(mut self, branch: &str) -> Self {
        self.failures.insert(branch.to_string());
        self
    }

    pub fn pr_lookups(&self) -> Vec<String> {
        self.lookups.borrow().clone()
    }

    pub fn user_lookups(&self) -> usize {
        self.user_lookups.get()
    }
}

impl HostingClient for MockHosting {
    fn is_available(&self) -> bool {
        self.available
    }

    fn authenticated_user(&self) -> Result<HostingUser> {
        self.user_lookups.set(self.user_lookups.get() + 1);
        self.user
            .clone()
            .ok_or_else(|| SweepError::hosting("not logged in"))
    }

    fn pull_requests_for_branch(&self, branch: &str) -> Result<Vec<PullRequestRecord>> {
        self.lookups.borrow_mut().push(branch.to_string());

        if self.failures.contains(branch) {
            return Err(SweepError::hosting("API rate limit exceeded"));
        }

        Ok(self
            .prs
            .get(branch)
            .map(|state| {
                vec![PullRequestRecord {
                    number: 1,
                    state: *state,
                    created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
                    merged_at: None,
                }]
            })
            .unwrap_or_default())
    }
}

/// Gives the same answer to every prompt and remembers what was asked.
pub struct ScriptedConfirmer {
    answer: bool,
    asked: RefCell<Vec<String>>,
}

impl ScriptedConfirmer {
    pub fn always(answer: bool) -> Self {
        Self {
            answer,
            asked: RefCell::new(Vec::new()),
        }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }
}

impl Confirmer for ScriptedConfirmer {
    fn confirm(&self, branch_label: &str) -> bool {
        self.asked.borrow_mut().push(branch_label.to_string());
        self.answer
    }
}

#[derive(Debug, Default)]
pub struct RecordingSink {
    pub entries: Vec<(Tag, String)>,
    pub lines: Vec<String>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, tag: Tag, needle: &str) -> bool {
        self.entries
            .iter()
            .any(|(t, message)| *t == tag && message.contains(needle))
    }
}

impl StatusSink for RecordingSink {
    fn emit(&mut self, tag: Tag, message: &str) {
        self.entries.push((tag, message.to_string()));
    }

    fn line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}

pub mod test_helpers {
    use crate::core::git::GitService;
    use std::fs;
    use std::path::Path;
    use std::process::Command;
    use tempfile::TempDir;

    /// Runs git in `dir`, panicking with stderr on failure.
    pub fn git(dir: &Path, args: &[&str]) -> String {
        let output = Command::new("git")
            .current_dir(dir)
            .args(args)
            .output()
            .expect("Failed to execute git");

        assert!(
            output.status.success(),
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }

    pub fn commit_file(dir: &Path, file: &str, content: &str, message: &str) {
        fs::write(dir.join(file), content).expect("Failed to write file");
        git(dir, &["add", file]);
        git(dir, &["commit", "-m", message]);
    }

    pub fn push_branch(dir: &Path, branch: &str) {
        git(dir, &["push", "-u", "origin", branch]);
    }

    fn init_work_repo(path: &Path) {
        git(path, &["init", "--initial-branch=main"]);
        git(path, &["config", "user.name", "Test User"]);
        git(path, &["config", "user.email", "test@example.com"]);
        git(path, &["config", "commit.gpgsign", "false"]);
        commit_file(path, "README.md", "# Test Repository", "Initial commit");
    }

    pub fn setup_test_repo() -> (TempDir, GitService) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        init_work_repo(temp_dir.path());

        let service = GitService::discover_from(temp_dir.path()).expect("Failed to discover repo");
        (temp_dir, service)
    }

    /// A bare `remote.git` and a clone-like `work` repository tracking it as
    /// `origin`, both inside the returned temp dir.
    pub fn setup_repo_with_remote() -> (TempDir, GitService) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let remote = temp_dir.path().join("remote.git");
        let work = temp_dir.path().join("work");
        fs::create_dir_all(&remote).expect("Failed to create remote dir");
        fs::create_dir_all(&work).expect("Failed to create work dir");

        git(&remote, &["init", "--bare", "--initial-branch=main"]);
        init_work_repo(&work);
        git(
            &work,
            &["remote", "add", "origin", remote.to_str().expect("utf-8 temp path")],
        );
        push_branch(&work, "main");

        let service = GitService::discover_from(&work).expect("Failed to discover repo");
        (temp_dir, service)
    }
}
