use crate::utils::error::Result;
use std::path::Path;

pub mod branch;
pub mod repository;

pub use branch::BranchManager;
pub use repository::GitRepository;

/// Version-control primitives the sweep needs. Implemented by [`GitService`]
/// over the `git` binary and by in-memory fakes in tests.
pub trait VersionControl {
    fn current_branch(&self) -> Result<String>;
    fn user_email(&self) -> Result<Option<String>>;
    fn remote_exists(&self, remote: &str) -> Result<bool>;
    fn fetch_prune(&self, remote: &str) -> Result<()>;
    fn pull_ff_only(&self, remote: &str, branch: &str) -> Result<()>;
    fn list_local_branches(&self, merged_into: Option<&str>) -> Result<Vec<String>>;
    fn list_remote_branches(&self, remote: &str, merged_into: Option<&str>)
        -> Result<Vec<String>>;
    fn local_author_email(&self, name: &str) -> Result<String>;
    fn remote_author_email(&self, remote: &str, name: &str) -> Result<String>;
    fn delete_local_branch(&self, name: &str, force: bool) -> Result<()>;
    fn delete_remote_branch(&self, remote: &str, name: &str) -> Result<()>;
}

pub struct GitService {
    repo: GitRepository,
}

impl GitService {
    pub fn discover() -> Result<Self> {
        let repo = GitRepository::discover()?;
        Ok(Self { repo })
    }

    pub fn discover_from(path: &Path) -> Result<Self> {
        let repo = GitRepository::discover_from(path)?;
        Ok(Self { repo })
    }

    pub fn repository(&self) -> &GitRepository {
        &self.repo
    }

    pub fn branch_manager(&self) -> BranchManager {
        BranchManager::new(&self.repo)
    }
}

impl VersionControl for GitService {
    fn current_branch(&self) -> Result<String> {
        self.repo.get_current_branch()
    }

    fn user_email(&self) -> Result<Option<String>> {
        self.repo.get_user_email()
    }

    fn remote_exists(&self, remote: &str) -> Result<bool> {
        self.repo.remote_exists(remote)
    }

    fn fetch_prune(&self, remote: &str) -> Result<()> {
        self.repo.fetch_prune(remote)
    }

    fn pull_ff_only(&self, remote: &str, branch: &str) -> Result<()> {
        self.repo.pull_ff_only(remote, branch)
    }

    fn list_local_branches(&self, merged_into: Option<&str>) -> Result<Vec<String>> {
        self.branch_manager().list_local_branches(merged_into)
    }

    fn list_remote_branches(
        &self,
        remote: &str,
        merged_into: Option<&str>,
    ) -> Result<Vec<String>> {
        self.branch_manager().list_remote_branches(remote, merged_into)
    }

    fn local_author_email(&self, name: &str) -> Result<String> {
        self.branch_manager()
            .last_author_email(&branch::local_ref(name))
    }

    fn remote_author_email(&self, remote: &str, name: &str) -> Result<String> {
        self.branch_manager()
            .last_author_email(&branch::remote_ref(remote, name))
    }

    fn delete_local_branch(&self, name: &str, force: bool) -> Result<()> {
        self.branch_manager().delete_local_branch(name, force)
    }

    fn delete_remote_branch(&self, remote: &str, name: &str) -> Result<()> {
        self.branch_manager().delete_remote_branch(remote, name)
    }
}
