use super::repository::{execute_git_command, GitRepository};
use crate::utils::error::{Result, SweepError};

const LOCAL_REF_PREFIX: &str = "refs/heads/";

pub struct BranchManager<'a> {
    repo: &'a GitRepository,
}

impl<'a> BranchManager<'a> {
    pub fn new(repo: &'a GitRepository) -> Self {
        Self { repo }
    }

    /// Local branch names, optionally restricted to those merged into `merged_into`.
    pub fn list_local_branches(&self, merged_into: Option<&str>) -> Result<Vec<String>> {
        self.list_refs(LOCAL_REF_PREFIX, merged_into)
    }

    /// Remote-tracking branch names for `remote` with the `<remote>/` prefix
    /// stripped. The symbolic `HEAD` pointer is never returned.
    pub fn list_remote_branches(
        &self,
        remote: &str,
        merged_into: Option<&str>,
    ) -> Result<Vec<String>> {
        let prefix = remote_ref_prefix(remote);
        let names = self.list_refs(&prefix, merged_into)?;
        Ok(names.into_iter().filter(|name| name != "HEAD").collect())
    }

    pub fn last_author_email(&self, reference: &str) -> Result<String> {
        execute_git_command(self.repo, &["log", "-1", "--format=%ae", reference, "--"])
    }

    /// Without `force` the branch must be an ancestor of HEAD. Its upstream
    /// is not consulted, unlike `git branch -d`.
    pub fn delete_local_branch(&self, name: &str, force: bool) -> Result<()> {
        if !force && !self.is_ancestor_of_head(&local_ref(name))? {
            return Err(SweepError::git_operation(format!(
                "branch '{}' is not merged into HEAD",
                name
            )));
        }
        execute_git_command(self.repo, &["branch", "-D", name]).map(|_| ())
    }

    fn is_ancestor_of_head(&self, reference: &str) -> Result<bool> {
        execute_git_command(self.repo, &["rev-parse", "--verify", "--quiet", reference])?;
        let check = execute_git_command(
            self.repo,
            &["merge-base", "--is-ancestor", reference, "HEAD"],
        );
        Ok(check.is_ok())
    }

    pub fn delete_remote_branch(&self, remote: &str, name: &str) -> Result<()> {
        execute_git_command(self.repo, &["push", remote, "--delete", name]).map(|_| ())
    }

    fn list_refs(&self, prefix: &str, merged_into: Option<&str>) -> Result<Vec<String>> {
        let merged_arg = merged_into.map(|target| format!("--merged={}", target));
        let mut args = vec!["for-each-ref", "--format=%(refname)"];
        if let Some(arg) = merged_arg.as_deref() {
            args.push(arg);
        }
        args.push(prefix);

        let output = execute_git_command(self.repo, &args)?;
        Ok(parse_ref_listing(&output, prefix))
    }
}

pub fn remote_ref_prefix(remote: &str) -> String {
    format!("refs/remotes/{}/", remote)
}

pub fn local_ref(name: &str) -> String {
    format!("{}{}", LOCAL_REF_PREFIX, name)
}

pub fn remote_ref(remote: &str, name: &str) -> String {
    format!("{}{}", remote_ref_prefix(remote), name)
}

fn parse_ref_listing(output: &str, prefix: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| line.trim().strip_prefix(prefix))
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
