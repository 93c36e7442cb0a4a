use super::disposition::REASON_USER_DECLINED;
use super::types::{Action, Branch, Mode, Scope};
use crate::core::git::VersionControl;

/// Asks the user whether a branch may be deleted.
pub trait Confirmer {
    fn confirm(&self, branch_label: &str) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Deleted,
    WouldDelete,
    Kept { reason: String },
    Failed { error: String },
}

/// Carries out an [`Action`]. In dry-run mode nothing destructive is issued.
pub struct ActionExecutor<'a> {
    vcs: &'a dyn VersionControl,
    confirmer: &'a dyn Confirmer,
    remote: &'a str,
    mode: Mode,
}

impl<'a> ActionExecutor<'a> {
    pub fn new(
        vcs: &'a dyn VersionControl,
        confirmer: &'a dyn Confirmer,
        remote: &'a str,
        mode: Mode,
    ) -> Self {
        Self {
            vcs,
            confirmer,
            remote,
            mode,
        }
    }

    pub fn execute(&self, branch: &Branch, action: &Action) -> Outcome {
        match (action, self.mode) {
            (Action::Skip { reason }, _) => Outcome::Kept {
                reason: reason.clone(),
            },
            (Action::Delete { .. } | Action::Prompt, Mode::DryRun) => Outcome::WouldDelete,
            (Action::Delete { force }, Mode::Execute) => self.delete(branch, *force),
            (Action::Prompt, Mode::Execute) => {
                if self.confirmer.confirm(&branch.label) {
                    self.delete(branch, true)
                } else {
                    Outcome::Kept {
                        reason: REASON_USER_DECLINED.to_string(),
                    }
                }
            }
        }
    }

    fn delete(&self, branch: &Branch, force: bool) -> Outcome {
        let result = match branch.scope {
            Scope::Local => self.vcs.delete_local_branch(&branch.name, force),
            Scope::Remote => self.vcs.delete_remote_branch(self.remote, &branch.name),
        };

        match result {
            Ok(()) => Outcome::Deleted,
            Err(e) => {
                tracing::warn!(branch = %branch.label, error = %e, "delete failed");
                Outcome::Failed {
                    error: first_error_line(&e.to_string()),
                }
            }
        }
    }
}

/// Condenses multi-line git output to the line carrying git's own
/// `error:`/`fatal:` message, falling back to the first non-empty line.
fn first_error_line(message: &str) -> String {
    let lines: Vec<&str> = message
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    for line in &lines {
        for marker in ["fatal:", "error:"] {
            if let Some(start) = line.find(marker) {
                return line[start..].to_string();
            }
        }
    }

    lines.first().map(|line| line.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockVcs, ScriptedConfirmer};

    #[test]
    fn test_dry_run_never_deletes() {
        let vcs = MockVcs::new();
        let confirmer = ScriptedConfirmer::always(true);
        let executor = ActionExecutor::new(&vcs, &confirmer, "origin", Mode::DryRun);

        let local = Branch::local("a", "me@example.com", false);
        let remote = Branch::remote("origin", "b", "me@example.com", false);

        for action in [Action::Delete { force: true }, Action::Delete { force: false }, Action::Prompt] {
            assert_eq!(executor.execute(&local, &action), Outcome::WouldDelete);
            assert_eq!(executor.execute(&remote, &action), Outcome::WouldDelete);
        }

        assert!(vcs.deleted_local().is_empty());
        assert!(vcs.deleted_remote().is_empty());
        assert!(confirmer.asked().is_empty());
    }

    #[test]
    fn test_execute_deletes_by_scope() {
        let vcs = MockVcs::new();
        let confirmer = ScriptedConfirmer::always(false);
        let executor = ActionExecutor::new(&vcs, &confirmer, "origin", Mode::Execute);

        let local = Branch::local("merged", "me@example.com", true);
        let remote = Branch::remote("origin", "squashed", "me@example.com", false);

        assert_eq!(
            executor.execute(&local, &Action::Delete { force: false }),
            Outcome::Deleted
        );
        assert_eq!(
            executor.execute(&remote, &Action::Delete { force: true }),
            Outcome::Deleted
        );

        assert_eq!(vcs.deleted_local(), vec![("merged".to_string(), false)]);
        assert_eq!(
            vcs.deleted_remote(),
            vec![("origin".to_string(), "squashed".to_string())]
        );
    }

    #[test]
    fn test_skip_keeps_reason() {
        let vcs = MockVcs::new();
        let confirmer = ScriptedConfirmer::always(true);
        let executor = ActionExecutor::new(&vcs, &confirmer, "origin", Mode::Execute);

        let branch = Branch::local("wip", "me@example.com", false);
        let outcome = executor.execute(
            &branch,
            &Action::Skip {
                reason: "open PR".to_string(),
            },
        );
        assert_eq!(
            outcome,
            Outcome::Kept {
                reason: "open PR".to_string()
            }
        );
        assert!(vcs.deleted_local().is_empty());
    }

    #[test]
    fn test_prompt_accepted_force_deletes() {
        let vcs = MockVcs::new();
        let confirmer = ScriptedConfirmer::always(true);
        let executor = ActionExecutor::new(&vcs, &confirmer, "origin", Mode::Execute);

        let branch = Branch::local("orphan", "me@example.com", false);
        assert_eq!(executor.execute(&branch, &Action::Prompt), Outcome::Deleted);
        assert_eq!(vcs.deleted_local(), vec![("orphan".to_string(), true)]);
        assert_eq!(confirmer.asked(), vec!["orphan".to_string()]);
    }

    #[test]
    fn test_prompt_declined_keeps_branch() {
        let vcs = MockVcs::new();
        let confirmer = ScriptedConfirmer::always(false);
        let executor = ActionExecutor::new(&vcs, &confirmer, "origin", Mode::Execute);

        let branch = Branch::remote("origin", "orphan", "me@example.com", false);
        assert_eq!(
            executor.execute(&branch, &Action::Prompt),
            Outcome::Kept {
                reason: "no PR — user declined".to_string()
            }
        );
        assert_eq!(confirmer.asked(), vec!["origin/orphan".to_string()]);
        assert!(vcs.deleted_remote().is_empty());
    }

    #[test]
    fn test_failed_delete_is_reported() {
        let vcs = MockVcs::new().with_failing_delete("gone");
        let confirmer = ScriptedConfirmer::always(true);
        let executor = ActionExecutor::new(&vcs, &confirmer, "origin", Mode::Execute);

        let branch = Branch::local("gone", "me@example.com", true);
        match executor.execute(&branch, &Action::Delete { force: false }) {
            Outcome::Failed { error } => {
                assert!(error.contains("gone"));
                assert!(!error.contains('\n'));
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn test_first_error_line() {
        let push_failure = "Git operation failed: Git command failed (push origin --delete x): To /tmp/remote.git\n ! [remote rejected] x (hook declined)\nerror: failed to push some refs to '/tmp/remote.git'";
        assert_eq!(
            first_error_line(push_failure),
            "error: failed to push some refs to '/tmp/remote.git'"
        );

        let branch_failure = "Git operation failed: Git command failed (branch -D x): error: branch 'x' not found.\nhint: see git branch --list";
        assert_eq!(first_error_line(branch_failure), "error: branch 'x' not found.");

        assert_eq!(first_error_line("\n  permission denied  \nretry later"), "permission denied");
        assert_eq!(first_error_line(""), "");
    }
}
