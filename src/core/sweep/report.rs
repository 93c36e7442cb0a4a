use super::executor::Outcome;
use super::types::{Branch, Scope};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeptBranch {
    pub label: String,
    pub reason: String,
}

/// Run-scoped tallies. In dry-run mode the deletion counts are "would delete"
/// counts.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunCounters {
    pub deleted_local: usize,
    pub deleted_remote: usize,
    pub kept: Vec<KeptBranch>,
}

impl RunCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, branch: &Branch, outcome: &Outcome) {
        match outcome {
            Outcome::Deleted | Outcome::WouldDelete => match branch.scope {
                Scope::Local => self.deleted_local += 1,
                Scope::Remote => self.deleted_remote += 1,
            },
            Outcome::Kept { reason } => self.keep(&branch.label, reason.clone()),
            Outcome::Failed { error } => {
                self.keep(&branch.label, format!("delete failed: {}", error))
            }
        }
    }

    pub fn keep(&mut self, label: &str, reason: impl Into<String>) {
        self.kept.push(KeptBranch {
            label: label.to_string(),
            reason: reason.into(),
        });
    }

    pub fn total_deleted(&self) -> usize {
        self.deleted_local + self.deleted_remote
    }
}
