use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Local,
    Remote,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Local => write!(f, "local"),
            Scope::Remote => write!(f, "remote"),
        }
    }
}

/// A branch candidate produced by enumeration. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    /// Scope-stripped name, e.g. `old-fix` for `origin/old-fix`.
    pub name: String,
    /// Name as shown to the user, e.g. `origin/old-fix`.
    pub label: String,
    pub scope: Scope,
    pub last_author_email: String,
    pub merged_into_trunk: bool,
}

impl Branch {
    pub fn local(name: impl Into<String>, author: impl Into<String>, merged: bool) -> Self {
        let name = name.into();
        Self {
            label: name.clone(),
            name,
            scope: Scope::Local,
            last_author_email: author.into(),
            merged_into_trunk: merged,
        }
    }

    pub fn remote(
        remote: &str,
        name: impl Into<String>,
        author: impl Into<String>,
        merged: bool,
    ) -> Self {
        let name = name.into();
        Self {
            label: format!("{}/{}", remote, name),
            name,
            scope: Scope::Remote,
            last_author_email: author.into(),
            merged_into_trunk: merged,
        }
    }

    pub fn is_remote(&self) -> bool {
        self.scope == Scope::Remote
    }
}

/// Email addresses that count as "the current user".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    emails: BTreeSet<String>,
}

impl Identity {
    pub fn new(primary: impl Into<String>) -> Self {
        let mut emails = BTreeSet::new();
        emails.insert(primary.into());
        Self { emails }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.emails.insert(email.into());
        self
    }

    pub fn emails(&self) -> impl Iterator<Item = &str> {
        self.emails.iter().map(String::as_str)
    }

    pub fn contains(&self, email: &str) -> bool {
        self.emails.contains(email)
    }
}

/// Lifecycle state of the most recent pull request for a branch name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrState {
    Open,
    Merged,
    Closed,
    /// No pull request exists for the exact branch name, or the lookup failed.
    Absent,
}

impl fmt::Display for PrState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrState::Open => write!(f, "OPEN"),
            PrState::Merged => write!(f, "MERGED"),
            PrState::Closed => write!(f, "CLOSED"),
            PrState::Absent => write!(f, "NONE"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestStatus {
    pub state: PrState,
    pub number: Option<u64>,
    pub merged_at: Option<DateTime<Utc>>,
}

impl PullRequestStatus {
    pub fn absent() -> Self {
        Self {
            state: PrState::Absent,
            number: None,
            merged_at: None,
        }
    }

    pub fn with_state(state: PrState) -> Self {
        Self {
            state,
            number: None,
            merged_at: None,
        }
    }

    /// Short human suffix such as ` (PR #12, merged 2024-03-01)`.
    pub fn describe(&self) -> String {
        match (self.number, self.merged_at) {
            (Some(number), Some(at)) => {
                format!(" (PR #{}, merged {})", number, at.format("%Y-%m-%d"))
            }
            (Some(number), None) => format!(" (PR #{})", number),
            (None, Some(at)) => format!(" (merged {})", at.format("%Y-%m-%d")),
            (None, None) => String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    MergedDirect,
    MergedSquash,
    Abandoned,
    OpenProtected,
    ForeignAuthor,
    OrphanSkipped,
    OrphanForced,
    /// Unmerged branch whose PR state could not be obtained at all.
    Unevaluated,
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Disposition::MergedDirect => "merged",
            Disposition::MergedSquash => "squash-merged",
            Disposition::Abandoned => "abandoned",
            Disposition::OpenProtected => "open PR",
            Disposition::ForeignAuthor => "foreign author",
            Disposition::OrphanSkipped => "orphan",
            Disposition::OrphanForced => "orphan (forced)",
            Disposition::Unevaluated => "unevaluated",
        };
        write!(f, "{}", text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Delete the branch. `force` allows deleting a local branch that is not
    /// an ancestor of trunk.
    Delete { force: bool },
    Skip { reason: String },
    /// Ask the user before deleting; a decline keeps the branch.
    Prompt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    DryRun,
    Execute,
}

impl Mode {
    pub fn is_dry_run(&self) -> bool {
        matches!(self, Mode::DryRun)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::DryRun => write!(f, "dry-run"),
            Mode::Execute => write!(f, "execute"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    pub force: bool,
    pub mode: Mode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub disposition: Disposition,
    pub action: Action,
}

impl Verdict {
    pub fn delete(disposition: Disposition, force: bool) -> Self {
        Self {
            disposition,
            action: Action::Delete { force },
        }
    }

    pub fn skip(disposition: Disposition, reason: impl Into<String>) -> Self {
        Self {
            disposition,
            action: Action::Skip {
                reason: reason.into(),
            },
        }
    }

    pub fn prompt(disposition: Disposition) -> Self {
        Self {
            disposition,
            action: Action::Prompt,
        }
    }

    pub fn is_deletable(&self) -> bool {
        !matches!(self.action, Action::Skip { .. })
    }
}
