use crate::core::sweep::types::{PrState, PullRequestStatus};
use crate::utils::Result;
use chrono::{DateTime, Utc};

pub mod gh;

pub use gh::GhCli;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostingUser {
    pub id: u64,
    pub login: String,
}

/// One change-request as reported by the hosting service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestRecord {
    pub number: u64,
    pub state: PrState,
    pub created_at: DateTime<Utc>,
    pub merged_at: Option<DateTime<Utc>>,
}

pub trait HostingClient {
    /// Whether the tooling is installed and authenticated.
    fn is_available(&self) -> bool;
    fn authenticated_user(&self) -> Result<HostingUser>;
    /// Pull requests in any state whose head branch is exactly `branch`.
    fn pull_requests_for_branch(&self, branch: &str) -> Result<Vec<PullRequestRecord>>;
}

/// Answers "what happened to the PR for this branch?".
///
/// Only the most recently created PR counts. Errors never propagate: a failed
/// query reads as [`PrState::Absent`].
pub struct PrStatusOracle<'a> {
    client: &'a dyn HostingClient,
}

impl<'a> PrStatusOracle<'a> {
    pub fn new(client: &'a dyn HostingClient) -> Self {
        Self { client }
    }

    pub fn lookup(&self, branch: &str) -> PullRequestStatus {
        match self.client.pull_requests_for_branch(branch) {
            Ok(records) => latest_status(&records),
            Err(e) => {
                tracing::warn!(branch, error = %e, "PR lookup failed, treating as no PR");
                PullRequestStatus::absent()
            }
        }
    }
}

/// Picks the most recently created record. Ties keep the first one listed.
pub fn latest_status(records: &[PullRequestRecord]) -> PullRequestStatus {
    let latest = records.iter().fold(None::<&PullRequestRecord>, |best, record| {
        match best {
            Some(current) if current.created_at >= record.created_at => Some(current),
            _ => Some(record),
        }
    });

    match latest {
        Some(record) => PullRequestStatus {
            state: record.state,
            number: Some(record.number),
            merged_at: record.merged_at,
        },
        None => PullRequestStatus::absent(),
    }
}
