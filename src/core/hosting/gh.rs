//! [`HostingClient`] backed by the GitHub CLI.

use super::{HostingClient, HostingUser, PullRequestRecord};
use crate::core::sweep::types::PrState;
use crate::utils::{Result, SweepError};
use anyhow::Context;
use chrono::{DateTime, Datelike, Utc};
use serde::Deserialize;
use std::path::PathBuf;
use std::process::Command;

pub struct GhCli {
    command: String,
    pr_list_limit: u32,
    working_dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct GhUser {
    id: u64,
    login: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
enum GhPrState {
    Open,
    Closed,
    Merged,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GhPullRequest {
    number: u64,
    state: GhPrState,
    created_at: DateTime<Utc>,
    #[serde(default)]
    merged_at: Option<DateTime<Utc>>,
}

impl GhCli {
    pub fn new(command: impl Into<String>, pr_list_limit: u32) -> Self {
        Self {
            command: command.into(),
            pr_list_limit,
            working_dir: None,
        }
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        tracing::debug!(command = %self.command, args = %args.join(" "), "hosting");

        let mut cmd = Command::new(&self.command);
        cmd.args(args);
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }

        let output = cmd.output().map_err(|e| {
            SweepError::hosting(format!("Failed to run {}: {}", self.command, e))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SweepError::hosting(format!(
                "{} {} failed: {}",
                self.command,
                args.join(" "),
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    fn succeeds(&self, args: &[&str]) -> bool {
        self.run(args).is_ok()
    }
}

impl HostingClient for GhCli {
    fn is_available(&self) -> bool {
        self.succeeds(&["--version"]) && self.succeeds(&["auth", "status"])
    }

    fn authenticated_user(&self) -> Result<HostingUser> {
        let body = self.run(&["api", "user"])?;
        parse_user(&body).map_err(|e| SweepError::hosting(format!("{:#}", e)))
    }

    fn pull_requests_for_branch(&self, branch: &str) -> Result<Vec<PullRequestRecord>> {
        let limit = self.pr_list_limit.to_string();
        let body = self.run(&[
            "pr",
            "list",
            "--head",
            branch,
            "--state",
            "all",
            "--limit",
            &limit,
            "--json",
            "number,state,createdAt,mergedAt",
        ])?;
        parse_pull_requests(&body).map_err(|e| SweepError::hosting(format!("{:#}", e)))
    }
}

fn parse_user(body: &str) -> anyhow::Result<HostingUser> {
    let user: GhUser = serde_json::from_str(body).context("unexpected `api user` response")?;
    Ok(HostingUser {
        id: user.id,
        login: user.login,
    })
}

fn parse_pull_requests(body: &str) -> anyhow::Result<Vec<PullRequestRecord>> {
    let prs: Vec<GhPullRequest> =
        serde_json::from_str(body).context("unexpected `pr list` response")?;

    Ok(prs
        .into_iter()
        .map(|pr| PullRequestRecord {
            number: pr.number,
            state: match pr.state {
                GhPrState::Open => PrState::Open,
                GhPrState::Closed => PrState::Closed,
                GhPrState::Merged => PrState::Merged,
            },
            created_at: pr.created_at,
            // gh reports unmerged PRs with the zero timestamp
            merged_at: pr.merged_at.filter(|at| at.year() > 1),
        })
        .collect())
}
