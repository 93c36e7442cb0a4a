//! The branch disposition engine.
//!
//! Pure decision logic: given what is known about a branch, pick a
//! [`Disposition`] and the [`Action`](super::types::Action) it maps to. Nothing
//! here touches git, the hosting service or the terminal.
//!
//! Evaluation happens in two phases so that a PR lookup is only ever made for
//! branches that survive [`screen`]:
//!
//! 1. [`screen`] settles merged branches and remote branches by other authors.
//! 2. [`resolve`] maps the PR state of the remaining unmerged branches.

use super::types::{Branch, Disposition, Identity, Mode, Policy, PrState, Verdict};
use crate::core::identity::is_owned;

pub const REASON_OPEN_PR: &str = "open PR";
pub const REASON_NO_PR: &str = "no PR, not merged";
pub const REASON_USER_DECLINED: &str = "no PR — user declined";
pub const REASON_PR_UNAVAILABLE: &str = "PR status unavailable";

pub fn foreign_author_reason(email: &str) -> String {
    format!("different author: {}", email)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screening {
    Settled(Verdict),
    NeedsPrState,
}

/// Ownership and ancestry checks. Local branches are always treated as owned.
pub fn screen(branch: &Branch, identity: &Identity) -> Screening {
    if branch.is_remote() && !is_owned(&branch.last_author_email, identity) {
        return Screening::Settled(Verdict::skip(
            Disposition::ForeignAuthor,
            foreign_author_reason(&branch.last_author_email),
        ));
    }

    if branch.merged_into_trunk {
        return Screening::Settled(Verdict::delete(Disposition::MergedDirect, false));
    }

    Screening::NeedsPrState
}

/// Maps the PR state of an unmerged, owned branch to a verdict.
///
/// An open PR always protects the branch; `force` only widens what happens
/// when no PR exists.
pub fn resolve(pr_state: PrState, policy: Policy) -> Verdict {
    match pr_state {
        PrState::Merged => Verdict::delete(Disposition::MergedSquash, true),
        PrState::Open => Verdict::skip(Disposition::OpenProtected, REASON_OPEN_PR),
        PrState::Closed => Verdict::delete(Disposition::Abandoned, true),
        PrState::Absent if !policy.force => {
            Verdict::skip(Disposition::OrphanSkipped, REASON_NO_PR)
        }
        PrState::Absent => match policy.mode {
            Mode::DryRun => Verdict::delete(Disposition::OrphanForced, true),
            Mode::Execute => Verdict::prompt(Disposition::OrphanForced),
        },
    }
}

/// Total classification. `pr_state` is `None` when PR lookups are unavailable
/// for the run; unmerged branches are then kept as unevaluated.
pub fn classify(
    branch: &Branch,
    identity: &Identity,
    pr_state: Option<PrState>,
    policy: Policy,
) -> Verdict {
    match screen(branch, identity) {
        Screening::Settled(verdict) => verdict,
        Screening::NeedsPrState => match pr_state {
            Some(state) => resolve(state, policy),
            None => Verdict::skip(Disposition::Unevaluated, REASON_PR_UNAVAILABLE),
        },
    }
}
