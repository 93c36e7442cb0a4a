use super::types::Branch;
use crate::core::git::VersionControl;
use crate::utils::Result;
use std::collections::HashSet;

/// Author recorded when the last commit of a branch cannot be read. Never
/// matches a configured identity.
pub const UNKNOWN_AUTHOR: &str = "<unknown>";

/// The four disjoint branch lists a run works through, in enumeration order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BranchInventory {
    pub merged_local: Vec<Branch>,
    pub unmerged_local: Vec<Branch>,
    pub merged_remote: Vec<Branch>,
    pub unmerged_remote: Vec<Branch>,
}

/// Partitions local branches (and remote-tracking branches of `remote`, when
/// given) into merged / unmerged relative to `trunk`. Trunk itself and the
/// remote `HEAD` pointer are never included.
///
/// Assumes trunk is checked out and already fast-forwarded to the remote.
pub fn enumerate_branches(
    vcs: &dyn VersionControl,
    trunk: &str,
    remote: Option<&str>,
) -> Result<BranchInventory> {
    let mut inventory = BranchInventory::default();

    let merged = without_trunk(vcs.list_local_branches(Some(trunk))?, trunk);
    let all = without_trunk(vcs.list_local_branches(None)?, trunk);
    let (merged, unmerged) = partition(all, &merged);

    inventory.merged_local = merged
        .into_iter()
        .map(|name| {
            let author = author_or_unknown(vcs.local_author_email(&name), &name);
            Branch::local(name, author, true)
        })
        .collect();
    inventory.unmerged_local = unmerged
        .into_iter()
        .map(|name| {
            let author = author_or_unknown(vcs.local_author_email(&name), &name);
            Branch::local(name, author, false)
        })
        .collect();

    if let Some(remote) = remote {
        let merged = without_trunk(vcs.list_remote_branches(remote, Some(trunk))?, trunk);
        let all = without_trunk(vcs.list_remote_branches(remote, None)?, trunk);
        let (merged, unmerged) = partition(all, &merged);

        inventory.merged_remote = merged
            .into_iter()
            .map(|name| {
                let author = author_or_unknown(vcs.remote_author_email(remote, &name), &name);
                Branch::remote(remote, name, author, true)
            })
            .collect();
        inventory.unmerged_remote = unmerged
            .into_iter()
            .map(|name| {
                let author = author_or_unknown(vcs.remote_author_email(remote, &name), &name);
                Branch::remote(remote, name, author, false)
            })
            .collect();
    }

    tracing::debug!(
        merged_local = inventory.merged_local.len(),
        unmerged_local = inventory.unmerged_local.len(),
        merged_remote = inventory.merged_remote.len(),
        unmerged_remote = inventory.unmerged_remote.len(),
        "enumerated branches"
    );

    Ok(inventory)
}

fn without_trunk(names: Vec<String>, trunk: &str) -> Vec<String> {
    names
        .into_iter()
        .filter(|name| name != trunk && name != "HEAD")
        .collect()
}

/// Splits `all` into (merged, unmerged), keeping the order of `all`.
fn partition(all: Vec<String>, merged: &[String]) -> (Vec<String>, Vec<String>) {
    let merged: HashSet<&str> = merged.iter().map(String::as_str).collect();
    all.into_iter()
        .partition(|name| merged.contains(name.as_str()))
}

fn author_or_unknown(result: Result<String>, branch: &str) -> String {
    match result {
        Ok(email) if !email.is_empty() => email,
        Ok(_) => UNKNOWN_AUTHOR.to_string(),
        Err(e) => {
            tracing::warn!(branch, error = %e, "could not read last commit author");
            UNKNOWN_AUTHOR.to_string()
        }
    }
}
