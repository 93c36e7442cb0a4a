use super::disposition::{classify, resolve, screen, Screening};
use super::enumerate::{enumerate_branches, BranchInventory};
use super::executor::{ActionExecutor, Confirmer, Outcome};
use super::report::RunCounters;
use super::types::{Branch, Identity, Policy, Verdict};
use crate::core::git::VersionControl;
use crate::core::hosting::{HostingClient, PrStatusOracle};
use crate::core::identity::resolve_identity;
use crate::ui::{StatusSink, Tag};
use crate::utils::{Result, SweepError};

#[derive(Debug, Clone)]
pub struct SweepOptions {
    pub policy: Policy,
    pub trunk: String,
    pub remote: String,
    pub noreply_domain: String,
}

/// Drives one sweep: precondition, sync, identity, enumeration, then each
/// branch through the disposition engine and the executor, in order.
pub struct SweepRunner<'a> {
    vcs: &'a dyn VersionControl,
    hosting: Option<&'a dyn HostingClient>,
    confirmer: &'a dyn Confirmer,
    options: SweepOptions,
}

struct RunContext<'a> {
    identity: Identity,
    oracle: Option<PrStatusOracle<'a>>,
    executor: ActionExecutor<'a>,
}

impl<'a> SweepRunner<'a> {
    pub fn new(
        vcs: &'a dyn VersionControl,
        hosting: Option<&'a dyn HostingClient>,
        confirmer: &'a dyn Confirmer,
        options: SweepOptions,
    ) -> Self {
        Self {
            vcs,
            hosting,
            confirmer,
            options,
        }
    }

    pub fn run(&self, sink: &mut dyn StatusSink) -> Result<RunCounters> {
        self.ensure_on_trunk()?;

        sink.emit(
            Tag::Info,
            &format!(
                "Mode: {}{}",
                self.options.policy.mode,
                if self.options.policy.force { " (force)" } else { "" }
            ),
        );

        let remote = self.sync(sink)?;
        let hosting = self.usable_hosting(sink);

        let identity = resolve_identity(self.vcs, hosting, &self.options.noreply_domain)?;
        let emails: Vec<&str> = identity.emails().collect();
        sink.emit(Tag::Info, &format!("Identity: {}", emails.join(", ")));

        let inventory = enumerate_branches(self.vcs, &self.options.trunk, remote)?;

        let context = RunContext {
            identity,
            oracle: hosting.map(PrStatusOracle::new),
            executor: ActionExecutor::new(
                self.vcs,
                self.confirmer,
                &self.options.remote,
                self.options.policy.mode,
            ),
        };

        let mut counters = RunCounters::new();
        self.process_inventory(&inventory, &context, &mut counters, sink);
        Ok(counters)
    }

    fn ensure_on_trunk(&self) -> Result<()> {
        let current = self.vcs.current_branch()?;
        if current != self.options.trunk {
            return Err(SweepError::not_on_trunk(current, &self.options.trunk));
        }
        Ok(())
    }

    /// Fetches and fast-forwards trunk. Returns the remote to enumerate, or
    /// `None` when the configured remote does not exist.
    fn sync(&self, sink: &mut dyn StatusSink) -> Result<Option<&str>> {
        let remote = self.options.remote.as_str();

        if !self.vcs.remote_exists(remote)? {
            sink.emit(
                Tag::Warn,
                &format!("Remote '{}' not found; only local branches will be checked", remote),
            );
            return Ok(None);
        }

        sink.emit(Tag::Info, &format!("Fetching {} (prune)", remote));
        self.vcs.fetch_prune(remote)?;

        self.vcs.pull_ff_only(remote, &self.options.trunk)?;
        sink.emit(
            Tag::Ok,
            &format!("{} is up to date with {}/{}", self.options.trunk, remote, self.options.trunk),
        );

        Ok(Some(remote))
    }

    fn usable_hosting(&self, sink: &mut dyn StatusSink) -> Option<&'a dyn HostingClient> {
        match self.hosting {
            Some(client) if client.is_available() => Some(client),
            _ => {
                sink.emit(
                    Tag::Warn,
                    "Hosting CLI unavailable; squash-merge and PR checks are disabled, unmerged branches will be kept",
                );
                None
            }
        }
    }

    fn process_inventory(
        &self,
        inventory: &BranchInventory,
        context: &RunContext<'_>,
        counters: &mut RunCounters,
        sink: &mut dyn StatusSink,
    ) {
        let groups = [
            ("merged local", &inventory.merged_local),
            ("merged remote", &inventory.merged_remote),
            ("unmerged local", &inventory.unmerged_local),
            ("unmerged remote", &inventory.unmerged_remote),
        ];

        for (title, branches) in groups {
            if branches.is_empty() {
                continue;
            }
            sink.emit(
                Tag::Info,
                &format!("Checking {} {} branches", branches.len(), title),
            );
            for branch in branches {
                self.process_branch(branch, context, counters, sink);
            }
        }
    }

    fn process_branch(
        &self,
        branch: &Branch,
        context: &RunContext<'_>,
        counters: &mut RunCounters,
        sink: &mut dyn StatusSink,
    ) {
        let (verdict, detail) = self.decide(branch, context);
        tracing::debug!(
            branch = %branch.label,
            disposition = %verdict.disposition,
            action = ?verdict.action,
            "classified"
        );

        let outcome = context.executor.execute(branch, &verdict.action);
        match &outcome {
            Outcome::Deleted => sink.emit(
                Tag::Del,
                &format!("{}: deleted ({}{})", branch.label, verdict.disposition, detail),
            ),
            Outcome::WouldDelete => sink.emit(
                Tag::Dry,
                &format!("{}: would delete ({}{})", branch.label, verdict.disposition, detail),
            ),
            Outcome::Kept { reason } => {
                sink.emit(Tag::Skip, &format!("{}: {}{}", branch.label, reason, detail))
            }
            Outcome::Failed { error } => sink.emit(
                Tag::Err,
                &format!("{}: delete failed: {}", branch.label, error),
            ),
        }

        counters.record(branch, &outcome);
    }

    /// Runs the engine, only consulting the PR oracle when screening leaves
    /// the branch undecided.
    fn decide(&self, branch: &Branch, context: &RunContext<'_>) -> (Verdict, String) {
        let policy = self.options.policy;
        match screen(branch, &context.identity) {
            Screening::Settled(verdict) => (verdict, String::new()),
            Screening::NeedsPrState => match &context.oracle {
                Some(oracle) => {
                    let status = oracle.lookup(&branch.name);
                    (resolve(status.state, policy), status.describe())
                }
                None => (
                    classify(branch, &context.identity, None, policy),
                    String::new(),
                ),
            },
        }
    }
}
