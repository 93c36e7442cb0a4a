use crate::cli::parser::Cli;
use crate::config::{Config, TRUNK_BRANCH};
use crate::core::git::GitService;
use crate::core::hosting::{GhCli, HostingClient};
use crate::core::sweep::{SweepOptions, SweepRunner};
use crate::ui::{ConsoleSink, StatusSink};
use crate::utils::Result;

pub mod interaction;
pub mod reporter;

use interaction::TerminalConfirmer;
use reporter::SweepReporter;

pub fn execute(config: Config, cli: &Cli) -> Result<()> {
    let git_service = GitService::discover()?;
    let hosting = GhCli::new(config.hosting_command(), config.hosting.pr_list_limit)
        .with_working_dir(&git_service.repository().root);

    let mut sink = ConsoleSink::new();
    let sweeper = BranchSweeper::new(git_service, hosting, config);
    sweeper.execute_sweep(cli, &mut sink)
}

struct BranchSweeper {
    git_service: GitService,
    hosting: GhCli,
    config: Config,
}

impl BranchSweeper {
    fn new(git_service: GitService, hosting: GhCli, config: Config) -> Self {
        Self {
            git_service,
            hosting,
            config,
        }
    }

    fn options(&self, cli: &Cli) -> SweepOptions {
        SweepOptions {
            policy: cli.policy(),
            trunk: TRUNK_BRANCH.to_string(),
            remote: self.config.remote_name().to_string(),
            noreply_domain: self.config.hosting.noreply_domain.clone(),
        }
    }

    fn execute_sweep(&self, cli: &Cli, sink: &mut dyn StatusSink) -> Result<()> {
        let confirmer = TerminalConfirmer::new();
        let hosting: &dyn HostingClient = &self.hosting;
        let options = self.options(cli);
        let mode = options.policy.mode;

        let runner = SweepRunner::new(&self.git_service, Some(hosting), &confirmer, options);
        let counters = runner.run(sink)?;

        SweepReporter::new(mode).show_results(&counters, sink);
        Ok(())
    }
}
