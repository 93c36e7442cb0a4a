use crate::core::sweep::{Mode, Policy};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "branchsweep")]
#[command(about = "Delete branches whose work has already landed on main")]
#[command(
    version,
    long_about = "Deletes local and remote branches that are merged into main, squash-merged \
                  through a pull request, or abandoned with a closed pull request. Branches with \
                  open pull requests or another author are always kept.\n\n\
                  Runs as a dry run unless --execute is given. Must be run from main."
)]
#[command(after_help = "EXAMPLES:
    # Preview what would be deleted
    branchsweep

    # Delete for real
    branchsweep --execute

    # Also offer to delete unmerged branches that never had a pull request
    branchsweep --execute --force")]
pub struct Cli {
    /// Only report what would be deleted (default)
    #[arg(long, conflicts_with = "execute")]
    pub dry_run: bool,

    /// Actually delete branches
    #[arg(long)]
    pub execute: bool,

    /// Include unmerged branches without any pull request (prompted in --execute)
    #[arg(long)]
    pub force: bool,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.execute {
            Mode::Execute
        } else {
            Mode::DryRun
        }
    }

    pub fn policy(&self) -> Policy {
        Policy {
            force: self.force,
            mode: self.mode(),
        }
    }
}
