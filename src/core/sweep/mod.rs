//! Branch sweep: enumeration, classification, execution and tallies.

pub mod disposition;
pub mod enumerate;
pub mod executor;
pub mod report;
pub mod runner;
pub mod types;

pub use disposition::{classify, resolve, screen, Screening};
pub use enumerate::{enumerate_branches, BranchInventory};
pub use executor::{ActionExecutor, Confirmer, Outcome};
pub use report::{KeptBranch, RunCounters};
pub use runner::{SweepOptions, SweepRunner};
pub use types::{
    Action, Branch, Disposition, Identity, Mode, Policy, PrState, PullRequestStatus, Scope,
    Verdict,
};
