pub mod cli;
pub mod config;
pub mod core;
pub mod ui;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use crate::config::Config;
pub use crate::core::git::{GitService, VersionControl};
pub use crate::core::hosting::{GhCli, HostingClient};
pub use crate::core::sweep::{Disposition, Mode, PrState, RunCounters, SweepRunner};
pub use crate::utils::{Result, SweepError};
