pub mod commands;
pub mod parser;

#[cfg(test)]
mod tests;

pub use parser::Cli;

use crate::config::ConfigManager;
use crate::utils::{Result, SweepError};

pub fn execute_command(cli: Cli) -> Result<()> {
    let config = ConfigManager::load()
        .map_err(|e| SweepError::config_error(format!("Failed to load config: {}", e)))?;

    commands::sweep::execute(config, &cli)
}

/// Exit code for a clap parse failure: 0 for help/version, 1 otherwise.
pub fn parse_error_exit_code(error: &clap::Error) -> i32 {
    if error.use_stderr() {
        1
    } else {
        0
    }
}
