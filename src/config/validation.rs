use super::{Config, ConfigError, HostingConfig, RemoteConfig, Result};

pub fn validate_config(config: &Config) -> Result<()> {
    validate_remote_config(&config.remote)?;
    validate_hosting_config(&config.hosting)?;
    Ok(())
}

pub fn validate_remote_config(remote: &RemoteConfig) -> Result<()> {
    if remote.name.is_empty() {
        return Err(ConfigError::Validation(
            "Remote name cannot be empty".to_string(),
        ));
    }

    if remote.name.contains('/') || remote.name.chars().any(char::is_whitespace) {
        return Err(ConfigError::Validation(format!(
            "Invalid remote name '{}'. Must not contain '/' or whitespace",
            remote.name
        )));
    }

    Ok(())
}

pub fn validate_hosting_config(hosting: &HostingConfig) -> Result<()> {
    if hosting.command.trim().is_empty() {
        return Err(ConfigError::Validation(
            "Hosting command cannot be empty".to_string(),
        ));
    }

    if hosting.noreply_domain.is_empty() || !hosting.noreply_domain.contains('.') {
        return Err(ConfigError::Validation(format!(
            "Invalid noreply domain '{}'",
            hosting.noreply_domain
        )));
    }

    if !(1..=100).contains(&hosting.pr_list_limit) {
        return Err(ConfigError::Validation(format!(
            "pr_list_limit must be between 1 and 100, got {}",
            hosting.pr_list_limit
        )));
    }

    Ok(())
}
