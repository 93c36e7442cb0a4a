use super::{Config, HostingConfig, RemoteConfig};

pub fn default_config() -> Config {
    Config {
        remote: default_remote_config(),
        hosting: default_hosting_config(),
    }
}

pub fn default_remote_config() -> RemoteConfig {
    RemoteConfig {
        name: "origin".to_string(),
    }
}

pub fn default_hosting_config() -> HostingConfig {
    HostingConfig {
        command: "gh".to_string(),
        noreply_domain: "users.noreply.github.com".to_string(),
        pr_list_limit: 30,
    }
}

pub fn get_default_config_dir() -> std::path::PathBuf {
    if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "branchsweep") {
        proj_dirs.config_dir().to_path_buf()
    } else {
        std::env::var_os("HOME")
            .map(std::path::PathBuf::from)
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join(".config")
            .join("branchsweep")
    }
}

pub fn get_config_file_path() -> std::path::PathBuf {
    if let Ok(config_path) = std::env::var("BRANCHSWEEP_CONFIG") {
        return std::path::PathBuf::from(config_path);
    }

    get_default_config_dir().join("config.json")
}
