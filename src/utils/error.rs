use thiserror::Error;

#[derive(Error, Debug)]
pub enum SweepError {
    #[error("Git operation failed: {message}")]
    GitOperation { message: String },

    #[error("Hosting query failed: {message}")]
    Hosting { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Not on the trunk branch: currently on '{current}', switch to '{trunk}' first")]
    NotOnTrunk { current: String, trunk: String },

    #[error("Cannot determine user identity: {message}")]
    Identity { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SweepError>;

impl SweepError {
    pub fn git_operation(message: impl Into<String>) -> Self {
        Self::GitOperation {
            message: message.into(),
        }
    }

    pub fn hosting(message: impl Into<String>) -> Self {
        Self::Hosting {
            message: message.into(),
        }
    }

    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn not_on_trunk(current: impl Into<String>, trunk: impl Into<String>) -> Self {
        Self::NotOnTrunk {
            current: current.into(),
            trunk: trunk.into(),
        }
    }

    pub fn identity(message: impl Into<String>) -> Self {
        Self::Identity {
            message: message.into(),
        }
    }
}
