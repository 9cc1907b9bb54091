//! Error types for reins.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Profile '{0}' does not exist.")]
    ProfileNotFound(String),

    #[error("No active profile selected. Use `reins use <name>` or `reins select` to select a profile.")]
    NoActiveProfile,

    #[error("Backend '{0}' is not a known backend and was not found on PATH.")]
    BackendNotFound(String),

    #[error("No usable backend found.")]
    NoUsableBackend,

    #[error("Failed to install '{0}'. Check your permissions and network connection.")]
    InstallFailed(String),

    #[error("{0} cannot be empty.")]
    EmptyField(&'static str),

    #[error("Could not determine the configuration directory.")]
    NoConfigDir,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error(transparent)]
    Prompt(#[from] dialoguer::Error),
}
