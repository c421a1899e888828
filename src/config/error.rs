use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating the project configuration.
///
/// These are reported to the user before any file is processed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No config file found at {}, run 'fasi7 init' to create one", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yml::Error,
    },

    #[error("{0}")]
    Missing(&'static str),

    #[error("Invalid value for '{key}': {reason}")]
    Invalid { key: &'static str, reason: String },
}
