//! Error taxonomy for launch-configuration resolution
//!
//! Every failure is detected at the point of resolution and surfaced
//! immediately; the first error in pipeline order terminates the run.

use std::path::PathBuf;

use crate::types::ModelSlot;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No installation path could be determined
    #[error(
        "SC2PATH is not set and no StarCraft II installation was found; \
         install the game or point SC2PATH at your installation"
    )]
    EnvironmentNotFound,

    /// The supplied installation path is not a directory
    #[error("SC2PATH is '{}', but there is no directory there", .0.display())]
    InvalidEnvironmentPath(PathBuf),

    /// A resolved model path does not exist on disk
    #[error("{slot} not found at {}", .path.display())]
    ModelNotFound { slot: ModelSlot, path: PathBuf },

    /// Base configuration file could not be read
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Base configuration file could not be parsed
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
