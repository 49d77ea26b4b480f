//! Resolved run configuration
//!
//! `RunConfig` is the immutable output of the launch pipeline. It is built
//! once by the assembler, then consumed read-only by the session for the
//! duration of a single match; it is never reused across matches.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::types::{Device, GameType, Race};

/// Both model slots resolved to concrete, existing files
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelPaths {
    pub model1: PathBuf,
    pub model2: PathBuf,
}

/// Fully resolved configuration for one match
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunConfig {
    /// Validated game installation directory
    pub install_dir: PathBuf,
    /// Selected compute backend; agrees with the two flags below
    pub device: Device,
    pub use_mps: bool,
    pub use_cuda: bool,
    pub model_paths: ModelPaths,
    /// Side 0 and side 1 identities, order-significant
    pub player_identities: [String; 2],
    pub races: [Race; 2],
    pub game_type: GameType,
    /// Evaluation play is always realtime, one episode
    pub realtime: bool,
    pub episodes: u32,
}

impl RunConfig {
    /// True when the device enum and the backend flags agree and at most
    /// one accelerator flag is set
    pub fn device_flags_consistent(&self) -> bool {
        match self.device {
            Device::Cpu => !self.use_mps && !self.use_cuda,
            Device::Cuda => !self.use_mps && self.use_cuda,
            Device::Mps => self.use_mps && !self.use_cuda,
        }
    }
}
