//! Configuration assembler - merge resolved parts into one RunConfig
//!
//! A single pure function taking every resolved component explicitly.
//! It re-checks the invariants the pipeline promises (install dir exists,
//! model files exist, flags agree) and fails before anything launches;
//! no partially assembled configuration ever reaches the session.

use std::path::PathBuf;

use applestar_core::{
    ConfigError, GameType, ModelPaths, ModelSlot, Race, RunConfig,
};

use crate::device::DeviceChoice;
use crate::mode::MatchPlan;

/// Fixed evaluation overrides applied to every assembled configuration
const EVAL_EPISODES: u32 = 1;

/// Build the immutable run configuration
pub fn assemble(
    install_dir: PathBuf,
    device: DeviceChoice,
    models: ModelPaths,
    plan: MatchPlan,
    races: [Race; 2],
    game_type: GameType,
) -> Result<RunConfig, ConfigError> {
    if !install_dir.is_dir() {
        return Err(ConfigError::InvalidEnvironmentPath(install_dir));
    }
    if !models.model1.exists() {
        return Err(ConfigError::ModelNotFound {
            slot: ModelSlot::Model1,
            path: models.model1,
        });
    }
    if !models.model2.exists() {
        return Err(ConfigError::ModelNotFound {
            slot: ModelSlot::Model2,
            path: models.model2,
        });
    }

    let config = RunConfig {
        install_dir,
        device: device.device,
        use_mps: device.use_mps,
        use_cuda: device.use_cuda,
        model_paths: models,
        player_identities: plan.identities,
        races,
        game_type,
        realtime: true,
        episodes: EVAL_EPISODES,
    };

    // Holds by construction of DeviceChoice
    debug_assert!(config.device_flags_consistent());

    Ok(config)
}
