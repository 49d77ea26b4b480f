//! Applestar Launch - Configuration resolution pipeline
//!
//! Turns command-line intent plus the persisted base configuration into a
//! single consistent `RunConfig`:
//! - Environment discovery (game installation path)
//! - Accelerator selection with ordered fallback (Metal > CUDA > CPU)
//! - Model-path resolution with defaulting and existence checks
//! - Game-mode-to-player-identity derivation
//! - Assembly into one immutable configuration
//!
//! Stages run strictly in order; the first failure terminates resolution.

pub mod assemble;
pub mod device;
pub mod env;
pub mod mode;
pub mod models;

use applestar_core::{ConfigError, GameType, ModelPaths, ModelSlot, Race, RunConfig, UserConfig};

pub use device::{AcceleratorProbe, DeviceChoice, SystemProbe};
pub use env::Platform;
pub use mode::MatchPlan;

/// Command-line intent, already parsed but not yet resolved
#[derive(Clone, Debug)]
pub struct LaunchIntent {
    /// Model name (no extension) overriding the model1 slot
    pub model1: Option<String>,
    /// Model name (no extension) overriding the model2 slot
    pub model2: Option<String>,
    /// Force CPU, bypassing accelerator probing
    pub cpu: bool,
    pub game_type: GameType,
    /// Race written into side 1's slot
    pub race: Race,
    /// SC2PATH value, if set (empty counts as unset)
    pub sc2_path: Option<String>,
    pub platform: Platform,
}

/// Run the full resolution pipeline
///
/// Both model slots resolve unconditionally, even in modes where side 1
/// never reads model2; a missing model2 therefore fails the run in every
/// mode.
pub fn resolve(
    intent: &LaunchIntent,
    base: &UserConfig,
    probe: &dyn AcceleratorProbe,
) -> Result<RunConfig, ConfigError> {
    let install_dir = env::locate(intent.sc2_path.as_deref(), intent.platform)?;

    let device = device::select(intent.cpu, probe);

    let models_dir = &base.actor.models_dir;
    let model1 = models::resolve(
        ModelSlot::Model1,
        intent.model1.as_deref(),
        &base.actor.model_paths.model1,
        models_dir,
    )?;
    let model2 = models::resolve(
        ModelSlot::Model2,
        intent.model2.as_deref(),
        &base.actor.model_paths.model2,
        models_dir,
    )?;

    let plan = mode::derive(intent.game_type, &model1, &model2, intent.model2.as_deref());
    let races = mode::apply_race_override(&base.env.races, intent.race);

    assemble::assemble(
        install_dir,
        device,
        ModelPaths { model1, model2 },
        plan,
        races,
        intent.game_type,
    )
}
