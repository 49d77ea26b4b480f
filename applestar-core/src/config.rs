//! Persisted base configuration
//!
//! The launcher starts from a `UserConfig` loaded from JSON (or built-in
//! defaults when no file is given) and resolves it into a `RunConfig`.
//! The nested actor/env/common shape mirrors what the match-runner stack
//! consumes; every field has a serde default so partial files work.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{Device, Race};

/// Sentinel value in a model slot meaning "use the bundled default model"
pub const DEFAULT_MODEL_SENTINEL: &str = "default";

/// Base configuration as persisted on disk
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    pub actor: ActorConfig,
    pub env: EnvConfig,
    pub common: CommonConfig,
}

/// Actor section: model slots and inference device
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ActorConfig {
    pub model_paths: ModelSlots,
    pub device: Device,
    pub use_mps: bool,
    pub use_cuda: bool,
    pub player_ids: Vec<String>,
    /// Base directory explicit model names resolve against
    pub models_dir: PathBuf,
    /// Episodes per launch; evaluation play runs exactly one
    pub episode_num: u32,
}

impl Default for ActorConfig {
    fn default() -> Self {
        Self {
            model_paths: ModelSlots::default(),
            device: Device::Mps,
            use_mps: true,
            use_cuda: false,
            player_ids: Vec::new(),
            models_dir: PathBuf::from("."),
            episode_num: 1,
        }
    }
}

/// The two model slots, both defaulted to the sentinel
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelSlots {
    pub model1: String,
    pub model2: String,
}

impl Default for ModelSlots {
    fn default() -> Self {
        Self {
            model1: DEFAULT_MODEL_SENTINEL.to_string(),
            model2: DEFAULT_MODEL_SENTINEL.to_string(),
        }
    }
}

/// Env section: per-side identities and races
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvConfig {
    pub player_ids: Vec<String>,
    pub races: Vec<Race>,
    pub realtime: bool,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            player_ids: Vec::new(),
            races: vec![Race::Zerg, Race::Zerg],
            realtime: true,
        }
    }
}

/// Common section: what kind of run this is
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CommonConfig {
    #[serde(rename = "type")]
    pub run_type: String,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            run_type: "play".to_string(),
        }
    }
}

impl UserConfig {
    /// Load from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_evaluation_play() {
        let config = UserConfig::default();
        assert_eq!(config.actor.model_paths.model1, DEFAULT_MODEL_SENTINEL);
        assert_eq!(config.actor.model_paths.model2, DEFAULT_MODEL_SENTINEL);
        assert_eq!(config.actor.device, Device::Mps);
        assert_eq!(config.env.races, vec![Race::Zerg, Race::Zerg]);
        assert!(config.env.realtime);
        assert_eq!(config.actor.episode_num, 1);
        assert_eq!(config.common.run_type, "play");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"actor": {{"model_paths": {{"model1": "checkpoints/sl_model.pth"}}}}}}"#
        )
        .unwrap();

        let config = UserConfig::load(file.path()).unwrap();
        assert_eq!(config.actor.model_paths.model1, "checkpoints/sl_model.pth");
        // Untouched fields come from the defaults
        assert_eq!(config.actor.model_paths.model2, DEFAULT_MODEL_SENTINEL);
        assert_eq!(config.env.races.len(), 2);
    }

    #[test]
    fn test_round_trip() {
        let config = UserConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: UserConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.actor.model_paths.model1, config.actor.model_paths.model1);
        assert_eq!(back.common.run_type, config.common.run_type);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = UserConfig::load(Path::new("/nonexistent/user_config.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_garbage_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json at all").unwrap();
        let err = UserConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
