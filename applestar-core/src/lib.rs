//! Applestar Core - Shared data model for the match launcher
//!
//! This crate provides the types the launch pipeline resolves into:
//! - Race, game type, compute device and model slot enums
//! - The persisted base configuration (`UserConfig`) and its JSON loader
//! - The immutable resolved configuration (`RunConfig`)
//! - The `ConfigError` taxonomy shared by every resolver

pub mod config;
pub mod error;
pub mod run;
pub mod types;

// Re-exports for convenient access
pub use config::{ActorConfig, CommonConfig, EnvConfig, UserConfig, DEFAULT_MODEL_SENTINEL};
pub use error::ConfigError;
pub use run::{ModelPaths, RunConfig};
pub use types::{Device, GameType, ModelSlot, Race};
