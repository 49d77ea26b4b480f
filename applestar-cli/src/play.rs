//! Play command - resolve a configuration and run one match
//!
//! ## Architecture
//!
//! - Level 1: run() - orchestration
//! - Level 2: load_base_config(), build_intent(), report_plan()
//! - Level 3: (resolution delegated to applestar-launch, the match to
//!   applestar-session)

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use applestar_core::{GameType, Race, RunConfig, UserConfig};
use applestar_launch::{resolve, LaunchIntent, Platform, SystemProbe};
use applestar_session::{ClientSession, SessionRunner};

// ============================================================================
// COMMAND ARGUMENTS
// ============================================================================

#[derive(Args)]
pub struct PlayArgs {
    /// First model's name minus '.pth'; defaults to the configured slot
    #[arg(long)]
    pub model1: Option<String>,

    /// Second model's name minus '.pth'; defaults to the configured slot
    #[arg(long)]
    pub model2: Option<String>,

    /// Force CPU usage, ignoring any available accelerator
    #[arg(long)]
    pub cpu: bool,

    /// Match style
    #[arg(long = "game_type", default_value = "human_vs_agent")]
    pub game_type: GameType,

    /// Race for the player side (written into side 1's race slot)
    #[arg(long, default_value = "zerg")]
    pub race: Race,

    /// Base configuration JSON; built-in defaults when absent
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory model names resolve against (overrides the configured one)
    #[arg(long, value_name = "DIR")]
    pub models_dir: Option<PathBuf>,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run the play command
///
/// 1. Load the base configuration
/// 2. Resolve it against the CLI intent
/// 3. Hand the result to the session, exactly once
pub fn run(args: PlayArgs) -> Result<()> {
    let mut session = ClientSession::default();
    run_with(args, &mut session)
}

/// Same as `run`, with the session injectable
pub(crate) fn run_with(args: PlayArgs, session: &mut dyn SessionRunner) -> Result<()> {
    let mut base = load_base_config(args.config.as_deref())?;
    if let Some(dir) = &args.models_dir {
        base.actor.models_dir = dir.clone();
    }

    let intent = build_intent(&args);
    let config = resolve(&intent, &base, &SystemProbe)?;

    report_plan(&config);
    session.run_match(&config)
}

// ============================================================================
// LEVEL 2 - STEPS
// ============================================================================

fn load_base_config(path: Option<&std::path::Path>) -> Result<UserConfig> {
    match path {
        Some(path) => UserConfig::load(path)
            .with_context(|| format!("loading base configuration from {}", path.display())),
        None => Ok(UserConfig::default()),
    }
}

fn build_intent(args: &PlayArgs) -> LaunchIntent {
    LaunchIntent {
        model1: args.model1.clone(),
        model2: args.model2.clone(),
        cpu: args.cpu,
        game_type: args.game_type,
        race: args.race,
        sc2_path: std::env::var("SC2PATH").ok(),
        platform: Platform::current(),
    }
}

fn report_plan(config: &RunConfig) {
    tracing::info!(
        "resolved {} match on {}: [{}] vs [{}]",
        config.game_type,
        config.device,
        config.player_identities[0],
        config.player_identities[1],
    );
    tracing::info!(
        "models: {} / {}",
        config.model_paths.model1.display(),
        config.model_paths.model2.display(),
    );
    tracing::info!("install: {}", config.install_dir.display());
}
