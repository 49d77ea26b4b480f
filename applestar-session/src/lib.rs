//! Applestar Session - The boundary that actually runs a match
//!
//! The launch pipeline hands a finished `RunConfig` to a `SessionRunner`
//! exactly once. `ClientSession` is the real implementation: it finds the
//! newest game client build under the resolved installation and runs it
//! for one blocking match. The caller does not branch on the outcome;
//! failures just propagate.

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{bail, Context, Result};
use applestar_core::RunConfig;

/// One blocking "run one match" operation
pub trait SessionRunner {
    fn run_match(&mut self, config: &RunConfig) -> Result<()>;
}

/// Default address the game client listens on for the agent connection
const LISTEN_ADDR: &str = "127.0.0.1";
const LISTEN_PORT: u16 = 8167;

/// Launches the StarCraft II client as a child process
#[derive(Clone, Debug)]
pub struct ClientSession {
    listen_addr: String,
    port: u16,
}

impl Default for ClientSession {
    fn default() -> Self {
        Self {
            listen_addr: LISTEN_ADDR.to_string(),
            port: LISTEN_PORT,
        }
    }
}

impl ClientSession {
    pub fn new(listen_addr: impl Into<String>, port: u16) -> Self {
        Self {
            listen_addr: listen_addr.into(),
            port,
        }
    }
}

impl SessionRunner for ClientSession {
    fn run_match(&mut self, config: &RunConfig) -> Result<()> {
        let executable = find_client_executable(&config.install_dir)?;

        tracing::info!(
            "starting {} match: {} vs {} ({} / {}) on {}",
            config.game_type,
            config.player_identities[0],
            config.player_identities[1],
            config.races[0],
            config.races[1],
            config.device,
        );
        tracing::debug!("game client: {}", executable.display());

        // SC2PATH is scoped to the child; nothing global is mutated
        let status = Command::new(&executable)
            .env("SC2PATH", &config.install_dir)
            .arg("-listen")
            .arg(&self.listen_addr)
            .arg("-port")
            .arg(self.port.to_string())
            .arg("-displayMode")
            .arg("0")
            .current_dir(&config.install_dir)
            .status()
            .with_context(|| format!("failed to start {}", executable.display()))?;

        if !status.success() {
            bail!("game client exited with {status}");
        }
        Ok(())
    }
}

/// Relative path of the game client binary inside a Base directory
fn client_binary() -> &'static Path {
    if cfg!(target_os = "macos") {
        Path::new("SC2.app/Contents/MacOS/SC2")
    } else if cfg!(target_os = "windows") {
        Path::new("SC2_x64.exe")
    } else {
        Path::new("SC2_x64")
    }
}

/// Find the newest game client build under `<install_dir>/Versions`
pub fn find_client_executable(install_dir: &Path) -> Result<PathBuf> {
    find_client_in(&install_dir.join("Versions"), client_binary())
}

/// Scan a Versions directory for `Base<build>` entries and pick the
/// highest build that contains the client binary
fn find_client_in(versions_dir: &Path, binary: &Path) -> Result<PathBuf> {
    let entries = std::fs::read_dir(versions_dir)
        .with_context(|| format!("cannot read {}", versions_dir.display()))?;

    let mut best: Option<(u64, PathBuf)> = None;
    for entry in entries {
        let entry = entry?;
        let name = entry.file_name();
        let Some(build) = name
            .to_str()
            .and_then(|n| n.strip_prefix("Base"))
            .and_then(|n| n.parse::<u64>().ok())
        else {
            continue;
        };

        let candidate = entry.path().join(binary);
        if candidate.exists() && best.as_ref().map_or(true, |(b, _)| build > *b) {
            best = Some((build, candidate));
        }
    }

    match best {
        Some((build, path)) => {
            tracing::debug!("selected client build {build}");
            Ok(path)
        }
        None => bail!(
            "no game client found under {} (expected Base<build>/{})",
            versions_dir.display(),
            binary.display()
        ),
    }
}
