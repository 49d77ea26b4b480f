//! Environment locator - find and validate the game installation
//!
//! Resolution order:
//! 1. An explicitly provided SC2PATH value (empty counts as unset)
//! 2. The well-known macOS install location, if it exists
//! 3. Failure - the launcher cannot guess on other platforms
//!
//! The resolved path is returned to the caller and carried inside the
//! run configuration; nothing here writes process-global state. The
//! session scopes SC2PATH to the spawned game client instead.

use std::path::{Path, PathBuf};

use applestar_core::ConfigError;

/// Default install location on macOS
pub const MAC_DEFAULT_INSTALL: &str = "/Applications/StarCraft II";

/// Host platform, reduced to what the locator cares about
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    /// Has a well-known default install location
    MacOs,
    /// No default applies; SC2PATH is mandatory
    Other,
}

impl Platform {
    /// Platform the launcher is running on
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Other
        }
    }
}

/// Resolve the game installation directory from an optional SC2PATH value
pub fn locate(value: Option<&str>, platform: Platform) -> Result<PathBuf, ConfigError> {
    locate_with_default(value, platform, Path::new(MAC_DEFAULT_INSTALL))
}

/// Same as `locate`, with the platform default injectable for tests
fn locate_with_default(
    value: Option<&str>,
    platform: Platform,
    mac_default: &Path,
) -> Result<PathBuf, ConfigError> {
    match value {
        Some(raw) if !raw.is_empty() => {
            let path = PathBuf::from(raw);
            if path.is_dir() {
                Ok(path)
            } else {
                Err(ConfigError::InvalidEnvironmentPath(path))
            }
        }
        _ => match platform {
            Platform::MacOs if mac_default.is_dir() => {
                tracing::info!(
                    "SC2PATH wasn't set, using {} by default",
                    mac_default.display()
                );
                Ok(mac_default.to_path_buf())
            }
            _ => Err(ConfigError::EnvironmentNotFound),
        },
    }
}
