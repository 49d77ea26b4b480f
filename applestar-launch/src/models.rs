//! Model resolver - turn slot values into concrete, existing files
//!
//! Each slot resolves independently:
//! 1. An explicit CLI name becomes `<models_dir>/<name>.pth`
//! 2. The `"default"` sentinel becomes `<models_dir>/rl_model.pth`
//! 3. Anything else is kept as a path, unchanged
//!
//! After resolution the path must exist, whichever branch produced it.

use std::path::{Path, PathBuf};

use applestar_core::{ConfigError, ModelSlot, DEFAULT_MODEL_SENTINEL};

/// Extension appended to explicit model names
pub const MODEL_EXTENSION: &str = "pth";

/// File the `"default"` sentinel resolves to
pub const DEFAULT_MODEL_FILE: &str = "rl_model.pth";

/// Resolve one slot to an existing file
///
/// `explicit` is the CLI override for this slot, `configured` the value the
/// base configuration carries for it.
pub fn resolve(
    slot: ModelSlot,
    explicit: Option<&str>,
    configured: &str,
    models_dir: &Path,
) -> Result<PathBuf, ConfigError> {
    let path = match explicit {
        Some(name) => models_dir.join(format!("{name}.{MODEL_EXTENSION}")),
        None if configured == DEFAULT_MODEL_SENTINEL => models_dir.join(DEFAULT_MODEL_FILE),
        None => PathBuf::from(configured),
    };

    if path.exists() {
        Ok(path)
    } else {
        Err(ConfigError::ModelNotFound { slot, path })
    }
}
