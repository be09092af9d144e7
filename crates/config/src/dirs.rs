//! Default configuration paths

use std::path::PathBuf;

/// Default config file location: `<config dir>/stagehand/stagehand.toml`
///
/// Returns `None` when the platform config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    ::dirs::config_dir().map(|dir| dir.join("stagehand").join("stagehand.toml"))
}
