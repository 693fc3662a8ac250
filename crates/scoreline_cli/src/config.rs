//! Where the CLI finds its `CoreConfig`

use anyhow::{Context, Result};
use scoreline_core::CoreConfig;
use std::fs;
use std::path::Path;

pub const CONFIG_PATH_ENV: &str = "SCORELINE_CONFIG_PATH";

/// `--config` wins, then `$SCORELINE_CONFIG_PATH`, then built-in defaults.
/// An empty env value means defaults.
pub fn load_config(flag: Option<&Path>) -> Result<CoreConfig> {
    if let Some(path) = flag {
        return read_config(path);
    }

    match std::env::var(CONFIG_PATH_ENV) {
        Ok(path) if !path.trim().is_empty() => read_config(Path::new(path.trim()))
            .with_context(|| format!("{CONFIG_PATH_ENV} points at an unusable config")),
        _ => Ok(CoreConfig::default()),
    }
}

pub fn read_config(path: &Path) -> Result<CoreConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    CoreConfig::from_json(&content).with_context(|| format!("Failed to load config: {}", path.display()))
}
