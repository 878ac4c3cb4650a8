use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use wordbook_config::Config;

fn config_path() -> PathBuf {
    env::var("WORDBOOK_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("wordbook.json"))
}

/// Load the config file, or build one from the environment when there is none
pub fn load_config() -> anyhow::Result<Config> {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> anyhow::Result<Config> {
    if !path.exists() {
        tracing::info!("No config at {}, using environment defaults", path.display());
        return Ok(Config::new());
    }

    tracing::info!("Loading config from {}", path.display());
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config = serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    Ok(config)
}
