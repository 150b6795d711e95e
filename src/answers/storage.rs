use std::fs::{self, Permissions};
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::types::ResolverConfig;

const CONFIG_FILE: &str = ".whatis.json";

/// Get the path to the default config file
pub fn get_config_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(CONFIG_FILE)
}

/// Load the config from disk, writing out defaults if it doesn't exist
pub fn load_config(path: &Path) -> Result<ResolverConfig> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: ResolverConfig = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    } else {
        let config = ResolverConfig::default();
        save_config(path, &config)?;
        log::info!("Wrote default config to {}", path.display());
        Ok(config)
    }
}

/// Save the config to disk
pub fn save_config(path: &Path, config: &ResolverConfig) -> Result<()> {
    let content = serde_json::to_string_pretty(config).context("failed to serialize config")?;
    fs::write(path, &content)
        .with_context(|| format!("failed to write config file {}", path.display()))?;
    fs::set_permissions(path, Permissions::from_mode(0o600))
        .context("failed to set config file permissions")?;
    Ok(())
}
