use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::downloader::TransferOptions;

/// Optional transport tuning loaded from `~/.config/sbplug/config.toml`.
///
/// The source URL and destination directory are fixed and not configurable here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SbplugConfig {
    /// Maximum number of HTTP redirects to follow.
    pub max_redirections: u32,
    /// Connect timeout in seconds (None = libcurl default).
    pub connect_timeout_secs: Option<u64>,
    /// User-Agent header (None = libcurl sends none).
    pub user_agent: Option<String>,
    /// Receive buffer size in bytes (None = libcurl default).
    pub buffer_size: Option<usize>,
}

impl Default for SbplugConfig {
    fn default() -> Self {
        Self {
            max_redirections: 10,
            connect_timeout_secs: None,
            user_agent: None,
            buffer_size: None,
        }
    }
}

impl SbplugConfig {
    pub fn transfer_options(&self) -> TransferOptions {
        TransferOptions {
            max_redirections: self.max_redirections,
            connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
            user_agent: self.user_agent.clone(),
            buffer_size: self.buffer_size,
        }
    }
}

/// Existing config file, if any. Never creates directories.
pub fn config_path() -> Result<Option<PathBuf>> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sbplug")?;
    Ok(xdg_dirs.find_config_file("config.toml"))
}

/// Load configuration from disk, falling back to defaults when no file exists.
pub fn load_or_default() -> Result<SbplugConfig> {
    match config_path()? {
        Some(path) => load_from(&path),
        None => Ok(SbplugConfig::default()),
    }
}

pub fn load_from(path: &Path) -> Result<SbplugConfig> {
    let data = fs::read_to_string(path)?;
    let cfg: SbplugConfig = toml::from_str(&data)?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}
