//! Plugin install: resolve the plugins directory, create it, fetch the jar.

use crate::downloader::{download_to, TransferOptions};
use crate::error::FetchError;
use crate::paths::expand_home;
use crate::storage::{ensure_dir, LocalFile};
use crate::url_model::derive_filename;
use std::fmt;
use std::path::{Path, PathBuf};

/// A remote plugin archive and the home-relative directory it is installed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginSource<'a> {
    pub url: &'a str,
    pub dest_dir: &'a str,
}

/// The NetworkAlerts plugin for Shuffleboard.
pub const NETWORK_ALERTS: PluginSource<'static> = PluginSource {
    url: "https://github.com/Mechanical-Advantage/NetworkAlerts/releases/download/v1.0.0/NetworkAlerts.jar",
    dest_dir: "~/Shuffleboard/plugins",
};

/// Outcome of a successful install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Installed {
    pub filename: String,
    pub path: PathBuf,
    pub bytes: u64,
}

impl Installed {
    /// The line printed on success.
    pub fn confirmation(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Installed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Downloaded {} to {}", self.filename, self.path.display())
    }
}

/// Installs `source` under `home`.
///
/// The directory is created before any network activity, so a blocked path
/// fails without a request being made. An existing file is overwritten.
pub fn install(
    source: &PluginSource<'_>,
    home: &Path,
    opts: &TransferOptions,
) -> Result<Installed, FetchError> {
    let dir = expand_home(source.dest_dir, home);
    tracing::debug!("plugins directory: {}", dir.display());
    ensure_dir(&dir)?;

    let filename = derive_filename(source.url)?;
    let path = dir.join(&filename);

    tracing::info!("downloading {} to {}", source.url, path.display());
    let bytes = download_to(source.url, LocalFile::new(&path), opts)?;
    tracing::info!("wrote {} bytes to {}", bytes, path.display());

    Ok(Installed {
        filename,
        path,
        bytes,
    })
}
