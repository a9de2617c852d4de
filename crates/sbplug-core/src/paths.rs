//! Home-relative path expansion.

use crate::error::FetchError;
use std::path::{Path, PathBuf};

/// The current user's home directory (`$HOME`, then the platform lookup).
pub fn home_dir() -> Result<PathBuf, FetchError> {
    dirs::home_dir().ok_or(FetchError::NoHomeDir)
}

/// Expands a leading `~` or `~/` against `home`. Any other path is returned as-is;
/// `~user` forms are not resolved.
pub fn expand_home(path: &str, home: &Path) -> PathBuf {
    if path == "~" {
        return home.to_path_buf();
    }
    match path.strip_prefix("~/") {
        Some(rest) => home.join(rest.trim_start_matches('/')),
        None => PathBuf::from(path),
    }
}
