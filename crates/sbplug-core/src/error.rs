//! Error type for the fetch pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Failure of one install step. Each variant keeps the underlying error so the
/// platform or transport message reaches the user unchanged.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("could not determine the home directory")]
    NoHomeDir,

    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no filename in URL path: {url}")]
    NoFilename { url: String },

    #[error("GET {url} failed: {source}")]
    Transfer {
        url: String,
        #[source]
        source: curl::Error,
    },

    #[error("GET {url} returned HTTP {code}")]
    Http { url: String, code: u32 },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
