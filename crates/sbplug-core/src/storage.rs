//! Destination directory and file handling.
//!
//! The directory is created idempotently. The file is opened (create + truncate)
//! on the first body chunk, so a transfer that fails before any data arrives
//! leaves a previous copy untouched. There is no temp file and no cleanup: a
//! transfer that fails mid-body leaves a truncated file behind.

use crate::error::FetchError;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Creates `dir` and any missing parents. Succeeds if it already exists.
pub fn ensure_dir(dir: &Path) -> Result<(), FetchError> {
    std::fs::create_dir_all(dir).map_err(|source| FetchError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Sequential writer for the downloaded file.
pub struct LocalFile {
    path: PathBuf,
    file: Option<File>,
    written: u64,
}

impl LocalFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file: None,
            written: 0,
        }
    }

    /// Appends `data`, opening (and truncating) the file on first use.
    pub fn write_chunk(&mut self, data: &[u8]) -> Result<(), FetchError> {
        let file = match self.file.take() {
            Some(f) => f,
            None => open_truncate(&self.path)?,
        };
        let file = self.file.insert(file);
        file.write_all(data).map_err(|source| FetchError::Write {
            path: self.path.clone(),
            source,
        })?;
        self.written += data.len() as u64;
        Ok(())
    }

    /// Flushes the file, creating it if the body was empty. Returns bytes written.
    pub fn finish(mut self) -> Result<u64, FetchError> {
        let file = match self.file.take() {
            Some(f) => f,
            None => open_truncate(&self.path)?,
        };
        file.sync_all().map_err(|source| FetchError::Write {
            path: self.path.clone(),
            source,
        })?;
        Ok(self.written)
    }
}

fn open_truncate(path: &Path) -> Result<File, FetchError> {
    File::create(path).map_err(|source| FetchError::Write {
        path: path.to_path_buf(),
        source,
    })
}
