//! Local filename derivation from the remote URL.

use crate::error::FetchError;

/// Extracts the last path segment of `url` for use as the local filename.
///
/// Query and fragment are ignored. Returns `None` if the URL cannot be parsed,
/// the path is empty/root, or the segment is `.`/`..`.
pub fn filename_from_url_path(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path().split('/').filter(|s| !s.is_empty()).last()?;
    if segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}

/// Filename the downloaded resource is saved under.
pub fn derive_filename(url: &str) -> Result<String, FetchError> {
    filename_from_url_path(url).ok_or_else(|| FetchError::NoFilename {
        url: url.to_string(),
    })
}
