//! Single-stream blocking HTTP GET.
//!
//! Follows redirects and streams the body sequentially into a [`LocalFile`].
//! A final response outside 2xx is rejected before any body byte reaches disk.

use crate::error::FetchError;
use crate::storage::LocalFile;
use std::cell::Cell;
use std::time::Duration;

/// Transport knobs. `None` keeps the libcurl default; there is no overall timeout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferOptions {
    pub max_redirections: u32,
    pub connect_timeout: Option<Duration>,
    pub user_agent: Option<String>,
    pub buffer_size: Option<usize>,
}

impl Default for TransferOptions {
    fn default() -> Self {
        Self {
            max_redirections: 10,
            connect_timeout: None,
            user_agent: None,
            buffer_size: None,
        }
    }
}

/// Downloads `url` into `dest`, overwriting it. Returns the number of bytes written.
pub fn download_to(
    url: &str,
    mut dest: LocalFile,
    opts: &TransferOptions,
) -> Result<u64, FetchError> {
    let transfer_err = |source: curl::Error| FetchError::Transfer {
        url: url.to_string(),
        source,
    };

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(transfer_err)?;
    easy.follow_location(true).map_err(transfer_err)?;
    easy.max_redirections(opts.max_redirections)
        .map_err(transfer_err)?;
    easy.fail_on_error(true).map_err(transfer_err)?;
    if let Some(timeout) = opts.connect_timeout {
        easy.connect_timeout(timeout).map_err(transfer_err)?;
    }
    if let Some(ua) = &opts.user_agent {
        easy.useragent(ua).map_err(transfer_err)?;
    }
    if let Some(sz) = opts.buffer_size {
        easy.buffer_size(sz).map_err(transfer_err)?;
    }

    // Status of the response whose headers were seen last (the final one once the body starts).
    let status = Cell::new(0u32);
    let mut write_err: Option<FetchError> = None;
    let performed = {
        let mut transfer = easy.transfer();
        transfer
            .header_function(|line| {
                if let Some(code) = parse_status_line(line) {
                    status.set(code);
                }
                true
            })
            .map_err(transfer_err)?;
        transfer
            .write_function(|data| {
                let code = status.get();
                if !(200..300).contains(&code) {
                    write_err = Some(FetchError::Http {
                        url: url.to_string(),
                        code,
                    });
                    return Ok(0); // abort transfer
                }
                match dest.write_chunk(data) {
                    Ok(()) => Ok(data.len()),
                    Err(e) => {
                        write_err = Some(e);
                        Ok(0)
                    }
                }
            })
            .map_err(transfer_err)?;
        transfer.perform()
    };

    if let Some(e) = write_err {
        return Err(e);
    }
    if let Err(source) = performed {
        if source.is_http_returned_error() {
            let code = easy.response_code().map_err(transfer_err)?;
            return Err(FetchError::Http {
                url: url.to_string(),
                code,
            });
        }
        return Err(transfer_err(source));
    }

    let code = easy.response_code().map_err(transfer_err)?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Http {
            url: url.to_string(),
            code,
        });
    }
    tracing::debug!("GET {} finished with HTTP {}", url, code);
    dest.finish()
}

/// Status code from an `HTTP/<version> <code> ...` header line.
fn parse_status_line(line: &[u8]) -> Option<u32> {
    let line = std::str::from_utf8(line).ok()?;
    let mut parts = line.split_whitespace();
    if !parts.next()?.starts_with("HTTP/") {
        return None;
    }
    parts.next()?.parse().ok()
}
