//! Log-file ingestion: line streaming and IPv4 literal extraction.
//!
//! The sketches never touch files themselves; this module turns a raw
//! access log into the stream of dotted-quad strings they consume. Each
//! failure mode is surfaced as its own [`IngestError`] variant instead of
//! a catch-all, so callers can tell a missing file from a mis-encoded one
//! from a log that simply contains no addresses.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("log file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{path} is not valid UTF-8 on line {line}")]
    Decode { path: PathBuf, line: usize },

    #[error("no IPv4 addresses found in {path}")]
    EmptyDataset { path: PathBuf },
}

/// Extract the first IPv4-looking literal from a line.
///
/// Matches a word-bounded dotted quad of 1-3 digit groups, the same shape
/// an access-log scanner would grep for. Octet ranges are not validated;
/// the value is fed to a hash, not a socket.
pub fn extract_ipv4(line: &str) -> Option<&str> {
    let bytes = line.as_bytes();
    let mut start = 0;

    while start < bytes.len() {
        if !bytes[start].is_ascii_digit() || !is_boundary_before(bytes, start) {
            start += 1;
            continue;
        }
        if let Some(end) = match_dotted_quad(bytes, start) {
            return Some(&line[start..end]);
        }
        // Skip past this digit run, it cannot start a match further in
        while start < bytes.len() && bytes[start].is_ascii_digit() {
            start += 1;
        }
    }
    None
}

/// Word boundary check: a match may not start mid-token.
fn is_boundary_before(bytes: &[u8], pos: usize) -> bool {
    pos == 0 || !is_word_byte(bytes[pos - 1])
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Try to match `digits{1,3} ("." digits{1,3}){3}` at `start`, requiring a
/// word boundary after the final group. Returns the end offset on success.
fn match_dotted_quad(bytes: &[u8], start: usize) -> Option<usize> {
    let mut pos = start;

    for group in 0..4 {
        let digits_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        let digits = pos - digits_start;
        if digits == 0 || digits > 3 {
            return None;
        }

        if group < 3 {
            if pos >= bytes.len() || bytes[pos] != b'.' {
                return None;
            }
            pos += 1;
        }
    }

    if pos < bytes.len() && is_word_byte(bytes[pos]) {
        return None;
    }
    Some(pos)
}

/// Load all IPv4 literals from a log file, one entry per matching line.
///
/// Lines without a dotted-quad literal are dropped. Fails with
/// [`IngestError::EmptyDataset`] if the whole file yields no addresses,
/// so downstream estimators never see an empty stream by accident.
pub fn load_ip_addresses(path: &Path) -> Result<Vec<String>, IngestError> {
    let file = File::open(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let reader = BufReader::new(file);
    let mut addresses = Vec::new();
    let mut total_lines = 0usize;

    for (lineno, raw) in reader.split(b'\n').enumerate() {
        let raw = raw.map_err(|source| IngestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        total_lines += 1;

        let line = std::str::from_utf8(&raw).map_err(|_| IngestError::Decode {
            path: path.to_path_buf(),
            line: lineno + 1,
        })?;

        if let Some(ip) = extract_ipv4(line) {
            addresses.push(ip.to_owned());
        }
    }

    debug!(
        total_lines,
        matched = addresses.len(),
        path = %path.display(),
        "scanned log file"
    );

    if addresses.is_empty() {
        return Err(IngestError::EmptyDataset {
            path: path.to_path_buf(),
        });
    }
    Ok(addresses)
}

/// Exact distinct count over a stream of items, the baseline the
/// HyperLogLog estimate is compared against.
pub fn exact_unique_count<'a, I>(items: I) -> usize
where
    I: IntoIterator<Item = &'a str>,
{
    items.into_iter().collect::<HashSet<_>>().len()
}
