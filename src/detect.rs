//! NOOD format detection from the container header.
//!
//! Looks at the first six bytes only; nothing is decompressed.

use crate::container::{check_version, SIGNATURE};
use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

const SIGNATURE_LEN: usize = 4;
const VERSION_LEN: usize = 2;

/// NOOD format information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoodFormat {
    /// Container version
    pub version: u16,
}

impl std::fmt::Display for NoodFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NOOD v{}", self.version)
    }
}

/// Detect NOOD format from a file path.
///
/// # Example
/// ```no_run
/// use nood::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("document.nood").unwrap();
/// println!("Version: {}", format.version);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<NoodFormat> {
    let file = File::open(path)?;
    let mut header = Vec::with_capacity(SIGNATURE_LEN + VERSION_LEN);
    BufReader::new(file)
        .take((SIGNATURE_LEN + VERSION_LEN) as u64)
        .read_to_end(&mut header)?;
    detect_format_from_bytes(&header)
}

/// Detect NOOD format from bytes.
///
/// # Returns
/// * `Ok(NoodFormat)` if the data starts with a supported header
/// * `Err(Error::InvalidSignature)` if the data does not start with `NOOD`
/// * `Err(Error::UnsupportedVersion)` for any version other than the supported ones
/// * `Err(Error::TruncatedFile)` if the header is incomplete
pub fn detect_format_from_bytes(data: &[u8]) -> Result<NoodFormat> {
    let available = data.len().min(SIGNATURE_LEN);
    if data[..available] != SIGNATURE[..available] {
        return Err(Error::InvalidSignature);
    }

    if data.len() < SIGNATURE_LEN + VERSION_LEN {
        return Err(Error::truncated("file ends inside the header"));
    }

    let version = u16::from_le_bytes([data[SIGNATURE_LEN], data[SIGNATURE_LEN + 1]]);
    check_version(version)?;

    Ok(NoodFormat { version })
}

/// Check if a file is a readable NOOD document.
pub fn is_nood<P: AsRef<Path>>(path: P) -> bool {
    detect_format_from_path(path).is_ok()
}

/// Check if bytes start with a readable NOOD header.
pub fn is_nood_bytes(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_ok()
}
