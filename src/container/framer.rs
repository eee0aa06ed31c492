//! Container framing: signature, version, and gzip-compressed payload.

use std::io::{self, Read, Write};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use super::options::{LoadOptions, SaveOptions};
use crate::error::{Error, Result};

/// File signature: ASCII `NOOD`.
pub const SIGNATURE: &[u8; 4] = b"NOOD";

/// Version written by this library.
pub const FORMAT_VERSION: u16 = 1;

/// Versions this library can read.
pub const SUPPORTED_VERSIONS: &[u16] = &[FORMAT_VERSION];

/// Signature + version + compressed length.
pub const HEADER_LEN: usize = 4 + 2 + 4;

/// Check a container version against [`SUPPORTED_VERSIONS`].
pub fn check_version(version: u16) -> Result<()> {
    if SUPPORTED_VERSIONS.contains(&version) {
        Ok(())
    } else {
        Err(Error::UnsupportedVersion(version))
    }
}

/// Frame a flat payload and write the container to `writer`.
pub fn write_container<W: Write>(
    mut writer: W,
    payload: &[u8],
    options: &SaveOptions,
) -> Result<()> {
    let compressed = compress(payload, options.compression_level)?;
    let compressed_len = i32::try_from(compressed.len()).map_err(|_| Error::PayloadTooLarge {
        limit: i32::MAX as usize,
    })?;

    log::debug!(
        "Writing NOOD v{} container: {} payload bytes -> {} compressed",
        FORMAT_VERSION,
        payload.len(),
        compressed.len()
    );

    writer.write_all(SIGNATURE)?;
    writer.write_all(&FORMAT_VERSION.to_le_bytes())?;
    writer.write_all(&compressed_len.to_le_bytes())?;
    writer.write_all(&compressed)?;
    writer.flush()?;
    Ok(())
}

/// Read a container from `reader` and return the decompressed flat payload.
///
/// The signature is checked before anything else is read, and the version
/// before any decompression happens.
pub fn read_container<R: Read>(mut reader: R, options: &LoadOptions) -> Result<Vec<u8>> {
    let mut signature = [0u8; 4];
    read_exact_or_truncated(&mut reader, &mut signature, "signature")?;
    if &signature != SIGNATURE {
        return Err(Error::InvalidSignature);
    }

    let mut version = [0u8; 2];
    read_exact_or_truncated(&mut reader, &mut version, "version")?;
    let version = u16::from_le_bytes(version);
    check_version(version)?;

    let mut length = [0u8; 4];
    read_exact_or_truncated(&mut reader, &mut length, "compressed length")?;
    let length = i32::from_le_bytes(length);
    let length = u64::try_from(length)
        .map_err(|_| Error::malformed(format!("negative compressed length {}", length)))?;

    // Read through `take` so a bogus length cannot force a huge allocation up front
    let mut compressed = Vec::new();
    (&mut reader).take(length).read_to_end(&mut compressed)?;
    if (compressed.len() as u64) < length {
        return Err(Error::truncated(format!(
            "compressed payload declares {} bytes, only {} present",
            length,
            compressed.len()
        )));
    }

    let mut probe = [0u8; 1];
    if reader.read(&mut probe)? > 0 {
        log::warn!("Ignoring trailing bytes after the compressed payload");
    }

    let payload = decompress(&compressed, options.max_payload_size)?;
    log::debug!(
        "Read NOOD v{} container: {} compressed bytes -> {} payload",
        version,
        compressed.len(),
        payload.len()
    );
    Ok(payload)
}

fn read_exact_or_truncated<R: Read>(reader: &mut R, buf: &mut [u8], what: &str) -> Result<()> {
    reader.read_exact(buf).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => Error::truncated(format!("file ends before {}", what)),
        _ => Error::Io(e),
    })
}

fn compress(payload: &[u8], level: u32) -> Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::with_capacity(payload.len() / 2), Compression::new(level));
    encoder.write_all(payload)?;
    Ok(encoder.finish()?)
}

fn decompress(compressed: &[u8], limit: usize) -> Result<Vec<u8>> {
    let mut decoder = GzDecoder::new(compressed);
    let mut payload = Vec::new();

    let read = if limit == 0 {
        decoder.read_to_end(&mut payload)
    } else {
        (&mut decoder)
            .take(limit as u64 + 1)
            .read_to_end(&mut payload)
    };
    read.map_err(|e| Error::malformed(format!("gzip stream could not be decompressed: {}", e)))?;

    if limit != 0 && payload.len() > limit {
        return Err(Error::PayloadTooLarge { limit });
    }

    Ok(payload)
}
