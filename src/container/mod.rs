//! NOOD container framing.
//!
//! A container is a 10-byte header followed by the gzip-compressed flat
//! payload produced by [`crate::codec`]:
//!
//! ```text
//! offset  field              size
//! 0       signature "NOOD"   4
//! 4       version (u16 LE)   2
//! 6       compressed length  4 (i32 LE)
//! 10      gzip payload       compressed length
//! ```

mod framer;
mod options;

pub use framer::{
    check_version, read_container, write_container, FORMAT_VERSION, HEADER_LEN, SIGNATURE,
    SUPPORTED_VERSIONS,
};
pub use options::{LoadOptions, SaveOptions, DEFAULT_COMPRESSION_LEVEL, MAX_COMPRESSION_LEVEL};
