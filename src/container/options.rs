//! Save and load options.

/// Default gzip compression level.
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 6;

/// Highest gzip compression level.
pub const MAX_COMPRESSION_LEVEL: u32 = 9;

/// Options for writing NOOD containers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOptions {
    /// Gzip compression level (0 = store, 9 = best)
    pub compression_level: u32,
}

impl SaveOptions {
    /// Create new save options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the compression level, clamped to 0-9.
    pub fn with_compression_level(mut self, level: u32) -> Self {
        self.compression_level = level.min(MAX_COMPRESSION_LEVEL);
        self
    }

    /// Favour speed over size.
    pub fn fastest(self) -> Self {
        self.with_compression_level(1)
    }

    /// Favour size over speed.
    pub fn best(self) -> Self {
        self.with_compression_level(MAX_COMPRESSION_LEVEL)
    }
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self {
            compression_level: DEFAULT_COMPRESSION_LEVEL,
        }
    }
}

/// Options for reading NOOD containers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Maximum decompressed payload size in bytes (0 = unlimited)
    pub max_payload_size: usize,
}

impl LoadOptions {
    /// Create new load options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the decompressed payload size.
    pub fn with_max_payload_size(mut self, bytes: usize) -> Self {
        self.max_payload_size = bytes;
        self
    }
}
