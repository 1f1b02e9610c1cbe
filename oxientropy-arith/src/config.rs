//! Decoder configuration.

/// Range decoder configuration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeConfig {
    /// Reject payloads that end before the declared encoded bit count.
    ///
    /// When `false`, missing bits are replaced with zeros and decoding
    /// continues. A truncated file then decodes to the declared size with
    /// wrong trailing content instead of failing.
    pub strict_stream: bool,
}

impl DecodeConfig {
    /// Zero-substitute missing payload bits (compatible with existing files).
    pub const LENIENT: Self = Self {
        strict_stream: false,
    };

    /// Fail with `EndOfStream` when the payload is shorter than declared.
    pub const STRICT: Self = Self {
        strict_stream: true,
    };

    /// Create a new decoder configuration.
    pub fn new(strict_stream: bool) -> Self {
        Self { strict_stream }
    }
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self::LENIENT
    }
}
