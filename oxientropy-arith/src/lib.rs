//! # OxiEntropy Arith
//!
//! Pure Rust static integer range coder (arithmetic coding) over bytes.
//!
//! The coder uses an order-0 model: one pass over the input counts how often
//! every byte value occurs, and those counts drive a 32-bit integer range
//! coder with carry-free renormalization. The complete frequency table is
//! stored in the container header so the decoder can rebuild the same model.
//!
//! - [`model`]: Frequency and cumulative-frequency tables
//! - [`range_coder`]: Interval arithmetic, encoder and decoder
//! - [`container`]: Header layout and bit-count patching
//! - [`encoder`] / [`decoder`]: Whole-container compression and decompression
//! - [`config`]: Decoder behavior on truncated payloads
//!
//! ## Example
//!
//! ```rust
//! use oxientropy_arith::{compress, decompress};
//!
//! let original = b"TOBEORNOTTOBEORTOBEORNOT";
//! let compressed = compress(original).unwrap();
//! assert_eq!(&compressed[0..4], b"1CRA");
//!
//! let decompressed = decompress(&compressed).unwrap();
//! assert_eq!(decompressed, original);
//! ```
//!
//! ## Truncated payloads
//!
//! By default a payload that ends before its declared bit count is padded
//! with zero bits and decoding continues, which can silently produce wrong
//! bytes. [`DecodeConfig::STRICT`] reports the truncation instead:
//!
//! ```rust
//! use oxientropy_arith::{DecodeConfig, compress, decompress_with_config};
//! use oxientropy_core::EntropyError;
//!
//! let compressed = compress(b"abracadabra, abracadabra").unwrap();
//! let truncated = &compressed[..compressed.len() - 2];
//!
//! let result = decompress_with_config(truncated, DecodeConfig::STRICT);
//! assert!(matches!(result, Err(EntropyError::EndOfStream { .. })));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod config;
pub mod container;
pub mod decoder;
pub mod encoder;
pub mod model;
pub mod range_coder;

// Re-exports
pub use config::DecodeConfig;
pub use container::{ArithHeader, HEADER_SIZE};
pub use decoder::decode_from;
pub use encoder::encode_to;
pub use model::{CumulativeTable, FrequencyTable};
pub use range_coder::{RangeDecoder, RangeEncoder};

use oxientropy_core::error::Result;
use oxientropy_core::format::ARITH_MAGIC;
use oxientropy_core::traits::{Codec, CompressStats, DecompressStats, WriteSeek};
use std::io::{Read, Write};

/// Range coder as a [`Codec`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ArithmeticCodec {
    config: DecodeConfig,
}

impl ArithmeticCodec {
    /// Create a codec with lenient decoding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a codec with the given decoder configuration.
    pub fn with_config(config: DecodeConfig) -> Self {
        Self { config }
    }

    /// Decoder configuration in use.
    pub fn config(&self) -> DecodeConfig {
        self.config
    }
}

impl Codec for ArithmeticCodec {
    fn name(&self) -> &'static str {
        "arithmetic"
    }

    fn magic(&self) -> [u8; 4] {
        ARITH_MAGIC.to_le_bytes()
    }

    fn compress_to(&self, input: &[u8], output: &mut dyn WriteSeek) -> Result<CompressStats> {
        encode_to(input, output)
    }

    fn decompress_to(
        &self,
        input: &mut dyn Read,
        output: &mut dyn Write,
    ) -> Result<DecompressStats> {
        decode_from(input, output, self.config)
    }
}

/// Compress data with the range coder.
pub fn compress(input: &[u8]) -> Result<Vec<u8>> {
    ArithmeticCodec::new().compress(input)
}

/// Decompress a range coder container with lenient decoding.
pub fn decompress(input: &[u8]) -> Result<Vec<u8>> {
    ArithmeticCodec::new().decompress(input)
}

/// Decompress a range coder container with an explicit configuration.
pub fn decompress_with_config(input: &[u8], config: DecodeConfig) -> Result<Vec<u8>> {
    ArithmeticCodec::with_config(config).decompress(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxientropy_core::error::EntropyError;

    #[test]
    fn test_codec_identity() {
        let codec = ArithmeticCodec::new();
        assert_eq!(codec.name(), "arithmetic");
        assert_eq!(&codec.magic(), b"1CRA");
        assert!(!codec.config().strict_stream);
        assert!(
            ArithmeticCodec::with_config(DecodeConfig::STRICT)
                .config()
                .strict_stream
        );
    }

    #[test]
    fn test_roundtrip_through_trait_object() {
        let codec: Box<dyn Codec> = Box::new(ArithmeticCodec::new());
        let input = b"She sells sea shells by the sea shore";
        let compressed = codec.compress(input).unwrap();
        assert_eq!(codec.decompress(&compressed).unwrap(), input);
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(compress(b""), Err(EntropyError::EmptyInput)));
    }

    #[test]
    fn test_strict_accepts_complete_stream() {
        let input = b"mississippi river";
        let compressed = compress(input).unwrap();
        assert_eq!(
            decompress_with_config(&compressed, DecodeConfig::STRICT).unwrap(),
            input
        );
    }
}
