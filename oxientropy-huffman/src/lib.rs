//! # OxiEntropy Huffman
//!
//! Pure Rust static Huffman coder over bytes.
//!
//! Byte counts from a single pass over the input build a Huffman tree; the
//! non-zero counts are stored in the container so the decoder can rebuild
//! the same tree. Codes are written MSB-first through the shared
//! [`oxientropy_core::BitWriter`].
//!
//! ## Example
//!
//! ```rust
//! use oxientropy_huffman::{compress, decompress};
//!
//! let original = b"abracadabra";
//! let compressed = compress(original).unwrap();
//! assert_eq!(&compressed[0..4], b"1FFH");
//!
//! let decompressed = decompress(&compressed).unwrap();
//! assert_eq!(decompressed, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod container;
pub mod decoder;
pub mod encoder;
pub mod tree;

// Re-exports
pub use container::HuffmanHeader;
pub use decoder::decode_from;
pub use encoder::encode_to;
pub use tree::{CodeTable, HuffmanTree, Node};

use oxientropy_core::error::Result;
use oxientropy_core::format::HUFFMAN_MAGIC;
use oxientropy_core::traits::{Codec, CompressStats, DecompressStats, WriteSeek};
use std::io::{Read, Write};

/// Static Huffman coder as a [`Codec`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HuffmanCodec;

impl HuffmanCodec {
    /// Create a new Huffman codec.
    pub fn new() -> Self {
        Self
    }
}

impl Codec for HuffmanCodec {
    fn name(&self) -> &'static str {
        "huffman"
    }

    fn magic(&self) -> [u8; 4] {
        HUFFMAN_MAGIC.to_le_bytes()
    }

    fn compress_to(&self, input: &[u8], output: &mut dyn WriteSeek) -> Result<CompressStats> {
        encode_to(input, output)
    }

    fn decompress_to(
        &self,
        input: &mut dyn Read,
        output: &mut dyn Write,
    ) -> Result<DecompressStats> {
        decode_from(input, output)
    }
}

/// Compress data with the Huffman coder.
pub fn compress(input: &[u8]) -> Result<Vec<u8>> {
    let mut output = Vec::new();
    encode_to(input, &mut output)?;
    Ok(output)
}

/// Decompress a Huffman container.
pub fn decompress(input: &[u8]) -> Result<Vec<u8>> {
    HuffmanCodec::new().decompress(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxientropy_core::error::EntropyError;

    #[test]
    fn test_codec_identity() {
        let codec = HuffmanCodec::new();
        assert_eq!(codec.name(), "huffman");
        assert_eq!(&codec.magic(), b"1FFH");
    }

    #[test]
    fn test_trait_matches_free_functions() {
        let input = b"Peter Piper picked a peck of pickled peppers";
        let via_trait = HuffmanCodec.compress(input).unwrap();
        assert_eq!(via_trait, compress(input).unwrap());
        assert_eq!(HuffmanCodec.decompress(&via_trait).unwrap(), input);
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(compress(b""), Err(EntropyError::EmptyInput)));
    }
}
