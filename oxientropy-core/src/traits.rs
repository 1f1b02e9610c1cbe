//! Core traits for whole-buffer codecs.
//!
//! Every codec in the workspace encodes a fully buffered input into its own
//! container and decodes that container back. The trait is object safe so
//! the CLI can pick a codec at runtime.

use crate::error::Result;
use std::io::{Cursor, Read, Seek, Write};

/// A writer that can also seek.
///
/// Containers that patch a header field after the payload is written
/// (reserve placeholder, write payload, seek back, overwrite) need both.
pub trait WriteSeek: Write + Seek {}

impl<T: Write + Seek> WriteSeek for T {}

/// Statistics reported by a compression call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressStats {
    /// Number of input bytes.
    pub original_size: u64,
    /// Number of bytes written (header + payload).
    pub compressed_size: u64,
    /// Number of meaningful payload bits, excluding final-byte padding.
    pub encoded_bits: u64,
}

impl CompressStats {
    /// Space saving as a percentage: `(1 - compressed / original) * 100`.
    ///
    /// Negative when the output is larger than the input.
    pub fn ratio_percent(&self) -> f64 {
        ratio_percent(self.original_size, self.compressed_size)
    }
}

/// Statistics reported by a decompression call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecompressStats {
    /// Number of bytes read from the container.
    pub compressed_size: u64,
    /// Number of bytes written (the declared original size on success).
    pub original_size: u64,
}

impl DecompressStats {
    /// Space saving of the container relative to the decoded output.
    pub fn ratio_percent(&self) -> f64 {
        ratio_percent(self.original_size, self.compressed_size)
    }
}

fn ratio_percent(original: u64, compressed: u64) -> f64 {
    if original == 0 {
        return 0.0;
    }
    (1.0 - compressed as f64 / original as f64) * 100.0
}

/// A whole-buffer entropy codec with a private container format.
pub trait Codec {
    /// Short human-readable codec name.
    fn name(&self) -> &'static str;

    /// The 4-byte magic tag that starts every container of this codec.
    fn magic(&self) -> [u8; 4];

    /// Compress `input` into `output`.
    ///
    /// # Arguments
    ///
    /// * `input` - The complete input; must not be empty
    /// * `output` - Destination positioned at the start of the container
    fn compress_to(&self, input: &[u8], output: &mut dyn WriteSeek) -> Result<CompressStats>;

    /// Decompress one container from `input` into `output`.
    fn decompress_to(&self, input: &mut dyn Read, output: &mut dyn Write)
    -> Result<DecompressStats>;

    /// Compress all data at once (convenience method).
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut cursor = Cursor::new(Vec::new());
        self.compress_to(input, &mut cursor)?;
        Ok(cursor.into_inner())
    }

    /// Decompress all data at once (convenience method).
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut reader = input;
        let mut output = Vec::new();
        self.decompress_to(&mut reader, &mut output)?;
        Ok(output)
    }
}
