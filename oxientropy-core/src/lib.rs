//! # OxiEntropy Core
//!
//! Core components for the OxiEntropy codecs.
//!
//! This crate provides the building blocks shared by every codec:
//!
//! - [`bitstream`]: MSB-first bit-level I/O (the bit channel)
//! - [`traits`]: The [`Codec`] trait and compression statistics
//! - [`format`]: Container magic tags and format detection
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L3: Driver                                              │
//! │     CLI, ratio/timing report                            │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Codec + Container                                   │
//! │     Range coder (oxientropy-arith), Huffman             │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: BitStream (this crate)                              │
//! │     BitReader/BitWriter, Codec trait, Format detection  │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxientropy_core::bitstream::{BitReader, BitWriter};
//! use oxientropy_core::format::Format;
//! use std::io::Cursor;
//!
//! let mut output = Vec::new();
//! let mut writer = BitWriter::new(&mut output);
//! writer.write_bit(true).unwrap();
//! writer.flush_final().unwrap();
//!
//! let mut reader = BitReader::new(Cursor::new(output));
//! assert!(reader.read_bit().unwrap());
//!
//! assert_eq!(Format::from_magic(b"1CRA"), Format::Arithmetic);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod bitstream;
pub mod error;
pub mod format;
pub mod traits;

// Re-exports for convenience
pub use bitstream::{BitReader, BitWriter};
pub use error::{EntropyError, Result};
pub use format::{ARITH_MAGIC, Format, HUFFMAN_MAGIC, expect_magic, read_field};
pub use traits::{Codec, CompressStats, DecompressStats, WriteSeek};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bitstream::{BitReader, BitWriter};
    pub use crate::error::{EntropyError, Result};
    pub use crate::format::Format;
    pub use crate::traits::{Codec, CompressStats, DecompressStats};
}
