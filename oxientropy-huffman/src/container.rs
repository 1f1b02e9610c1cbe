//! Huffman container format.
//!
//! ```text
//! magic          u32 LE   0x48464631 ("1FFH" on disk)
//! original size  u64 LE
//! unique count   u16 LE
//! entries        unique count * [symbol: u8][frequency: u64 LE], ascending
//! payload        Huffman codes, MSB-first, zero-padded to a byte
//! ```
//!
//! There is no bit count; the decoder stops after `original size` symbols.

use crate::tree::ALPHABET_SIZE;
use oxientropy_core::error::{EntropyError, Result};
use oxientropy_core::format::{HUFFMAN_MAGIC, expect_magic, read_field};
use std::io::{Read, Write};

/// Size of the fixed part of the header.
pub const FIXED_HEADER_SIZE: u64 = 4 + 8 + 2;

/// Size of one frequency table entry.
pub const ENTRY_SIZE: u64 = 1 + 8;

/// Huffman container header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanHeader {
    /// Size of the decoded output in bytes.
    pub original_size: u64,
    /// Symbol counts; only non-zero entries are stored.
    pub frequencies: [u64; ALPHABET_SIZE],
}

impl HuffmanHeader {
    /// Number of symbols with a non-zero count.
    pub fn unique_count(&self) -> u16 {
        self.frequencies.iter().filter(|&&f| f > 0).count() as u16
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.frequencies
            .iter()
            .fold(0u64, |acc, &f| acc.saturating_add(f))
    }

    /// Serialized header size.
    pub fn encoded_len(&self) -> u64 {
        FIXED_HEADER_SIZE + self.unique_count() as u64 * ENTRY_SIZE
    }

    /// Write the header to a writer.
    pub fn write<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        let mut buf = Vec::with_capacity(self.encoded_len() as usize);
        buf.extend_from_slice(&HUFFMAN_MAGIC.to_le_bytes());
        buf.extend_from_slice(&self.original_size.to_le_bytes());
        buf.extend_from_slice(&self.unique_count().to_le_bytes());

        for (symbol, &freq) in self.frequencies.iter().enumerate() {
            if freq > 0 {
                buf.push(symbol as u8);
                buf.extend_from_slice(&freq.to_le_bytes());
            }
        }

        writer.write_all(&buf)?;
        Ok(())
    }

    /// Read a header from a reader.
    ///
    /// A table claiming more entries than there are byte values is
    /// rejected as a degenerate model. Repeated symbols keep the last count.
    pub fn read<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        expect_magic(reader, HUFFMAN_MAGIC)?;

        let original_size = u64::from_le_bytes(read_field(reader, "original size")?);
        let unique_count = u16::from_le_bytes(read_field(reader, "unique symbol count")?);
        if unique_count as usize > ALPHABET_SIZE {
            return Err(EntropyError::degenerate_model(format!(
                "unique symbol count {} exceeds alphabet size {}",
                unique_count, ALPHABET_SIZE
            )));
        }

        let mut frequencies = [0u64; ALPHABET_SIZE];
        for _ in 0..unique_count {
            let [symbol] = read_field(reader, "frequency table")?;
            let freq = u64::from_le_bytes(read_field(reader, "frequency table")?);
            frequencies[symbol as usize] = freq;
        }

        Ok(Self {
            original_size,
            frequencies,
        })
    }
}
