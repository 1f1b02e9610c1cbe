//! Huffman compression.

use crate::container::HuffmanHeader;
use crate::tree::{HuffmanTree, count_frequencies};
use oxientropy_core::bitstream::BitWriter;
use oxientropy_core::error::{EntropyError, Result};
use oxientropy_core::traits::CompressStats;
use std::io::Write;
use tracing::{debug, trace};

/// Compress `input` into a complete container written to `output`.
///
/// Builds the tree from the byte counts of `input`, writes the header and
/// the count table, then the code of every input byte. Fails with
/// `EmptyInput` before writing anything if `input` is empty.
pub fn encode_to<W: Write + ?Sized>(input: &[u8], output: &mut W) -> Result<CompressStats> {
    if input.is_empty() {
        return Err(EntropyError::EmptyInput);
    }

    let frequencies = count_frequencies(input);
    let tree = HuffmanTree::from_frequencies(&frequencies)?;
    let codes = tree.codes();

    let header = HuffmanHeader {
        original_size: input.len() as u64,
        frequencies,
    };
    header.write(output)?;
    trace!(
        original_size = header.original_size,
        unique_count = header.unique_count(),
        max_code_len = codes.max_len(),
        "wrote huffman header"
    );

    let mut writer = BitWriter::new(&mut *output);
    for &byte in input {
        for &bit in codes.get(byte) {
            writer.write_bit(bit)?;
        }
    }
    writer.flush_final()?;
    let encoded_bits = writer.bits_written();

    let compressed_size = header.encoded_len() + encoded_bits.div_ceil(8);
    debug!(
        original_size = input.len(),
        compressed_size,
        encoded_bits,
        "huffman compression complete"
    );

    Ok(CompressStats {
        original_size: input.len() as u64,
        compressed_size,
        encoded_bits,
    })
}
