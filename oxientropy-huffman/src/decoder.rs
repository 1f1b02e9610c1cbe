//! Huffman decompression.

use crate::container::HuffmanHeader;
use crate::tree::{HuffmanTree, Node};
use oxientropy_core::bitstream::BitReader;
use oxientropy_core::error::{EntropyError, Result};
use oxientropy_core::traits::DecompressStats;
use std::io::{Read, Write};
use tracing::{debug, trace, warn};

/// Output is handed to the writer in chunks of this size.
const CHUNK_SIZE: usize = 64 * 1024;

/// Decompress one container from `input` into `output`.
///
/// Walks the tree one bit at a time until the declared number of symbols
/// has been produced. If the payload runs out first, everything decoded so
/// far is written and flushed, then [`EntropyError::SizeMismatch`] reports
/// how far decoding got.
pub fn decode_from<R: Read + ?Sized, W: Write + ?Sized>(
    input: &mut R,
    output: &mut W,
) -> Result<DecompressStats> {
    let header = HuffmanHeader::read(input)?;
    let tree = HuffmanTree::from_frequencies(&header.frequencies)?;
    trace!(
        original_size = header.original_size,
        unique_count = header.unique_count(),
        "read huffman header"
    );

    if header.total() != header.original_size {
        warn!(
            original_size = header.original_size,
            total = header.total(),
            "frequency total disagrees with declared size"
        );
    }

    // The declared size is untrusted, so it only bounds the buffer
    let capacity = usize::try_from(header.original_size)
        .unwrap_or(usize::MAX)
        .min(CHUNK_SIZE);
    let mut chunk = Vec::with_capacity(capacity);

    if let Some(symbol) = tree.sole_symbol() {
        let mut remaining = header.original_size;
        while remaining > 0 {
            let n = remaining.min(CHUNK_SIZE as u64) as usize;
            chunk.clear();
            chunk.resize(n, symbol);
            output.write_all(&chunk)?;
            remaining -= n as u64;
        }
        output.flush()?;

        debug!(
            original_size = header.original_size,
            "huffman decompression complete"
        );
        return Ok(DecompressStats {
            compressed_size: header.encoded_len(),
            original_size: header.original_size,
        });
    }

    let mut reader = BitReader::new(&mut *input);
    let mut decoded = 0u64;
    let mut node = tree.root();

    while decoded < header.original_size {
        let bit = match reader.read_bit() {
            Ok(bit) => bit,
            Err(EntropyError::EndOfStream { .. }) => {
                output.write_all(&chunk)?;
                output.flush()?;
                warn!(
                    expected = header.original_size,
                    actual = decoded,
                    "huffman payload ended early"
                );
                return Err(EntropyError::size_mismatch(header.original_size, decoded));
            }
            Err(e) => return Err(e),
        };

        if let Node::Internal { left, right } = tree.node(node) {
            node = if bit { right } else { left };
        }

        if let Node::Leaf { symbol } = tree.node(node) {
            chunk.push(symbol);
            decoded += 1;
            node = tree.root();
            if chunk.len() == CHUNK_SIZE {
                output.write_all(&chunk)?;
                chunk.clear();
            }
        }
    }

    output.write_all(&chunk)?;
    output.flush()?;

    let compressed_size = header.encoded_len() + reader.bits_read().div_ceil(8);
    debug!(
        original_size = header.original_size,
        compressed_size,
        "huffman decompression complete"
    );

    Ok(DecompressStats {
        compressed_size,
        original_size: header.original_size,
    })
}
