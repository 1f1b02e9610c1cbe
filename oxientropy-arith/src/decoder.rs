//! Range coder decompression.

use crate::config::DecodeConfig;
use crate::container::ArithHeader;
use crate::model::CumulativeTable;
use crate::range_coder::{MAX_TOTAL, RangeDecoder};
use oxientropy_core::error::{EntropyError, Result};
use oxientropy_core::traits::DecompressStats;
use std::io::{Read, Write};
use tracing::{debug, trace, warn};

/// Output is handed to the writer in chunks of this size.
const CHUNK_SIZE: usize = 64 * 1024;

/// Decompress one container from `input` into `output`.
///
/// The header is validated in full before the first output byte is written.
/// Decoding stops after exactly `original_size` symbols; payload bits beyond
/// the declared bit count, including final-byte padding, are never read.
pub fn decode_from<R: Read + ?Sized, W: Write + ?Sized>(
    input: &mut R,
    output: &mut W,
    config: DecodeConfig,
) -> Result<DecompressStats> {
    let header = ArithHeader::read(input)?;
    let model = CumulativeTable::build(&header.frequencies)?;
    trace!(
        original_size = header.original_size,
        encoded_bits = header.encoded_bits,
        total = model.total(),
        "read range coder header"
    );

    if model.total() != header.original_size as u64 {
        warn!(
            original_size = header.original_size,
            total = model.total(),
            "frequency total disagrees with declared size"
        );
    }

    // No encoder emits a multi-symbol model this wide; narrowing could collapse
    if header.frequencies.sole_symbol().is_none() && model.total() > MAX_TOTAL {
        return Err(EntropyError::degenerate_model(format!(
            "total frequency {} exceeds coder precision limit {}",
            model.total(),
            MAX_TOTAL
        )));
    }

    let original_size = header.original_size as usize;
    let mut chunk = Vec::with_capacity(original_size.min(CHUNK_SIZE));

    if let Some(symbol) = header.frequencies.sole_symbol() {
        let mut remaining = original_size;
        while remaining > 0 {
            let n = remaining.min(CHUNK_SIZE);
            chunk.clear();
            chunk.resize(n, symbol);
            output.write_all(&chunk)?;
            remaining -= n;
        }
    } else {
        let mut decoder = RangeDecoder::new(&mut *input, header.encoded_bits, config)?;
        for _ in 0..original_size {
            chunk.push(decoder.decode(&model)?);
            if chunk.len() == CHUNK_SIZE {
                output.write_all(&chunk)?;
                chunk.clear();
            }
        }
        output.write_all(&chunk)?;
    }
    output.flush()?;

    debug!(
        original_size,
        compressed_size = header.container_len(),
        "range coder decompression complete"
    );

    Ok(DecompressStats {
        compressed_size: header.container_len(),
        original_size: original_size as u64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::HEADER_SIZE;
    use crate::encoder::encode_to;
    use std::io::Cursor;

    fn encode(input: &[u8]) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        encode_to(input, &mut cursor).unwrap();
        cursor.into_inner()
    }

    #[test]
    fn test_decode_simple() {
        let original = b"TOBEORNOTTOBEORTOBEORNOT";
        let compressed = encode(original);

        let mut output = Vec::new();
        let stats =
            decode_from(&mut compressed.as_slice(), &mut output, DecodeConfig::default()).unwrap();
        assert_eq!(output, original);
        assert_eq!(stats.original_size, original.len() as u64);
        assert_eq!(stats.compressed_size, compressed.len() as u64);
    }

    #[test]
    fn test_decode_larger_than_chunk() {
        let original: Vec<u8> = (0..CHUNK_SIZE * 2 + 17)
            .map(|i| b"etaoin shrdlu"[i % 13])
            .collect();
        let compressed = encode(&original);

        let mut output = Vec::new();
        decode_from(&mut compressed.as_slice(), &mut output, DecodeConfig::default()).unwrap();
        assert_eq!(output, original);
    }

    #[test]
    fn test_decode_zero_table_writes_nothing() {
        let mut compressed = encode(b"hello");
        for byte in &mut compressed[8..HEADER_SIZE as usize - 8] {
            *byte = 0;
        }

        let mut output = Vec::new();
        let result = decode_from(&mut compressed.as_slice(), &mut output, DecodeConfig::default());
        assert!(matches!(result, Err(EntropyError::DegenerateModel { .. })));
        assert!(output.is_empty());
    }

    #[test]
    fn test_decode_rejects_oversized_total() {
        let mut compressed = encode(b"ab");
        let huge = (MAX_TOTAL as u32).to_le_bytes();
        let a = 8 + 4 * b'a' as usize;
        compressed[a..a + 4].copy_from_slice(&huge);

        let mut output = Vec::new();
        let result = decode_from(&mut compressed.as_slice(), &mut output, DecodeConfig::default());
        assert!(matches!(result, Err(EntropyError::DegenerateModel { .. })));
    }

    #[test]
    fn test_decode_missing_payload() {
        let original: Vec<u8> = (0..500u32).map(|i| (i * 31 % 7) as u8).collect();
        let compressed = encode(&original);
        let header_only = &compressed[..HEADER_SIZE as usize];

        // Lenient decoding still produces the declared number of bytes
        let mut output = Vec::new();
        decode_from(&mut &header_only[..], &mut output, DecodeConfig::LENIENT).unwrap();
        assert_eq!(output.len(), original.len());

        let mut output = Vec::new();
        let result = decode_from(&mut &header_only[..], &mut output, DecodeConfig::STRICT);
        assert!(matches!(result, Err(EntropyError::EndOfStream { .. })));
    }
}
