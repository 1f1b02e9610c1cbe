//! End-to-end tests for the Huffman container.

use oxientropy_core::EntropyError;
use oxientropy_core::format::{ARITH_MAGIC, Format};
use oxientropy_huffman::{HuffmanHeader, compress, decompress};

#[test]
fn test_single_byte() {
    let input = b"A";
    let compressed = compress(input).unwrap();
    // Header, one table entry, one payload byte
    assert_eq!(compressed.len(), 14 + 9 + 1);
    assert_eq!(decompress(&compressed).unwrap(), input);
}

#[test]
fn test_single_symbol_stream() {
    let input = vec![0x41u8; 1_000_000];
    let compressed = compress(&input).unwrap();
    assert_eq!(decompress(&compressed).unwrap(), input);
}

#[test]
fn test_skewed_two_symbols() {
    let input = [0u8, 0, 0, 1];
    let compressed = compress(&input).unwrap();

    let header = HuffmanHeader::read(&mut compressed.as_slice()).unwrap();
    assert_eq!(header.original_size, 4);
    assert_eq!(header.unique_count(), 2);
    assert_eq!(decompress(&compressed).unwrap(), input);
}

#[test]
fn test_all_byte_values() {
    let input: Vec<u8> = (0..=255u8).cycle().take(256 * 40).collect();
    let compressed = compress(&input).unwrap();

    // A flat distribution over 256 symbols costs exactly 8 bits per byte
    let header = HuffmanHeader::read(&mut compressed.as_slice()).unwrap();
    assert_eq!(header.unique_count(), 256);
    assert_eq!(
        compressed.len() as u64,
        header.encoded_len() + input.len() as u64
    );
    assert_eq!(decompress(&compressed).unwrap(), input);
}

#[test]
fn test_text() {
    let mut input = Vec::new();
    while input.len() < 100_000 {
        input.extend_from_slice(b"The quick brown fox jumps over the lazy dog. ");
    }
    let compressed = compress(&input).unwrap();
    assert!(compressed.len() < input.len() * 3 / 4);
    assert_eq!(decompress(&compressed).unwrap(), input);
}

#[test]
fn test_deterministic() {
    let input = b"determinism is a feature, determinism is a feature";
    assert_eq!(compress(input).unwrap(), compress(input).unwrap());
}

#[test]
fn test_empty_input() {
    assert!(matches!(compress(&[]), Err(EntropyError::EmptyInput)));
}

#[test]
fn test_format_detection() {
    let compressed = compress(b"detect me").unwrap();
    let (format, magic) = Format::detect(&mut compressed.as_slice()).unwrap();
    assert_eq!(format, Format::Huffman);
    assert_eq!(magic, b"1FFH");
}

#[test]
fn test_rejects_arith_container() {
    let mut data = ARITH_MAGIC.to_le_bytes().to_vec();
    data.extend_from_slice(&[0u8; 64]);
    assert!(matches!(
        decompress(&data),
        Err(EntropyError::BadFormat { .. })
    ));
}

#[test]
fn test_rejects_empty_table() {
    let mut data = b"1FFH".to_vec();
    data.extend_from_slice(&10u64.to_le_bytes());
    data.extend_from_slice(&0u16.to_le_bytes());
    assert!(matches!(
        decompress(&data),
        Err(EntropyError::DegenerateModel { .. })
    ));
}

#[test]
fn test_missing_payload() {
    let input = b"hello huffman";
    let compressed = compress(input).unwrap();
    let header = HuffmanHeader::read(&mut compressed.as_slice()).unwrap();
    let header_only = &compressed[..header.encoded_len() as usize];

    assert!(matches!(
        decompress(header_only),
        Err(EntropyError::SizeMismatch {
            expected: 13,
            actual: 0
        })
    ));
}
