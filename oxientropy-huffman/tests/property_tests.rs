use oxientropy_huffman::{HuffmanHeader, compress, decompress};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_roundtrip_arbitrary(input in prop::collection::vec(any::<u8>(), 1..4096)) {
        let compressed = compress(&input).unwrap();
        prop_assert_eq!(decompress(&compressed).unwrap(), input);
    }

    #[test]
    fn test_roundtrip_small_alphabet(input in prop::collection::vec(0..4u8, 1..8192)) {
        let compressed = compress(&input).unwrap();
        prop_assert_eq!(decompress(&compressed).unwrap(), input);
    }

    #[test]
    fn test_header_matches_input(input in prop::collection::vec(any::<u8>(), 1..1024)) {
        let compressed = compress(&input).unwrap();
        let header = HuffmanHeader::read(&mut compressed.as_slice()).unwrap();

        prop_assert_eq!(header.original_size, input.len() as u64);
        prop_assert_eq!(header.total(), input.len() as u64);
    }
}
