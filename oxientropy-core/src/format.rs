//! Container format auto-detection.
//!
//! Both containers open with a 4-byte little-endian magic tag, so the
//! first four bytes are enough to tell them apart.

use crate::error::{EntropyError, Result};
use std::io::Read;

/// Magic tag of the range coder container (`"1CRA"` on disk).
pub const ARITH_MAGIC: u32 = 0x4152_4331;

/// Magic tag of the Huffman container (`"1FFH"` on disk).
pub const HUFFMAN_MAGIC: u32 = 0x4846_4631;

/// Known container formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Integer range (arithmetic) coder container.
    Arithmetic,
    /// Static Huffman coder container.
    Huffman,
    /// Unknown format.
    Unknown,
}

impl Format {
    /// Detect format from magic bytes.
    pub fn from_magic(magic: &[u8]) -> Self {
        if magic.len() < 4 {
            return Self::Unknown;
        }

        if magic.starts_with(&ARITH_MAGIC.to_le_bytes()) {
            return Self::Arithmetic;
        }

        if magic.starts_with(&HUFFMAN_MAGIC.to_le_bytes()) {
            return Self::Huffman;
        }

        Self::Unknown
    }

    /// Detect format from a reader.
    ///
    /// Consumes up to four bytes and returns them alongside the format.
    pub fn detect<R: Read>(reader: &mut R) -> Result<(Self, Vec<u8>)> {
        let mut magic = Vec::with_capacity(4);
        reader.by_ref().take(4).read_to_end(&mut magic)?;

        let format = Self::from_magic(&magic);
        Ok((format, magic))
    }

    /// Get the typical file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Arithmetic => "arc",
            Self::Huffman => "huf",
            Self::Unknown => "",
        }
    }
}

/// Read a container's magic tag and check it against `magic`.
///
/// Nothing past the tag is read, so a mismatch leaves the rest of the
/// stream untouched. Inputs shorter than four bytes are a mismatch too.
pub fn expect_magic<R: Read + ?Sized>(reader: &mut R, magic: u32) -> Result<()> {
    let expected = magic.to_le_bytes();
    let mut found = Vec::with_capacity(4);
    Read::take(&mut *reader, 4).read_to_end(&mut found)?;

    if found != expected {
        return Err(EntropyError::bad_format(expected.to_vec(), found));
    }
    Ok(())
}

/// Read a fixed-size header field.
///
/// A short read becomes [`EntropyError::TruncatedHeader`] naming `field`.
pub fn read_field<R: Read + ?Sized, const N: usize>(
    reader: &mut R,
    field: &'static str,
) -> Result<[u8; N]> {
    let mut buf = [0u8; N];
    reader
        .read_exact(&mut buf)
        .map_err(|e| EntropyError::from_header_read(e, field))?;
    Ok(buf)
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Arithmetic => write!(f, "Arithmetic (range coder)"),
            Self::Huffman => write!(f, "Huffman"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_detect_arith() {
        assert_eq!(Format::from_magic(b"1CRA\x10\x00"), Format::Arithmetic);
    }

    #[test]
    fn test_detect_huffman() {
        assert_eq!(Format::from_magic(b"1FFH"), Format::Huffman);
    }

    #[test]
    fn test_detect_unknown() {
        assert_eq!(Format::from_magic(&[0x1F, 0x8B, 0x08, 0x00]), Format::Unknown);
        assert_eq!(Format::from_magic(b"1CR"), Format::Unknown);
        assert_eq!(Format::from_magic(&[]), Format::Unknown);
    }

    #[test]
    fn test_expect_magic() {
        let mut ok = Cursor::new(b"1CRA\x04".to_vec());
        expect_magic(&mut ok, ARITH_MAGIC).unwrap();
        assert_eq!(ok.position(), 4);

        let mut wrong = Cursor::new(b"1FFH\x04".to_vec());
        assert!(matches!(
            expect_magic(&mut wrong, ARITH_MAGIC),
            Err(EntropyError::BadFormat { .. })
        ));

        let mut short = Cursor::new(b"1C".to_vec());
        assert!(matches!(
            expect_magic(&mut short, ARITH_MAGIC),
            Err(EntropyError::BadFormat { .. })
        ));
    }

    #[test]
    fn test_read_field_truncated() {
        let mut reader = Cursor::new(vec![1u8, 2, 3]);
        let first: [u8; 2] = read_field(&mut reader, "size").unwrap();
        assert_eq!(first, [1, 2]);
        assert!(matches!(
            read_field::<_, 4>(&mut reader, "bit count"),
            Err(EntropyError::TruncatedHeader { field: "bit count" })
        ));
    }

    #[test]
    fn test_detect_from_reader() {
        let mut reader = Cursor::new(b"1FFH rest of file".to_vec());
        let (format, magic) = Format::detect(&mut reader).unwrap();
        assert_eq!(format, Format::Huffman);
        assert_eq!(magic, b"1FFH");
        assert_eq!(reader.position(), 4);
    }
}
