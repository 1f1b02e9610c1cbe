//! Error types for OxiEntropy operations.
//!
//! A single error type covers both codecs: input validation, container
//! format validation, model reconstruction and bit-level stream errors.

use std::io;
use thiserror::Error;

/// The main error type for OxiEntropy operations.
#[derive(Debug, Error)]
pub enum EntropyError {
    /// The source contained no bytes. Empty inputs are rejected, not encoded.
    #[error("Input is empty")]
    EmptyInput,

    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Magic tag mismatch on decode.
    #[error("Bad format: expected magic {expected:02x?}, found {found:02x?}")]
    BadFormat {
        /// Expected magic bytes.
        expected: Vec<u8>,
        /// Actual bytes found.
        found: Vec<u8>,
    },

    /// The container header ended before a field could be read.
    #[error("Truncated header: missing {field}")]
    TruncatedHeader {
        /// Name of the field that could not be read.
        field: &'static str,
    },

    /// The frequency model cannot be used for coding.
    #[error("Degenerate model: {reason}")]
    DegenerateModel {
        /// Why the model was rejected.
        reason: String,
    },

    /// The bit source ran out before the expected data was consumed.
    #[error("Unexpected end of bitstream at bit position {position}")]
    EndOfStream {
        /// Number of bits successfully read before exhaustion.
        position: u64,
    },

    /// Decoded byte count differs from the size declared in the header.
    #[error("Size mismatch: header declares {expected} bytes, decoded {actual}")]
    SizeMismatch {
        /// Size declared in the header.
        expected: u64,
        /// Number of bytes actually decoded.
        actual: u64,
    },

    /// Input exceeds what the container or the coder precision can represent.
    #[error("Input too large: {size} bytes exceeds limit of {limit}")]
    InputTooLarge {
        /// Input size in bytes.
        size: u64,
        /// Maximum supported size.
        limit: u64,
    },
}

/// Result type alias for OxiEntropy operations.
pub type Result<T> = std::result::Result<T, EntropyError>;

impl EntropyError {
    /// Create a bad format (magic mismatch) error.
    pub fn bad_format(expected: impl Into<Vec<u8>>, found: impl Into<Vec<u8>>) -> Self {
        Self::BadFormat {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create a truncated header error.
    pub fn truncated_header(field: &'static str) -> Self {
        Self::TruncatedHeader { field }
    }

    /// Create a degenerate model error.
    pub fn degenerate_model(reason: impl Into<String>) -> Self {
        Self::DegenerateModel {
            reason: reason.into(),
        }
    }

    /// Create an end of stream error.
    pub fn end_of_stream(position: u64) -> Self {
        Self::EndOfStream { position }
    }

    /// Create a size mismatch error.
    pub fn size_mismatch(expected: u64, actual: u64) -> Self {
        Self::SizeMismatch { expected, actual }
    }

    /// Create an input too large error.
    pub fn input_too_large(size: u64, limit: u64) -> Self {
        Self::InputTooLarge { size, limit }
    }

    /// Map an `UnexpectedEof` I/O error to [`EntropyError::TruncatedHeader`].
    ///
    /// Other I/O errors pass through unchanged.
    pub fn from_header_read(err: io::Error, field: &'static str) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            Self::truncated_header(field)
        } else {
            Self::Io(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EntropyError::bad_format(b"1CRA".to_vec(), vec![0x50, 0x4B, 0x03, 0x04]);
        assert!(err.to_string().contains("Bad format"));

        let err = EntropyError::size_mismatch(10, 7);
        assert!(err.to_string().contains("declares 10"));
        assert!(err.to_string().contains("decoded 7"));

        let err = EntropyError::degenerate_model("total frequency is zero");
        assert!(err.to_string().contains("total frequency is zero"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: EntropyError = io_err.into();
        assert!(matches!(err, EntropyError::Io(_)));
    }

    #[test]
    fn test_header_read_mapping() {
        let eof = io::Error::from(io::ErrorKind::UnexpectedEof);
        assert!(matches!(
            EntropyError::from_header_read(eof, "frequency table"),
            EntropyError::TruncatedHeader {
                field: "frequency table"
            }
        ));

        let other = io::Error::from(io::ErrorKind::PermissionDenied);
        assert!(matches!(
            EntropyError::from_header_read(other, "magic"),
            EntropyError::Io(_)
        ));
    }
}
