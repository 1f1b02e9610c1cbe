//! Range coder container format.
//!
//! All integers are little-endian:
//!
//! ```text
//! offset  size       field
//! 0       4          magic (0x41524331, "1CRA" on disk)
//! 4       4          original size in bytes
//! 8       256 * 4    frequency of every byte value, zeros included
//! 1032    8          number of meaningful bits in the payload
//! 1040    ...        range coded payload, MSB-first, zero-padded
//! ```
//!
//! The bit count is only known after the payload has been written, so the
//! encoder writes a zero placeholder and patches it afterwards with
//! [`patch_encoded_bits`].

use crate::model::{ALPHABET_SIZE, FrequencyTable};
use oxientropy_core::error::Result;
use oxientropy_core::format::{ARITH_MAGIC, expect_magic, read_field};
use std::io::{Read, Seek, SeekFrom, Write};

/// Offset of the original size field.
pub const ORIGINAL_SIZE_OFFSET: u64 = 4;

/// Offset of the frequency table.
pub const FREQUENCY_TABLE_OFFSET: u64 = 8;

/// Offset of the encoded bit count field.
pub const BIT_COUNT_OFFSET: u64 = FREQUENCY_TABLE_OFFSET + (ALPHABET_SIZE as u64) * 4;

/// Total header size; the payload starts here.
pub const HEADER_SIZE: u64 = BIT_COUNT_OFFSET + 8;

const TABLE_BYTES: usize = ALPHABET_SIZE * 4;

/// Range coder container header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArithHeader {
    /// Size of the decoded output in bytes.
    pub original_size: u32,
    /// Raw symbol counts.
    pub frequencies: FrequencyTable,
    /// Number of meaningful payload bits.
    pub encoded_bits: u64,
}

impl ArithHeader {
    /// Write the header to a writer.
    pub fn write<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(&ARITH_MAGIC.to_le_bytes())?;
        writer.write_all(&self.original_size.to_le_bytes())?;

        let mut table = [0u8; TABLE_BYTES];
        for (chunk, count) in table
            .chunks_exact_mut(4)
            .zip(self.frequencies.counts().iter())
        {
            chunk.copy_from_slice(&count.to_le_bytes());
        }
        writer.write_all(&table)?;

        writer.write_all(&self.encoded_bits.to_le_bytes())?;
        Ok(())
    }

    /// Read a header from a reader.
    ///
    /// The magic is checked before anything else is read.
    pub fn read<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        expect_magic(reader, ARITH_MAGIC)?;

        let original_size = u32::from_le_bytes(read_field(reader, "original size")?);

        let table: [u8; TABLE_BYTES] = read_field(reader, "frequency table")?;
        let mut counts = [0u32; ALPHABET_SIZE];
        for (count, chunk) in counts.iter_mut().zip(table.chunks_exact(4)) {
            *count = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        let encoded_bits = u64::from_le_bytes(read_field(reader, "encoded bit count")?);

        Ok(Self {
            original_size,
            frequencies: FrequencyTable::from_counts(counts),
            encoded_bits,
        })
    }

    /// Number of payload bytes implied by the bit count.
    pub fn payload_len(&self) -> u64 {
        self.encoded_bits.div_ceil(8)
    }

    /// Total container size implied by the header.
    pub fn container_len(&self) -> u64 {
        HEADER_SIZE + self.payload_len()
    }
}

/// Overwrite the bit count placeholder of a header written at `header_start`.
///
/// The writer is left positioned where it was before the call.
pub fn patch_encoded_bits<W: Write + Seek + ?Sized>(
    writer: &mut W,
    header_start: u64,
    encoded_bits: u64,
) -> Result<()> {
    let end = writer.stream_position()?;
    writer.seek(SeekFrom::Start(header_start + BIT_COUNT_OFFSET))?;
    writer.write_all(&encoded_bits.to_le_bytes())?;
    writer.seek(SeekFrom::Start(end))?;
    Ok(())
}
