//! Bit-level I/O for the entropy coders.
//!
//! This module provides `BitReader` and `BitWriter`, the bit channel shared
//! by the range coder and the Huffman coder.
//!
//! # Bit Ordering
//!
//! Both codecs use MSB-first (Most Significant Bit first) ordering within
//! bytes: the first bit written lands in bit 7 of the first byte. A partial
//! final byte is padded with zero bits on the low side.
//!
//! # Example
//!
//! ```
//! use oxientropy_core::bitstream::{BitReader, BitWriter};
//! use std::io::Cursor;
//!
//! let mut output = Vec::new();
//! let mut writer = BitWriter::new(&mut output);
//! writer.write_bit(true).unwrap();
//! writer.write_bit(false).unwrap();
//! writer.write_bit(true).unwrap();
//! writer.flush_final().unwrap();
//! assert_eq!(writer.bits_written(), 3);
//! assert_eq!(output, vec![0b1010_0000]);
//!
//! let mut reader = BitReader::new(Cursor::new(&output));
//! assert!(reader.read_bit().unwrap());
//! assert!(!reader.read_bit().unwrap());
//! assert!(reader.read_bit().unwrap());
//! ```

use crate::error::{EntropyError, Result};
use std::io::{ErrorKind, Read, Write};

/// An MSB-first bit reader that wraps any `Read` implementation.
#[derive(Debug)]
pub struct BitReader<R: Read> {
    /// Underlying reader.
    reader: R,
    /// Current byte being drained (MSB-first).
    buffer: u8,
    /// Number of unread bits left in `buffer`.
    bits_in_buffer: u8,
    /// Total bits read (for error reporting).
    total_bits_read: u64,
}

impl<R: Read> BitReader<R> {
    /// Create a new `BitReader` wrapping the given reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_read: 0,
        }
    }

    /// Get a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Consume this `BitReader` and return the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Get the total number of bits read so far.
    pub fn bits_read(&self) -> u64 {
        self.total_bits_read
    }

    /// Pull the next byte from the source.
    fn fill_buffer(&mut self) -> Result<()> {
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return Err(EntropyError::end_of_stream(self.total_bits_read)),
                Ok(_) => break,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        self.buffer = byte[0];
        self.bits_in_buffer = 8;
        Ok(())
    }

    /// Read a single bit.
    ///
    /// Returns [`EntropyError::EndOfStream`] once the source is exhausted.
    #[inline]
    pub fn read_bit(&mut self) -> Result<bool> {
        if self.bits_in_buffer == 0 {
            self.fill_buffer()?;
        }

        self.bits_in_buffer -= 1;
        self.total_bits_read += 1;
        Ok((self.buffer >> self.bits_in_buffer) & 1 != 0)
    }
}

/// An MSB-first bit writer that wraps any `Write` implementation.
///
/// `BitWriter` accumulates bits in an 8-bit buffer and emits each byte as
/// soon as it is complete. Call [`BitWriter::flush_final`] exactly once when
/// done to emit the zero-padded partial byte.
#[derive(Debug)]
pub struct BitWriter<W: Write> {
    /// Underlying writer.
    writer: W,
    /// Bit accumulator (MSB-first).
    buffer: u8,
    /// Number of bits in buffer.
    bits_in_buffer: u8,
    /// Total meaningful bits written (padding excluded).
    total_bits_written: u64,
}

impl<W: Write> BitWriter<W> {
    /// Create a new `BitWriter` wrapping the given writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_written: 0,
        }
    }

    /// Get a reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Get a mutable reference to the underlying writer.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Flush the final partial byte and return the underlying writer.
    pub fn into_inner(mut self) -> Result<W> {
        self.flush_final()?;
        Ok(self.writer)
    }

    /// Get the total number of meaningful bits written so far.
    ///
    /// Zero padding added by [`BitWriter::flush_final`] is not counted.
    pub fn bits_written(&self) -> u64 {
        self.total_bits_written
    }

    #[inline]
    fn flush_byte(&mut self) -> Result<()> {
        self.writer.write_all(&[self.buffer])?;
        self.buffer = 0;
        self.bits_in_buffer = 0;
        Ok(())
    }

    /// Write a single bit.
    #[inline]
    pub fn write_bit(&mut self, bit: bool) -> Result<()> {
        self.buffer = (self.buffer << 1) | bit as u8;
        self.bits_in_buffer += 1;
        self.total_bits_written += 1;

        if self.bits_in_buffer == 8 {
            self.flush_byte()?;
        }

        Ok(())
    }

    /// Write `count` copies of the same bit.
    pub fn write_repeated(&mut self, bit: bool, count: u64) -> Result<()> {
        for _ in 0..count {
            self.write_bit(bit)?;
        }
        Ok(())
    }

    /// Pad the partial byte with zero bits and emit it.
    ///
    /// Does nothing when no bits are pending, so calling it twice is harmless.
    pub fn flush_final(&mut self) -> Result<()> {
        if self.bits_in_buffer == 0 {
            return Ok(());
        }

        self.buffer <<= 8 - self.bits_in_buffer;
        self.flush_byte()
    }
}
