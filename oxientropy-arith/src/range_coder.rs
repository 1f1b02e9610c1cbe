//! Integer range coder with 32-bit precision.
//!
//! The coder tracks an interval `[low, high]` of 32-bit integers. Each symbol
//! narrows the interval in proportion to its share of the cumulative
//! distribution; normalization then doubles the interval until it is wide
//! enough to resolve the next symbol, emitting one bit per doubling:
//!
//! - `high < HALF`: interval in the lower half, emit `0`
//! - `low >= HALF`: interval in the upper half, emit `1`
//! - `QUARTER <= low` and `high < THREE_QUARTERS`: interval straddles the
//!   midpoint, defer one bit (it will be the inverse of the next definite
//!   bit)
//!
//! The decoder replays the same interval walk, shifting bitstream bits into
//! a 32-bit `value` register in place of emitting them.
//!
//! After normalization the interval is always wider than `QUARTER`, so any
//! model whose total does not exceed [`MAX_TOTAL`] gives every present symbol
//! a non-empty sub-interval.

use crate::config::DecodeConfig;
use crate::model::CumulativeTable;
use oxientropy_core::bitstream::{BitReader, BitWriter};
use oxientropy_core::error::{EntropyError, Result};
use std::io::{Read, Write};
use tracing::warn;

/// Width of the interval registers in bits.
pub const PRECISION_BITS: u32 = 32;

/// Upper bound of the full interval (`2^32 - 1`).
pub const MAX_VALUE: u64 = (1 << PRECISION_BITS) - 1;

/// Midpoint of the full interval.
pub const HALF: u64 = MAX_VALUE / 2 + 1;

/// First quarter point.
pub const QUARTER: u64 = HALF / 2;

/// Third quarter point.
pub const THREE_QUARTERS: u64 = QUARTER * 3;

/// Largest frequency total a multi-symbol model may use.
pub const MAX_TOTAL: u64 = QUARTER;

/// Wide multiply, narrow divide: `floor(range * cum / total)`.
///
/// `range` is at most `2^32` and `cum` at most `total`, so the quotient
/// never exceeds `range`.
#[inline]
fn scale(range: u64, cum: u64, total: u64) -> u64 {
    (range as u128 * cum as u128 / total as u128) as u64
}

/// Which normalization rule fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Renormalization {
    /// Interval entirely below `HALF`; the next bit is `0`.
    Lower,
    /// Interval entirely at or above `HALF`; the next bit is `1`.
    Upper,
    /// Interval straddles `HALF` inside the middle quarters; bit deferred.
    Underflow,
}

impl Renormalization {
    /// Amount subtracted from the bounds (and the decoder value) before doubling.
    #[inline]
    pub fn offset(self) -> u64 {
        match self {
            Self::Lower => 0,
            Self::Upper => HALF,
            Self::Underflow => QUARTER,
        }
    }
}

/// The coder's current interval. Invariant: `low <= high <= MAX_VALUE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    /// Inclusive lower bound.
    pub low: u64,
    /// Inclusive upper bound.
    pub high: u64,
}

impl Interval {
    /// The initial interval `[0, 2^32 - 1]`.
    pub const FULL: Self = Self {
        low: 0,
        high: MAX_VALUE,
    };

    /// Number of integers in the interval.
    #[inline]
    pub fn range(&self) -> u64 {
        self.high - self.low + 1
    }

    /// Narrow the interval to the sub-interval of `symbol`.
    ///
    /// The symbol must have a non-zero frequency in `model`.
    #[inline]
    pub fn narrow(&mut self, model: &CumulativeTable, symbol: u8) {
        let range = self.range();
        let total = model.total();

        let high = self.low + scale(range, model.high(symbol), total) - 1;
        let low = self.low + scale(range, model.low(symbol), total);
        self.low = low;
        self.high = high;

        debug_assert!(self.low <= self.high, "interval collapsed: {:?}", self);
    }

    /// Apply the first matching normalization rule, if any.
    ///
    /// Subtracts the rule's offset from both bounds and doubles the interval.
    /// Returns `None` once the interval is wide enough.
    #[inline]
    pub fn renormalize_step(&mut self) -> Option<Renormalization> {
        let case = if self.high < HALF {
            Renormalization::Lower
        } else if self.low >= HALF {
            Renormalization::Upper
        } else if self.low >= QUARTER && self.high < THREE_QUARTERS {
            Renormalization::Underflow
        } else {
            return None;
        };

        let offset = case.offset();
        self.low = (self.low - offset) << 1;
        self.high = ((self.high - offset) << 1) | 1;

        debug_assert!(self.low <= self.high && self.high <= MAX_VALUE);
        Some(case)
    }
}

/// Range encoder writing an MSB-first bitstream.
#[derive(Debug)]
pub struct RangeEncoder<W: Write> {
    writer: BitWriter<W>,
    interval: Interval,
    /// Bits deferred by underflow, flushed inverted after the next definite bit.
    pending: u64,
}

impl<W: Write> RangeEncoder<W> {
    /// Create a new range encoder over the full interval.
    pub fn new(writer: W) -> Self {
        Self {
            writer: BitWriter::new(writer),
            interval: Interval::FULL,
            pending: 0,
        }
    }

    /// Current interval.
    pub fn interval(&self) -> Interval {
        self.interval
    }

    /// Number of deferred bits.
    pub fn pending_bits(&self) -> u64 {
        self.pending
    }

    /// Bits emitted so far (deferred bits not included).
    pub fn bits_written(&self) -> u64 {
        self.writer.bits_written()
    }

    /// Emit a definite bit followed by all pending bits, inverted.
    fn emit(&mut self, bit: bool) -> Result<()> {
        self.writer.write_bit(bit)?;
        self.writer.write_repeated(!bit, self.pending)?;
        self.pending = 0;
        Ok(())
    }

    /// Encode one symbol.
    pub fn encode(&mut self, model: &CumulativeTable, symbol: u8) -> Result<()> {
        if model.high(symbol) == model.low(symbol) {
            return Err(EntropyError::degenerate_model(format!(
                "symbol {:#04x} has zero frequency",
                symbol
            )));
        }

        self.interval.narrow(model, symbol);

        while let Some(case) = self.interval.renormalize_step() {
            match case {
                Renormalization::Lower => self.emit(false)?,
                Renormalization::Upper => self.emit(true)?,
                Renormalization::Underflow => self.pending += 1,
            }
        }

        Ok(())
    }

    /// Terminate the stream.
    ///
    /// Emits one more deferred bit plus a definite bit selecting the quarter
    /// that `low` lies in, pads the final byte with zeros, and returns the
    /// writer along with the number of meaningful bits written.
    pub fn finish(mut self) -> Result<(W, u64)> {
        self.pending += 1;
        self.emit(self.interval.low >= QUARTER)?;

        let bits = self.writer.bits_written();
        let writer = self.writer.into_inner()?;
        Ok((writer, bits))
    }
}

/// Range decoder reading an MSB-first bitstream.
#[derive(Debug)]
pub struct RangeDecoder<R: Read> {
    reader: BitReader<R>,
    interval: Interval,
    /// Current 32-bit window into the bitstream. Invariant: `low <= value <= high`.
    value: u64,
    /// Number of meaningful bits in the stream.
    bit_budget: u64,
    /// Bits shifted into `value`, including substituted zeros.
    bits_consumed: u64,
    /// Set once the source ran dry inside the bit budget.
    exhausted: bool,
    config: DecodeConfig,
}

impl<R: Read> RangeDecoder<R> {
    /// Create a decoder and load the first 32 bits into the value register.
    ///
    /// Only the first `encoded_bits` bits are taken from `reader`; every
    /// later bit reads as zero.
    pub fn new(reader: R, encoded_bits: u64, config: DecodeConfig) -> Result<Self> {
        let mut decoder = Self {
            reader: BitReader::new(reader),
            interval: Interval::FULL,
            value: 0,
            bit_budget: encoded_bits,
            bits_consumed: 0,
            exhausted: false,
            config,
        };

        for _ in 0..PRECISION_BITS {
            decoder.value = (decoder.value << 1) | decoder.next_bit()?;
        }

        Ok(decoder)
    }

    /// Current interval.
    pub fn interval(&self) -> Interval {
        self.interval
    }

    /// Current value register.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Bits shifted into the value register so far.
    pub fn bits_consumed(&self) -> u64 {
        self.bits_consumed
    }

    /// Whether the payload ended before the declared bit count.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    fn next_bit(&mut self) -> Result<u64> {
        let bit = if self.bits_consumed < self.bit_budget && !self.exhausted {
            match self.reader.read_bit() {
                Ok(bit) => bit as u64,
                Err(EntropyError::EndOfStream { position }) => {
                    if self.config.strict_stream {
                        return Err(EntropyError::end_of_stream(position));
                    }
                    warn!(
                        position,
                        declared_bits = self.bit_budget,
                        "payload shorter than declared bit count, substituting zero bits"
                    );
                    self.exhausted = true;
                    0
                }
                Err(e) => return Err(e),
            }
        } else {
            0
        };

        self.bits_consumed += 1;
        Ok(bit)
    }

    /// Decode one symbol.
    pub fn decode(&mut self, model: &CumulativeTable) -> Result<u8> {
        debug_assert!(self.interval.low <= self.value && self.value <= self.interval.high);

        let range = self.interval.range();
        let offset = self.value - self.interval.low + 1;
        let scaled = ((offset as u128 * model.total() as u128 - 1) / range as u128) as u64;

        let symbol = model.symbol_for(scaled);
        self.interval.narrow(model, symbol);

        while let Some(case) = self.interval.renormalize_step() {
            self.value = ((self.value - case.offset()) << 1) | self.next_bit()?;
        }

        Ok(symbol)
    }
}
