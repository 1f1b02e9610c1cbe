//! Range coder compression: model, header, payload, header patch.

use crate::container::{ArithHeader, patch_encoded_bits};
use crate::model::{CumulativeTable, FrequencyTable};
use crate::range_coder::{MAX_TOTAL, RangeEncoder};
use oxientropy_core::error::{EntropyError, Result};
use oxientropy_core::traits::CompressStats;
use std::io::{Seek, Write};
use tracing::{debug, trace};

/// Compress `input` into a complete container written to `output`.
///
/// # Algorithm
///
/// 1. Count symbol frequencies and build the cumulative table
/// 2. Write the header with a zero placeholder for the bit count
/// 3. Range code every input byte into the payload
/// 4. Terminate the range coder and pad the final byte
/// 5. Seek back and overwrite the placeholder with the real bit count
///
/// Validation happens before anything is written: empty input fails with
/// `EmptyInput`, and inputs the 32-bit coder cannot represent fail with
/// `InputTooLarge`.
pub fn encode_to<W: Write + Seek + ?Sized>(input: &[u8], output: &mut W) -> Result<CompressStats> {
    let frequencies = FrequencyTable::count(input)?;
    let model = CumulativeTable::build(&frequencies)?;
    let sole_symbol = frequencies.sole_symbol();

    if sole_symbol.is_none() && model.total() > MAX_TOTAL {
        return Err(EntropyError::input_too_large(model.total(), MAX_TOTAL));
    }

    let header_start = output.stream_position()?;
    let header = ArithHeader {
        original_size: input.len() as u32,
        frequencies,
        encoded_bits: 0,
    };
    header.write(output)?;
    trace!(
        original_size = header.original_size,
        distinct_symbols = header.frequencies.distinct_symbols(),
        "wrote range coder header"
    );

    let mut encoder = RangeEncoder::new(&mut *output);
    // A lone symbol owns the whole interval, so narrowing never changes it
    if sole_symbol.is_none() {
        for &symbol in input {
            encoder.encode(&model, symbol)?;
        }
    }
    let (_, encoded_bits) = encoder.finish()?;

    patch_encoded_bits(output, header_start, encoded_bits)?;
    let compressed_size = output.stream_position()? - header_start;

    debug!(
        original_size = input.len(),
        compressed_size,
        encoded_bits,
        "range coder compression complete"
    );

    Ok(CompressStats {
        original_size: input.len() as u64,
        compressed_size,
        encoded_bits,
    })
}
