//! Static frequency model for the range coder.
//!
//! The model is built once from the complete input and stored verbatim in
//! the container, so encoder and decoder derive the identical cumulative
//! distribution.

use oxientropy_core::error::{EntropyError, Result};

/// Number of symbols in the byte alphabet.
pub const ALPHABET_SIZE: usize = 256;

/// Per-symbol occurrence counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u32; ALPHABET_SIZE],
}

impl FrequencyTable {
    /// Count symbol occurrences in a single pass over `data`.
    ///
    /// Fails with [`EntropyError::EmptyInput`] on an empty slice, and with
    /// [`EntropyError::InputTooLarge`] when a count could overflow 32 bits.
    pub fn count(data: &[u8]) -> Result<Self> {
        if data.is_empty() {
            return Err(EntropyError::EmptyInput);
        }
        if data.len() as u64 > u32::MAX as u64 {
            return Err(EntropyError::input_too_large(
                data.len() as u64,
                u32::MAX as u64,
            ));
        }

        let mut counts = [0u32; ALPHABET_SIZE];
        for &byte in data {
            counts[byte as usize] += 1;
        }
        Ok(Self { counts })
    }

    /// Wrap raw counts, e.g. as read from a container header.
    pub fn from_counts(counts: [u32; ALPHABET_SIZE]) -> Self {
        Self { counts }
    }

    /// Raw counts, indexed by symbol.
    pub fn counts(&self) -> &[u32; ALPHABET_SIZE] {
        &self.counts
    }

    /// Count of a single symbol.
    pub fn get(&self, symbol: u8) -> u32 {
        self.counts[symbol as usize]
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    /// Number of symbols with a non-zero count.
    pub fn distinct_symbols(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// The only symbol present, if exactly one symbol has a non-zero count.
    pub fn sole_symbol(&self) -> Option<u8> {
        let mut present = self
            .counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(s, _)| s as u8);
        match (present.next(), present.next()) {
            (Some(symbol), None) => Some(symbol),
            _ => None,
        }
    }
}

/// Prefix sums of a [`FrequencyTable`].
///
/// `cum[0] = 0`, `cum[s + 1] = cum[s] + freq[s]` and `cum[256] = total`.
/// Symbol `s` owns the half-open range `[cum[s], cum[s + 1])`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CumulativeTable {
    cum: [u64; ALPHABET_SIZE + 1],
    /// Highest symbol with a non-zero count; target of out-of-range lookups.
    last_symbol: u8,
}

impl CumulativeTable {
    /// Build the cumulative table in ascending symbol order.
    ///
    /// Fails with [`EntropyError::DegenerateModel`] when the total is zero
    /// or does not fit in 32 bits. Neither can come from
    /// [`FrequencyTable::count`]; both guard decoding of corrupt headers.
    pub fn build(freq: &FrequencyTable) -> Result<Self> {
        let mut cum = [0u64; ALPHABET_SIZE + 1];
        for (s, &count) in freq.counts().iter().enumerate() {
            cum[s + 1] = cum[s] + count as u64;
        }

        let total = cum[ALPHABET_SIZE];
        if total == 0 {
            return Err(EntropyError::degenerate_model("total frequency is zero"));
        }
        if total > u32::MAX as u64 {
            return Err(EntropyError::degenerate_model(format!(
                "total frequency {} does not fit in 32 bits",
                total
            )));
        }

        let last_symbol = (0..ALPHABET_SIZE)
            .rev()
            .find(|&s| cum[s + 1] > cum[s])
            .unwrap_or(ALPHABET_SIZE - 1) as u8;

        Ok(Self { cum, last_symbol })
    }

    /// Grand total of all frequencies.
    #[inline]
    pub fn total(&self) -> u64 {
        self.cum[ALPHABET_SIZE]
    }

    /// Lower bound (inclusive) of the symbol's sub-interval.
    #[inline]
    pub fn low(&self, symbol: u8) -> u64 {
        self.cum[symbol as usize]
    }

    /// Upper bound (exclusive) of the symbol's sub-interval.
    #[inline]
    pub fn high(&self, symbol: u8) -> u64 {
        self.cum[symbol as usize + 1]
    }

    /// All 257 entries.
    pub fn as_slice(&self) -> &[u64] {
        &self.cum
    }

    /// Find the symbol `s` with `cum[s] <= scaled < cum[s + 1]`.
    ///
    /// Values at or beyond the total clamp to the highest present symbol,
    /// so corrupt input never panics.
    #[inline]
    pub fn symbol_for(&self, scaled: u64) -> u8 {
        let s = self.cum[1..].partition_point(|&c| c <= scaled);
        if s >= ALPHABET_SIZE {
            self.last_symbol
        } else {
            s as u8
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_concrete_scenario() {
        let freq = FrequencyTable::count(&[0, 0, 0, 1]).unwrap();
        assert_eq!(freq.get(0), 3);
        assert_eq!(freq.get(1), 1);
        assert_eq!(freq.total(), 4);
        assert_eq!(freq.distinct_symbols(), 2);

        let cum = CumulativeTable::build(&freq).unwrap();
        assert_eq!(&cum.as_slice()[..4], &[0, 3, 4, 4]);
        assert_eq!(cum.total(), 4);
        assert!(cum.as_slice()[2..].iter().all(|&c| c == 4));
    }

    #[test]
    fn test_count_empty() {
        assert!(matches!(
            FrequencyTable::count(&[]),
            Err(EntropyError::EmptyInput)
        ));
    }

    #[test]
    fn test_cumulative_invariant() {
        let data: Vec<u8> = (0..5000u32).map(|i| (i * i % 251) as u8).collect();
        let freq = FrequencyTable::count(&data).unwrap();
        let cum = CumulativeTable::build(&freq).unwrap();

        let slice = cum.as_slice();
        assert_eq!(slice[0], 0);
        assert!(slice.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(cum.total(), data.len() as u64);
        for s in 0..=255u8 {
            assert_eq!(cum.high(s) - cum.low(s), freq.get(s) as u64);
        }
    }

    #[test]
    fn test_degenerate_model() {
        let freq = FrequencyTable::from_counts([0; ALPHABET_SIZE]);
        assert!(matches!(
            CumulativeTable::build(&freq),
            Err(EntropyError::DegenerateModel { .. })
        ));
    }

    #[test]
    fn test_total_overflow_rejected() {
        let mut counts = [0u32; ALPHABET_SIZE];
        counts[0] = u32::MAX;
        counts[1] = 1;
        let freq = FrequencyTable::from_counts(counts);
        assert!(matches!(
            CumulativeTable::build(&freq),
            Err(EntropyError::DegenerateModel { .. })
        ));
    }

    #[test]
    fn test_symbol_for_matches_linear_scan() {
        let mut counts = [0u32; ALPHABET_SIZE];
        counts[3] = 5;
        counts[4] = 1;
        counts[200] = 7;
        counts[255] = 2;
        let cum = CumulativeTable::build(&FrequencyTable::from_counts(counts)).unwrap();

        for scaled in 0..cum.total() {
            let linear = (0..ALPHABET_SIZE)
                .find(|&s| scaled < cum.as_slice()[s + 1])
                .unwrap() as u8;
            assert_eq!(cum.symbol_for(scaled), linear, "scaled = {}", scaled);
        }
        assert_eq!(cum.symbol_for(0), 3);
        assert_eq!(cum.symbol_for(5), 4);
        assert_eq!(cum.symbol_for(6), 200);
    }

    #[test]
    fn test_symbol_for_clamps_out_of_range() {
        let mut counts = [0u32; ALPHABET_SIZE];
        counts[10] = 2;
        counts[20] = 3;
        let cum = CumulativeTable::build(&FrequencyTable::from_counts(counts)).unwrap();
        assert_eq!(cum.symbol_for(cum.total()), 20);
        assert_eq!(cum.symbol_for(u64::MAX), 20);
    }

    #[test]
    fn test_sole_symbol() {
        let freq = FrequencyTable::count(&[0x41; 10]).unwrap();
        assert_eq!(freq.sole_symbol(), Some(0x41));

        let freq = FrequencyTable::count(b"AB").unwrap();
        assert_eq!(freq.sole_symbol(), None);
    }
}
