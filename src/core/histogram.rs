//! Letter binning: 26 fixed counters indexed by `letter - b'a'`.

use crate::core::constants::ALPHABET_LEN;

/// Occurrence counts for `a..=z` plus the largest of them.
///
/// Built once by [`Histogram::count`] and read-only afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Histogram {
    bins: [u64; ALPHABET_LEN],
    peak: u64,
}

impl Histogram {
    /// Bin every ASCII letter of `text`, case-folded. Everything else is skipped.
    #[must_use]
    pub fn count(text: &[u8]) -> Self {
        let mut hist = Self::default();
        for &b in text {
            if b.is_ascii_alphabetic() {
                let bin = &mut hist.bins[usize::from(b.to_ascii_lowercase() - b'a')];
                *bin += 1;
                hist.peak = hist.peak.max(*bin);
            }
        }
        hist
    }

    /// Count in the most populated bin; 0 for letter-free input.
    #[inline]
    #[must_use]
    pub const fn peak(&self) -> u64 {
        self.peak
    }

    #[inline]
    #[must_use]
    pub const fn bins(&self) -> &[u64; ALPHABET_LEN] {
        &self.bins
    }

    /// Count for `letter` (either case); `None` if it is not an ASCII letter.
    #[must_use]
    pub fn get(&self, letter: char) -> Option<u64> {
        let b = u8::try_from(letter).ok().filter(u8::is_ascii_alphabetic)?;
        Some(self.bins[usize::from(b.to_ascii_lowercase() - b'a')])
    }

    /// `(letter, count)` pairs in `a..=z` order.
    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        (b'a'..=b'z').map(char::from).zip(self.bins.iter().copied())
    }

    /// Total number of letters binned.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.bins.iter().sum()
    }
}
