use crate::{CARRIAGE_RETURN, TERMINATOR};

/// Occurrence counts for every byte value of a message.
///
/// Symbols iterate in ascending byte order, which is also the order the
/// header lists them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: Box<[u64; 256]>,
}

impl FrequencyTable {
    /// Counts the bytes of `message` plus one terminator, skipping carriage
    /// returns.
    pub fn of(message: &[u8]) -> Self {
        let mut counts = Box::new([0u64; 256]);
        for &byte in message.iter().filter(|&&b| b != CARRIAGE_RETURN) {
            counts[byte as usize] += 1;
        }
        counts[TERMINATOR as usize] += 1;

        Self { counts }
    }

    /// Builds a table from `(symbol, count)` pairs given in any order.
    ///
    /// Zero counts are dropped and repeated symbols are summed, saturating
    /// at `u64::MAX`. Nothing is added implicitly, not even the terminator.
    pub fn from_counts(pairs: impl IntoIterator<Item = (u8, u64)>) -> Self {
        let mut counts = Box::new([0u64; 256]);
        for (symbol, count) in pairs {
            let slot = &mut counts[symbol as usize];
            *slot = slot.saturating_add(count);
        }

        Self { counts }
    }

    pub fn len(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Sum of all counts, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.counts.iter().fold(0, |acc, &c| acc.saturating_add(c))
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        (0..=u8::MAX)
            .zip(self.counts.iter().copied())
            .filter(|&(_, count)| count > 0)
    }
}
