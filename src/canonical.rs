//! Canonical code assignment.
//!
//! A canonical code is fully determined by its `(symbol, length)` pairs:
//! entries are sorted by length then symbol, and codewords are handed out by
//! a counter that is incremented after each entry and widened (shifted left)
//! whenever the length grows. Both ends run the same assignment, so only
//! the lengths ever need to be stored.

use crate::bits::{Decoder, Encoder};
use crate::error::{Error, Result};
use bitvec::prelude::*;
use serde::{Deserialize, Serialize};

/// A symbol and the length of its codeword in bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanonicalEntry {
    pub symbol: u8,
    pub length: u8,
}

impl CanonicalEntry {
    pub fn new(symbol: u8, length: u8) -> Self {
        Self { symbol, length }
    }
}

/// A symbol with its assigned codeword.
///
/// The codeword is kept as exactly `length` bits, most significant first,
/// since lengths of up to 255 bits do not fit a machine integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalCode {
    pub symbol: u8,
    pub bits: BitBox<u8, Msb0>,
}

impl CanonicalCode {
    pub fn length(&self) -> usize {
        self.bits.len()
    }

    pub fn to_bit_string(&self) -> String {
        self.bits
            .iter()
            .by_vals()
            .map(|b| if b { '1' } else { '0' })
            .collect()
    }
}

/// The canonical code for a set of code lengths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBook {
    codes: Vec<CanonicalCode>,
}

impl CodeBook {
    /// Assigns canonical codewords to `entries`, which may come in any order.
    ///
    /// The lengths must describe a complete prefix code: the Kraft sum must
    /// be exactly one, except that a single entry may have any length.
    pub fn from_entries(entries: &[CanonicalEntry]) -> Result<Self> {
        let mut seen = [false; 256];
        for entry in entries {
            if entry.length == 0 {
                return Err(Error::ZeroCodeLength(entry.symbol));
            }
            if std::mem::replace(&mut seen[entry.symbol as usize], true) {
                return Err(Error::DuplicateSymbol(entry.symbol));
            }
        }

        let mut sorted = entries.to_vec();
        sorted.sort_by_key(|e| (e.length, e.symbol));

        let mut codes = Vec::with_capacity(sorted.len());
        let mut counter: BitVec<u8, Msb0> = BitVec::new();
        let mut wrapped = false;
        for entry in &sorted {
            // the counter wrapping around means the space below this length
            // is already used up
            if wrapped {
                return Err(Error::OversubscribedCode);
            }
            // widening with zero bits on the right shifts the value left
            counter.resize(entry.length as usize, false);
            codes.push(CanonicalCode {
                symbol: entry.symbol,
                bits: counter.clone().into_boxed_bitslice(),
            });
            wrapped = increment(&mut counter);
        }

        // only the all-ones last codeword wraps, and only when the code is
        // complete
        if sorted.len() > 1 && !wrapped {
            return Err(Error::IncompleteCode);
        }

        Ok(Self { codes })
    }

    /// Codes in canonical order: by length, then by symbol.
    pub fn codes(&self) -> &[CanonicalCode] {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn get(&self, symbol: u8) -> Option<&CanonicalCode> {
        self.codes.iter().find(|c| c.symbol == symbol)
    }

    /// The `(symbol, length)` pairs this book was built from, ascending by
    /// symbol.
    pub fn entries(&self) -> Vec<CanonicalEntry> {
        let mut entries: Vec<_> = self
            .codes
            .iter()
            .map(|c| CanonicalEntry::new(c.symbol, c.length() as u8))
            .collect();
        entries.sort_by_key(|e| e.symbol);
        entries
    }

    pub fn encoder(&self) -> Encoder {
        Encoder::new(
            self.codes
                .iter()
                .map(|c| (c.symbol, c.bits.clone()))
                .collect(),
        )
    }

    pub fn decoder(&self) -> Decoder {
        Decoder::new(
            self.codes
                .iter()
                .map(|c| (c.bits.to_bitvec(), c.symbol))
                .collect(),
        )
    }
}

/// Adds one to the counter in place. Returns `true` if it wrapped to zero.
fn increment(counter: &mut BitSlice<u8, Msb0>) -> bool {
    for i in (0..counter.len()).rev() {
        if counter[i] {
            counter.set(i, false);
        } else {
            counter.set(i, true);
            return false;
        }
    }

    true
}
