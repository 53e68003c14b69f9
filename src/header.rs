use crate::canonical::CanonicalEntry;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// The code length table written in front of the payload.
///
/// Layout: one unsigned count byte `k`, then `k` pairs of
/// `(symbol, length)` bytes. Codewords are never stored; the reader
/// recomputes them from the lengths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub entries: Vec<CanonicalEntry>,
}

impl Header {
    pub const MAX_SYMBOLS: usize = u8::MAX as usize;

    pub fn new(entries: Vec<CanonicalEntry>) -> Self {
        Self { entries }
    }

    pub fn encoded_len(&self) -> usize {
        1 + 2 * self.entries.len()
    }

    pub fn write(&self, out: &mut Vec<u8>) -> Result<()> {
        let k = self.entries.len();
        if k == 0 || k > Self::MAX_SYMBOLS {
            return Err(Error::InvalidSymbolCount(k));
        }

        out.reserve(self.encoded_len());
        out.push(k as u8);
        for entry in &self.entries {
            out.push(entry.symbol);
            out.push(entry.length);
        }

        Ok(())
    }

    /// Parses a header from the front of `bytes`, returning it together
    /// with the bytes that follow it.
    pub fn parse(bytes: &[u8]) -> Result<(Self, &[u8])> {
        let (&k, rest) = bytes.split_first().ok_or(Error::TruncatedHeader {
            needed: 1,
            available: 0,
        })?;
        if k == 0 {
            return Err(Error::InvalidSymbolCount(0));
        }

        let pairs_len = 2 * k as usize;
        if rest.len() < pairs_len {
            return Err(Error::TruncatedHeader {
                needed: 1 + pairs_len,
                available: bytes.len(),
            });
        }

        let (pairs, payload) = rest.split_at(pairs_len);
        let entries = pairs
            .chunks_exact(2)
            .map(|pair| CanonicalEntry::new(pair[0], pair[1]))
            .collect();

        Ok((Self { entries }, payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(pairs: &[(u8, u8)]) -> Header {
        Header::new(pairs.iter().map(|&(s, l)| CanonicalEntry::new(s, l)).collect())
    }

    #[test]
    fn writes_count_then_pairs() {
        let mut out = Vec::new();
        header(&[(0, 2), (b'a', 2), (b'b', 1)]).write(&mut out).unwrap();
        assert_eq!(out, vec![3, 0, 2, b'a', 2, b'b', 1]);
    }

    #[test]
    fn parse_splits_off_payload() {
        let bytes = [2, 0, 1, b'x', 1, 0xaa, 0xbb];
        let (h, payload) = Header::parse(&bytes).unwrap();
        assert_eq!(h, header(&[(0, 1), (b'x', 1)]));
        assert_eq!(payload, &[0xaa, 0xbb]);
    }

    #[test]
    fn parse_with_empty_payload() {
        let (h, payload) = Header::parse(&[1, 0, 1]).unwrap();
        assert_eq!(h, header(&[(0, 1)]));
        assert!(payload.is_empty());
    }

    #[test]
    fn round_trip_keeps_order() {
        let h = header(&[(b'q', 3), (0, 1), (b'c', 3), (b'b', 2)]);
        let mut out = Vec::new();
        h.write(&mut out).unwrap();
        assert_eq!(out.len(), h.encoded_len());
        assert_eq!(Header::parse(&out).unwrap(), (h, &[][..]));
    }

    #[test]
    fn count_byte_is_unsigned() {
        let h = Header::new(
            (1..=255u8)
                .map(|s| CanonicalEntry::new(s, 8))
                .collect(),
        );
        let mut out = Vec::new();
        h.write(&mut out).unwrap();
        assert_eq!(out[0], 255);
        assert_eq!(Header::parse(&out).unwrap().0.entries.len(), 255);
    }

    #[test]
    fn write_rejects_bad_counts() {
        let mut out = Vec::new();
        assert_eq!(
            Header::new(Vec::new()).write(&mut out),
            Err(Error::InvalidSymbolCount(0))
        );
        let full = Header::new((0..=255u8).map(|s| CanonicalEntry::new(s, 8)).collect());
        assert_eq!(full.write(&mut out), Err(Error::InvalidSymbolCount(256)));
        assert!(out.is_empty());
    }

    #[test]
    fn parse_rejects_zero_count() {
        assert_eq!(Header::parse(&[0, 1, 2]), Err(Error::InvalidSymbolCount(0)));
    }

    #[test]
    fn parse_rejects_truncation() {
        assert_eq!(
            Header::parse(&[]),
            Err(Error::TruncatedHeader {
                needed: 1,
                available: 0
            })
        );
        assert_eq!(
            Header::parse(&[3, 0, 2, b'a', 2, b'b']),
            Err(Error::TruncatedHeader {
                needed: 7,
                available: 6
            })
        );
    }

    #[test]
    fn serde_round_trip() {
        let h = header(&[(0, 2), (b'a', 2), (b'b', 1)]);
        let packed = rmp_serde::to_vec(&h).unwrap();
        let unpacked: Header = rmp_serde::from_slice(&packed).unwrap();
        assert_eq!(unpacked, h);
    }
}
