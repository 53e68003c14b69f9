//! Packing codewords into bytes and reading them back.

use crate::error::{Error, Result};
use crate::TERMINATOR;
use bitvec::prelude::*;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Encoder {
    encode_table: HashMap<u8, BitBox<u8, Msb0>>,
}

impl Encoder {
    pub(crate) fn new(encode_table: HashMap<u8, BitBox<u8, Msb0>>) -> Self {
        Self { encode_table }
    }

    /// Concatenates the codewords of every symbol in `stream`.
    pub fn encode(&self, stream: impl IntoIterator<Item = u8>) -> Result<BitVec<u8, Msb0>> {
        let mut out = BitVec::new();
        for s in stream {
            let code = self.encode_table.get(&s).ok_or(Error::UnknownSymbol(s))?;
            out.extend_from_bitslice(code.as_bitslice());
        }

        Ok(out)
    }

    /// Encodes `stream` and zero-pads the result to whole bytes.
    pub fn pack(&self, stream: impl IntoIterator<Item = u8>) -> Result<Vec<u8>> {
        let mut bits = self.encode(stream)?;
        let padded = bits.len().div_ceil(8) * 8;
        bits.resize(padded, false);

        Ok(bits.into_vec())
    }
}

#[derive(Debug, Clone)]
pub struct Decoder {
    decode_table: HashMap<BitVec<u8, Msb0>, u8>,
    max_len: usize,
}

impl Decoder {
    pub(crate) fn new(decode_table: HashMap<BitVec<u8, Msb0>, u8>) -> Self {
        let max_len = decode_table.keys().map(|k| k.len()).max().unwrap_or(0);
        Self {
            decode_table,
            max_len,
        }
    }

    /// Decodes symbols until the terminator, which is not included in the
    /// output. Bits after the terminator are ignored.
    ///
    /// A code that is not complete leaves bit sequences with no codeword;
    /// those fail as soon as they outgrow the longest codeword.
    pub fn decode(&self, input: &BitSlice<u8, Msb0>) -> Result<Vec<u8>> {
        let mut out = Vec::new();

        let mut cursor = BitVec::<u8, Msb0>::new();
        for b in input.iter().by_vals() {
            cursor.push(b);
            if let Some(&sym) = self.decode_table.get(&cursor) {
                if sym == TERMINATOR {
                    return Ok(out);
                }
                cursor.clear();
                out.push(sym);
            } else if cursor.len() >= self.max_len {
                return Err(Error::InvalidCodeword);
            }
        }

        Err(Error::UnterminatedPayload)
    }

    /// Decodes a packed byte buffer.
    pub fn unpack(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        self.decode(bytes.view_bits::<Msb0>())
    }
}
