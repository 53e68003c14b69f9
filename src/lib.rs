//! Canonical Huffman compression for byte strings.
//!
//! A compressed buffer is a table of `(symbol, code length)` pairs followed
//! by the packed codewords of the message. Codewords are never stored: both
//! sides derive them from the lengths with the canonical assignment, so the
//! table is the only description of the code that has to travel.
//!
//! ```
//! let packed = canonical_huffman::compress(b"abracadabra")?;
//! assert_eq!(canonical_huffman::decompress(&packed)?, b"abracadabra");
//! # Ok::<(), canonical_huffman::Error>(())
//! ```
//!
//! Every message ends with [`TERMINATOR`], which therefore may not appear
//! in the input. Carriage returns are dropped before encoding.

pub mod bits;
pub mod canonical;
pub mod codec;
pub mod dot;
pub mod error;
pub mod frequency;
pub mod header;
pub mod tree;

pub use canonical::{CanonicalCode, CanonicalEntry, CodeBook};
pub use codec::{code_book, compress, decompress};
pub use error::{Error, Result};
pub use frequency::FrequencyTable;
pub use header::Header;
pub use tree::{huffman, Node, NodeKind};

/// Reserved symbol marking the end of the payload.
pub const TERMINATOR: u8 = 0;

/// Filtered out of every message before counting and encoding.
pub const CARRIAGE_RETURN: u8 = b'\r';
