//! Error type shared by every stage of the codec.

/// Everything that can go wrong while compressing or decompressing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The buffer ends before the declared `1 + 2k` header bytes.
    #[error("truncated header: need {needed} bytes, have {available}")]
    TruncatedHeader { needed: usize, available: usize },

    /// The payload ran out of bits before the terminator was decoded.
    #[error("payload exhausted before terminator")]
    UnterminatedPayload,

    /// The symbol count is zero or does not fit the one-byte count field.
    #[error("invalid symbol count: {0}")]
    InvalidSymbolCount(usize),

    /// The message contains the reserved terminator byte as data.
    #[error("reserved terminator byte at offset {position}")]
    ReservedByteInInput { position: usize },

    /// A symbol appears twice in a code length table.
    #[error("duplicate symbol {0:#04x} in code table")]
    DuplicateSymbol(u8),

    /// A symbol was given a code length of zero.
    #[error("zero code length for symbol {0:#04x}")]
    ZeroCodeLength(u8),

    /// The code lengths claim more than the available code space.
    #[error("code lengths are oversubscribed")]
    OversubscribedCode,

    /// The code lengths leave part of the code space unassigned.
    #[error("code lengths are incomplete")]
    IncompleteCode,

    /// The code table has no entry for the terminator.
    #[error("code table has no terminator")]
    MissingTerminator,

    /// The payload holds a bit sequence longer than any codeword.
    #[error("payload bits match no codeword")]
    InvalidCodeword,

    /// A symbol to encode has no codeword.
    #[error("no codeword for symbol {0:#04x}")]
    UnknownSymbol(u8),
}

pub type Result<T> = std::result::Result<T, Error>;
