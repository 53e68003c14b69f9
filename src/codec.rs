use crate::canonical::CodeBook;
use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;
use crate::header::Header;
use crate::tree::huffman;
use crate::{CARRIAGE_RETURN, TERMINATOR};

/// Compresses `message` into a header followed by the packed payload.
///
/// Carriage returns are dropped. The terminator byte is reserved and may not
/// appear in `message`.
pub fn compress(message: &[u8]) -> Result<Vec<u8>> {
    if let Some(position) = message.iter().position(|&b| b == TERMINATOR) {
        return Err(Error::ReservedByteInInput { position });
    }

    let table = FrequencyTable::of(message);
    tracing::trace!(?table, "counted symbols");
    if table.len() > Header::MAX_SYMBOLS {
        return Err(Error::InvalidSymbolCount(table.len()));
    }

    let book = code_book(&table)?;
    let header = Header::new(book.entries());

    let symbols = message
        .iter()
        .copied()
        .filter(|&b| b != CARRIAGE_RETURN)
        .chain(std::iter::once(TERMINATOR));
    let payload = book.encoder().pack(symbols)?;

    let mut out = Vec::with_capacity(header.encoded_len() + payload.len());
    header.write(&mut out)?;
    out.extend_from_slice(&payload);

    tracing::debug!(
        symbols = table.len(),
        input = message.len(),
        output = out.len(),
        "compressed"
    );
    Ok(out)
}

/// Reverses [`compress`]. Decoding stops at the terminator; padding and any
/// bytes after it are ignored.
pub fn decompress(bytes: &[u8]) -> Result<Vec<u8>> {
    let (header, payload) = Header::parse(bytes)?;
    if !header.entries.iter().any(|e| e.symbol == TERMINATOR) {
        return Err(Error::MissingTerminator);
    }

    let book = CodeBook::from_entries(&header.entries)?;
    tracing::trace!(codes = ?book.codes(), "rebuilt code book");

    let out = book.decoder().unpack(payload)?;

    tracing::debug!(
        symbols = header.entries.len(),
        input = bytes.len(),
        output = out.len(),
        "decompressed"
    );
    Ok(out)
}

/// Builds the canonical code for a frequency table.
pub fn code_book(table: &FrequencyTable) -> Result<CodeBook> {
    let tree = huffman(table).ok_or(Error::InvalidSymbolCount(0))?;
    CodeBook::from_entries(&tree.code_lengths())
}
