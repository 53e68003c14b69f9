use canonical_huffman::{code_book, compress, decompress, FrequencyTable};

fn main() -> Result<(), canonical_huffman::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let s = String::from("Hello my name is Sam!");

    let book = code_book(&FrequencyTable::of(s.as_bytes()))?;
    for code in book.codes() {
        println!("{:?}\t{}", code.symbol as char, code.to_bit_string());
    }

    let packed = compress(s.as_bytes())?;
    let dec = String::from_utf8(decompress(&packed)?);

    println!("{} -> {} bytes", s.len(), packed.len());
    println!("{:?}", dec);
    Ok(())
}
