//! Usage: decode_file SOURCE TARGET

use canonical_huffman::decompress;
use std::env;
use std::fs;
use std::process::ExitCode;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let [source, target] = args.as_slice() else {
        eprintln!("usage: decode_file SOURCE TARGET");
        return ExitCode::FAILURE;
    };

    let result = fs::read(source)
        .map_err(|e| e.to_string())
        .and_then(|data| decompress(&data).map_err(|e| e.to_string()))
        .and_then(|decoded| fs::write(target, decoded).map_err(|e| e.to_string()));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("decode_file: {e}");
            ExitCode::FAILURE
        }
    }
}
