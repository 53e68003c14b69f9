//! Usage: encode_file [-c GRAPH | -h GRAPH] SOURCE TARGET
//!
//! `-c` also writes the canonical code as Graphviz DOT to GRAPH, `-h` the
//! Huffman tree it was derived from.

use canonical_huffman::{code_book, compress, dot, huffman, FrequencyTable};
use std::env;
use std::fs;
use std::process::ExitCode;

enum Graph {
    Canonical(String),
    Tree(String),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (graph, source, target) = match args.as_slice() {
        [flag, graph, source, target] if flag == "-c" => {
            (Some(Graph::Canonical(graph.clone())), source, target)
        }
        [flag, graph, source, target] if flag == "-h" => {
            (Some(Graph::Tree(graph.clone())), source, target)
        }
        [source, target] => (None, source, target),
        _ => {
            eprintln!("usage: encode_file [-c GRAPH | -h GRAPH] SOURCE TARGET");
            return ExitCode::FAILURE;
        }
    };

    match run(graph, source, target) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("encode_file: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(graph: Option<Graph>, source: &str, target: &str) -> Result<(), Box<dyn std::error::Error>> {
    let input_bytes = fs::read(source)?;

    let packed = compress(&input_bytes)?;
    fs::write(target, packed)?;

    match graph {
        Some(Graph::Canonical(path)) => {
            let book = code_book(&FrequencyTable::of(&input_bytes))?;
            fs::write(path, dot::code_book_to_dot(&book))?;
        }
        Some(Graph::Tree(path)) => {
            if let Some(tree) = huffman(&FrequencyTable::of(&input_bytes)) {
                fs::write(path, dot::tree_to_dot(&tree))?;
            }
        }
        None => {}
    }

    Ok(())
}
