//! Graphviz renderings of a code, for inspection only.

use crate::canonical::CodeBook;
use crate::tree::{Node, NodeKind};
use crate::TERMINATOR;
use std::collections::BTreeSet;

/// Renders the Huffman tree as built, before canonical reassignment.
/// Internal nodes are labelled with their weight.
pub fn tree_to_dot(root: &Node) -> String {
    fn visit(node: &Node, id: &mut usize, lines: &mut Vec<String>) -> usize {
        let me = *id;
        *id += 1;
        match node.kind() {
            NodeKind::Leaf(symbol) => lines.push(format!(
                "    n{me} [shape=box, label=\"{} ({})\"];",
                symbol_label(*symbol),
                node.weight()
            )),
            NodeKind::Internal(zero, one) => {
                lines.push(format!("    n{me} [label=\"{}\"];", node.weight()));
                for (bit, child) in [(0, zero), (1, one)] {
                    let child_id = visit(child, id, lines);
                    lines.push(format!("    n{me} -> n{child_id} [label=\"{bit}\"];"));
                }
            }
        }
        me
    }

    let mut lines = Vec::new();
    visit(root, &mut 0, &mut lines);
    graph("huffman", lines)
}

/// Renders the canonical code as a binary trie, 0 edges before 1 edges.
pub fn code_book_to_dot(book: &CodeBook) -> String {
    let mut lines = vec!["    root [label=\"\"];".to_string()];
    let mut leaves = BTreeSet::new();
    let mut edges = BTreeSet::new();

    for code in book.codes() {
        let path = code.to_bit_string();
        for end in 1..=path.len() {
            edges.insert((path[..end - 1].to_string(), path[..end].to_string()));
        }
        lines.push(format!(
            "    {} [shape=box, label=\"{}\\n{}\"];",
            node_id(&path),
            symbol_label(code.symbol),
            path
        ));
        leaves.insert(path);
    }

    // every trie node has exactly one incoming edge
    for (parent, child) in edges {
        if !leaves.contains(&child) {
            lines.push(format!("    {} [label=\"\"];", node_id(&child)));
        }
        let bit = &child[child.len() - 1..];
        lines.push(format!(
            "    {} -> {} [label=\"{bit}\"];",
            node_id(&parent),
            node_id(&child)
        ));
    }

    graph("canonical", lines)
}

fn node_id(path: &str) -> String {
    if path.is_empty() {
        "root".to_string()
    } else {
        format!("c{path}")
    }
}

fn graph(name: &str, lines: Vec<String>) -> String {
    let mut out = format!("digraph {name} {{\n");
    for line in lines {
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str("}\n");
    out
}

fn symbol_label(symbol: u8) -> String {
    match symbol {
        TERMINATOR => "EOF".to_string(),
        b'\n' => "\\\\n".to_string(),
        b'\\' => "\\\\".to_string(),
        b'"' => "\\\"".to_string(),
        b' ' => "SP".to_string(),
        s if s.is_ascii_graphic() => (s as char).to_string(),
        s => format!("{s:#04x}"),
    }
}
