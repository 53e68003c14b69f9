use crate::canonical::CanonicalEntry;
use crate::frequency::FrequencyTable;
use derivative::Derivative;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Nodes order by weight, then by the smallest symbol beneath them. Live
/// nodes never share a symbol, so the order is total and the tree shape is
/// reproducible.
#[derive(Debug, Clone, Derivative)]
#[derivative(PartialEq, Eq, PartialOrd, Ord)]
pub struct Node {
    weight: u64,

    lowest: u8,

    #[derivative(PartialEq = "ignore")]
    #[derivative(PartialOrd = "ignore")]
    #[derivative(Ord = "ignore")]
    kind: NodeKind,
}

#[derive(Debug, Clone)]
pub enum NodeKind {
    Leaf(u8),
    /// The first child is reached by a 0 bit, the second by a 1 bit.
    Internal(Box<Node>, Box<Node>),
}

impl Node {
    fn new(symbol: u8, weight: u64) -> Self {
        Self {
            weight,
            lowest: symbol,
            kind: NodeKind::Leaf(symbol),
        }
    }

    fn from_children(zero: Node, one: Node) -> Self {
        Self {
            weight: zero.weight.saturating_add(one.weight),
            lowest: zero.lowest.min(one.lowest),
            kind: NodeKind::Internal(Box::new(zero), Box::new(one)),
        }
    }

    pub fn weight(&self) -> u64 {
        self.weight
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn symbol(&self) -> Option<u8> {
        match self.kind {
            NodeKind::Leaf(symbol) => Some(symbol),
            NodeKind::Internal(..) => None,
        }
    }

    /// Depth of every leaf below this node, taken as its code length.
    ///
    /// A lone leaf gets length 1, since a zero-bit code cannot be written.
    /// Entries come out in depth-first order, 0 branch first.
    pub fn code_lengths(&self) -> Vec<CanonicalEntry> {
        fn traverse(node: &Node, depth: u8, out: &mut Vec<CanonicalEntry>) {
            match &node.kind {
                NodeKind::Leaf(symbol) => out.push(CanonicalEntry::new(*symbol, depth)),
                // a tree over at most 256 leaves is at most 255 edges deep
                NodeKind::Internal(zero, one) => {
                    traverse(zero, depth + 1, out);
                    traverse(one, depth + 1, out);
                }
            }
        }

        let mut out = Vec::new();
        match self.kind {
            NodeKind::Leaf(symbol) => out.push(CanonicalEntry::new(symbol, 1)),
            NodeKind::Internal(..) => traverse(self, 0, &mut out),
        }

        out
    }
}

/// Builds the Huffman tree for `table` by repeatedly merging the two
/// lightest nodes. Returns `None` for an empty table.
pub fn huffman(table: &FrequencyTable) -> Option<Node> {
    let mut pq: BinaryHeap<_> = table
        .iter()
        .map(|(symbol, count)| Reverse(Node::new(symbol, count)))
        .collect();

    loop {
        let Reverse(zero) = pq.pop()?;
        let Some(Reverse(one)) = pq.pop() else {
            tracing::trace!(weight = zero.weight, "huffman tree built");
            return Some(zero);
        };
        pq.push(Reverse(Node::from_children(zero, one)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TERMINATOR;

    fn lengths_by_symbol(node: &Node) -> Vec<(u8, u8)> {
        let mut lengths: Vec<_> = node
            .code_lengths()
            .into_iter()
            .map(|e| (e.symbol, e.length))
            .collect();
        lengths.sort();
        lengths
    }

    #[test]
    fn node_new() {
        let n = Node::new(b'x', 7);
        assert_eq!(n.weight(), 7);
        assert_eq!(n.symbol(), Some(b'x'));
        assert!(matches!(n.kind(), NodeKind::Leaf(b'x')));
    }

    #[test]
    fn node_from_children() {
        let zero = Node::new(b'q', 2);
        let one = Node::new(b'b', 3);

        let n = Node::from_children(zero, one);

        assert_eq!(n.weight(), 5);
        assert_eq!(n.symbol(), None);
        assert_eq!(n.lowest, b'b');
        match n.kind() {
            NodeKind::Internal(zero, one) => {
                assert_eq!(zero.symbol(), Some(b'q'));
                assert_eq!(one.symbol(), Some(b'b'));
            }
            NodeKind::Leaf(_) => panic!("expected internal node"),
        }
    }

    #[test]
    fn node_compare_ignores_children() {
        let a = Node::new(1, 4);
        let b = Node::from_children(Node::new(1, 2), Node::new(9, 2));

        assert_eq!(a, b);
    }

    #[test]
    fn node_compare_weight_then_symbol() {
        assert!(Node::new(200, 1) < Node::new(3, 2));
        assert!(Node::new(3, 2) < Node::new(4, 2));
        assert!(Node::from_children(Node::new(5, 1), Node::new(6, 1)) < Node::new(7, 2));
    }

    #[test]
    fn empty_table_has_no_tree() {
        assert!(huffman(&FrequencyTable::from_counts([])).is_none());
    }

    #[test]
    fn single_symbol_gets_length_one() {
        let tree = huffman(&FrequencyTable::of(b"")).unwrap();
        assert_eq!(tree.symbol(), Some(TERMINATOR));
        assert_eq!(lengths_by_symbol(&tree), vec![(TERMINATOR, 1)]);
    }

    #[test]
    fn two_letter_message() {
        // terminator and 'a' merge first; 'b' then pairs with that subtree
        let tree = huffman(&FrequencyTable::of(b"ab")).unwrap();
        assert_eq!(tree.weight(), 3);
        assert_eq!(
            lengths_by_symbol(&tree),
            vec![(TERMINATOR, 2), (b'a', 2), (b'b', 1)]
        );
        match tree.kind() {
            NodeKind::Internal(zero, _) => assert_eq!(zero.symbol(), Some(b'b')),
            NodeKind::Leaf(_) => panic!("expected internal root"),
        }
    }

    #[test]
    fn frequent_symbols_are_shorter() {
        let table = FrequencyTable::from_counts([(0, 1), (1, 1), (2, 2), (3, 4), (4, 8)]);
        let tree = huffman(&table).unwrap();
        assert_eq!(tree.weight(), table.total());
        assert_eq!(
            lengths_by_symbol(&tree),
            vec![(0, 4), (1, 4), (2, 3), (3, 2), (4, 1)]
        );
    }

    #[test]
    fn huge_weights_saturate() {
        let table = FrequencyTable::from_counts([(0, u64::MAX), (1, u64::MAX), (2, 1)]);
        let tree = huffman(&table).unwrap();
        assert_eq!(tree.weight(), u64::MAX);
        assert_eq!(lengths_by_symbol(&tree), vec![(0, 2), (1, 1), (2, 2)]);
    }

    #[test]
    fn equal_weights_form_balanced_tree() {
        let table = FrequencyTable::from_counts((0..8).map(|s| (s, 5)));
        let tree = huffman(&table).unwrap();
        assert!(tree.code_lengths().iter().all(|e| e.length == 3));
    }

    #[test]
    fn deepest_tree_fits_a_byte() {
        // doubling weights give a chain one level deeper per symbol
        let table = FrequencyTable::from_counts((0..40u8).map(|s| (s, 1u64 << s)));
        let tree = huffman(&table).unwrap();
        let max = tree.code_lengths().iter().map(|e| e.length).max();
        assert_eq!(max, Some(39));
    }
}
