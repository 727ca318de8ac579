//! Huffman coding.
//!
//! Builds an optimal prefix code bottom-up: every symbol starts as a leaf in a
//! min-priority queue ordered by weight, and the two lightest nodes are merged
//! under a fresh internal node until one root remains. A leaf's code is the
//! path of branch bits from the root.
//!
//! # Historical Context
//!
//! David Huffman (1952) developed this algorithm as a term paper at MIT. It
//! was the first construction proven to minimize expected code length among
//! all prefix codes for a given distribution.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::code::CodeTable;
use crate::model::SymbolModel;

/// Huffman merge-tree node. Leaves hold a symbol; internal nodes hold only
/// their children (the weight lives on the heap entry). The tree is consumed
/// during code extraction and never outlives the call.
#[derive(Debug)]
enum Node<S> {
    Leaf { symbol: S },
    Internal { left: Box<Node<S>>, right: Box<Node<S>> },
}

/// Heap entry wrapping a node with its weight and an insertion sequence
/// number. Equal weights compare by sequence number, so merge order (and the
/// resulting table) is deterministic for a fixed model.
#[derive(Debug)]
struct HeapNode<S> {
    weight: f64,
    seq: usize,
    node: Node<S>,
}

impl<S> PartialEq for HeapNode<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S> Eq for HeapNode<S> {}

impl<S> Ord for HeapNode<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-priority queue
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<S> PartialOrd for HeapNode<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Build a Huffman code table for `model`.
///
/// Of the two nodes removed at each merge, the heavier one becomes the
/// 0-branch child and the lighter one the 1-branch child, so more probable
/// symbols sit on all-zero paths. A single-symbol alphabet gets the code `0`
/// by convention without building a tree; an empty root-to-leaf path is
/// likewise mapped to `0`, never left empty.
pub fn encode<S: Ord + Copy>(model: &SymbolModel<S>) -> CodeTable<S> {
    let ranked = model.probabilities();
    let mut table = CodeTable::new();

    if let [(symbol, _)] = ranked[..] {
        table.insert(symbol, vec![0]);
        return table;
    }

    let mut heap = BinaryHeap::with_capacity(ranked.len());
    let mut seq = 0usize;
    for &(symbol, p) in &ranked {
        heap.push(HeapNode {
            weight: p,
            seq,
            node: Node::Leaf { symbol },
        });
        seq += 1;
    }

    while heap.len() > 1 {
        let lighter = heap.pop().unwrap();
        let heavier = heap.pop().unwrap();
        heap.push(HeapNode {
            weight: lighter.weight + heavier.weight,
            seq,
            node: Node::Internal {
                left: Box::new(heavier.node),
                right: Box::new(lighter.node),
            },
        });
        seq += 1;
    }

    if let Some(root) = heap.pop() {
        extract_codes(root.node, &mut table);
    }

    table
}

/// Walk the tree with an explicit stack, appending 0 for the left branch and
/// 1 for the right; each leaf's accumulated path becomes its code.
fn extract_codes<S: Ord + Copy>(root: Node<S>, table: &mut CodeTable<S>) {
    let mut stack = vec![(root, Vec::new())];
    while let Some((node, bits)) = stack.pop() {
        match node {
            Node::Leaf { symbol } => {
                let code = if bits.is_empty() { vec![0] } else { bits };
                table.insert(symbol, code);
            }
            Node::Internal { left, right } => {
                let mut left_bits = bits.clone();
                left_bits.push(0);
                let mut right_bits = bits;
                right_bits.push(1);
                stack.push((*left, left_bits));
                stack.push((*right, right_bits));
            }
        }
    }
}
