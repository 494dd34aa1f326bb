//! Huffman tree construction
//!
//! Greedy minimum merge: every distinct symbol starts as a leaf in a min
//! priority queue keyed by its count. The two lightest entries are removed,
//! joined under a new internal node (first removed on the `zero` branch,
//! second on the `one` branch) and the result is reinserted with the summed
//! weight, until a single root remains.
//!
//! Equal weights are ordered by [`TieBreak`]. Leaves are enqueued in
//! ascending symbol order, so both rules produce the same tree on every run.

use crate::analyzer::{count_frequencies, distinct_symbols, FrequencyTable};
use crate::config::TieBreak;
use crate::error::{HuffmanError, Result};
use crate::tree::EncodingTreeNode;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

#[derive(Debug)]
struct QueueEntry {
    weight: Reverse<usize>,
    order: Reverse<u64>,
    node: EncodingTreeNode,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.weight, self.order).cmp(&(other.weight, other.order))
    }
}

/// Min-weight queue over tree nodes. Insertion sequence numbers make every
/// pop deterministic.
struct MergeQueue {
    heap: BinaryHeap<QueueEntry>,
    tie_break: TieBreak,
    next_seq: u64,
}

impl MergeQueue {
    fn new(tie_break: TieBreak, capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            tie_break,
            next_seq: 0,
        }
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn push(&mut self, node: EncodingTreeNode, weight: usize) {
        let seq = self.next_seq;
        self.next_seq += 1;
        // BinaryHeap pops the greatest entry, so the rank is inverted twice
        // for LIFO and once for FIFO.
        let order = match self.tie_break {
            TieBreak::Lifo => Reverse(u64::MAX - seq),
            TieBreak::Fifo => Reverse(seq),
        };
        self.heap.push(QueueEntry { weight: Reverse(weight), order, node });
    }

    fn pop(&mut self) -> Option<(EncodingTreeNode, usize)> {
        self.heap.pop().map(|entry| (entry.node, entry.weight.0))
    }
}

/// Builds the Huffman tree for `text` using the default tie-break.
///
/// Fails with [`HuffmanError::InvalidInput`] unless the text holds at least
/// two distinct symbols.
pub fn build_huffman_tree(text: &str) -> Result<EncodingTreeNode> {
    build_huffman_tree_with(text, TieBreak::default())
}

pub fn build_huffman_tree_with(text: &str, tie_break: TieBreak) -> Result<EncodingTreeNode> {
    let frequencies = count_frequencies(text);
    build_from_frequencies(&frequencies, tie_break)
}

/// Builds a tree from an existing frequency table. Zero counts are skipped.
pub fn build_from_frequencies(frequencies: &FrequencyTable, tie_break: TieBreak) -> Result<EncodingTreeNode> {
    let distinct = distinct_symbols(frequencies);
    if distinct < 2 {
        return Err(HuffmanError::InvalidInput(format!(
            "a Huffman tree needs at least two distinct symbols, found {}",
            distinct
        )));
    }

    let mut queue = MergeQueue::new(tie_break, distinct);
    for (&symbol, &count) in frequencies.iter().filter(|&(_, &count)| count > 0) {
        queue.push(EncodingTreeNode::leaf(symbol), count);
    }

    while queue.len() > 1 {
        let (zero, w0) = queue.pop().ok_or_else(underflow)?;
        let (one, w1) = queue.pop().ok_or_else(underflow)?;
        queue.push(EncodingTreeNode::internal(zero, one), w0.saturating_add(w1));
    }

    let (root, total) = queue.pop().ok_or_else(underflow)?;
    log::debug!(
        "built Huffman tree: {} symbols, {} occurrences, height {}",
        distinct,
        total,
        root.height()
    );
    Ok(root)
}

fn underflow() -> HuffmanError {
    HuffmanError::InvalidInput("merge queue ran empty".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::example_tree;

    #[test]
    fn test_reference_tree() {
        let tree = build_huffman_tree("STREETTEST").unwrap();
        assert_eq!(tree, example_tree());
    }

    #[test]
    fn test_rejects_degenerate_input() {
        assert!(matches!(build_huffman_tree(""), Err(HuffmanError::InvalidInput(_))));
        assert!(matches!(build_huffman_tree("A"), Err(HuffmanError::InvalidInput(_))));
        assert!(matches!(build_huffman_tree("AAAAAA"), Err(HuffmanError::InvalidInput(_))));
    }

    #[test]
    fn test_two_symbols() {
        let tree = build_huffman_tree("ab").unwrap();
        assert_eq!(tree.height(), 1);
        // Equal weights: LIFO dequeues the later leaf first.
        assert_eq!(tree.symbols(), vec!['b', 'a']);

        let tree = build_huffman_tree_with("ab", TieBreak::Fifo).unwrap();
        assert_eq!(tree.symbols(), vec!['a', 'b']);
    }

    #[test]
    fn test_fifo_changes_shape_not_leaves() {
        let lifo = build_huffman_tree_with("STREETTEST", TieBreak::Lifo).unwrap();
        let fifo = build_huffman_tree_with("STREETTEST", TieBreak::Fifo).unwrap();
        assert_ne!(lifo, fifo);
        assert_eq!(lifo.leaf_count(), fifo.leaf_count());

        // E (3) leaves before the merged R+S node (3) under FIFO.
        use EncodingTreeNode as N;
        let expected = N::internal(
            N::leaf('T'),
            N::internal(N::leaf('E'), N::internal(N::leaf('R'), N::leaf('S'))),
        );
        assert_eq!(fifo, expected);
    }

    #[test]
    fn test_lighter_symbols_sit_deeper() {
        let mut table = FrequencyTable::new();
        table.insert('a', 100);
        table.insert('b', 10);
        table.insert('c', 1);
        table.insert('z', 0);
        let tree = build_from_frequencies(&table, TieBreak::Lifo).unwrap();
        assert_eq!(tree.leaf_count(), 3);
        let (zero, one) = tree.children().unwrap();
        assert!(!zero.is_leaf());
        assert_eq!(one.symbol(), Some('a'));
    }

    #[test]
    fn test_zero_counts_do_not_count_as_distinct() {
        let mut table = FrequencyTable::new();
        table.insert('a', 5);
        table.insert('b', 0);
        assert!(matches!(build_from_frequencies(&table, TieBreak::Lifo), Err(HuffmanError::InvalidInput(_))));
    }
}
