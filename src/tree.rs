use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::freq::FrequencyTable;

/// A node of the prefix tree. Leaves carry a character; internal nodes own
/// exactly two children and weigh the sum of their frequencies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        ch: char,
        freq: u64,
    },
    Internal {
        freq: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn freq(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } | Node::Internal { freq, .. } => *freq,
        }
    }
}

// Min-heap entry. BinaryHeap is a max-heap, so the ordering is reversed;
// equal frequencies fall back to insertion sequence (first in wins), which
// makes tree construction reproducible for a given table order.
#[derive(Debug, PartialEq, Eq)]
struct HeapEntry {
    seq: u64,
    node: Node,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        (other.node.freq(), other.seq).cmp(&(self.node.freq(), self.seq))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Builds the prefix tree for `table` by repeatedly merging the two
/// lowest-frequency nodes; the first node popped becomes the left child.
/// Returns `None` when the table is empty, and a lone leaf when the table
/// holds a single character.
pub fn build(table: &FrequencyTable) -> Option<Node> {
    let mut heap = BinaryHeap::new();
    let mut seq = 0u64;
    for (ch, freq) in table.iter() {
        heap.push(HeapEntry {
            seq,
            node: Node::Leaf { ch, freq },
        });
        seq += 1;
    }

    while heap.len() > 1 {
        let first = heap.pop().unwrap();
        let second = heap.pop().unwrap();
        let node = Node::Internal {
            freq: first.node.freq() + second.node.freq(),
            left: Box::new(first.node),
            right: Box::new(second.node),
        };
        heap.push(HeapEntry { seq, node });
        seq += 1;
    }

    heap.pop().map(|entry| entry.node)
}
