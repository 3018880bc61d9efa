// Joseph Prichard
// 10/16/2026
// Min-first priority queue of tree nodes with a deterministic tie-break

use std::cmp::Ordering;
use std::collections::BinaryHeap;

// secondary key used when two nodes have equal weight: leaves order before internal nodes,
// leaves order by symbol and internal nodes by the sequence they were merged in
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum TieBreak {
    Leaf(u8),
    Internal(u32),
}

#[derive(Clone, Copy, Debug)]
pub struct QueueEntry {
    pub weight: u64,
    pub tie: TieBreak,
    // index of the node in the tree arena
    pub node: usize,
}

impl QueueEntry {
    pub fn leaf(node: usize, symbol: u8, weight: u64) -> QueueEntry {
        QueueEntry { weight, tie: TieBreak::Leaf(symbol), node }
    }

    pub fn internal(node: usize, sequence: u32, weight: u64) -> QueueEntry {
        QueueEntry { weight, tie: TieBreak::Internal(sequence), node }
    }

    fn key(&self) -> (u64, TieBreak) {
        (self.weight, self.tie)
    }
}

impl Eq for QueueEntry {}

impl PartialEq<Self> for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl PartialOrd<Self> for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    // reversed so the max-heap pops the smallest key first
    fn cmp(&self, other: &Self) -> Ordering {
        other.key().cmp(&self.key())
    }
}

pub struct MinQueue {
    heap: BinaryHeap<QueueEntry>,
}

impl MinQueue {
    pub fn with_capacity(capacity: usize) -> MinQueue {
        MinQueue { heap: BinaryHeap::with_capacity(capacity) }
    }

    pub fn insert(&mut self, entry: QueueEntry) {
        self.heap.push(entry);
    }

    pub fn extract_min(&mut self) -> Option<QueueEntry> {
        self.heap.pop()
    }

    pub fn is_singleton(&self) -> bool {
        self.heap.len() == 1
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
