// Joseph Prichard
// 10/16/2026
// Type definitions and utilities for the binary tree structure used for huffman coding

use crate::error::{CodecError, Result};
use crate::frequency::FreqTable;
use crate::queue::{MinQueue, QueueEntry};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NodeKind {
    Leaf { symbol: u8 },
    // children are indices into the owning tree's arena
    Internal { left: usize, right: usize },
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Node {
    pub weight: u64,
    pub kind: NodeKind,
}

impl Node {
    // creates a leaf structure with no children
    pub fn leaf(symbol: u8, weight: u64) -> Node {
        Node { weight, kind: NodeKind::Leaf { symbol } }
    }

    pub fn internal(left: usize, right: usize, weight: u64) -> Node {
        Node { weight, kind: NodeKind::Internal { left, right } }
    }

    #[cfg(test)]
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }
}

// Huffman code tree stored in an arena. Leaves come first in ascending symbol order, followed by
// internal nodes in the order they were merged; the root is always the last node.
#[derive(Debug, PartialEq, Eq)]
pub struct CodeTree {
    nodes: Vec<Node>,
    symbol_count: usize,
}

impl CodeTree {
    // Builds the tree by repeatedly merging the two minimum nodes until one remains.
    //
    // The first node extracted becomes the left child and the second the right child. Equal
    // weights are resolved by `TieBreak`, so the same table always yields the same tree.
    pub fn build(table: &FreqTable) -> Result<CodeTree> {
        let symbol_count = table.symbol_count();
        if symbol_count == 0 {
            return Err(CodecError::malformed_input("cannot build a code tree from zero symbols"));
        }

        let mut nodes = Vec::with_capacity(2 * symbol_count - 1);
        let mut queue = MinQueue::with_capacity(symbol_count);

        // add the frequency table nodes to priority queue
        for (symbol, weight) in table.iter() {
            queue.insert(QueueEntry::leaf(nodes.len(), symbol, weight));
            nodes.push(Node::leaf(symbol, weight));
        }

        // huffman coding algorithm
        let mut sequence = 0u32;
        while !queue.is_singleton() {
            let (Some(first), Some(second)) = (queue.extract_min(), queue.extract_min()) else {
                return Err(CodecError::malformed_input("priority queue drained before a root was formed"));
            };
            let weight = first.weight.checked_add(second.weight)
                .ok_or_else(|| CodecError::malformed_input("combined weight overflows u64"))?;
            queue.insert(QueueEntry::internal(nodes.len(), sequence, weight));
            nodes.push(Node::internal(first.node, second.node, weight));
            sequence += 1;
        }

        Ok(CodeTree { nodes, symbol_count })
    }

    pub fn root(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn node(&self, index: usize) -> &Node {
        &self.nodes[index]
    }

    pub fn symbol(&self, index: usize) -> Option<u8> {
        match self.nodes[index].kind {
            NodeKind::Leaf { symbol } => Some(symbol),
            NodeKind::Internal { .. } => None,
        }
    }

    // the child reached by following a bit, none if the node is a leaf
    pub fn child(&self, index: usize, bit: u8) -> Option<usize> {
        match self.nodes[index].kind {
            NodeKind::Internal { left, right } => Some(if bit == 0 { left } else { right }),
            NodeKind::Leaf { .. } => None,
        }
    }

    pub fn root_weight(&self) -> u64 {
        self.nodes[self.root()].weight
    }

    pub fn symbol_count(&self) -> usize {
        self.symbol_count
    }

    #[cfg(test)]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[cfg(test)]
    // a tree with a single distinct symbol has a leaf root and no merges
    pub fn is_single_leaf(&self) -> bool {
        self.nodes[self.root()].is_leaf()
    }

    #[cfg(test)]
    pub fn leaves(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter().filter(|node| node.is_leaf())
    }
}
