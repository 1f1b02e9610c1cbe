//! Huffman tree construction and code assignment.
//!
//! The tree lives in an arena: leaves are pushed first in ascending symbol
//! order, then every merge appends one internal node. A node's index is
//! therefore also its creation order, which breaks frequency ties so that
//! encoder and decoder build the identical tree from the same table.

use oxientropy_core::error::{EntropyError, Result};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Number of symbols in the byte alphabet.
pub const ALPHABET_SIZE: usize = 256;

/// Count symbol occurrences in `data`.
pub fn count_frequencies(data: &[u8]) -> [u64; ALPHABET_SIZE] {
    let mut counts = [0u64; ALPHABET_SIZE];
    for &byte in data {
        counts[byte as usize] += 1;
    }
    counts
}

/// A node in the tree arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    /// Terminal node carrying a symbol.
    Leaf {
        /// The decoded byte.
        symbol: u8,
    },
    /// Branch node; a `0` bit goes left, a `1` bit goes right.
    Internal {
        /// Arena index of the `0` child.
        left: usize,
        /// Arena index of the `1` child.
        right: usize,
    },
}

/// Huffman tree built from a frequency table.
#[derive(Debug, Clone)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: usize,
}

impl HuffmanTree {
    /// Build the tree by repeatedly merging the two lightest nodes.
    ///
    /// The first node taken from the heap becomes the left child. Fails with
    /// [`EntropyError::DegenerateModel`] when every frequency is zero.
    pub fn from_frequencies(frequencies: &[u64; ALPHABET_SIZE]) -> Result<Self> {
        let mut nodes = Vec::with_capacity(2 * ALPHABET_SIZE - 1);
        let mut heap = BinaryHeap::new();

        for (symbol, &freq) in frequencies.iter().enumerate() {
            if freq > 0 {
                heap.push(Reverse((freq, nodes.len())));
                nodes.push(Node::Leaf {
                    symbol: symbol as u8,
                });
            }
        }

        while let Some(Reverse((left_freq, left))) = heap.pop() {
            let Some(Reverse((right_freq, right))) = heap.pop() else {
                return Ok(Self { nodes, root: left });
            };
            heap.push(Reverse((left_freq.saturating_add(right_freq), nodes.len())));
            nodes.push(Node::Internal { left, right });
        }

        Err(EntropyError::degenerate_model(
            "no symbol has a non-zero frequency",
        ))
    }

    /// Arena index of the root.
    pub fn root(&self) -> usize {
        self.root
    }

    /// Node at `index`.
    pub fn node(&self, index: usize) -> Node {
        self.nodes[index]
    }

    /// Number of nodes in the arena.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The symbol of a tree that is a single leaf.
    pub fn sole_symbol(&self) -> Option<u8> {
        match self.nodes[self.root] {
            Node::Leaf { symbol } => Some(symbol),
            Node::Internal { .. } => None,
        }
    }

    /// Assign a code to every leaf by walking the tree.
    pub fn codes(&self) -> CodeTable {
        let mut codes = vec![Vec::new(); ALPHABET_SIZE];

        if let Some(symbol) = self.sole_symbol() {
            // An empty path cannot be written, so a lone symbol gets "0"
            codes[symbol as usize].push(false);
            return CodeTable { codes };
        }

        let mut stack = vec![(self.root, Vec::new())];
        while let Some((index, path)) = stack.pop() {
            match self.nodes[index] {
                Node::Leaf { symbol } => codes[symbol as usize] = path,
                Node::Internal { left, right } => {
                    let mut right_path = path.clone();
                    right_path.push(true);
                    stack.push((right, right_path));

                    let mut left_path = path;
                    left_path.push(false);
                    stack.push((left, left_path));
                }
            }
        }

        CodeTable { codes }
    }
}

/// Bit codes indexed by symbol.
///
/// Codes are kept as bit vectors since a skewed table can push the deepest
/// leaf to 255 levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: Vec<Vec<bool>>,
}

impl CodeTable {
    /// Code for `symbol`; empty if the symbol is absent.
    pub fn get(&self, symbol: u8) -> &[bool] {
        &self.codes[symbol as usize]
    }

    /// Length of the longest code.
    pub fn max_len(&self) -> usize {
        self.codes.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Total payload bits needed to encode symbols with these frequencies.
    pub fn encoded_bits(&self, frequencies: &[u64; ALPHABET_SIZE]) -> u64 {
        self.codes
            .iter()
            .zip(frequencies.iter())
            .map(|(code, &freq)| code.len() as u64 * freq)
            .sum()
    }
}
