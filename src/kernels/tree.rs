//! This module contains the pure, stateless kernel for Huffman tree
//! construction.
//!
//! This is Stage 2 of the codec. Nodes live in a flat arena (`Vec<Node>`) and
//! reference each other by index, never by pointer; every node also carries a
//! parent back-reference, which doubles as the "already merged" marker during
//! construction. Both the encoder and the decoder build their tree through
//! this one function, from the same frequency table, so determinism here is
//! what guarantees the two sides agree on the code assignment.

use crate::kernels::frequency::FrequencyTable;

//==================================================================================
// 1. Types
//==================================================================================

/// One arena entry: a leaf (carries its byte value) or an internal node
/// (carries only the summed frequency of its two children).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub frequency: u64,
    /// `Some(byte)` for leaves, `None` for internal nodes.
    pub symbol: Option<u8>,
    pub left: Option<usize>,
    pub right: Option<usize>,
    /// `None` while the node is still awaiting merge; after construction only
    /// the root is parentless.
    pub parent: Option<usize>,
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        self.symbol.is_some()
    }
}

/// A fully built encoding tree. For n distinct symbols the arena holds
/// exactly 2n - 1 entries (n leaves, n - 1 internal nodes), and `root` is
/// always the last entry appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    pub nodes: Vec<Node>,
    pub root: usize,
}

impl HuffmanTree {
    /// Number of leaves, i.e. distinct symbols in the original input.
    pub fn leaf_count(&self) -> usize {
        (self.nodes.len() + 1) / 2
    }
}

//==================================================================================
// 2. Public API
//==================================================================================

/// Builds the encoding tree for `table`, returning `None` when every
/// frequency is zero (the empty-input case builds no tree at all).
///
/// Leaves are seeded in byte-value order, then the two smallest unmerged
/// nodes are combined until one root remains. On equal frequencies the node
/// with the lower arena index (earlier insertion) wins, which makes the tree
/// shape a pure function of the frequency table. The pair selection is a
/// linear scan; with at most 256 leaves the O(n²) bound is irrelevant, and
/// it keeps the tie-break trivially auditable. A single distinct symbol
/// yields a one-entry arena whose root is that lone leaf.
pub fn build_tree(table: &FrequencyTable) -> Option<HuffmanTree> {
    let mut nodes: Vec<Node> = Vec::new();
    for (byte, &frequency) in table.iter().enumerate() {
        if frequency > 0 {
            nodes.push(Node {
                frequency,
                symbol: Some(byte as u8),
                left: None,
                right: None,
                parent: None,
            });
        }
    }

    if nodes.is_empty() {
        return None;
    }

    let leaf_count = nodes.len();
    for _ in 1..leaf_count {
        let (lo, hi) = match smallest_unmerged_pair(&nodes) {
            Some(pair) => pair,
            // Unreachable: every iteration replaces two unmerged nodes with
            // one, so at least two remain until the loop ends.
            None => break,
        };

        let merged = Node {
            frequency: nodes[lo].frequency + nodes[hi].frequency,
            symbol: None,
            left: Some(lo),
            right: Some(hi),
            parent: None,
        };
        let merged_idx = nodes.len();
        nodes.push(merged);
        nodes[lo].parent = Some(merged_idx);
        nodes[hi].parent = Some(merged_idx);
    }

    let root = nodes.len() - 1;
    Some(HuffmanTree { nodes, root })
}

//==================================================================================
// 3. Private Helpers
//==================================================================================

/// Finds the two unmerged nodes with the smallest frequencies. Strict `<`
/// comparisons over an ascending scan mean that among equal frequencies the
/// lowest index is kept, which is the determinism tie-break the decoder
/// relies on. The returned pair is (smallest, second-smallest); the smallest
/// becomes the left child.
fn smallest_unmerged_pair(nodes: &[Node]) -> Option<(usize, usize)> {
    let mut min1: Option<usize> = None;
    let mut min2: Option<usize> = None;

    for (i, node) in nodes.iter().enumerate() {
        if node.parent.is_some() {
            continue;
        }
        match min1 {
            None => min1 = Some(i),
            Some(m1) if node.frequency < nodes[m1].frequency => {
                min2 = min1;
                min1 = Some(i);
            }
            Some(_) => match min2 {
                None => min2 = Some(i),
                Some(m2) if node.frequency < nodes[m2].frequency => min2 = Some(i),
                Some(_) => {}
            },
        }
    }

    match (min1, min2) {
        (Some(a), Some(b)) => Some((a, b)),
        _ => None,
    }
}
