//! This module contains the pure, stateless kernel for code assignment.
//!
//! This is Stage 3 of the codec: it walks a built tree and assigns every
//! leaf the bit path from the root (left = 0, right = 1). Because codes are
//! only ever assigned at leaves, the resulting set is prefix-free by
//! construction. Codes are held MSB-first (`Msb0`) so they can be appended
//! straight into the packed payload without reordering.

use bitvec::prelude::*;

use crate::kernels::frequency::ALPHABET_SIZE;
use crate::kernels::tree::HuffmanTree;

//==================================================================================
// 1. Types
//==================================================================================

/// Per-symbol bit sequences for every byte value present in the input.
/// Symbols absent from the input have no entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: Vec<Option<BitVec<u8, Msb0>>>,
}

//==================================================================================
// 2. Public API
//==================================================================================

impl CodeTable {
    /// Derives the code table from `tree` with an explicit-stack, preorder,
    /// left-first traversal. The iteration is deliberate: a degenerate input
    /// (one dominant byte value) skews the tree to depth up to 255, and an
    /// explicit stack keeps that case identical to the balanced one instead
    /// of leaning on recursion depth.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes: Vec<Option<BitVec<u8, Msb0>>> = vec![None; ALPHABET_SIZE];

        let root = &tree.nodes[tree.root];
        if let Some(symbol) = root.symbol {
            // Lone-leaf tree: the root has no path, but a zero-length code
            // cannot be transmitted, so the sole symbol gets the fixed
            // 1-bit code `0`.
            let mut code = BitVec::<u8, Msb0>::new();
            code.push(false);
            codes[symbol as usize] = Some(code);
            return Self { codes };
        }

        let mut stack: Vec<(usize, BitVec<u8, Msb0>)> = Vec::with_capacity(tree.nodes.len());
        stack.push((tree.root, BitVec::new()));

        while let Some((idx, path)) = stack.pop() {
            let node = &tree.nodes[idx];
            match node.symbol {
                Some(symbol) => codes[symbol as usize] = Some(path),
                None => {
                    if let (Some(left), Some(right)) = (node.left, node.right) {
                        let mut right_path = path.clone();
                        right_path.push(true);
                        let mut left_path = path;
                        left_path.push(false);
                        // Right is pushed first so the left child is
                        // visited first.
                        stack.push((right, right_path));
                        stack.push((left, left_path));
                    }
                }
            }
        }

        Self { codes }
    }

    /// The code for `symbol`, or `None` if the symbol was absent from the
    /// input the tree was built from.
    pub fn code(&self, symbol: u8) -> Option<&BitSlice<u8, Msb0>> {
        self.codes[symbol as usize].as_deref()
    }

    /// Number of symbols that have a code.
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.iter().all(|c| c.is_none())
    }
}
