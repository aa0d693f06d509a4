//! This module serves as the public API for the collection of all pure,
//! stateless kernels that make up the Huffman codec.
//!
//! Each sub-module is one stage of the pipeline composed by the `codec`
//! layer: frequency analysis, tree construction, code assignment, and
//! bit-level packing/unpacking. This is the "toolbox" of the huffpack system.

//==================================================================================
// 1. Module Declarations
//==================================================================================

/// Stage 1: Frequency Analysis
pub mod frequency;

/// Stage 2: Tree Construction
pub mod tree;

/// Stage 3: Code Assignment
pub mod code;

/// Stage 4: Bit Packing / Unpacking
pub mod bits;

//==================================================================================
// 2. Public API Re-exports
//==================================================================================
// We do not re-export individual functions here. The `codec` orchestrator is
// the designated consumer of these kernels and calls them via their full path
// (e.g. `kernels::frequency::count_frequencies`). This keeps the dependency
// graph explicit and prevents polluting the global namespace.
