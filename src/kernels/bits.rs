//! This module contains the pure, stateless kernels for bit-level packing
//! and unpacking.
//!
//! This is Stage 4 of the codec. The packer appends variable-length codes
//! MSB-first into a byte buffer, zero-padding the final partial byte; the
//! unpacker walks the packed bits against the tree and stops the instant the
//! declared symbol count is reached, so the pad bits are never interpreted
//! as data. This module is a safe wrapper around the `bitvec` crate.

use bitvec::prelude::*;

use crate::error::HuffpackError;
use crate::kernels::tree::HuffmanTree;

//==================================================================================
// 1. Bit Packing
//==================================================================================

/// Accumulates variable-length codes into a growing, MSB-first bit buffer.
#[derive(Debug, Default)]
pub struct BitWriter {
    bits: BitVec<u8, Msb0>,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bits: BitVec::with_capacity(bits),
        }
    }

    /// Appends one code to the stream.
    pub fn write(&mut self, code: &BitSlice<u8, Msb0>) {
        self.bits.extend_from_bitslice(code);
    }

    /// Finalizes the stream, returning the byte-aligned buffer and the exact
    /// bit count. Dead bits in the final byte are forced to zero so the
    /// output is deterministic byte-for-byte.
    pub fn into_vec(mut self) -> (Vec<u8>, u64) {
        let bit_len = self.bits.len() as u64;
        self.bits.set_uninitialized(false);
        (self.bits.into_vec(), bit_len)
    }
}

//==================================================================================
// 2. Bit Unpacking
//==================================================================================

/// Decodes `expected_symbols` bytes out of `payload` by walking `tree`
/// MSB-first: bit 0 descends left, bit 1 descends right, and reaching a leaf
/// emits its symbol and resets the walk to the root.
///
/// Returns `TruncatedPayload` if the payload runs out first. Trailing pad
/// bits after the final symbol are ignored, which is exactly why the symbol
/// count travels in the header: byte alignment alone cannot distinguish pad
/// bits from one more code.
pub fn unpack_symbols(
    payload: &[u8],
    tree: &HuffmanTree,
    expected_symbols: u64,
) -> Result<Vec<u8>, HuffpackError> {
    if expected_symbols == 0 {
        return Ok(Vec::new());
    }

    let expected_usize: usize = expected_symbols
        .try_into()
        .map_err(|_| HuffpackError::Alloc("symbol count exceeds addressable memory".into()))?;

    // The symbol count comes from the header, i.e. from untrusted bytes, so
    // the output reservation must be fallible.
    let mut output: Vec<u8> = Vec::new();
    output
        .try_reserve_exact(expected_usize)
        .map_err(|e| HuffpackError::Alloc(e.to_string()))?;

    let bits = payload.view_bits::<Msb0>();

    // Lone-leaf tree: every symbol was encoded as the fixed 1-bit code, so
    // decoding is one bit consumed per symbol emitted.
    let root = &tree.nodes[tree.root];
    if let Some(symbol) = root.symbol {
        if (bits.len() as u64) < expected_symbols {
            // `decoded` means "symbols decodable before exhaustion" on both
            // truncation paths; here that is one per available bit.
            return Err(HuffpackError::TruncatedPayload {
                expected: expected_symbols,
                decoded: (bits.len() as u64).min(expected_symbols),
            });
        }
        output.resize(expected_usize, symbol);
        return Ok(output);
    }

    let mut current = tree.root;
    for bit in bits {
        let node = &tree.nodes[current];
        let next = if *bit { node.right } else { node.left };
        // A built tree gives every internal node two children, so a missing
        // child here means the walk escaped the tree.
        current = next.ok_or_else(|| {
            HuffpackError::InternalError("bit walk descended past a leaf".into())
        })?;

        if let Some(symbol) = tree.nodes[current].symbol {
            output.push(symbol);
            if output.len() == expected_usize {
                return Ok(output);
            }
            current = tree.root;
        }
    }

    Err(HuffpackError::TruncatedPayload {
        expected: expected_symbols,
        decoded: output.len() as u64,
    })
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::code::CodeTable;
    use crate::kernels::frequency::count_frequencies;
    use crate::kernels::tree::build_tree;

    fn pack(input: &[u8]) -> (Vec<u8>, u64, HuffmanTree) {
        let tree = build_tree(&count_frequencies(input)).unwrap();
        let codes = CodeTable::from_tree(&tree);
        let mut writer = BitWriter::new();
        for &b in input {
            writer.write(codes.code(b).unwrap());
        }
        let (bytes, bit_len) = writer.into_vec();
        (bytes, bit_len, tree)
    }

    #[test]
    fn test_packed_length_is_bit_count_rounded_up() {
        let (bytes, bit_len, _) = pack(b"abracadabra");
        assert_eq!(bytes.len() as u64, (bit_len + 7) / 8);
    }

    #[test]
    fn test_pack_then_unpack_restores_the_input() {
        let input = b"the quick brown fox jumps over the lazy dog";
        let (bytes, _, tree) = pack(input);
        let decoded = unpack_symbols(&bytes, &tree, input.len() as u64).unwrap();
        assert_eq!(decoded, input);
    }

    #[test]
    fn test_pad_bits_are_never_decoded_as_data() {
        let input = b"abracadabra";
        let (mut bytes, bit_len, tree) = pack(input);
        // Whatever is in the pad region must not matter: the decoder stops
        // on the symbol count, not on the buffer end.
        assert!(bit_len % 8 != 0, "test input must leave pad bits");
        let last = bytes.len() - 1;
        bytes[last] |= 0x01;
        let decoded = unpack_symbols(&bytes, &tree, input.len() as u64).unwrap();
        assert_eq!(decoded, input);
    }

    #[test]
    fn test_truncated_payload_is_detected() {
        let input = b"abracadabra";
        let (bytes, _, tree) = pack(input);
        let truncated = &bytes[..bytes.len() - 1];
        let result = unpack_symbols(truncated, &tree, input.len() as u64);
        match result {
            Err(HuffpackError::TruncatedPayload { expected, decoded }) => {
                assert_eq!(expected, input.len() as u64);
                assert!(decoded < expected);
            }
            other => panic!("expected TruncatedPayload, got {:?}", other),
        }
    }

    #[test]
    fn test_lone_leaf_consumes_one_bit_per_symbol() {
        let input = [0x41u8; 20];
        let (bytes, bit_len, tree) = pack(&input);
        assert_eq!(bit_len, 20);
        assert_eq!(bytes.len(), 3);
        let decoded = unpack_symbols(&bytes, &tree, 20).unwrap();
        assert_eq!(decoded, input);

        // Asking for more symbols than there are bits must not loop or
        // over-read; it is a truncation.
        assert!(matches!(
            unpack_symbols(&bytes, &tree, 25),
            Err(HuffpackError::TruncatedPayload { .. })
        ));

        // On truncation, `decoded` counts the symbols the remaining bits
        // could still have produced: two bytes leave 16 of the 20.
        match unpack_symbols(&bytes[..2], &tree, 20) {
            Err(HuffpackError::TruncatedPayload { expected, decoded }) => {
                assert_eq!(expected, 20);
                assert_eq!(decoded, 16);
            }
            other => panic!("expected TruncatedPayload, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_expected_symbols_reads_nothing() {
        let (bytes, _, tree) = pack(b"xyz");
        assert!(unpack_symbols(&bytes, &tree, 0).unwrap().is_empty());
    }
}
