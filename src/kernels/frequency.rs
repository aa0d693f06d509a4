//! This module contains the pure, stateless kernel for frequency analysis.
//!
//! This is Stage 1 of the codec: it scans an input buffer once and counts the
//! occurrences of each of the 256 possible byte values. The resulting table
//! drives tree construction and is also what gets serialized into the header,
//! so the decoder can rebuild the identical tree.

//==================================================================================
// 1. Types
//==================================================================================

/// The number of distinct symbols a single-byte alphabet can hold.
pub const ALPHABET_SIZE: usize = 256;

/// Occurrence counts indexed by byte value. Entry order *is* byte-value
/// order; the table is produced once and treated as immutable downstream.
pub type FrequencyTable = [u64; ALPHABET_SIZE];

//==================================================================================
// 2. Public API
//==================================================================================

/// Scans `input` and returns the occurrence count of every byte value.
/// An empty input yields the all-zero table, which downstream stages must
/// accept (it means "no tree, no payload").
pub fn count_frequencies(input: &[u8]) -> FrequencyTable {
    let mut table = [0u64; ALPHABET_SIZE];
    for &byte in input {
        table[byte as usize] += 1;
    }
    table
}

/// Number of byte values with a non-zero count. This is the leaf count of
/// the eventual tree.
pub fn distinct_symbols(table: &FrequencyTable) -> usize {
    table.iter().filter(|&&f| f > 0).count()
}

/// Sum of all counts, i.e. the original input length. The header stores this
/// explicitly, and the decoder cross-checks it against the table.
pub fn total_symbols(table: &FrequencyTable) -> u64 {
    table.iter().sum()
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_all_zero() {
        let table = count_frequencies(&[]);
        assert!(table.iter().all(|&f| f == 0));
        assert_eq!(distinct_symbols(&table), 0);
        assert_eq!(total_symbols(&table), 0);
    }

    #[test]
    fn test_counts_match_input() {
        let table = count_frequencies(b"abracadabra");
        assert_eq!(table[b'a' as usize], 5);
        assert_eq!(table[b'b' as usize], 2);
        assert_eq!(table[b'r' as usize], 2);
        assert_eq!(table[b'c' as usize], 1);
        assert_eq!(table[b'd' as usize], 1);
        assert_eq!(table[b'z' as usize], 0);
        assert_eq!(distinct_symbols(&table), 5);
        assert_eq!(total_symbols(&table), 11);
    }

    #[test]
    fn test_all_byte_values_are_countable() {
        let input: Vec<u8> = (0..=255u8).collect();
        let table = count_frequencies(&input);
        assert!(table.iter().all(|&f| f == 1));
        assert_eq!(distinct_symbols(&table), ALPHABET_SIZE);
        assert_eq!(total_symbols(&table), 256);
    }
}
