// In: src/codec/format.rs

//! Defines the self-describing on-disk format for a compressed huffpack
//! artifact. This module is the single source of truth for header
//! serialization, deserialization, and efficient metadata peeking.
//!
//! Layout, in order, all integers little-endian:
//!
//!   magic (4) | version (2) | frequencies (256 x u64) | symbol count (u64)
//!   | payload bit count (u64) | packed payload (ceil(bits / 8) bytes)
//!
//! The frequency table is the whole story: the decoder rebuilds the exact
//! encoding tree from it, so no code table ever travels on the wire. The
//! symbol count is mandatory because the payload is zero-padded to a byte
//! boundary and the pad bits would otherwise be indistinguishable from one
//! more code.

use serde::Serialize;

use crate::error::HuffpackError;
use crate::kernels::frequency::{self, FrequencyTable, ALPHABET_SIZE};

//==================================================================================
// Format Constants
//==================================================================================

/// The magic number identifying a huffpack artifact.
pub const FILE_MAGIC: &[u8; 4] = b"HUF1";
/// The current version of the artifact format.
pub const FORMAT_VERSION: u16 = 1;
/// Fixed header size: magic(4) + ver(2) + freqs(256*8) + symbols(8) + bits(8).
pub const HEADER_LEN: usize = 4 + 2 + 8 * ALPHABET_SIZE + 8 + 8;
/// Longest code any tree over a 256-symbol alphabet can assign: a maximally
/// skewed tree has depth 255. Used to bound the declared bit count.
pub const MAX_CODE_BITS: u64 = 255;

//==================================================================================
// Public Structs
//==================================================================================

/// The parsed fixed-size header of an artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedHeader {
    pub frequencies: FrequencyTable,
    /// Total number of original bytes; the decoder emits exactly this many.
    pub symbol_count: u64,
    /// Exact length of the packed payload in bits, before padding.
    pub payload_bits: u64,
}

/// Metadata extracted from an artifact without touching its payload. This is
/// the return type of [`peek_info`], and what `codec::analyze` reports on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderInfo {
    /// The version of the artifact format that was parsed.
    pub format_version: u16,
    pub symbol_count: u64,
    pub payload_bits: u64,
    /// Number of distinct byte values in the original input.
    pub distinct_symbols: usize,
    pub header_size: usize,
    /// Declared payload size in bytes.
    pub payload_size: usize,
}

//==================================================================================
// Core Implementation
//==================================================================================

impl CompressedHeader {
    /// Serializes the header into its canonical wire form. The output is
    /// deterministic: the frequency table is written in byte-value order.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(HEADER_LEN);
        buf.extend_from_slice(FILE_MAGIC);
        buf.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
        for &freq in self.frequencies.iter() {
            buf.extend_from_slice(&freq.to_le_bytes());
        }
        buf.extend_from_slice(&self.symbol_count.to_le_bytes());
        buf.extend_from_slice(&self.payload_bits.to_le_bytes());
        buf
    }

    /// Splits an artifact into its parsed header and the raw payload bytes
    /// behind it, performing all structural validation. Consistency of the
    /// frequency table itself is left to the decoder, which owns the policy
    /// for it (see `HuffpackConfig::verify_frequencies`).
    pub fn parse(bytes: &[u8]) -> Result<(Self, &[u8]), HuffpackError> {
        if bytes.len() < HEADER_LEN {
            return Err(HuffpackError::InvalidHeader(format!(
                "artifact is too small to hold a header: need {} bytes, got {}",
                HEADER_LEN,
                bytes.len()
            )));
        }

        if bytes[0..4] != *FILE_MAGIC {
            return Err(HuffpackError::InvalidHeader(
                "invalid magic number".into(),
            ));
        }

        let version = u16::from_le_bytes([bytes[4], bytes[5]]);
        if version != FORMAT_VERSION {
            return Err(HuffpackError::InvalidHeader(format!(
                "unsupported format version: expected {}, got {}",
                FORMAT_VERSION, version
            )));
        }

        let mut frequencies: FrequencyTable = [0; ALPHABET_SIZE];
        let mut offset = 6;
        for slot in frequencies.iter_mut() {
            *slot = read_u64_le(bytes, offset)?;
            offset += 8;
        }
        let symbol_count = read_u64_le(bytes, offset)?;
        let payload_bits = read_u64_le(bytes, offset + 8)?;

        // A payload with no symbols behind it (or the reverse) is internally
        // inconsistent no matter what the frequency table says.
        if (symbol_count == 0) != (payload_bits == 0) {
            return Err(HuffpackError::InvalidHeader(format!(
                "symbol count {} is inconsistent with payload bit count {}",
                symbol_count, payload_bits
            )));
        }
        // Every symbol carries at least one bit.
        if payload_bits > 0 && payload_bits < symbol_count {
            return Err(HuffpackError::InvalidHeader(format!(
                "payload bit count {} is below the declared symbol count {}",
                payload_bits, symbol_count
            )));
        }
        // ...and at most MAX_CODE_BITS, so a bit count beyond that ceiling
        // cannot have been produced by any encoder. Both fields are
        // untrusted bytes; bounding them here keeps every later length
        // computation in range. If the multiplication itself overflows the
        // ceiling exceeds u64 and no bit count can breach it.
        if let Some(max_bits) = symbol_count.checked_mul(MAX_CODE_BITS) {
            if payload_bits > max_bits {
                return Err(HuffpackError::InvalidHeader(format!(
                    "payload bit count {} exceeds the maximum {} for {} symbols",
                    payload_bits, max_bits, symbol_count
                )));
            }
        }

        let header = Self {
            frequencies,
            symbol_count,
            payload_bits,
        };
        Ok((header, &bytes[HEADER_LEN..]))
    }

    /// Declared payload size in bytes: the bit count rounded up to a byte
    /// boundary. Computed in u64 so an unvalidated bit count cannot wrap.
    pub fn payload_len(&self) -> usize {
        self.payload_bits.div_ceil(8) as usize
    }
}

/// Peeks into an artifact's header to extract metadata without reading the
/// (potentially large) payload.
pub fn peek_info(bytes: &[u8]) -> Result<HeaderInfo, HuffpackError> {
    let (header, _) = CompressedHeader::parse(bytes)?;
    Ok(HeaderInfo {
        format_version: FORMAT_VERSION,
        symbol_count: header.symbol_count,
        payload_bits: header.payload_bits,
        distinct_symbols: frequency::distinct_symbols(&header.frequencies),
        header_size: HEADER_LEN,
        payload_size: header.payload_len(),
    })
}

//==================================================================================
// Private Helpers
//==================================================================================

fn read_u64_le(bytes: &[u8], offset: usize) -> Result<u64, HuffpackError> {
    let end = offset + 8;
    let slice = bytes.get(offset..end).ok_or_else(|| {
        HuffpackError::InvalidHeader("header field extends past the buffer".into())
    })?;
    let arr: [u8; 8] = slice
        .try_into()
        .map_err(|_| HuffpackError::InternalError("u64 field slice has wrong length".into()))?;
    Ok(u64::from_le_bytes(arr))
}
