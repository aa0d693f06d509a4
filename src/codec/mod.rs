// In: src/codec/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Codec Layer
// ====================================================================================
//
// The `codec` is the sole public-facing API of the huffpack library. It owns
// the wire format and composes the pure kernels into the two batch
// operations callers care about.
//
// Data Flow (Compression):
//
//   compress(&[u8])
//      |
//      `-> kernels::frequency  -> FrequencyTable
//      `-> kernels::tree       -> HuffmanTree (arena)
//      `-> kernels::code       -> CodeTable
//      `-> kernels::bits       -> packed payload + exact bit count
//      `-> format              -> header bytes || payload bytes
//
// Data Flow (Decompression):
//
//   decompress(&[u8])
//      |
//      `-> format              -> validated CompressedHeader + payload slice
//      `-> kernels::tree       -> the *same* HuffmanTree, rebuilt from the
//      |                          header's frequency table (determinism of
//      |                          the builder is what makes this sound)
//      `-> kernels::bits       -> exactly symbol-count original bytes
//
// Every call is single-threaded, synchronous and batch-oriented: one fully
// buffered input in, one fully buffered output out, nothing shared.
// ====================================================================================

pub mod format;

use log::debug;

use crate::config::HuffpackConfig;
use crate::error::HuffpackError;
use crate::kernels::code::CodeTable;
use crate::kernels::{bits, frequency, tree};
use self::format::{peek_info, CompressedHeader};


//==================================================================================
// 1. Public Structs
//==================================================================================

/// The public-facing struct for compression analysis results, returned by
/// [`analyze`].
#[derive(Debug)]
pub struct CompressionStats {
    pub header_size: usize,
    pub payload_size: usize,
    pub total_size: usize,
    /// Size of the original input in bytes, as declared by the header.
    pub original_size: u64,
    pub distinct_symbols: usize,
    /// The parsed header rendered as JSON, for diagnostics and logging.
    pub header_json: String,
}

//==================================================================================
// 2. Public Orchestration API
//==================================================================================

/// Compresses a byte buffer into a self-describing huffpack artifact.
///
/// Identical input always yields identical output: the tree builder's
/// tie-break makes the code assignment a pure function of the input, and the
/// header serialization is canonical. The empty input is valid and produces
/// a header-only artifact.
pub fn compress(input: &[u8]) -> Result<Vec<u8>, HuffpackError> {
    let frequencies = frequency::count_frequencies(input);

    let (payload, payload_bits) = match tree::build_tree(&frequencies) {
        // Empty input: no tree, no payload, header only.
        None => (Vec::new(), 0),
        Some(tree) => {
            let codes = CodeTable::from_tree(&tree);
            let mut writer = bits::BitWriter::with_capacity(input.len() * 8);
            for &byte in input {
                let code = codes.code(byte).ok_or_else(|| {
                    HuffpackError::InternalError(
                        "input byte has no entry in the code table".into(),
                    )
                })?;
                writer.write(code);
            }
            writer.into_vec()
        }
    };

    let header = CompressedHeader {
        frequencies,
        symbol_count: input.len() as u64,
        payload_bits,
    };

    let mut artifact = header.to_bytes();
    artifact.extend_from_slice(&payload);

    debug!(
        "compress: {} bytes in, {} distinct symbols, {} payload bytes ({} bits), {} bytes out",
        input.len(),
        frequency::distinct_symbols(&frequencies),
        payload.len(),
        payload_bits,
        artifact.len()
    );
    Ok(artifact)
}

/// Decompresses a huffpack artifact back into the original bytes, using the
/// default configuration. The exact inverse of [`compress`] for any artifact
/// it produced.
pub fn decompress(bytes: &[u8]) -> Result<Vec<u8>, HuffpackError> {
    decompress_with_config(bytes, &HuffpackConfig::default())
}

/// Decompresses a huffpack artifact under a caller-supplied [`HuffpackConfig`].
pub fn decompress_with_config(
    bytes: &[u8],
    config: &HuffpackConfig,
) -> Result<Vec<u8>, HuffpackError> {
    let (header, payload) = CompressedHeader::parse(bytes)?;

    // Symbol count zero is the empty input; there is no tree to rebuild and
    // nothing to read.
    if header.symbol_count == 0 {
        return Ok(Vec::new());
    }

    if let Some(max) = config.max_output_bytes {
        if header.symbol_count > max {
            return Err(HuffpackError::Alloc(format!(
                "header declares {} output bytes, configured cap is {}",
                header.symbol_count, max
            )));
        }
    }

    if config.verify_frequencies {
        let table_total = frequency::total_symbols(&header.frequencies);
        if table_total != header.symbol_count {
            return Err(HuffpackError::InvalidHeader(format!(
                "frequency table sums to {} but header declares {} symbols",
                table_total, header.symbol_count
            )));
        }
    }

    // The decoder derives the tree from the frequency table alone; it never
    // sees the encoder's code table.
    let tree = tree::build_tree(&header.frequencies).ok_or_else(|| {
        HuffpackError::InvalidHeader(
            "non-zero symbol count with an all-zero frequency table".into(),
        )
    })?;

    // Ignore any trailing bytes beyond the declared payload so they can
    // never feed the bit walk.
    let declared_len = header.payload_len();
    let payload = if payload.len() > declared_len {
        &payload[..declared_len]
    } else {
        payload
    };

    let output = bits::unpack_symbols(payload, &tree, header.symbol_count)?;

    debug!(
        "decompress: {} bytes in, {} symbols out",
        bytes.len(),
        output.len()
    );
    Ok(output)
}

/// Analyzes a compressed artifact without decompressing the payload.
/// This function acts as a simple facade over the `peek_info` parser.
pub fn analyze(bytes: &[u8]) -> Result<CompressionStats, HuffpackError> {
    let info = peek_info(bytes)?;
    Ok(CompressionStats {
        header_size: info.header_size,
        payload_size: info.payload_size,
        total_size: bytes.len(),
        original_size: info.symbol_count,
        distinct_symbols: info.distinct_symbols,
        header_json: serde_json::to_string(&info)?,
    })
}
