// In: src/error.rs

//! This module defines the single, unified error type for the entire huffpack library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HuffpackError {
    // =========================================================================
    // === High-Level, Semantic Errors (Specific to our library's logic)
    // =========================================================================
    /// The header could not be parsed, or its fields are internally
    /// inconsistent (e.g. the frequency table does not sum to the declared
    /// symbol count, or all frequencies are zero while symbols are declared).
    #[error("Invalid or corrupt header: {0}")]
    InvalidHeader(String),

    /// The packed payload ran out before the declared number of symbols was
    /// decoded. This is a distinct condition from a malformed header: the
    /// header was consistent, but the bit stream behind it was cut short.
    #[error("Truncated payload: decoded {decoded} of {expected} declared symbols")]
    TruncatedPayload { expected: u64, decoded: u64 },

    /// Reserving the output buffer failed. The symbol count in a header is
    /// attacker-controlled, so the allocation is fallible and reported to
    /// the caller rather than aborting the process.
    #[error("Output buffer allocation failed: {0}")]
    Alloc(String),

    #[error("Internal logic error (this is a bug): {0}")]
    InternalError(String),

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error originating from the underlying I/O subsystem. The codec core
    /// never touches files itself; this exists so callers feeding it from
    /// `std::io` sources can use `?` against a single error type.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error from the Serde JSON library, raised when rendering header
    /// diagnostics for `analyze`.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}
