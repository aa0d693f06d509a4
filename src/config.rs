// In: src/config.rs

//! The single source of truth for all huffpack decoding configuration.
//!
//! This module defines the unified `HuffpackConfig` struct, which is designed
//! to be created once at the application boundary and then passed down by
//! shared reference. Compression has no tunable knobs (the code assignment is
//! fully determined by the input), so the config only governs how defensively
//! the decoder treats a header it did not produce.

use serde::{Deserialize, Serialize};

/// The unified configuration for huffpack decoding.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "snake_case")]
pub struct HuffpackConfig {
    /// If true, the decoder rejects any header whose frequency table does not
    /// sum to the declared symbol count. A mismatch means the table was
    /// corrupted and the rebuilt tree would silently misdecode.
    #[serde(default = "default_true")]
    pub verify_frequencies: bool,

    /// An upper bound on the output size the decoder is willing to allocate.
    /// The symbol count is read from the header, i.e. from untrusted bytes;
    /// callers decoding artifacts from outside sources should set this to
    /// whatever their memory budget allows. `None` means no bound.
    #[serde(default)]
    pub max_output_bytes: Option<u64>,
}

impl Default for HuffpackConfig {
    fn default() -> Self {
        Self {
            verify_frequencies: true,
            max_output_bytes: None,
        }
    }
}

/// Helper for `serde` to default a boolean field to true.
fn default_true() -> bool {
    true
}
