//! This file is the root of the `huffpack` Rust crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of the library (`codec`,
//!     `kernels`, etc.) so the Rust compiler knows they exist.
//! 2.  Re-exporting the small public surface callers actually use:
//!     `compress`, `decompress`, the error and config types, and the
//!     `analyze` diagnostics facade.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================

pub mod codec;
pub mod config;
pub mod kernels;

mod error;

//==================================================================================
// 2. Public API Re-exports
//==================================================================================

pub use codec::{analyze, compress, decompress, decompress_with_config, CompressionStats};
pub use config::HuffpackConfig;
pub use error::HuffpackError;

//==================================================================================
// 3. Diagnostics
//==================================================================================

/// Turns on `debug`-level logging for the codec via `env_logger`. Intended
/// for ad-hoc diagnostics from binaries and tests; library callers that
/// already install a `log` backend should not call this.
pub fn enable_verbose_logging() {
    let _ = env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .is_test(false)
        .try_init();
}
