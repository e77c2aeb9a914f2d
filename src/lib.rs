// lzo1x — LZO1X compression library and `lzo` command-line tool

pub mod config;
pub mod block;
pub mod hc;
pub mod io;
pub mod cli;

#[cfg(feature = "c-abi")]
pub mod abi;

// ── Version constants ─────────────────────────────────────────────────────────
// Format compatibility level: streams are interchangeable with liblzo2 2.10.
pub const LZO1X_VERSION_MAJOR: u32 = 2;
pub const LZO1X_VERSION_MINOR: u32 = 10;
pub const LZO1X_VERSION_NUMBER: u32 = (LZO1X_VERSION_MAJOR << 8) | LZO1X_VERSION_MINOR;
pub const LZO1X_VERSION_STRING: &str = "2.10";

/// Version of this crate, as recorded in Cargo.toml.
pub const CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the format version number (0x020a for 2.10).
pub fn version_number() -> u32 {
    LZO1X_VERSION_NUMBER
}

/// Returns the format version string.
pub fn version_string() -> &'static str {
    LZO1X_VERSION_STRING
}

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use block::{
    compress_bound, compress_fast, decompress, decompress_into, decompress_reader,
    decompress_to_vec, encode_tokens, DecompressError, EncodeError, Token,
};
pub use hc::{compress, compress_best, compress_level, CompressionLevel};
