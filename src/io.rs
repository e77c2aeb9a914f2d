//! File-level operations used by the `lzo` tool.
//!
//! This module assembles the I/O sub-modules and re-exports the symbols
//! consumed by the CLI and library users.

pub mod compress_file;
pub mod decompress_file;
pub mod file_io;
pub mod multiple;
pub mod prefs;

// ── Core type re-exports ─────────────────────────────────────────────────────
pub use multiple::FileStats;
pub use prefs::Prefs;

// ── Special I/O sentinels ────────────────────────────────────────────────────
pub use file_io::{NUL_MARK, STDIN_MARK, STDOUT_MARK};

// ── Compression ──────────────────────────────────────────────────────────────
pub use compress_file::{compress_filename, compress_multiple_filenames, compressed_name};

// ── Decompression ────────────────────────────────────────────────────────────
pub use decompress_file::{decompress_filename, decompress_multiple_filenames, decompressed_name};
