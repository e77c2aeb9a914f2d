//! Level-based routing between the two compressors.
//!
//! | Level                      | Compressor                      | Character                 |
//! |----------------------------|---------------------------------|---------------------------|
//! | [`CompressionLevel::Fast`] | [`compress_fast`]               | one greedy pass, 4-byte hash |
//! | [`CompressionLevel::High`] | [`compress_level`]              | hash chains, lazy parse   |
//!
//! Both produce the same stream format; the decoder does not care which one
//! was used.

use super::api::compress_level;
use super::types::HC_CLEVEL_MAX;
use crate::block::compress::compress_fast;

/// Which compressor to run, and how hard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompressionLevel {
    /// The single-pass greedy compressor (`lzo1x_1_compress`).
    #[default]
    Fast,
    /// The high-effort compressor at the given level (`lzo1x_999_compress_level`).
    High(i32),
}

impl CompressionLevel {
    /// The strongest setting.
    pub const BEST: CompressionLevel = CompressionLevel::High(HC_CLEVEL_MAX);

    /// Map a command-line style level: 1 (or less) is the fast compressor,
    /// 2..=9 the high-effort one at that level, anything higher clamps to 9.
    pub fn from_cli_level(level: i32) -> Self {
        if level <= 1 {
            CompressionLevel::Fast
        } else {
            CompressionLevel::High(level.min(HC_CLEVEL_MAX))
        }
    }
}

impl From<i32> for CompressionLevel {
    fn from(level: i32) -> Self {
        CompressionLevel::from_cli_level(level)
    }
}

/// Compress `input` with the compressor selected by `level`.
pub fn compress(input: &[u8], level: CompressionLevel) -> Vec<u8> {
    match level {
        CompressionLevel::Fast => compress_fast(input),
        CompressionLevel::High(level) => compress_level(input, level),
    }
}
