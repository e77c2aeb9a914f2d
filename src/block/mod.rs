//! LZO1X stream format: fast compression, token encoding and decompression.
//!
//! A compressed stream is a sequence of commands (literal runs and
//! back-references) terminated by the 3-byte end marker `11 00 00`.  There is
//! no header, checksum or length prefix; callers that need the sizes keep
//! them out of band.

pub mod compress;
pub mod decompress_api;
pub mod decompress_core;
pub mod encode;
pub mod sink;
pub mod source;
pub mod types;

// Re-export the most important public API items at the module level.
pub use compress::compress_fast;
pub use decompress_api::{decompress, decompress_into, decompress_reader, decompress_to_vec};
pub use decompress_core::DecompressError;
pub use encode::{encode_tokens, literal_header_cost, match_cost, EncodeError, Token};
pub use types::{compress_bound, END_MARKER, M4_MAX_OFFSET};
