//! High-effort compression public API.
//!
//! | Function                | Equivalent                      |
//! |-------------------------|---------------------------------|
//! | [`compress_best`]       | `lzo1x_999_compress`            |
//! | [`compress_level`]      | `lzo1x_999_compress_level`      |
//! | [`compress_with_params`]| same, with explicit [`CParams`] |

use super::compress_hc::lazy_parse;
use super::search::HashChain;
use super::types::{get_level_params, CParams, HC_CLEVEL_MAX};
use crate::block::compress::compress_fast;
use crate::block::encode::TokenEncoder;

/// Compress `input` with explicit search parameters.
///
/// The result is never longer than [`compress_fast`] output for the same
/// input: the lazy parse prices matches on estimates, so on incompressible
/// data the greedy stream can come out a few bytes shorter, and then it is
/// returned instead.
pub fn compress_with_params(input: &[u8], params: &CParams) -> Vec<u8> {
    let mut enc = TokenEncoder::new(input);
    // Chain links hold u32 positions; larger inputs are stored as one literal run.
    if input.len() < u32::MAX as usize {
        let mut chain = HashChain::new();
        lazy_parse(input, &mut chain, params, &mut enc);
    }
    let packed = enc.finish();
    let greedy = compress_fast(input);
    if greedy.len() < packed.len() {
        greedy
    } else {
        packed
    }
}

/// Compress `input` at `level` (1..=9, out-of-range levels clamp; see
/// [`get_level_params`]).
pub fn compress_level(input: &[u8], level: i32) -> Vec<u8> {
    compress_with_params(input, &get_level_params(level))
}

/// Compress `input` with the maximum search effort.
pub fn compress_best(input: &[u8]) -> Vec<u8> {
    compress_level(input, HC_CLEVEL_MAX)
}
