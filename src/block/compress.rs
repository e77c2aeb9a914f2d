//! LZO1X-1 style fast compression.
//!
//! A single greedy pass over the input:
//!
//! 1. hash the 4 bytes at the current position into a [`HashIndex`] that
//!    keeps only the most recent position per bucket;
//! 2. if the remembered position is within [`M4_MAX_OFFSET`] and its first
//!    4 bytes really match, extend the match as far as the bytes agree and
//!    hand it to the [`TokenEncoder`];
//! 3. otherwise leave the byte in the pending literal run and move on by one.
//!
//! Positions covered by an accepted match are *not* inserted into the index.
//! That keeps the loop to one hash per emitted token inside matches, at the
//! cost of missing some later matches that would start inside them; the
//! high-effort compressor in [`crate::hc`] inserts every position.
//!
//! The parse is final as soon as it is made: no backtracking, no look-ahead.

use super::encode::TokenEncoder;
use super::types::{count, hash4, read_le32, M4_MAX_OFFSET, MIN_COMPRESS_LENGTH};

/// Log₂ of the number of buckets in the fast-mode hash index (16 K slots).
pub const FAST_HASH_LOG: u32 = 14;

/// Bytes hashed and verified before a fast-mode match is accepted.
pub const FAST_MIN_MATCH: usize = 4;

// ─────────────────────────────────────────────────────────────────────────────
// HashIndex
// ─────────────────────────────────────────────────────────────────────────────

/// One-slot-per-bucket position index keyed by a 4-byte prefix hash.
///
/// Slots store `position + 1` so that a zeroed table reads as empty.
#[derive(Debug, Clone)]
pub struct HashIndex {
    slots: Vec<u32>,
    hash_log: u32,
}

impl HashIndex {
    pub fn new(hash_log: u32) -> Self {
        Self { slots: vec![0; 1 << hash_log], hash_log }
    }

    /// Look up `pos` and record it in the same bucket, hashing once.
    #[inline]
    pub fn exchange(&mut self, buf: &[u8], pos: usize) -> Option<usize> {
        let h = hash4(buf, pos, self.hash_log);
        let previous = self.slots[h];
        self.slots[h] = pos as u32 + 1;
        previous.checked_sub(1).map(|p| p as usize)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Greedy parse
// ─────────────────────────────────────────────────────────────────────────────

fn greedy_parse(input: &[u8], index: &mut HashIndex, enc: &mut TokenEncoder<'_>) {
    let end = input.len();
    let mut pos = 0usize;

    while pos + FAST_MIN_MATCH <= end {
        if let Some(candidate) = index.exchange(input, pos) {
            let distance = pos - candidate;
            if distance <= M4_MAX_OFFSET && read_le32(input, candidate) == read_le32(input, pos) {
                let length = FAST_MIN_MATCH
                    + count(input, candidate + FAST_MIN_MATCH, pos + FAST_MIN_MATCH, end);
                enc.emit_match(pos, distance, length);
                pos += length;
                continue;
            }
        }
        pos += 1;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Public API
// ─────────────────────────────────────────────────────────────────────────────

/// Compress `input` into a self-terminated LZO1X stream with the greedy
/// single-pass matcher.
///
/// Never fails: incompressible input degrades to one literal run followed by
/// the end marker, and the empty input encodes to the bare end marker.
///
/// Equivalent to `lzo1x_1_compress`.
pub fn compress_fast(input: &[u8]) -> Vec<u8> {
    let mut enc = TokenEncoder::new(input);
    // Slots hold u32 positions; larger inputs are stored as one literal run.
    if input.len() >= MIN_COMPRESS_LENGTH && input.len() < u32::MAX as usize {
        let mut index = HashIndex::new(FAST_HASH_LOG);
        greedy_parse(input, &mut index, &mut enc);
    }
    enc.finish()
}
