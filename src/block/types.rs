//! LZO1X format constants, byte-read helpers, and match-length counting.
//!
//! The numeric thresholds below are the public LZO1X stream definition
//! (`lzo1x_d.ch` / `config1x.h` in the reference distribution) and are a
//! compatibility contract, not tuning knobs:
//!
//! | Token | First byte      | Length range | Distance range     | Size      |
//! |-------|-----------------|--------------|--------------------|-----------|
//! | M1    | `0..=15`*       | 2 or 3       | 1..=1024 / 2049..=3072 | 2 bytes |
//! | M2    | `64..=255`      | 3..=8        | 1..=2048           | 2 bytes   |
//! | M3    | `32..=63`       | 3..          | 1..=16384          | 3+ bytes  |
//! | M4    | `16..=31`       | 3..          | 16385..=49151      | 3+ bytes  |
//!
//! *M1 commands share their first-byte range with literal runs; the decoder
//! tells them apart from the number of literals copied just before the
//! command (the "literal state").

// ─────────────────────────────────────────────────────────────────────────────
// Token markers (config1x.h)
// ─────────────────────────────────────────────────────────────────────────────

pub const M1_MARKER: u8 = 0;
pub const M2_MARKER: u8 = 64;
pub const M3_MARKER: u8 = 32;
pub const M4_MARKER: u8 = 16;

// ─────────────────────────────────────────────────────────────────────────────
// Distance limits
// ─────────────────────────────────────────────────────────────────────────────

/// Largest distance reachable by a 2-byte M1 match.
pub const M1_MAX_OFFSET: usize = 0x0400;
/// Largest distance reachable by an M2 match.
pub const M2_MAX_OFFSET: usize = 0x0800;
/// Largest distance reachable by an M3 match.
pub const M3_MAX_OFFSET: usize = 0x4000;
/// Largest distance reachable at all (M4).
pub const M4_MAX_OFFSET: usize = 0xbfff;
/// Largest distance of a 3-byte M1 match issued after a long literal run.
pub const MX_MAX_OFFSET: usize = M1_MAX_OFFSET + M2_MAX_OFFSET;

// ─────────────────────────────────────────────────────────────────────────────
// Length limits
// ─────────────────────────────────────────────────────────────────────────────

pub const M1_MIN_LEN: usize = 2;
pub const M2_MIN_LEN: usize = 3;
pub const M2_MAX_LEN: usize = 8;
/// Longest M3 length that fits in the command byte without extension bytes.
pub const M3_MAX_LEN: usize = 33;
/// Longest M4 length that fits in the command byte without extension bytes.
pub const M4_MAX_LEN: usize = 9;

/// Minimum match length for every token other than the 2-byte M1 form.
pub const MIN_MATCH: usize = M2_MIN_LEN;

// ─────────────────────────────────────────────────────────────────────────────
// Literal-run encoding limits
// ─────────────────────────────────────────────────────────────────────────────

/// Longest first literal run that is encoded as a single `17 + n` byte.
pub const FIRST_RUN_INLINE_MAX: usize = 238;
/// Longest literal run (after the first) encoded as a single `n - 3` byte.
pub const RUN_INLINE_MAX: usize = 18;
/// Literal runs this short after a match are stuffed into the match's low bits.
pub const RUN_STUFFED_MAX: usize = 3;

/// Bias subtracted from the first literal-run length when encoded inline.
pub const FIRST_RUN_BIAS: u8 = 17;

/// Literal state meaning "four or more literals were just copied".
pub const STATE_LONG_RUN: u8 = 4;

/// The end-of-stream token: an M4 command with distance field 0 and length 3.
pub const END_MARKER: [u8; 3] = [M4_MARKER | 1, 0, 0];

// ─────────────────────────────────────────────────────────────────────────────
// Sizing
// ─────────────────────────────────────────────────────────────────────────────

/// Inputs shorter than this are emitted as a single literal run.
pub const MIN_COMPRESS_LENGTH: usize = M2_MAX_LEN + 5;

/// Worst-case compressed size for `input_size` bytes.
///
/// Equivalent to `lzo1x_worst_compress` in the reference headers.
#[inline]
pub fn compress_bound(input_size: usize) -> usize {
    input_size + input_size / 16 + 64 + 3
}

// ─────────────────────────────────────────────────────────────────────────────
// Read helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Read a little-endian `u32` from `buf[pos..pos + 4]`.
///
/// Callers guarantee `pos + 4 <= buf.len()`.
#[inline(always)]
pub fn read_le32(buf: &[u8], pos: usize) -> u32 {
    u32::from_le_bytes([buf[pos], buf[pos + 1], buf[pos + 2], buf[pos + 3]])
}

#[inline(always)]
fn read_le64(buf: &[u8], pos: usize) -> u64 {
    let mut word = [0u8; 8];
    word.copy_from_slice(&buf[pos..pos + 8]);
    u64::from_le_bytes(word)
}

/// Number of equal leading bytes encoded in a non-zero little-endian XOR.
#[inline(always)]
pub fn nb_common_bytes(diff: u64) -> usize {
    debug_assert!(diff != 0);
    (diff.trailing_zeros() >> 3) as usize
}

/// Count how many bytes match between `buf[pos..]` and `buf[candidate..]`,
/// stopping before `buf[limit]` (`limit` is an absolute index into `buf`,
/// not a length counted from `pos`).
///
/// `candidate < pos` is required; overlapping ranges are fine because the
/// comparison is read-only.
#[inline]
pub fn count(buf: &[u8], candidate: usize, pos: usize, limit: usize) -> usize {
    debug_assert!(candidate < pos && limit <= buf.len());
    let mut n = 0usize;
    while pos + n + 8 <= limit {
        let diff = read_le64(buf, pos + n) ^ read_le64(buf, candidate + n);
        if diff != 0 {
            return n + nb_common_bytes(diff);
        }
        n += 8;
    }
    while pos + n < limit && buf[pos + n] == buf[candidate + n] {
        n += 1;
    }
    n
}

// ─────────────────────────────────────────────────────────────────────────────
// Hashing
// ─────────────────────────────────────────────────────────────────────────────

/// Knuth multiplicative constant shared by every hash in the crate.
pub const HASH_MULTIPLIER: u32 = 2_654_435_761;

/// Hash the 4 bytes at `buf[pos..pos + 4]` down to `hash_log` bits.
#[inline(always)]
pub fn hash4(buf: &[u8], pos: usize, hash_log: u32) -> usize {
    (read_le32(buf, pos).wrapping_mul(HASH_MULTIPLIER) >> (32 - hash_log)) as usize
}

/// Hash the 3 bytes at `buf[pos..pos + 3]` down to `hash_log` bits.
#[inline(always)]
pub fn hash3(buf: &[u8], pos: usize, hash_log: u32) -> usize {
    let v = (buf[pos] as u32) | (buf[pos + 1] as u32) << 8 | (buf[pos + 2] as u32) << 16;
    ((v << 8).wrapping_mul(HASH_MULTIPLIER) >> (32 - hash_log)) as usize
}
