//! Match finding for the high-effort compressor.
//!
//! Two operations, interleaved at every parse position:
//!
//! 1. **Insertion** ([`HashChain::insert`]) links every position in
//!    `[next_to_update, pos)` into its 3-byte-prefix chain and records it as
//!    the latest occurrence of its 2-byte prefix.
//! 2. **Search** ([`HashChain::find_matches`]) walks the chain from the most
//!    recent candidate backwards, byte-verifies each one and records, for
//!    every length, the nearest distance that achieves it.
//!
//! Nearest-per-length matters because LZO1X encodes short distances more
//! cheaply: a 5-byte match at distance 100 (2 bytes, M2) beats a 6-byte
//! match at distance 40000 (3 bytes, M4) once literal headers are counted.

use super::types::{
    DIST_TABLE_MAX, HC_CHAIN_MASK, HC_CHAIN_SIZE, HC_HASHTABLESIZE, HC_HASH_LOG, HC_HEAD2_SIZE,
};
use crate::block::types::{count, hash3, M1_MAX_OFFSET, M1_MIN_LEN, M4_MAX_OFFSET, MIN_MATCH};

/// Empty slot / end of chain.
const NONE: u32 = u32::MAX;

// ─────────────────────────────────────────────────────────────────────────────
// MatchCandidates
// ─────────────────────────────────────────────────────────────────────────────

/// Result of one search: the nearest distance for each short length plus the
/// longest match found.
#[derive(Debug, Clone)]
pub struct MatchCandidates {
    /// `dist[len]` is the nearest distance of a match of at least `len`
    /// bytes, 0 when none was seen.
    dist: [usize; DIST_TABLE_MAX + 1],
    best_len: usize,
    best_dist: usize,
}

impl Default for MatchCandidates {
    fn default() -> Self {
        Self { dist: [0; DIST_TABLE_MAX + 1], best_len: 0, best_dist: 0 }
    }
}

impl MatchCandidates {
    /// Longest verified match of at least [`MIN_MATCH`] bytes (0 if none).
    #[inline]
    pub fn best_len(&self) -> usize {
        self.best_len
    }

    /// Distance of the longest match.
    #[inline]
    pub fn best_dist(&self) -> usize {
        self.best_dist
    }

    /// Nearest distance achieving `len` bytes, if any.
    #[inline]
    pub fn nearest(&self, len: usize) -> Option<usize> {
        if len > DIST_TABLE_MAX {
            return (len <= self.best_len).then_some(self.best_dist);
        }
        match self.dist[len] {
            0 => None,
            d => Some(d),
        }
    }

    /// Every (length, distance) pair worth pricing, shortest first.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let table_end = self.best_len.min(DIST_TABLE_MAX);
        let short = (M1_MIN_LEN..=table_end.max(M1_MIN_LEN))
            .filter_map(move |len| self.nearest(len).map(|d| (len, d)));
        let long = (self.best_len > DIST_TABLE_MAX).then_some((self.best_len, self.best_dist));
        short.chain(long)
    }

    fn record(&mut self, len: usize, distance: usize) {
        let from = (self.best_len + 1).max(MIN_MATCH);
        for l in from..=len.min(DIST_TABLE_MAX) {
            self.dist[l] = distance;
        }
        self.best_len = len;
        self.best_dist = distance;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// HashChain
// ─────────────────────────────────────────────────────────────────────────────

/// Chained position index over one input buffer.
///
/// Positions are stored as `u32`; callers only build a chain for inputs
/// shorter than `u32::MAX` bytes.
#[derive(Debug, Clone)]
pub struct HashChain {
    head3: Vec<u32>,
    head2: Vec<u32>,
    prev: Vec<u32>,
    next_to_update: usize,
}

impl Default for HashChain {
    fn default() -> Self {
        Self::new()
    }
}

impl HashChain {
    pub fn new() -> Self {
        Self {
            head3: vec![NONE; HC_HASHTABLESIZE],
            head2: vec![NONE; HC_HEAD2_SIZE],
            prev: vec![NONE; HC_CHAIN_SIZE],
            next_to_update: 0,
        }
    }

    /// First position not yet inserted.
    #[inline]
    pub fn next_to_update(&self) -> usize {
        self.next_to_update
    }

    /// Link every position in `[next_to_update, target)`.
    pub fn insert(&mut self, buf: &[u8], target: usize) {
        let mut idx = self.next_to_update;
        while idx < target {
            if idx + M1_MIN_LEN <= buf.len() {
                let key = u16::from_le_bytes([buf[idx], buf[idx + 1]]) as usize;
                self.head2[key] = idx as u32;
            }
            if idx + MIN_MATCH <= buf.len() {
                let h = hash3(buf, idx, HC_HASH_LOG);
                self.prev[idx & HC_CHAIN_MASK] = self.head3[h];
                self.head3[h] = idx as u32;
            }
            idx += 1;
        }
        self.next_to_update = self.next_to_update.max(target);
    }

    /// Insert up to `pos`, then collect matches for `pos`.
    ///
    /// At most `max_chain` chain candidates are examined; the walk stops early
    /// once a match of `nice_length` bytes (or one reaching the end of the
    /// input) is found.
    pub fn find_matches(
        &mut self,
        buf: &[u8],
        pos: usize,
        max_chain: usize,
        nice_length: usize,
    ) -> MatchCandidates {
        debug_assert!(self.next_to_update <= pos);
        self.insert(buf, pos);

        let end = buf.len();
        let mut found = MatchCandidates::default();

        if pos + M1_MIN_LEN <= end {
            let key = u16::from_le_bytes([buf[pos], buf[pos + 1]]) as usize;
            if let Some(c) = slot(self.head2[key]) {
                if pos - c <= M1_MAX_OFFSET {
                    found.dist[M1_MIN_LEN] = pos - c;
                }
            }
        }
        if pos + MIN_MATCH > end {
            return found;
        }

        let mut link = self.head3[hash3(buf, pos, HC_HASH_LOG)];
        let mut budget = max_chain;
        while let Some(c) = slot(link) {
            let distance = pos - c;
            if distance > M4_MAX_OFFSET || budget == 0 {
                break;
            }
            budget -= 1;

            // A longer match must agree on the byte just past the current best.
            let probe = found.best_len;
            if probe < MIN_MATCH || buf[c + probe] == buf[pos + probe] {
                let len = count(buf, c, pos, end);
                if len >= MIN_MATCH && len > found.best_len {
                    found.record(len, distance);
                    if len >= nice_length || pos + len == end {
                        break;
                    }
                }
            }
            link = self.prev[c & HC_CHAIN_MASK];
        }
        found
    }
}

#[inline(always)]
fn slot(v: u32) -> Option<usize> {
    (v != NONE).then_some(v as usize)
}
