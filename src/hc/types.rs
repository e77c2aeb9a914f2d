//! High-effort compression parameters, level table and table sizing.
//!
//! Each level trades search effort for ratio through five knobs:
//!
//! | knob          | effect                                                         |
//! |---------------|----------------------------------------------------------------|
//! | `try_lazy`    | positions after a found match probed for a better one           |
//! | `good_length` | match length past which look-ahead uses a quarter of the chain  |
//! | `max_lazy`    | match length past which look-ahead is skipped entirely          |
//! | `nice_length` | match length that ends a chain walk early                       |
//! | `max_chain`   | candidates examined per chain walk                              |
//!
//! A zero `good_length` / `max_lazy` disables that knob.

use crate::block::types::M3_MAX_LEN;

// ─────────────────────────────────────────────────────────────────────────────
// Compression-level constants
// ─────────────────────────────────────────────────────────────────────────────

pub const HC_CLEVEL_MIN: i32 = 1;
pub const HC_CLEVEL_DEFAULT: i32 = 9;
pub const HC_CLEVEL_MAX: i32 = 9;

// ─────────────────────────────────────────────────────────────────────────────
// Table sizing
// ─────────────────────────────────────────────────────────────────────────────

/// Log₂ of the number of 3-byte-prefix chain heads.
pub const HC_HASH_LOG: u32 = 16;
pub const HC_HASHTABLESIZE: usize = 1 << HC_HASH_LOG;

/// Chain links live in a ring indexed by `position & HC_CHAIN_MASK`.  The ring
/// is larger than the widest reachable distance, so a link is never
/// overwritten while its position is still inside the window.
pub const HC_CHAIN_LOG: u32 = 16;
pub const HC_CHAIN_SIZE: usize = 1 << HC_CHAIN_LOG;
pub const HC_CHAIN_MASK: usize = HC_CHAIN_SIZE - 1;

/// One slot per possible 2-byte prefix.
pub const HC_HEAD2_SIZE: usize = 1 << 16;

/// Longest length for which the nearest distance is tracked individually.
/// Beyond it every extra byte costs the same, so only the overall best
/// match is kept.
pub const DIST_TABLE_MAX: usize = M3_MAX_LEN;

// ─────────────────────────────────────────────────────────────────────────────
// Compression parameters
// ─────────────────────────────────────────────────────────────────────────────

/// Per-level search parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CParams {
    pub try_lazy: usize,
    pub good_length: usize,
    pub max_lazy: usize,
    pub nice_length: usize,
    pub max_chain: usize,
}

const fn cp(
    try_lazy: usize,
    good_length: usize,
    max_lazy: usize,
    nice_length: usize,
    max_chain: usize,
) -> CParams {
    CParams { try_lazy, good_length, max_lazy, nice_length, max_chain }
}

/// Level → parameter table.  Index is the compression level; entry 0 is
/// unused.
#[rustfmt::skip]
pub static LEVEL_TABLE: [CParams; (HC_CLEVEL_MAX + 1) as usize] = [
    cp(0,    0,    0,    8,    4), /* 0, unused */
    cp(0,    0,    0,    8,    4), /* 1 */
    cp(0,    0,    0,   16,    8), /* 2 */
    cp(0,    0,    0,   32,   16), /* 3 */
    cp(1,    4,    4,   16,   16), /* 4 */
    cp(1,    8,   16,   32,   32), /* 5 */
    cp(1,    8,   16,  128,  128), /* 6 */
    cp(2,    8,   32,  128,  256), /* 7 */
    cp(2,   32,  128, 2048, 2048), /* 8 */
    cp(2, 2048, 2048, 2048, 4096), /* 9 == HC_CLEVEL_MAX */
];

/// Parameters for `level`.
///
/// Levels below [`HC_CLEVEL_MIN`] select [`HC_CLEVEL_DEFAULT`]; levels above
/// [`HC_CLEVEL_MAX`] are clamped to it.
#[inline]
pub fn get_level_params(level: i32) -> CParams {
    let level = if level < HC_CLEVEL_MIN { HC_CLEVEL_DEFAULT } else { level.min(HC_CLEVEL_MAX) };
    LEVEL_TABLE[level as usize]
}

impl CParams {
    /// Chain budget for a look-ahead search when the current match is
    /// `current_len` bytes long.
    #[inline]
    pub fn lazy_chain(&self, current_len: usize) -> usize {
        if self.good_length > 0 && current_len >= self.good_length {
            (self.max_chain / 4).max(1)
        } else {
            self.max_chain
        }
    }

    /// Whether a match of `current_len` bytes is taken without look-ahead.
    #[inline]
    pub fn skips_lazy(&self, current_len: usize) -> bool {
        self.try_lazy == 0 || (self.max_lazy > 0 && current_len >= self.max_lazy)
    }
}
