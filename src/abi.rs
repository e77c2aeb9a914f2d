//! C-ABI shims exporting the three classic LZO1X entry points.
//!
//! Enabled with:
//!   cargo build --release --features c-abi
//!
//! Signatures follow `lzo1x.h`: `(src, src_len, dst, *dst_len, wrkmem)`,
//! returning `LZO_E_OK` (0) or a negative error code.  `wrkmem` is accepted
//! for compatibility and ignored; the Rust compressors allocate their own
//! tables.  `*dst_len` must hold the capacity of `dst` on entry and receives
//! the number of bytes written on success.

use std::os::raw::{c_int, c_uchar, c_ulong, c_void};
use std::slice;

use crate::block::compress::compress_fast;
use crate::block::decompress_api::decompress_into;
use crate::hc::api::compress_best;

pub const LZO_E_OK: c_int = 0;
pub const LZO_E_ERROR: c_int = -1;
pub const LZO_E_OUTPUT_OVERRUN: c_int = -5;

// ─── helpers ─────────────────────────────────────────────────────────────────

/// Copy `out` into the caller's buffer, honouring the capacity in `*dst_len`.
///
/// # Safety
/// `dst` must be valid for `*dst_len` bytes of writes; `dst_len` must be a
/// valid pointer.
unsafe fn store(out: &[u8], dst: *mut c_uchar, dst_len: *mut c_ulong) -> c_int {
    let capacity = *dst_len as usize;
    if out.len() > capacity {
        return LZO_E_OUTPUT_OVERRUN;
    }
    // SAFETY: capacity checked above; caller guarantees `dst` spans it.
    slice::from_raw_parts_mut(dst, out.len()).copy_from_slice(out);
    *dst_len = out.len() as c_ulong;
    LZO_E_OK
}

/// Reject null pointers before any slice is built.
#[inline(always)]
fn bad_args(src: *const c_uchar, src_len: c_ulong, dst: *mut c_uchar, dst_len: *mut c_ulong) -> bool {
    (src.is_null() && src_len != 0) || dst.is_null() || dst_len.is_null()
}

/// # Safety
/// `src` must be valid for `src_len` bytes (or may be null when `src_len` is 0).
unsafe fn input<'a>(src: *const c_uchar, src_len: c_ulong) -> &'a [u8] {
    if src_len == 0 {
        &[]
    } else {
        slice::from_raw_parts(src, src_len as usize)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// lzo1x_1_compress
// ─────────────────────────────────────────────────────────────────────────────
#[no_mangle]
pub unsafe extern "C" fn lzo1x_1_compress(
    src: *const c_uchar,
    src_len: c_ulong,
    dst: *mut c_uchar,
    dst_len: *mut c_ulong,
    _wrkmem: *mut c_void,
) -> c_int {
    if bad_args(src, src_len, dst, dst_len) {
        return LZO_E_ERROR;
    }
    let out = compress_fast(input(src, src_len));
    store(&out, dst, dst_len)
}

// ─────────────────────────────────────────────────────────────────────────────
// lzo1x_999_compress
// ─────────────────────────────────────────────────────────────────────────────
#[no_mangle]
pub unsafe extern "C" fn lzo1x_999_compress(
    src: *const c_uchar,
    src_len: c_ulong,
    dst: *mut c_uchar,
    dst_len: *mut c_ulong,
    _wrkmem: *mut c_void,
) -> c_int {
    if bad_args(src, src_len, dst, dst_len) {
        return LZO_E_ERROR;
    }
    let out = compress_best(input(src, src_len));
    store(&out, dst, dst_len)
}

// ─────────────────────────────────────────────────────────────────────────────
// lzo1x_decompress_safe
// ─────────────────────────────────────────────────────────────────────────────
#[no_mangle]
pub unsafe extern "C" fn lzo1x_decompress_safe(
    src: *const c_uchar,
    src_len: c_ulong,
    dst: *mut c_uchar,
    dst_len: *mut c_ulong,
    _wrkmem: *mut c_void,
) -> c_int {
    if bad_args(src, src_len, dst, dst_len) {
        return LZO_E_ERROR;
    }
    let capacity = *dst_len as usize;
    let out = if capacity == 0 { &mut [][..] } else { slice::from_raw_parts_mut(dst, capacity) };
    match decompress_into(input(src, src_len), out) {
        Ok(n) => {
            *dst_len = n as c_ulong;
            LZO_E_OK
        }
        Err(e) => e.code(),
    }
}
