//! Public LZO1X decompression API.
//!
//!   - [`decompress`]: bounded slice in, owned `Vec` out
//!   - [`decompress_reader`]: same, pulling from any [`Read`]
//!   - [`decompress_into`]: decode into a caller-provided buffer
//!   - [`decompress_to_vec`]: whole slice, size unknown
//!
//! The declared decompressed size is advisory.  It sizes the initial
//! allocation (capped at [`EXPECTED_SIZE_PREALLOC_CAP`]) and is checked once
//! the end marker has been reached; it never bounds the decode loop.  Zero
//! means "unknown" and disables the check.

use std::io::Read;

use super::decompress_core::{decode, DecompressError};
use super::sink::{OutputSink, SliceSink, VecSink};
use super::source::{ReaderSource, SliceSource};
use crate::config::EXPECTED_SIZE_PREALLOC_CAP;

/// Initial output capacity for a stream of `compressed_len` bytes expected to
/// decode to `expected_len` bytes (0 = unknown).
fn initial_capacity(compressed_len: usize, expected_len: usize) -> usize {
    let guess = if expected_len > 0 { expected_len } else { compressed_len.saturating_mul(3) };
    guess.min(EXPECTED_SIZE_PREALLOC_CAP)
}

fn check_size(expected_len: usize, actual: usize) -> Result<(), DecompressError> {
    if expected_len != 0 && expected_len != actual {
        return Err(DecompressError::SizeMismatch { expected: expected_len, actual });
    }
    Ok(())
}

/// Decompress one LZO1X stream from the first `compressed_len` bytes of `src`.
///
/// `compressed_len` larger than `src.len()` is clamped; a bound larger than
/// the actual stream is fine since decoding stops at the end marker.
pub fn decompress(
    src: &[u8],
    compressed_len: usize,
    expected_len: usize,
) -> Result<Vec<u8>, DecompressError> {
    let bounded = &src[..compressed_len.min(src.len())];
    let mut source = SliceSource::new(bounded);
    let mut sink = VecSink::with_capacity(initial_capacity(bounded.len(), expected_len));
    decode(&mut source, &mut sink)?;
    check_size(expected_len, sink.len())?;
    Ok(sink.into_vec())
}

/// Decompress one LZO1X stream, reading at most `compressed_len` bytes from
/// `reader`.
///
/// The reader is consumed in [`READ_CHUNK_SIZE`](crate::config::READ_CHUNK_SIZE)
/// chunks, so up to one chunk past the end marker (within the bound) may
/// have been read when this returns.  Running out of bytes before the end
/// marker is [`DecompressError::InputOverrun`].
pub fn decompress_reader<R: Read>(
    reader: R,
    compressed_len: usize,
    expected_len: usize,
) -> Result<Vec<u8>, DecompressError> {
    let mut source = ReaderSource::new(reader, compressed_len);
    let mut sink = VecSink::with_capacity(initial_capacity(compressed_len, expected_len));
    decode(&mut source, &mut sink)?;
    check_size(expected_len, sink.len())?;
    Ok(sink.into_vec())
}

/// Decompress all of `src` into `dst`, returning the number of bytes written.
///
/// Equivalent to `lzo1x_decompress_safe`.  A `dst` too small for the decoded
/// data yields [`DecompressError::OutputOverrun`]; what was written before
/// the failure is left in `dst` but must not be relied on.
pub fn decompress_into(src: &[u8], dst: &mut [u8]) -> Result<usize, DecompressError> {
    let mut source = SliceSource::new(src);
    let mut sink = SliceSink::from(dst);
    decode(&mut source, &mut sink)?;
    Ok(sink.produced())
}

/// Decompress all of `src` with no size expectation.
pub fn decompress_to_vec(src: &[u8]) -> Result<Vec<u8>, DecompressError> {
    decompress(src, src.len(), 0)
}
