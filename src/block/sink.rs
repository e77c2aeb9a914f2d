//! Append-only output sinks shared by the encoder and the decoder.
//!
//! [`VecSink`] is the growable accumulator: the token encoder appends
//! command bytes and literal runs to it, and the decoder uses it as the
//! output window that back-references copy from.  [`SliceSink`] is the
//! fixed-capacity variant behind [`decompress_into`], which reports
//! [`DecompressError::OutputOverrun`] instead of growing.
//!
//! [`decompress_into`]: super::decompress_api::decompress_into

use super::decompress_core::DecompressError;

// ─────────────────────────────────────────────────────────────────────────────
// OutputSink trait
// ─────────────────────────────────────────────────────────────────────────────

/// Destination for decoded bytes.
///
/// Both methods either write everything they were asked to or fail without
/// exposing a partially-decoded result to the caller.
pub trait OutputSink {
    /// Number of bytes produced so far.
    fn produced(&self) -> usize;

    /// Append `lits` verbatim.
    fn put_literals(&mut self, lits: &[u8]) -> Result<(), DecompressError>;

    /// Copy `length` bytes starting `distance` bytes before the current end.
    ///
    /// `length > distance` is legal and repeats the last `distance` bytes.
    /// A `distance` of zero or one reaching before the start of the output
    /// fails with [`DecompressError::LookbehindOverrun`].
    fn put_match(&mut self, distance: usize, length: usize) -> Result<(), DecompressError>;
}

// ─────────────────────────────────────────────────────────────────────────────
// VecSink
// ─────────────────────────────────────────────────────────────────────────────

/// Growable output buffer.
#[derive(Debug, Default, Clone)]
pub struct VecSink {
    buf: Vec<u8>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { buf: Vec::with_capacity(capacity) }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[inline]
    pub fn push(&mut self, byte: u8) {
        self.buf.push(byte);
    }

    #[inline]
    pub fn extend_from_slice(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// OR `bits` into an already-written byte.
    ///
    /// The encoder uses this to stuff a short literal count into the low two
    /// bits of the previous match token.
    #[inline]
    pub fn or_at(&mut self, index: usize, bits: u8) {
        self.buf[index] |= bits;
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.buf
    }
}

impl OutputSink for VecSink {
    #[inline]
    fn produced(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    fn put_literals(&mut self, lits: &[u8]) -> Result<(), DecompressError> {
        self.buf.extend_from_slice(lits);
        Ok(())
    }

    fn put_match(&mut self, distance: usize, length: usize) -> Result<(), DecompressError> {
        let len = self.buf.len();
        if distance == 0 || distance > len {
            return Err(DecompressError::LookbehindOverrun);
        }
        self.buf.reserve(length);
        let start = len - distance;
        // Each pass doubles the copied window, so `self.buf.len() - start`
        // stays a multiple of `distance` until the final partial pass.
        let mut remaining = length;
        while remaining > 0 {
            let n = remaining.min(self.buf.len() - start);
            self.buf.extend_from_within(start..start + n);
            remaining -= n;
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// SliceSink
// ─────────────────────────────────────────────────────────────────────────────

/// Fixed-capacity output over a caller-provided slice.
#[derive(Debug)]
pub struct SliceSink<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> From<&'a mut [u8]> for SliceSink<'a> {
    fn from(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }
}

impl OutputSink for SliceSink<'_> {
    #[inline]
    fn produced(&self) -> usize {
        self.pos
    }

    fn put_literals(&mut self, lits: &[u8]) -> Result<(), DecompressError> {
        let end = self.pos + lits.len();
        if end > self.buf.len() {
            return Err(DecompressError::OutputOverrun);
        }
        self.buf[self.pos..end].copy_from_slice(lits);
        self.pos = end;
        Ok(())
    }

    fn put_match(&mut self, distance: usize, length: usize) -> Result<(), DecompressError> {
        if distance == 0 || distance > self.pos {
            return Err(DecompressError::LookbehindOverrun);
        }
        if length > self.buf.len() - self.pos {
            return Err(DecompressError::OutputOverrun);
        }
        let start = self.pos - distance;
        let mut remaining = length;
        while remaining > 0 {
            let n = remaining.min(self.pos - start);
            self.buf.copy_within(start..start + n, self.pos);
            self.pos += n;
            remaining -= n;
        }
        Ok(())
    }
}
