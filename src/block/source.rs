//! Bounded byte sources feeding the decoder.
//!
//! The decoder never sees the compressed stream as a whole; it pulls command
//! bytes, extension bytes and literal runs from a [`Source`].  Every source
//! is capped by the caller-declared compressed length, and running into that
//! cap (or into EOF of the underlying reader) before the end marker is
//! [`DecompressError::InputOverrun`].

use std::io::{ErrorKind, Read};

use super::decompress_core::DecompressError;
use super::sink::OutputSink;
use crate::config::READ_CHUNK_SIZE;

/// Pull interface over compressed input.
pub trait Source {
    /// Next byte of input.
    fn read_byte(&mut self) -> Result<u8, DecompressError>;

    /// Move the next `n` input bytes to `out` as literals.
    fn copy_literals<O: OutputSink>(&mut self, n: usize, out: &mut O) -> Result<(), DecompressError>;

    /// Next two bytes as a little-endian `u16`.
    #[inline]
    fn read_le16(&mut self) -> Result<u16, DecompressError> {
        let lo = self.read_byte()?;
        let hi = self.read_byte()?;
        Ok(u16::from_le_bytes([lo, hi]))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// SliceSource
// ─────────────────────────────────────────────────────────────────────────────

/// Source over an in-memory slice; the slice length is the bound.
#[derive(Debug, Clone)]
pub struct SliceSource<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }
}

impl Source for SliceSource<'_> {
    #[inline]
    fn read_byte(&mut self) -> Result<u8, DecompressError> {
        let b = *self.data.get(self.pos).ok_or(DecompressError::InputOverrun)?;
        self.pos += 1;
        Ok(b)
    }

    #[inline]
    fn copy_literals<O: OutputSink>(&mut self, n: usize, out: &mut O) -> Result<(), DecompressError> {
        if n > self.data.len() - self.pos {
            return Err(DecompressError::InputOverrun);
        }
        out.put_literals(&self.data[self.pos..self.pos + n])?;
        self.pos += n;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ReaderSource
// ─────────────────────────────────────────────────────────────────────────────

/// Source over any [`Read`], buffered in [`READ_CHUNK_SIZE`] chunks and never
/// pulling more than `limit` bytes from the reader in total.
#[derive(Debug)]
pub struct ReaderSource<R: Read> {
    inner: R,
    /// Bytes the reader may still be asked for.
    remaining: usize,
    buf: Vec<u8>,
    start: usize,
    end: usize,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(inner: R, limit: usize) -> Self {
        Self {
            inner,
            remaining: limit,
            buf: vec![0u8; READ_CHUNK_SIZE.min(limit.max(1))],
            start: 0,
            end: 0,
        }
    }

    /// Refill the (empty) buffer from the reader.
    fn fill(&mut self) -> Result<(), DecompressError> {
        debug_assert_eq!(self.start, self.end);
        if self.remaining == 0 {
            return Err(DecompressError::InputOverrun);
        }
        let want = self.buf.len().min(self.remaining);
        loop {
            match self.inner.read(&mut self.buf[..want]) {
                Ok(0) => return Err(DecompressError::InputOverrun),
                Ok(n) => {
                    self.start = 0;
                    self.end = n;
                    self.remaining -= n;
                    return Ok(());
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                    return Err(DecompressError::InputOverrun)
                }
                Err(e) => return Err(DecompressError::Io(e.kind())),
            }
        }
    }
}

impl<R: Read> Source for ReaderSource<R> {
    #[inline]
    fn read_byte(&mut self) -> Result<u8, DecompressError> {
        if self.start == self.end {
            self.fill()?;
        }
        let b = self.buf[self.start];
        self.start += 1;
        Ok(b)
    }

    fn copy_literals<O: OutputSink>(&mut self, mut n: usize, out: &mut O) -> Result<(), DecompressError> {
        while n > 0 {
            if self.start == self.end {
                self.fill()?;
            }
            let k = n.min(self.end - self.start);
            out.put_literals(&self.buf[self.start..self.start + k])?;
            self.start += k;
            n -= k;
        }
        Ok(())
    }
}
