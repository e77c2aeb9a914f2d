//! LZO1X decompression core.
//!
//! The decoder is a small state machine over the command grammar:
//!
//! ```text
//! FirstLiteralRun ──► Command(S) ──► Command(S') ──► … ──► Terminal
//! ```
//!
//! `S` is the *literal state*: how many literals were copied just before the
//! command byte (0, 1, 2, 3, or 4 for "four or more").  It decides what a
//! command byte below 16 means:
//!
//! | `t`       | `S == 0`            | `S` in 1..=3                 | `S == 4`                        |
//! |-----------|---------------------|------------------------------|---------------------------------|
//! | `0..=15`  | literal run `t + 3` | M1, length 2, dist ≤ 1024    | M1, length 3, dist 2049..=3072  |
//! | `16..=31` | M4                  | M4                           | M4                              |
//! | `32..=63` | M3                  | M3                           | M3                              |
//! | `64..`    | M2                  | M2                           | M2                              |
//!
//! Every match ends with a 2-bit count of trailing literals, which becomes
//! the next state.
//!
//! # Safety boundary
//!
//! The decoder is the path that sees untrusted bytes.  It is written without
//! `unsafe`: every read goes through a bounded [`Source`] and every write
//! through an [`OutputSink`] that validates the back-reference distance
//! before copying.  Malformed, truncated or hostile input ends in a
//! [`DecompressError`], never in a panic or an out-of-bounds access.

use core::fmt;
use std::io;

use super::sink::OutputSink;
use super::source::Source;
use super::types::{
    FIRST_RUN_BIAS, M2_MARKER, M2_MAX_OFFSET, M3_MARKER, M3_MAX_LEN, M3_MAX_OFFSET, M4_MARKER,
    M4_MAX_LEN, MIN_MATCH, RUN_INLINE_MAX, STATE_LONG_RUN,
};

// ─────────────────────────────────────────────────────────────────────────────
// Error type
// ─────────────────────────────────────────────────────────────────────────────

/// Errors returned by LZO1X decompression.
///
/// The numeric [`code`](Self::code) of each variant matches the return value
/// of the corresponding `lzo1x_decompress_safe` failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecompressError {
    /// The compressed stream ended (or its declared length ran out) before
    /// the end marker.
    InputOverrun,
    /// A match refers to bytes before the start of the output.
    LookbehindOverrun,
    /// A command is malformed: a bad end marker or a length that overflows.
    InvalidToken,
    /// The fixed-size output buffer is too small for the decoded data.
    OutputOverrun,
    /// The stream decoded cleanly but to a different size than declared.
    SizeMismatch { expected: usize, actual: usize },
    /// The underlying reader failed.
    Io(io::ErrorKind),
}

impl DecompressError {
    /// True for errors caused by the compressed bytes themselves (as opposed
    /// to truncation, undersized buffers, size disagreement or I/O).
    pub fn is_corrupt(&self) -> bool {
        matches!(self, DecompressError::LookbehindOverrun | DecompressError::InvalidToken)
    }

    /// True when the input simply ran out.
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, DecompressError::InputOverrun)
    }

    /// `LZO_E_*` style status code.
    pub fn code(&self) -> i32 {
        match self {
            DecompressError::InputOverrun => -4,
            DecompressError::OutputOverrun => -5,
            DecompressError::LookbehindOverrun => -6,
            DecompressError::InvalidToken
            | DecompressError::SizeMismatch { .. }
            | DecompressError::Io(_) => -1,
        }
    }
}

impl fmt::Display for DecompressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecompressError::InputOverrun => {
                f.write_str("input overrun: compressed data ended before the end marker")
            }
            DecompressError::LookbehindOverrun => {
                f.write_str("corrupt input: match reaches before the start of the output")
            }
            DecompressError::InvalidToken => f.write_str("corrupt input: invalid command"),
            DecompressError::OutputOverrun => f.write_str("output buffer too small"),
            DecompressError::SizeMismatch { expected, actual } => {
                write!(f, "size mismatch: expected {expected} bytes, decoded {actual}")
            }
            DecompressError::Io(kind) => write!(f, "read error: {kind}"),
        }
    }
}

impl std::error::Error for DecompressError {}

impl From<io::Error> for DecompressError {
    fn from(e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::UnexpectedEof => DecompressError::InputOverrun,
            kind => DecompressError::Io(kind),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Decoder state machine
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Nothing decoded yet; the first byte may carry a biased literal count.
    FirstLiteralRun,
    /// Expecting a command byte; `literals` is the literal state.
    Command { literals: u8 },
    /// End marker seen.
    Terminal,
}

/// Add a zero-run length extension to `base`.
///
/// Each zero byte adds 255 and the first non-zero byte ends the extension.
#[inline]
fn read_extension<S: Source>(src: &mut S, base: usize) -> Result<usize, DecompressError> {
    let mut length = base;
    loop {
        let b = src.read_byte()?;
        if b != 0 {
            return length.checked_add(b as usize).ok_or(DecompressError::InvalidToken);
        }
        length = length.checked_add(255).ok_or(DecompressError::InvalidToken)?;
    }
}

/// Decode the command starting with byte `t` in literal state `literals`.
fn step<S: Source, O: OutputSink>(
    t: u8,
    literals: u8,
    src: &mut S,
    out: &mut O,
) -> Result<State, DecompressError> {
    let (distance, length, trailing) = if t >= M2_MARKER {
        let b = src.read_byte()? as usize;
        let distance = 1 + ((t as usize >> 2) & 7) + (b << 3);
        (distance, (t as usize >> 5) + 1, t & 3)
    } else if t >= M3_MARKER {
        let length = match t & 31 {
            0 => read_extension(src, M3_MAX_LEN)?,
            n => n as usize + 2,
        };
        let d = src.read_le16()? as usize;
        (1 + (d >> 2), length, (d & 3) as u8)
    } else if t >= M4_MARKER {
        let length = match t & 7 {
            0 => read_extension(src, M4_MAX_LEN)?,
            n => n as usize + 2,
        };
        let d = src.read_le16()? as usize;
        let far = ((t as usize & 8) << 11) + (d >> 2);
        if far == 0 {
            if length != MIN_MATCH {
                return Err(DecompressError::InvalidToken);
            }
            return Ok(State::Terminal);
        }
        (M3_MAX_OFFSET + far, length, (d & 3) as u8)
    } else if literals == 0 {
        let run = match t {
            0 => read_extension(src, RUN_INLINE_MAX)?,
            n => n as usize + 3,
        };
        src.copy_literals(run, out)?;
        return Ok(State::Command { literals: STATE_LONG_RUN });
    } else {
        let b = src.read_byte()? as usize;
        let near = (t as usize >> 2) + (b << 2);
        if literals >= STATE_LONG_RUN {
            (1 + M2_MAX_OFFSET + near, 3, t & 3)
        } else {
            (1 + near, 2, t & 3)
        }
    };

    out.put_match(distance, length)?;
    if trailing > 0 {
        src.copy_literals(trailing as usize, out)?;
    }
    Ok(State::Command { literals: trailing })
}

/// Run the decoder from the first byte of `src` through the end marker,
/// writing everything to `out`.
///
/// Bytes after the end marker are left unread.
pub fn decode<S: Source, O: OutputSink>(src: &mut S, out: &mut O) -> Result<(), DecompressError> {
    let mut state = State::FirstLiteralRun;
    loop {
        state = match state {
            State::FirstLiteralRun => {
                let t = src.read_byte()?;
                if t > FIRST_RUN_BIAS {
                    let run = (t - FIRST_RUN_BIAS) as usize;
                    src.copy_literals(run, out)?;
                    State::Command { literals: (run as u8).min(STATE_LONG_RUN) }
                } else {
                    step(t, 0, src, out)?
                }
            }
            State::Command { literals } => {
                let t = src.read_byte()?;
                step(t, literals, src, out)?
            }
            State::Terminal => return Ok(()),
        };
    }
}
