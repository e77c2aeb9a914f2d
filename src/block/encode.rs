//! LZO1X token encoder.
//!
//! [`TokenEncoder`] turns parse decisions into the LZO1X grammar.  Matchers
//! never emit literal tokens themselves: they advance over unmatched bytes
//! and the encoder coalesces everything between the previous match and the
//! next one into a single literal run, flushed lazily when a match is
//! accepted or the input ends.
//!
//! Literal runs come in three shapes:
//!
//! | Situation                 | Run length `n` | Encoding                              |
//! |---------------------------|----------------|---------------------------------------|
//! | start of stream           | 1..=238        | one byte `17 + n`                     |
//! | directly after a match    | 1..=3          | low two bits of the match's last-but-one byte |
//! | otherwise                 | 4..=18         | one byte `n - 3`                      |
//! | otherwise                 | ≥ 19           | `0`, zero bytes (+255 each), remainder |
//!
//! [`match_cost`] and [`literal_header_cost`] expose the encoded size of each
//! decision so the high-effort matcher can price alternatives without
//! encoding them.

use core::fmt;

use super::sink::VecSink;
use super::types::{
    compress_bound, END_MARKER, FIRST_RUN_BIAS, FIRST_RUN_INLINE_MAX, M1_MARKER, M1_MAX_OFFSET,
    M1_MIN_LEN, M2_MAX_LEN, M2_MAX_OFFSET, M2_MIN_LEN, M3_MARKER, M3_MAX_LEN, M3_MAX_OFFSET,
    M4_MARKER, M4_MAX_LEN, M4_MAX_OFFSET, MX_MAX_OFFSET, RUN_INLINE_MAX, RUN_STUFFED_MAX,
    STATE_LONG_RUN,
};

// ─────────────────────────────────────────────────────────────────────────────
// Parse decisions
// ─────────────────────────────────────────────────────────────────────────────

/// One parse decision, as accepted by [`encode_tokens`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Copy the next `n` input bytes verbatim.
    Literals(usize),
    /// Copy `length` bytes from `distance` bytes back.
    Match { distance: usize, length: usize },
}

/// Errors reported by [`encode_tokens`] for a parse that cannot be serialised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// The (distance, length) pair has no legal LZO1X encoding in the literal
    /// state where it appears.
    Unencodable { distance: usize, length: usize },
    /// The distance is zero or reaches before the start of the input.
    BadDistance { position: usize, distance: usize },
    /// The match does not reproduce the input bytes at `position`.
    Mismatch { position: usize },
    /// The tokens cover `covered` bytes of an `expected`-byte input.
    Coverage { covered: usize, expected: usize },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            EncodeError::Unencodable { distance, length } => {
                write!(f, "match of length {length} at distance {distance} cannot be encoded here")
            }
            EncodeError::BadDistance { position, distance } => {
                write!(f, "distance {distance} at position {position} is out of range")
            }
            EncodeError::Mismatch { position } => {
                write!(f, "match at position {position} does not reproduce the input")
            }
            EncodeError::Coverage { covered, expected } => {
                write!(f, "tokens cover {covered} of {expected} input bytes")
            }
        }
    }
}

impl std::error::Error for EncodeError {}

// ─────────────────────────────────────────────────────────────────────────────
// Cost helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Number of extension bytes needed for `length` when the command byte holds
/// lengths up to `inline_max`.
#[inline]
fn extension_cost(length: usize, inline_max: usize) -> usize {
    if length <= inline_max {
        0
    } else {
        1 + (length - inline_max - 1) / 255
    }
}

/// Encoded size in bytes of a match, or `None` when no token can express it.
///
/// `literals_before` is the length of the literal run emitted immediately
/// before the match (0 directly after another match); it decides whether the
/// two-byte M1 forms are available.
#[inline]
pub fn match_cost(distance: usize, length: usize, literals_before: usize) -> Option<usize> {
    if length < M1_MIN_LEN || distance == 0 || distance > M4_MAX_OFFSET {
        return None;
    }
    if length == M1_MIN_LEN {
        let short_state = (1..=RUN_STUFFED_MAX).contains(&literals_before);
        return (short_state && distance <= M1_MAX_OFFSET).then_some(2);
    }
    if length == M2_MIN_LEN
        && distance > M2_MAX_OFFSET
        && distance <= MX_MAX_OFFSET
        && literals_before >= STATE_LONG_RUN as usize
    {
        return Some(2);
    }
    if length <= M2_MAX_LEN && distance <= M2_MAX_OFFSET {
        return Some(2);
    }
    if distance <= M3_MAX_OFFSET {
        Some(3 + extension_cost(length, M3_MAX_LEN))
    } else {
        Some(3 + extension_cost(length, M4_MAX_LEN))
    }
}

/// Header bytes (excluding the literal bytes themselves) of a literal run of
/// `run` bytes.  `first` is true while no match has been emitted yet.
#[inline]
pub fn literal_header_cost(run: usize, first: bool) -> usize {
    match run {
        0 => 0,
        n if first && n <= FIRST_RUN_INLINE_MAX => 1,
        n if !first && n <= RUN_STUFFED_MAX => 0,
        n if n <= RUN_INLINE_MAX => 1,
        n => 2 + (n - RUN_INLINE_MAX - 1) / 255,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// TokenEncoder
// ─────────────────────────────────────────────────────────────────────────────

/// Streaming serialiser for one compression call.
#[derive(Debug)]
pub struct TokenEncoder<'a> {
    input: &'a [u8],
    out: VecSink,
    /// Start of the pending (not yet written) literal run.
    anchor: usize,
    /// Index of the byte whose low two bits carry the trailing-literal count
    /// of the last match; `None` until the first match.
    state_byte: Option<usize>,
}

impl<'a> TokenEncoder<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            out: VecSink::with_capacity(compress_bound(input.len())),
            anchor: 0,
            state_byte: None,
        }
    }

    /// Literals that would precede a match starting at `pos`.
    #[inline]
    pub fn pending_literals(&self, pos: usize) -> usize {
        pos - self.anchor
    }

    /// True while the stream still starts with its first literal run.
    #[inline]
    pub fn is_first_run(&self) -> bool {
        self.state_byte.is_none()
    }

    fn push_extension(&mut self, mut value: usize) {
        debug_assert!(value > 0);
        while value > 255 {
            value -= 255;
            self.out.push(0);
        }
        self.out.push(value as u8);
    }

    fn flush_literals(&mut self, end: usize) {
        let run = end - self.anchor;
        if run == 0 {
            return;
        }
        match self.state_byte {
            None if run <= FIRST_RUN_INLINE_MAX => self.out.push(FIRST_RUN_BIAS + run as u8),
            Some(index) if run <= RUN_STUFFED_MAX => self.out.or_at(index, run as u8),
            _ if run <= RUN_INLINE_MAX => self.out.push((run - 3) as u8),
            _ => {
                self.out.push(0);
                self.push_extension(run - RUN_INLINE_MAX);
            }
        }
        self.out.extend_from_slice(&self.input[self.anchor..end]);
        self.anchor = end;
    }

    /// Emit a match at `pos`, flushing the pending literal run first.
    ///
    /// The caller must have checked [`match_cost`] with
    /// [`pending_literals`](Self::pending_literals) and verified the bytes.
    pub fn emit_match(&mut self, pos: usize, distance: usize, length: usize) {
        let literals_before = self.pending_literals(pos);
        debug_assert!(match_cost(distance, length, literals_before).is_some());
        debug_assert!(distance <= pos);
        self.flush_literals(pos);

        if length == M1_MIN_LEN {
            let d = distance - 1;
            self.out.push(M1_MARKER | ((d & 3) << 2) as u8);
            self.out.push((d >> 2) as u8);
        } else if length == M2_MIN_LEN
            && distance > M2_MAX_OFFSET
            && distance <= MX_MAX_OFFSET
            && literals_before >= STATE_LONG_RUN as usize
        {
            let d = distance - 1 - M2_MAX_OFFSET;
            self.out.push(M1_MARKER | ((d & 3) << 2) as u8);
            self.out.push((d >> 2) as u8);
        } else if length <= M2_MAX_LEN && distance <= M2_MAX_OFFSET {
            let d = distance - 1;
            self.out.push((((length - 1) << 5) | ((d & 7) << 2)) as u8);
            self.out.push((d >> 3) as u8);
        } else if distance <= M3_MAX_OFFSET {
            let d = distance - 1;
            if length <= M3_MAX_LEN {
                self.out.push(M3_MARKER | (length - 2) as u8);
            } else {
                self.out.push(M3_MARKER);
                self.push_extension(length - M3_MAX_LEN);
            }
            self.out.push(((d & 63) << 2) as u8);
            self.out.push((d >> 6) as u8);
        } else {
            let d = distance - M3_MAX_OFFSET;
            let high = ((d & 0x4000) >> 11) as u8;
            if length <= M4_MAX_LEN {
                self.out.push(M4_MARKER | high | (length - 2) as u8);
            } else {
                self.out.push(M4_MARKER | high);
                self.push_extension(length - M4_MAX_LEN);
            }
            let low = d & 0x3fff;
            self.out.push(((low & 63) << 2) as u8);
            self.out.push((low >> 6) as u8);
        }

        self.state_byte = Some(self.out.len() - 2);
        self.anchor = pos + length;
    }

    /// Flush the trailing literal run and append the end marker.
    pub fn finish(mut self) -> Vec<u8> {
        self.flush_literals(self.input.len());
        self.out.extend_from_slice(&END_MARKER);
        self.out.into_vec()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// encode_tokens
// ─────────────────────────────────────────────────────────────────────────────

/// Serialise a caller-built parse of `input`.
///
/// Consecutive [`Token::Literals`] are merged.  Every match is checked
/// against the input and against the literal state it lands in.
pub fn encode_tokens(input: &[u8], tokens: &[Token]) -> Result<Vec<u8>, EncodeError> {
    let mut enc = TokenEncoder::new(input);
    let mut pos = 0usize;
    let coverage = |covered: usize| EncodeError::Coverage { covered, expected: input.len() };

    for token in tokens {
        match *token {
            Token::Literals(n) => {
                pos = pos
                    .checked_add(n)
                    .filter(|&end| end <= input.len())
                    .ok_or_else(|| coverage(pos.saturating_add(n)))?;
            }
            Token::Match { distance, length } => {
                if distance == 0 || distance > pos {
                    return Err(EncodeError::BadDistance { position: pos, distance });
                }
                let end = pos
                    .checked_add(length)
                    .filter(|&end| end <= input.len())
                    .ok_or_else(|| coverage(pos.saturating_add(length)))?;
                if (pos..end).any(|i| input[i] != input[i - distance]) {
                    return Err(EncodeError::Mismatch { position: pos });
                }
                if match_cost(distance, length, enc.pending_literals(pos)).is_none() {
                    return Err(EncodeError::Unencodable { distance, length });
                }
                enc.emit_match(pos, distance, length);
                pos = end;
            }
        }
    }

    if pos != input.len() {
        return Err(coverage(pos));
    }
    Ok(enc.finish())
}
