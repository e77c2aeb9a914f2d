// Integration tests for the LZO1X decoder and its public entry points.
//
// Coverage:
//   - hand-assembled streams for every command class (M1, M2, M3, M4, runs)
//   - truncation at every length → InputOverrun
//   - corrupt streams → LookbehindOverrun / InvalidToken
//   - size validation, bounds larger than the stream, trailing bytes
//   - fixed-capacity decoding and the reader source
//   - numeric error codes

use std::io::{self, Read};

use lzo1x::block::{
    compress_fast, decompress, decompress_into, decompress_reader, decompress_to_vec,
    DecompressError,
};

// Two-byte literal run "ab", then an M1 copy of "ab" (distance 2), then end.
const ABAB: [u8; 8] = [19, b'a', b'b', 0b0000_0100, 0, 0x11, 0, 0];

// ─────────────────────────────────────────────────────────────────────────────
// Command classes
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn m1_after_short_first_run() {
    assert_eq!(decompress_to_vec(&ABAB).unwrap(), b"abab");
}

#[test]
fn m2_copy_with_stuffed_literals() {
    // "abc", M2 length 3 distance 3 carrying one trailing literal "z".
    let stream = [20, b'a', b'b', b'c', 0b0100_1001, 0, b'z', 0x11, 0, 0];
    assert_eq!(decompress_to_vec(&stream).unwrap(), b"abcabcz");
}

#[test]
fn m3_copy_overlapping() {
    // "x", M3 length 10 distance 1.
    let stream = [18, b'x', 32 | 8, 0, 0, 0x11, 0, 0];
    assert_eq!(decompress_to_vec(&stream).unwrap(), vec![b'x'; 11]);
}

#[test]
fn m3_length_extension() {
    // "x", M3 length 33 + 2 = 35 distance 1.
    let stream = [18, b'x', 32, 2, 0, 0, 0x11, 0, 0];
    assert_eq!(decompress_to_vec(&stream).unwrap(), vec![b'x'; 36]);
}

#[test]
fn long_literal_run_with_extension() {
    // After a match, a run of 18 + 300 literals: 0, then 255 as a zero byte
    // plus 45.
    let mut stream = vec![18, b'q', 32 | 1, 0, 0, 0, 0, 45];
    stream.extend(std::iter::repeat(b'r').take(318));
    stream.extend_from_slice(&[0x11, 0, 0]);
    let out = decompress_to_vec(&stream).unwrap();
    assert_eq!(out.len(), 1 + 3 + 318);
    assert!(out[..4].iter().all(|&b| b == b'q'));
    assert!(out[4..].iter().all(|&b| b == b'r'));
}

#[test]
fn m4_copy_from_far_back() {
    let mut input = vec![b'-'; 20_000];
    input[..8].copy_from_slice(b"ABCDEFGH");
    input.extend_from_slice(b"ABCDEFGH");
    let packed = compress_fast(&input);
    assert_eq!(decompress(&packed, packed.len(), input.len()).unwrap(), input);
}

// ─────────────────────────────────────────────────────────────────────────────
// Truncation and corruption
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn every_truncation_is_input_overrun() {
    let input = "truncate me, truncate me, truncate me please".repeat(20);
    let packed = compress_fast(input.as_bytes());
    for k in 1..packed.len() {
        let bound = packed.len() - k;
        assert_eq!(
            decompress(&packed, bound, 0),
            Err(DecompressError::InputOverrun),
            "bound {bound} of {}",
            packed.len()
        );
    }
}

#[test]
fn empty_stream_is_input_overrun() {
    assert_eq!(decompress_to_vec(&[]), Err(DecompressError::InputOverrun));
}

#[test]
fn distance_before_start_is_lookbehind_overrun() {
    let stream = [18, b'a', 0x44, 0, 0x11, 0, 0];
    let err = decompress_to_vec(&stream).unwrap_err();
    assert_eq!(err, DecompressError::LookbehindOverrun);
    assert!(err.is_corrupt());
}

#[test]
fn end_marker_with_bad_length_is_invalid() {
    // "a", then an M4 command with zero distance but length 4.
    let err = decompress_to_vec(&[18, b'a', 0x12, 0, 0]).unwrap_err();
    assert_eq!(err, DecompressError::InvalidToken);
    assert!(err.is_corrupt());
}

#[test]
fn bit_flips_never_panic() {
    let input = "flip the bits, flip the bits, flip them all ".repeat(30);
    let packed = compress_fast(input.as_bytes());
    for i in 0..packed.len() {
        for bit in 0..8 {
            let mut corrupt = packed.clone();
            corrupt[i] ^= 1 << bit;
            match decompress(&corrupt, corrupt.len(), 0) {
                Ok(out) => assert!(out.len() <= 256 * corrupt.len()),
                Err(e) => assert!(e.is_corrupt() || e.is_end_of_input(), "{e:?}"),
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Bounds and sizes
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn wrong_expected_length_is_size_mismatch() {
    assert_eq!(
        decompress(&ABAB, ABAB.len(), 3),
        Err(DecompressError::SizeMismatch { expected: 3, actual: 4 })
    );
    assert_eq!(decompress(&ABAB, ABAB.len(), 0).unwrap(), b"abab");
}

#[test]
fn bound_larger_than_stream_is_clamped() {
    assert_eq!(decompress(&ABAB, 1 << 20, 4).unwrap(), b"abab");
}

#[test]
fn trailing_bytes_after_end_marker_are_ignored() {
    let mut stream = ABAB.to_vec();
    stream.extend_from_slice(b"garbage");
    assert_eq!(decompress_to_vec(&stream).unwrap(), b"abab");
}

#[test]
fn into_fixed_buffer() {
    let mut dst = [0u8; 16];
    assert_eq!(decompress_into(&ABAB, &mut dst), Ok(4));
    assert_eq!(&dst[..4], b"abab");

    let mut small = [0u8; 2];
    assert_eq!(decompress_into(&ABAB, &mut small), Err(DecompressError::OutputOverrun));
}

// ─────────────────────────────────────────────────────────────────────────────
// Reader source
// ─────────────────────────────────────────────────────────────────────────────

/// Hands out one byte per `read` call.
struct Trickle<'a>(&'a [u8]);

impl Read for Trickle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.0.split_first() {
            Some((&b, rest)) if !buf.is_empty() => {
                buf[0] = b;
                self.0 = rest;
                Ok(1)
            }
            _ => Ok(0),
        }
    }
}

struct Broken;

impl Read for Broken {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "nope"))
    }
}

#[test]
fn reader_matches_slice_decoding() {
    let input = "reader source ".repeat(2_000);
    let packed = compress_fast(input.as_bytes());
    let out = decompress_reader(Trickle(&packed), packed.len(), input.len()).unwrap();
    assert_eq!(out, input.as_bytes());
}

#[test]
fn reader_eof_before_end_marker() {
    assert_eq!(
        decompress_reader(&ABAB[..5], 100, 0),
        Err(DecompressError::InputOverrun)
    );
}

#[test]
fn reader_io_error_surfaces() {
    let err = decompress_reader(Broken, 10, 0).unwrap_err();
    assert_eq!(err, DecompressError::Io(io::ErrorKind::PermissionDenied));
}

// ─────────────────────────────────────────────────────────────────────────────
// Error codes
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn numeric_codes() {
    assert_eq!(DecompressError::InputOverrun.code(), -4);
    assert_eq!(DecompressError::OutputOverrun.code(), -5);
    assert_eq!(DecompressError::LookbehindOverrun.code(), -6);
    assert_eq!(DecompressError::InvalidToken.code(), -1);
    assert_eq!(DecompressError::SizeMismatch { expected: 1, actual: 2 }.code(), -1);
}
