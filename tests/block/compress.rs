// Integration tests for the fast (greedy) LZO1X compressor.
//
// Coverage:
//   - empty input: bare end marker
//   - inputs below the match threshold: single literal run
//   - round-trip on repetitive, periodic, zero-filled and pseudo-random data
//   - determinism and the compress_bound guarantee
//   - matches beyond the M3 window (M4 distances)

use lzo1x::block::types::{END_MARKER, M3_MAX_OFFSET, MIN_COMPRESS_LENGTH};
use lzo1x::block::{compress_bound, compress_fast, decompress};

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

/// xorshift bytes: incompressible for practical purposes, reproducible.
fn noise(len: usize, mut seed: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(len);
    while out.len() < len {
        seed ^= seed << 13;
        seed ^= seed >> 7;
        seed ^= seed << 17;
        out.push((seed >> 24) as u8);
    }
    out
}

fn roundtrip(input: &[u8]) -> Vec<u8> {
    let packed = compress_fast(input);
    let unpacked = decompress(&packed, packed.len(), input.len()).unwrap();
    assert_eq!(unpacked, input);
    packed
}

// ─────────────────────────────────────────────────────────────────────────────
// Degenerate inputs
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn empty_input_is_end_marker_only() {
    let packed = compress_fast(&[]);
    assert_eq!(packed, END_MARKER.to_vec());
    assert_eq!(decompress(&packed, packed.len(), 0).unwrap(), Vec::<u8>::new());
}

#[test]
fn single_byte() {
    assert_eq!(roundtrip(b"x"), vec![18, b'x', 0x11, 0, 0]);
}

#[test]
fn below_threshold_is_literal_even_when_repetitive() {
    let input = vec![b'a'; MIN_COMPRESS_LENGTH - 1];
    let packed = roundtrip(&input);
    assert_eq!(packed.len(), 1 + input.len() + END_MARKER.len());
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trips
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn periodic_eleven_byte_pattern() {
    let input: Vec<u8> = (0..11_000).flat_map(|_| 0u8..=10).collect();
    assert_eq!(input.len(), 121_000);
    let packed = roundtrip(&input);
    assert!(packed.len() < input.len() / 20, "compressed to {} bytes", packed.len());
}

#[test]
fn zero_run_uses_distance_one() {
    let input = vec![0u8; 100_000];
    let packed = roundtrip(&input);
    assert!(packed.len() < 1_000);
}

#[test]
fn text_roundtrip() {
    let input = "The quick brown fox jumps over the lazy dog. ".repeat(500);
    let packed = roundtrip(input.as_bytes());
    assert!(packed.len() < input.len() / 4);
}

#[test]
fn noise_stays_within_bound() {
    for len in [13usize, 100, 4096, 70_000] {
        let input = noise(len, 0x9E37_79B9_7F4A_7C15 ^ len as u64);
        let packed = roundtrip(&input);
        assert!(packed.len() <= compress_bound(len), "len {len}: {} bytes", packed.len());
    }
}

#[test]
fn far_repeat_uses_m4_window() {
    // A block repeated after more than 16 KiB of noise can only be reached
    // through an M4 distance.
    let block = noise(512, 7);
    let mut input = block.clone();
    input.extend(noise(M3_MAX_OFFSET + 1000, 11));
    input.extend_from_slice(&block);
    let packed = roundtrip(&input);
    assert!(packed.len() < input.len());
}

#[test]
fn mixed_noise_and_runs() {
    let mut input = Vec::new();
    for i in 0..50u64 {
        input.extend(noise(37 + i as usize, i));
        input.extend(std::iter::repeat(i as u8).take(20 + i as usize));
    }
    roundtrip(&input);
}

#[test]
fn deterministic() {
    let input = "determinism ".repeat(1000);
    assert_eq!(compress_fast(input.as_bytes()), compress_fast(input.as_bytes()));
}
