//! Interoperability with an independent LZO1X implementation.
//!
//! Streams produced here must decode with the `lzokay-native` decoder, and
//! streams produced by its compressor must decode here, byte for byte.  The
//! corpora cover literal-only input, short periods (M1/M2 matches), far
//! repeats (M3/M4 matches) and incompressible noise.

use lzo1x::{compress_best, compress_fast, compress_level, decompress, decompress_reader};

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

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

fn log_lines(n: usize) -> Vec<u8> {
    let mut out = Vec::new();
    for i in 0..n {
        let line = format!(
            "2024-03-{:02} 12:{:02}:{:02} worker[{}] handled request id={} status={}\n",
            1 + i % 28,
            i % 60,
            (i * 7) % 60,
            i % 8,
            i * 31,
            if i % 13 == 0 { 500 } else { 200 }
        );
        out.extend_from_slice(line.as_bytes());
    }
    out
}

/// Noise with a block repeated 20 000 and 40 000 bytes later, beyond the
/// M3 window.
fn far_repeats() -> Vec<u8> {
    let block = noise(3_000, 11);
    let mut out = block.clone();
    out.extend(noise(17_000, 12));
    out.extend_from_slice(&block);
    out.extend(noise(17_000, 13));
    out.extend_from_slice(&block);
    out
}

fn corpora() -> Vec<(&'static str, Vec<u8>)> {
    vec![
        ("one byte", b"Z".to_vec()),
        ("short text", b"LZO1X interop: short text, short text, short text.".to_vec()),
        ("period 11", (0..11_000).flat_map(|_| 0u8..=10).collect()),
        ("zeros", vec![0u8; 70_000]),
        ("logs", log_lines(2_500)),
        ("far repeats", far_repeats()),
        ("noise", noise(50_000, 7)),
    ]
}

fn reference_decode(packed: &[u8], len: usize) -> Vec<u8> {
    lzokay_native::decompress_all(packed, Some(len)).expect("reference decoder rejected stream")
}

// ─────────────────────────────────────────────────────────────────────────────
// 1. Our streams → reference decoder
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn fast_output_decodes_with_reference() {
    for (name, data) in corpora() {
        let packed = compress_fast(&data);
        assert_eq!(reference_decode(&packed, data.len()), data, "{name}");
    }
}

#[test]
fn best_output_decodes_with_reference() {
    for (name, data) in corpora() {
        let packed = compress_best(&data);
        assert_eq!(reference_decode(&packed, data.len()), data, "{name}");
    }
}

#[test]
fn every_level_decodes_with_reference() {
    for (name, data) in corpora() {
        for level in 1..=8 {
            let packed = compress_level(&data, level);
            assert_eq!(reference_decode(&packed, data.len()), data, "{name} level {level}");
        }
    }
}

#[test]
fn empty_stream_decodes_with_reference() {
    let packed = compress_fast(&[]);
    assert_eq!(packed, [0x11, 0, 0]);
    assert!(reference_decode(&packed, 0).is_empty());
}

// ─────────────────────────────────────────────────────────────────────────────
// 2. Reference streams → our decoder
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn reference_output_decodes_here() {
    for (name, data) in corpora() {
        let packed = lzokay_native::compress(&data).expect("reference compressor failed");
        let restored = decompress(&packed, packed.len(), data.len())
            .unwrap_or_else(|e| panic!("{name}: {e}"));
        assert_eq!(restored, data, "{name}");
    }
}

#[test]
fn reference_output_decodes_from_reader() {
    let data = log_lines(1_000);
    let packed = lzokay_native::compress(&data).expect("reference compressor failed");
    let restored = decompress_reader(&packed[..], packed.len(), 0).unwrap();
    assert_eq!(restored, data);
}

#[test]
fn reference_and_best_agree_on_content() {
    // Encodings differ; the decoded bytes must not.
    let data = far_repeats();
    let ours = compress_best(&data);
    let theirs = lzokay_native::compress(&data).expect("reference compressor failed");
    assert_eq!(decompress(&theirs, theirs.len(), 0).unwrap(), data);
    assert_eq!(reference_decode(&ours, data.len()), data);
}
