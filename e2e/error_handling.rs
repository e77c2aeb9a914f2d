// e2e/error_handling.rs — how the codec reports damaged or mismatched input.
//
// Every failure must be one of the three categories (end-of-input, corrupt
// stream, size mismatch) and must never panic or grow without bound.

use lzo1x::{compress_best, compress_fast, decompress, decompress_into, DecompressError};

fn sample() -> Vec<u8> {
    let mut v = Vec::new();
    for i in 0..400u32 {
        v.extend_from_slice(format!("record {:05} value {} ", i, i * i % 1013).as_bytes());
    }
    v
}

#[test]
fn truncation_is_end_of_input_for_both_compressors() {
    let data = sample();
    for packed in [compress_fast(&data), compress_best(&data)] {
        for cut in (0..packed.len()).step_by(7).chain([packed.len() - 1]) {
            let err = decompress(&packed, cut, data.len()).unwrap_err();
            assert!(err.is_end_of_input(), "cut at {cut}: {err:?}");
            assert_eq!(err.code(), -4);
        }
    }
}

#[test]
fn size_mismatch_is_distinct_from_corruption() {
    let data = sample();
    let packed = compress_fast(&data);
    for wrong in [1, data.len() - 1, data.len() + 1, data.len() * 2] {
        let err = decompress(&packed, packed.len(), wrong).unwrap_err();
        assert_eq!(err, DecompressError::SizeMismatch { expected: wrong, actual: data.len() });
        assert!(!err.is_corrupt());
        assert!(!err.is_end_of_input());
    }
}

#[test]
fn random_garbage_is_rejected_or_bounded() {
    let mut seed = 0xDEAD_BEEFu32;
    for len in 1..300usize {
        let garbage: Vec<u8> = (0..len)
            .map(|_| {
                seed ^= seed << 13;
                seed ^= seed >> 17;
                seed ^= seed << 5;
                seed as u8
            })
            .collect();
        match decompress(&garbage, garbage.len(), 0) {
            Ok(out) => assert!(out.len() <= 256 * garbage.len()),
            Err(e) => assert!(e.is_corrupt() || e.is_end_of_input(), "{e:?}"),
        }
    }
}

#[test]
fn byte_corruption_in_best_stream() {
    let data = sample();
    let packed = compress_best(&data);
    for i in 0..packed.len() {
        let mut bad = packed.clone();
        bad[i] = bad[i].wrapping_add(0x55);
        if let Err(e) = decompress(&bad, bad.len(), 0) {
            assert!(e.is_corrupt() || e.is_end_of_input(), "offset {i}: {e:?}");
        }
    }
}

#[test]
fn match_before_output_start() {
    // One literal, then an M3 copy from 100 bytes back: (100 - 1) << 2 = 0x018c.
    let stream = [18, b'a', 32 | 1, 0x8c, 0x01, 0x11, 0, 0];
    assert_eq!(decompress(&stream, stream.len(), 0), Err(DecompressError::LookbehindOverrun));
    assert_eq!(DecompressError::LookbehindOverrun.code(), -6);
}

#[test]
fn fixed_buffer_too_small() {
    let data = sample();
    let packed = compress_fast(&data);
    let mut dst = vec![0u8; data.len() - 1];
    let err = decompress_into(&packed, &mut dst).unwrap_err();
    assert_eq!(err, DecompressError::OutputOverrun);
    assert_eq!(err.code(), -5);
}
