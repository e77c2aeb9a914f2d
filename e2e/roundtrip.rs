// e2e/roundtrip.rs — end-to-end round-trip properties of the codec.
//
// Exercises the public API the way an application would: compress with each
// effort level, decompress with the size known, unknown and declared too
// large as a bound.

use lzo1x::{compress, compress_best, compress_fast, decompress, CompressionLevel};

/// Deterministic pseudo-random bytes.
fn random_bytes(len: usize, mut seed: u32) -> Vec<u8> {
    (0..len)
        .map(|_| {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            (seed >> 16) as u8
        })
        .collect()
}

/// Text with structure on several scales: repeated lines, varying numbers.
fn log_lines(lines: usize) -> Vec<u8> {
    let mut out = String::new();
    for i in 0..lines {
        out.push_str(&format!(
            "2026-01-{:02} 12:{:02}:{:02} INFO worker={} handled request id={} in {}ms\n",
            i % 28 + 1,
            i % 60,
            (i * 7) % 60,
            i % 8,
            10_000 + i * 3,
            i % 97
        ));
    }
    out.into_bytes()
}

fn corpus() -> Vec<(&'static str, Vec<u8>)> {
    vec![
        ("empty", Vec::new()),
        ("one", vec![42]),
        ("period11", (0..11_000).flat_map(|_| 0u8..=10).collect()),
        ("zeros", vec![0; 65_536]),
        ("random", random_bytes(40_000, 1)),
        ("logs", log_lines(2_000)),
        ("halves", {
            let mut v = random_bytes(30_000, 2);
            let copy = v.clone();
            v.extend_from_slice(&copy);
            v
        }),
    ]
}

#[test]
fn all_levels_roundtrip_corpus() {
    let levels = [
        CompressionLevel::Fast,
        CompressionLevel::High(2),
        CompressionLevel::High(5),
        CompressionLevel::High(8),
        CompressionLevel::BEST,
    ];
    for (name, data) in corpus() {
        for level in levels {
            let packed = compress(&data, level);
            let out = decompress(&packed, packed.len(), data.len())
                .unwrap_or_else(|e| panic!("{name} at {level:?}: {e}"));
            assert_eq!(out, data, "{name} at {level:?}");
            // Unknown size and an over-long bound behave the same.
            assert_eq!(decompress(&packed, usize::MAX, 0).unwrap(), data);
        }
    }
}

#[test]
fn empty_input_minimal_stream() {
    assert_eq!(compress_fast(&[]), vec![0x11, 0, 0]);
    assert_eq!(compress_best(&[]), vec![0x11, 0, 0]);
    assert!(decompress(&[0x11, 0, 0], 3, 0).unwrap().is_empty());
}

#[test]
fn best_not_worse_than_fast_on_logs() {
    let data = log_lines(3_000);
    let fast = compress_fast(&data);
    let best = compress_best(&data);
    assert!(best.len() <= fast.len(), "best {} fast {}", best.len(), fast.len());
}

#[test]
fn duplicated_half_is_found() {
    let (_, data) = corpus().pop().unwrap();
    let packed = compress_fast(&data);
    assert!(packed.len() < data.len() * 3 / 4);
}

#[test]
fn concurrent_calls_are_independent() {
    let data = log_lines(500);
    let expected = compress_best(&data);
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4).map(|_| scope.spawn(|| compress_best(&data))).collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
}
