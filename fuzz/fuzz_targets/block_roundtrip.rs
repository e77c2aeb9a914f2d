#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Both compressors must produce streams the decoder reproduces exactly.
    let fast = lzo1x::compress_fast(data);
    assert!(fast.len() <= lzo1x::compress_bound(data.len()));
    let recovered = lzo1x::decompress(&fast, fast.len(), data.len())
        .expect("fast stream failed to decode");
    assert_eq!(recovered, data, "fast round-trip mismatch");

    // Level 9 is slow on large inputs; keep the fuzzer moving.
    if data.len() <= 1 << 16 {
        let best = lzo1x::compress_best(data);
        let recovered = lzo1x::decompress_to_vec(&best).expect("best stream failed to decode");
        assert_eq!(recovered, data, "best round-trip mismatch");
    }
});
