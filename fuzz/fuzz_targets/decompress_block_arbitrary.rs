#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes: errors are expected, panics are not.
    let _ = lzo1x::decompress_to_vec(data);

    // Fixed-capacity destinations exercise the output-overrun path.
    for cap in [0usize, 16, 4096] {
        let mut dst = vec![0u8; cap];
        let _ = lzo1x::decompress_into(data, &mut dst);
    }

    // Streaming source with a bound shorter than the input.
    let bound = data.len() / 2;
    let _ = lzo1x::decompress_reader(data, bound, 0);
});
