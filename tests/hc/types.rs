// Integration tests for the level table and its derived knobs.

use lzo1x::hc::types::LEVEL_TABLE;
use lzo1x::hc::{get_level_params, CParams, HC_CLEVEL_DEFAULT, HC_CLEVEL_MAX};

#[test]
fn table_rows() {
    assert_eq!(
        get_level_params(1),
        CParams { try_lazy: 0, good_length: 0, max_lazy: 0, nice_length: 8, max_chain: 4 }
    );
    assert_eq!(
        get_level_params(5),
        CParams { try_lazy: 1, good_length: 8, max_lazy: 16, nice_length: 32, max_chain: 32 }
    );
    assert_eq!(
        get_level_params(9),
        CParams { try_lazy: 2, good_length: 2048, max_lazy: 2048, nice_length: 2048, max_chain: 4096 }
    );
}

#[test]
fn effort_grows_with_level() {
    for level in 2..=HC_CLEVEL_MAX as usize {
        assert!(LEVEL_TABLE[level].max_chain >= LEVEL_TABLE[level - 1].max_chain);
    }
}

#[test]
fn out_of_range_levels() {
    assert_eq!(get_level_params(0), get_level_params(HC_CLEVEL_DEFAULT));
    assert_eq!(get_level_params(100), get_level_params(HC_CLEVEL_MAX));
}

#[test]
fn lazy_knobs() {
    let p = get_level_params(8);
    assert_eq!(p.lazy_chain(10), 2048);
    assert_eq!(p.lazy_chain(32), 512);
    assert!(!p.skips_lazy(127));
    assert!(p.skips_lazy(128));
    assert!(get_level_params(3).skips_lazy(0));
}
