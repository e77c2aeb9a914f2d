// Integration tests for mode detection and environment defaults.

use lzo1x::cli::op_mode::{
    determine_op_mode, init_c_level_from, init_nb_workers_from, read_u32_prefix, OpMode,
};
use lzo1x::config::{CLEVEL_DEFAULT, NB_WORKERS_DEFAULT};

#[test]
fn mode_from_extension() {
    assert_eq!(determine_op_mode("x.tar.lzo"), OpMode::Decompress);
    assert_eq!(determine_op_mode("x.lzo.bak"), OpMode::Compress);
}

#[test]
fn prefix_parsing() {
    assert_eq!(read_u32_prefix("0"), Some(0));
    assert_eq!(read_u32_prefix("4294967295"), Some(u32::MAX));
    assert_eq!(read_u32_prefix("4294967296"), None);
    assert_eq!(read_u32_prefix(""), None);
    assert_eq!(read_u32_prefix("-1"), None);
}

#[test]
fn env_defaults() {
    assert_eq!(init_c_level_from(Some("6")), 6);
    assert_eq!(init_c_level_from(Some("fast")), CLEVEL_DEFAULT);
    assert_eq!(init_c_level_from(None), CLEVEL_DEFAULT);
    assert_eq!(init_nb_workers_from(Some("12threads")), 12);
    assert_eq!(init_nb_workers_from(Some("")), NB_WORKERS_DEFAULT);
}
