//! Operation mode selection and startup defaults for the CLI.
//!
//! This module provides:
//! - [`OpMode`] — compress or decompress.
//! - [`determine_op_mode`] — the mode a filename suggests by its extension.
//! - [`init_nb_workers`] / [`init_c_level`] — read per-process defaults from
//!   `LZO_NBWORKERS` / `LZO_CLEVEL`.

use crate::cli::constants::{display_level, LZO_EXTENSION};
use crate::config::{CLEVEL_DEFAULT, NB_WORKERS_DEFAULT};

pub const ENV_CLEVEL: &str = "LZO_CLEVEL";
pub const ENV_NBWORKERS: &str = "LZO_NBWORKERS";

/// What the CLI should do with its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpMode {
    /// Compress raw input into an LZO1X stream.
    Compress,
    /// Decompress an LZO1X stream (the default).
    #[default]
    Decompress,
}

/// Mode suggested by `filename`: [`OpMode::Decompress`] for `.lzo` files,
/// [`OpMode::Compress`] otherwise.
pub fn determine_op_mode(filename: &str) -> OpMode {
    if filename.ends_with(LZO_EXTENSION) {
        OpMode::Decompress
    } else {
        OpMode::Compress
    }
}

/// Parse the leading decimal digits of `s`.
///
/// Returns `None` when `s` does not start with a digit or the value does not
/// fit in a `u32`.
pub fn read_u32_prefix(s: &str) -> Option<u32> {
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    s[..digits].parse().ok()
}

/// Read the number of worker threads from `LZO_NBWORKERS`.
pub fn init_nb_workers() -> usize {
    init_nb_workers_from(std::env::var(ENV_NBWORKERS).ok().as_deref())
}

/// Testable core of [`init_nb_workers`]: parse an optional `LZO_NBWORKERS` value.
pub fn init_nb_workers_from(env_val: Option<&str>) -> usize {
    if let Some(env) = env_val {
        if let Some(val) = read_u32_prefix(env) {
            return val as usize;
        }
        if display_level() >= 2 {
            eprintln!(
                "Ignore environment variable setting {}={}: not a valid unsigned value ",
                ENV_NBWORKERS, env
            );
        }
    }
    NB_WORKERS_DEFAULT
}

/// Read the default compression level from `LZO_CLEVEL`.
pub fn init_c_level() -> i32 {
    init_c_level_from(std::env::var(ENV_CLEVEL).ok().as_deref())
}

/// Testable core of [`init_c_level`]: parse an optional `LZO_CLEVEL` value.
pub fn init_c_level_from(env_val: Option<&str>) -> i32 {
    if let Some(env) = env_val {
        if let Some(val) = read_u32_prefix(env) {
            return val.min(i32::MAX as u32) as i32;
        }
        if display_level() >= 2 {
            eprintln!(
                "Ignore environment variable setting {}={}: not a valid unsigned value ",
                ENV_CLEVEL, env
            );
        }
    }
    CLEVEL_DEFAULT
}
