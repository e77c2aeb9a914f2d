// Integration tests for command-line parsing and resolution.
//
// Coverage:
//   - -N level shortcuts and `--` handling
//   - mode, level and destination resolution
//   - flag conflicts rejected by clap
//   - environment defaults passed through resolve_with

use std::ffi::OsString;

use clap::Parser;
use lzo1x::cli::args::{expand_level_flags, parse_args, Cli, Destination, ParsedArgs};
use lzo1x::cli::op_mode::OpMode;
use lzo1x::hc::CompressionLevel;
use lzo1x::io::{STDIN_MARK, STDOUT_MARK};

fn os(args: &[&str]) -> Vec<OsString> {
    args.iter().map(OsString::from).collect()
}

fn resolve(args: &[&str]) -> anyhow::Result<ParsedArgs> {
    let cli = Cli::try_parse_from(expand_level_flags(os(args)))?;
    ParsedArgs::resolve_with(cli, 1, 0)
}

#[test]
fn shortcuts_only_rewrite_single_digits() {
    assert_eq!(
        expand_level_flags(os(&["lzo", "-5", "-10", "-z"])),
        os(&["lzo", "--level", "5", "-10", "-z"])
    );
}

#[test]
fn compress_to_named_output() {
    let args = resolve(&["lzo", "-z", "-7", "-o", "out.lzo", "in.txt"]).unwrap();
    assert_eq!(args.op_mode, OpMode::Compress);
    assert_eq!(args.c_level, 7);
    assert_eq!(args.level, CompressionLevel::High(7));
    assert_eq!(args.inputs, vec!["in.txt".to_owned()]);
    assert_eq!(args.destination, Destination::Single("out.lzo".to_owned()));
}

#[test]
fn dash_means_stdin() {
    let args = resolve(&["lzo", "-d", "-"]).unwrap();
    assert_eq!(args.inputs, vec![STDIN_MARK.to_owned()]);
    assert_eq!(args.destination, Destination::Single(STDOUT_MARK.to_owned()));
}

#[test]
fn level_one_is_fast() {
    assert_eq!(resolve(&["lzo", "-z", "-1"]).unwrap().level, CompressionLevel::Fast);
    assert_eq!(resolve(&["lzo", "-z"]).unwrap().level, CompressionLevel::Fast);
}

#[test]
fn multiple_flag_with_one_file() {
    let args = resolve(&["lzo", "-m", "a.lzo"]).unwrap();
    assert_eq!(args.destination, Destination::PerFile);
}

#[test]
fn per_file_mode_rejects_stdin() {
    assert!(resolve(&["lzo", "-m"]).is_err());
    assert!(resolve(&["lzo", "a.lzo", "-"]).is_err());
}

#[test]
fn conflicting_flags() {
    assert!(resolve(&["lzo", "-z", "-d"]).is_err());
    assert!(resolve(&["lzo", "-c", "-o", "x"]).is_err());
    assert!(resolve(&["lzo", "--fast", "--best"]).is_err());
    assert!(resolve(&["lzo", "--level", "0"]).is_err());
}

#[test]
fn size_and_force_reach_prefs() {
    let args = resolve(&["lzo", "-f", "--size", "1234", "x.lzo"]).unwrap();
    assert!(args.force);
    assert!(args.prefs.overwrite);
    assert_eq!(args.prefs.expected_size, 1234);
}

#[test]
fn help_is_a_clap_error() {
    let err = parse_args(os(&["lzo", "--help"])).unwrap_err();
    let clap_err = err.downcast_ref::<clap::Error>().unwrap();
    assert!(!clap_err.use_stderr());
}
