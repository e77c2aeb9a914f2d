//! Binary entry point for the `lzo` command-line tool.
//!
//! # Control flow
//!
//! 1. [`parse_args`] turns `argv` into a [`ParsedArgs`] value.
//! 2. [`run`] dispatches to the file-level operations in `lzo1x::io`.
//! 3. Any error is printed as `lzo: <error>` and the process exits with 1.

use std::io::IsTerminal;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};

use lzo1x::cli::args::{parse_args, Destination, ParsedArgs};
use lzo1x::cli::constants::{set_display_level, COMPRESSOR_NAME, IO_MT};
use lzo1x::cli::op_mode::OpMode;
use lzo1x::config::MULTITHREAD;
use lzo1x::io::{
    compress_filename, compress_multiple_filenames, decompress_filename,
    decompress_multiple_filenames, STDOUT_MARK,
};

/// Execute the operation selected by argument parsing.
fn run(args: ParsedArgs) -> Result<()> {
    set_display_level(args.display_level);

    lzo1x::displaylevel!(
        3,
        "*** {} v{} {}-bit {} ***\n",
        COMPRESSOR_NAME,
        lzo1x::LZO1X_VERSION_STRING,
        std::mem::size_of::<*const ()>() * 8,
        IO_MT
    );
    if !MULTITHREAD && args.prefs.nb_workers > 1 {
        lzo1x::displaylevel!(2, "warning: this executable doesn't support multithreading \n");
    }

    // Refuse to write compressed data to a console.
    let to_stdout = matches!(
        &args.destination,
        Destination::Single(d) if d == STDOUT_MARK
    ) || args.destination == Destination::Concatenated;
    if args.op_mode == OpMode::Compress && to_stdout && !args.force && std::io::stdout().is_terminal()
    {
        bail!("refusing to write compressed data to a terminal (use -f to force)");
    }
    // Per-file summaries would interleave with piped data; keep them for -v.
    if to_stdout && args.display_level == 2 {
        set_display_level(1);
    }

    let prefs = &args.prefs;
    match (args.op_mode, &args.destination) {
        (OpMode::Compress, Destination::Single(dst)) => {
            let src = &args.inputs[0];
            compress_filename(src, dst, args.level, prefs)
                .with_context(|| src.clone())?;
        }
        (OpMode::Decompress, Destination::Single(dst)) => {
            let src = &args.inputs[0];
            decompress_filename(src, dst, prefs).with_context(|| src.clone())?;
        }
        (op, Destination::Concatenated) => {
            for src in &args.inputs {
                match op {
                    OpMode::Compress => compress_filename(src, STDOUT_MARK, args.level, prefs),
                    OpMode::Decompress => decompress_filename(src, STDOUT_MARK, prefs),
                }
                .with_context(|| src.clone())?;
            }
        }
        (op, Destination::PerFile) => {
            let missed = match op {
                OpMode::Compress => compress_multiple_filenames(&args.inputs, args.level, prefs)?,
                OpMode::Decompress => decompress_multiple_filenames(&args.inputs, prefs)?,
            };
            if missed > 0 {
                bail!("{} of {} files failed", missed, args.inputs.len());
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let result = parse_args(std::env::args_os()).and_then(run);
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Help and version requests arrive as clap errors with a zero exit code.
            if let Some(clap_err) = e.downcast_ref::<clap::Error>() {
                if let Err(io_err) = clap_err.print() {
                    eprintln!("{}: {}", COMPRESSOR_NAME, io_err);
                    return ExitCode::FAILURE;
                }
                return if clap_err.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS };
            }
            eprintln!("{}: {:#}", COMPRESSOR_NAME, e);
            ExitCode::FAILURE
        }
    }
}
