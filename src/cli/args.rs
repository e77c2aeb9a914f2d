//! Command-line parsing for the `lzo` binary.
//!
//! Parsing happens in two steps:
//!
//! 1. [`Cli`] is the raw `clap` view of `argv`.  The `-1` … `-9` level
//!    shortcuts are rewritten to `--level N` by [`expand_level_flags`] first,
//!    since `clap` cannot express numeric short flags with a shared value.
//! 2. [`ParsedArgs::resolve`] folds in the environment defaults
//!    (`LZO_CLEVEL`, `LZO_NBWORKERS`), checks flag combinations and decides
//!    where each input goes.

use std::ffi::OsString;

use anyhow::{bail, Result};
use clap::Parser;

use crate::cli::constants::{DISPLAY_LEVEL_DEFAULT, DISPLAY_LEVEL_MAX};
use crate::cli::op_mode::{init_c_level, init_nb_workers, OpMode};
use crate::config::CLEVEL_MAX;
use crate::hc::CompressionLevel;
use crate::io::{Prefs, STDIN_MARK, STDOUT_MARK};

/// Compress or decompress raw LZO1X streams.
///
/// With no FILE, or when FILE is -, read standard input.  The default action
/// is to decompress.
#[derive(Parser, Debug, Default)]
#[command(name = "lzo", version, about, long_about = None)]
pub struct Cli {
    /// Compress instead of decompress
    #[arg(short = 'z', long)]
    pub compress: bool,

    /// Decompress (the default)
    #[arg(short = 'd', long, conflicts_with = "compress")]
    pub decompress: bool,

    /// Compression level: 1 = fast, 2-9 = increasingly thorough (also -1 .. -9)
    #[arg(short = 'l', long, value_parser = clap::value_parser!(i32).range(1..=CLEVEL_MAX as i64))]
    pub level: Option<i32>,

    /// Fastest compression (same as -1)
    #[arg(long, conflicts_with_all = ["best", "level"])]
    pub fast: bool,

    /// Best compression (same as -9)
    #[arg(long, conflicts_with = "level")]
    pub best: bool,

    /// Write to standard output
    #[arg(short = 'c', long)]
    pub stdout: bool,

    /// Write to FILE (single input only)
    #[arg(short = 'o', long, value_name = "FILE", conflicts_with = "stdout")]
    pub output: Option<String>,

    /// Overwrite existing output files; allow compressed output to a terminal
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Process each input to its own output file (FILE.lzo / FILE without .lzo)
    #[arg(short = 'm', long)]
    pub multiple: bool,

    /// Worker threads for multiple files (0 = one per CPU)
    #[arg(short = 'T', long, value_name = "N")]
    pub threads: Option<usize>,

    /// Expected decompressed size in bytes (checked after decoding)
    #[arg(long, value_name = "N")]
    pub size: Option<usize>,

    /// Less output (repeatable)
    #[arg(short = 'q', long, action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// More output (repeatable)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Input files
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,
}

/// Rewrite `-N` (N in 1..=9) into `--level N`, leaving every other argument
/// untouched.  Arguments after `--` are never rewritten.
pub fn expand_level_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut out = Vec::new();
    let mut literal = false;
    for arg in args {
        if !literal {
            if arg == "--" {
                literal = true;
            } else if let Some(s) = arg.to_str() {
                let b = s.as_bytes();
                if b.len() == 2 && b[0] == b'-' && (b'1'..=b'9').contains(&b[1]) {
                    out.push(OsString::from("--level"));
                    out.push(OsString::from(&s[1..]));
                    continue;
                }
            }
        }
        out.push(arg);
    }
    out
}

/// Where the output of one invocation goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// One named destination (a path or the `stdout` sentinel) for a single input.
    Single(String),
    /// Every input to standard output, in order.
    Concatenated,
    /// Each input to a name derived from it.
    PerFile,
}

/// Fully resolved options.
#[derive(Debug, Clone)]
pub struct ParsedArgs {
    pub op_mode: OpMode,
    pub c_level: i32,
    pub level: CompressionLevel,
    pub inputs: Vec<String>,
    pub destination: Destination,
    pub force: bool,
    pub display_level: u32,
    pub prefs: Prefs,
}

impl ParsedArgs {
    /// Resolve `cli` against the environment defaults.
    pub fn resolve(cli: Cli) -> Result<Self> {
        Self::resolve_with(cli, init_c_level(), init_nb_workers())
    }

    /// [`resolve`](Self::resolve) with explicit environment defaults.
    pub fn resolve_with(cli: Cli, env_level: i32, env_workers: usize) -> Result<Self> {
        let op_mode = if cli.compress { OpMode::Compress } else { OpMode::Decompress };

        let c_level = if cli.fast {
            1
        } else if cli.best {
            CLEVEL_MAX
        } else {
            cli.level.unwrap_or(env_level)
        };

        let inputs: Vec<String> = if cli.files.is_empty() {
            vec![STDIN_MARK.to_owned()]
        } else {
            cli.files
                .iter()
                .map(|f| if f == "-" { STDIN_MARK.to_owned() } else { f.clone() })
                .collect()
        };
        let reads_stdin = inputs.iter().any(|f| f == STDIN_MARK);

        let destination = if cli.stdout {
            if inputs.len() == 1 {
                Destination::Single(STDOUT_MARK.to_owned())
            } else {
                Destination::Concatenated
            }
        } else if let Some(output) = cli.output {
            if inputs.len() > 1 {
                bail!("--output cannot be used with multiple input files");
            }
            Destination::Single(output)
        } else if cli.multiple || inputs.len() > 1 {
            if reads_stdin {
                bail!("cannot derive an output name for standard input; use -c or -o");
            }
            Destination::PerFile
        } else {
            Destination::Single(STDOUT_MARK.to_owned())
        };

        let display_level = (DISPLAY_LEVEL_DEFAULT + cli.verbose as u32)
            .saturating_sub(cli.quiet as u32)
            .min(DISPLAY_LEVEL_MAX);

        let mut prefs = Prefs::new();
        prefs.set_overwrite(cli.force);
        prefs.set_expected_size(cli.size.unwrap_or(0));
        prefs.set_nb_workers(cli.threads.unwrap_or(env_workers));

        Ok(ParsedArgs {
            op_mode,
            c_level,
            level: CompressionLevel::from_cli_level(c_level),
            inputs,
            destination,
            force: cli.force,
            display_level,
            prefs,
        })
    }
}

/// Parse `argv` (including the program name).
pub fn parse_args<I>(argv: I) -> Result<ParsedArgs>
where
    I: IntoIterator<Item = OsString>,
{
    let cli = Cli::try_parse_from(expand_level_flags(argv))?;
    ParsedArgs::resolve(cli)
}
