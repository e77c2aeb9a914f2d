//! File-level decompression.
//!
//! The whole source is read into memory and its length is the decode bound.
//! Pipes and FIFOs report no size up front, so nothing is taken from file
//! metadata.

use std::io::{self, Write};

use crate::block::{decompress, DecompressError};
use crate::cli::constants::LZO_EXTENSION;
use crate::cli::op_mode::{determine_op_mode, OpMode};
use crate::displaylevel;
use crate::io::file_io::{open_dst_file, read_src_file};
use crate::io::multiple::{for_each_file, FileStats};
use crate::io::prefs::Prefs;

fn invalid_data(e: DecompressError) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, e)
}

/// Destination name for decompressing `src` in multi-file mode: `src`
/// without its `.lzo` suffix.
pub fn decompressed_name(src: &str) -> io::Result<String> {
    match determine_op_mode(src) {
        OpMode::Decompress if src.len() > LZO_EXTENSION.len() => {
            Ok(src[..src.len() - LZO_EXTENSION.len()].to_owned())
        }
        _ => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{}: unknown suffix ({} expected)", src, LZO_EXTENSION),
        )),
    }
}

/// Decode one stream from `src`.
fn decode_src(src: &str, prefs: &Prefs) -> io::Result<(u64, Vec<u8>)> {
    let input = read_src_file(src)?;
    let output = decompress(&input, input.len(), prefs.expected_size).map_err(invalid_data)?;
    Ok((input.len() as u64, output))
}

/// Decompress `src` into `dst` (either may be a `stdin` / `stdout` sentinel).
///
/// Nothing is written to `dst` unless the whole stream decodes.
pub fn decompress_filename(src: &str, dst: &str, prefs: &Prefs) -> io::Result<FileStats> {
    let (bytes_in, output) = decode_src(src, prefs)?;

    let mut out = open_dst_file(dst, prefs)?;
    out.write_all(&output)?;
    out.flush()?;

    let stats = FileStats { bytes_in, bytes_out: output.len() as u64 };
    displaylevel!(2, "{:<20} : decoded {} bytes\n", src, stats.bytes_out);
    Ok(stats)
}

/// Decompress every `.lzo` file in `srcs` next to itself, in parallel.
///
/// Returns the number of files that could not be decompressed.
pub fn decompress_multiple_filenames(srcs: &[String], prefs: &Prefs) -> io::Result<usize> {
    for_each_file(srcs, prefs, |src| decompress_filename(src, &decompressed_name(src)?, prefs))
}
