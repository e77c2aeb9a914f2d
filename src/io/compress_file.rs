//! File-level compression.

use std::io::{self, Write};

use crate::cli::constants::LZO_EXTENSION;
use crate::displaylevel;
use crate::hc::{compress, CompressionLevel};
use crate::io::file_io::{open_dst_file, read_src_file};
use crate::io::multiple::{for_each_file, FileStats};
use crate::io::prefs::Prefs;

/// Destination name for compressing `src` in multi-file mode.
pub fn compressed_name(src: &str) -> String {
    format!("{}{}", src, LZO_EXTENSION)
}

/// Compress `src` into `dst` (either may be a `stdin` / `stdout` sentinel).
///
/// The whole input is read into memory: an LZO1X stream is a single block
/// with no framing.
pub fn compress_filename(
    src: &str,
    dst: &str,
    level: CompressionLevel,
    prefs: &Prefs,
) -> io::Result<FileStats> {
    let input = read_src_file(src)?;
    let output = compress(&input, level);

    let mut out = open_dst_file(dst, prefs)?;
    out.write_all(&output)?;
    out.flush()?;

    let stats = FileStats { bytes_in: input.len() as u64, bytes_out: output.len() as u64 };
    displaylevel!(
        2,
        "{:<20} : compressed {} bytes into {} bytes ==> {:.2}%\n",
        src,
        stats.bytes_in,
        stats.bytes_out,
        stats.ratio_percent()
    );
    Ok(stats)
}

/// Compress every file in `srcs` to `<name>.lzo`, in parallel.
///
/// Returns the number of files that could not be compressed.
pub fn compress_multiple_filenames(
    srcs: &[String],
    level: CompressionLevel,
    prefs: &Prefs,
) -> io::Result<usize> {
    for_each_file(srcs, prefs, |src| compress_filename(src, &compressed_name(src), level, prefs))
}
