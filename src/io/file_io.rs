//! Source and destination handling for the file-level operations.
//!
//! Paths are plain strings so the `stdin` / `stdout` sentinels can flow
//! through the same code as real file names.  Opening a destination enforces
//! the overwrite policy from [`Prefs`]; there is no interactive prompt.

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::displaylevel;
use crate::io::prefs::Prefs;

/// Sentinel meaning "read from standard input".
pub const STDIN_MARK: &str = "stdin";
/// Sentinel meaning "write to standard output".
pub const STDOUT_MARK: &str = "stdout";
/// Destination that discards everything.
#[cfg(windows)]
pub const NUL_MARK: &str = "nul";
#[cfg(not(windows))]
pub const NUL_MARK: &str = "/dev/null";

#[inline]
pub fn is_stdin(path: &str) -> bool {
    path == STDIN_MARK
}

#[inline]
pub fn is_stdout(path: &str) -> bool {
    path == STDOUT_MARK
}

fn is_directory(path: &Path) -> bool {
    path.metadata().map(|m| m.is_dir()).unwrap_or(false)
}

// ---------------------------------------------------------------------------
// Source
// ---------------------------------------------------------------------------

/// An opened input together with its length when known up front.
pub struct SrcFile {
    pub reader: Box<dyn Read>,
    /// File size for regular files; `None` for stdin.
    pub len: Option<u64>,
}

/// Open `path` for reading.
///
/// `"stdin"` yields standard input; a directory is rejected with
/// [`io::ErrorKind::InvalidInput`].
pub fn open_src_file(path: &str) -> io::Result<SrcFile> {
    if is_stdin(path) {
        displaylevel!(4, "Using stdin for input\n");
        return Ok(SrcFile { reader: Box::new(io::stdin().lock()), len: None });
    }
    if is_directory(Path::new(path)) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{}: is a directory", path),
        ));
    }
    let f = File::open(path)?;
    let len = f.metadata()?.len();
    Ok(SrcFile { reader: Box::new(BufReader::new(f)), len: Some(len) })
}

/// Read all of `path` into memory.
pub fn read_src_file(path: &str) -> io::Result<Vec<u8>> {
    let mut src = open_src_file(path)?;
    let mut buf = Vec::with_capacity(src.len.unwrap_or(0) as usize);
    src.reader.read_to_end(&mut buf)?;
    Ok(buf)
}

// ---------------------------------------------------------------------------
// Destination
// ---------------------------------------------------------------------------

/// A write-capable destination produced by [`open_dst_file`].
pub struct DstFile {
    inner: Box<dyn Write>,
}

impl Write for DstFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }
    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Open `path` for writing.
///
/// `"stdout"` yields standard output and [`NUL_MARK`] a discarding sink.  A
/// regular path that already exists is refused with
/// [`io::ErrorKind::AlreadyExists`] unless `prefs.overwrite` is set.
pub fn open_dst_file(path: &str, prefs: &Prefs) -> io::Result<DstFile> {
    if is_stdout(path) {
        displaylevel!(4, "Using stdout for output\n");
        return Ok(DstFile { inner: Box::new(io::stdout().lock()) });
    }
    if path == NUL_MARK {
        return Ok(DstFile { inner: Box::new(io::sink()) });
    }
    if !prefs.overwrite && Path::new(path).exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{}: already exists; not overwritten (use -f to force)", path),
        ));
    }
    let f = OpenOptions::new().write(true).create(true).truncate(true).open(path)?;
    Ok(DstFile { inner: Box::new(BufWriter::new(f)) })
}
