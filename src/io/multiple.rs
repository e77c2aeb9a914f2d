//! Running one file operation over many inputs on a `rayon` pool.

use std::io;

use rayon::prelude::*;

use crate::displaylevel;
use crate::io::prefs::Prefs;

/// Sizes reported by a single-file operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileStats {
    pub bytes_in: u64,
    pub bytes_out: u64,
}

impl FileStats {
    /// `bytes_out` as a percentage of `bytes_in` (100 for empty input).
    pub fn ratio_percent(&self) -> f64 {
        if self.bytes_in == 0 {
            100.0
        } else {
            self.bytes_out as f64 / self.bytes_in as f64 * 100.0
        }
    }
}

impl std::ops::AddAssign for FileStats {
    fn add_assign(&mut self, rhs: Self) {
        self.bytes_in += rhs.bytes_in;
        self.bytes_out += rhs.bytes_out;
    }
}

/// Apply `op` to every source on a pool of `prefs.effective_workers()`
/// threads.
///
/// Failures are reported per file at display level 1 and counted; the
/// return value is the number of files that could not be processed.
pub fn for_each_file<F>(srcs: &[String], prefs: &Prefs, op: F) -> io::Result<usize>
where
    F: Fn(&str) -> io::Result<FileStats> + Sync,
{
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(prefs.effective_workers())
        .build()
        .map_err(io::Error::other)?;

    let results: Vec<io::Result<FileStats>> =
        pool.install(|| srcs.par_iter().map(|src| op(src)).collect());

    let mut missed = 0usize;
    let mut total = FileStats::default();
    for (src, result) in srcs.iter().zip(results) {
        match result {
            Ok(stats) => total += stats,
            Err(e) => {
                displaylevel!(1, "lzo: {}: {}\n", src, e);
                missed += 1;
            }
        }
    }
    if srcs.len() > 1 {
        displaylevel!(
            2,
            "{} files : {} bytes -> {} bytes ({:.2}%)\n",
            srcs.len() - missed,
            total.bytes_in,
            total.bytes_out,
            total.ratio_percent()
        );
    }
    Ok(missed)
}
