// prefs.rs — preferences for the file-level operations.
//
// `Prefs` is a plain value type built by the CLI and passed by reference to
// every file operation; nothing in it is global.

use crate::config::{MULTITHREAD, NB_WORKERS_MAX};

/// Options shared by the file-level compress / decompress operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prefs {
    /// Replace existing destination files.
    pub overwrite: bool,
    /// Declared decompressed size; 0 = unknown (no size check).
    pub expected_size: usize,
    /// Worker threads for multi-file runs; 0 = one per logical CPU.
    pub nb_workers: usize,
}

impl Prefs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_overwrite(&mut self, yes: bool) -> bool {
        self.overwrite = yes;
        self.overwrite
    }

    pub fn set_expected_size(&mut self, size: usize) -> usize {
        self.expected_size = size;
        self.expected_size
    }

    pub fn set_nb_workers(&mut self, nb_workers: usize) -> usize {
        self.nb_workers = nb_workers.min(NB_WORKERS_MAX);
        self.nb_workers
    }

    /// Threads to actually use: the configured count, or the machine's when 0.
    pub fn effective_workers(&self) -> usize {
        if !MULTITHREAD {
            return 1;
        }
        match self.nb_workers {
            0 => default_nb_workers(),
            n => n,
        }
    }
}

/// One worker per logical CPU, capped at [`NB_WORKERS_MAX`].
pub fn default_nb_workers() -> usize {
    num_cpus::get().clamp(1, NB_WORKERS_MAX)
}
