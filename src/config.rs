// config.rs — Compile-time configuration constants.
//
// Runtime overrides (environment variables and command-line flags) are
// resolved by the CLI layer; the library only ever reads these defaults.

// Default compression level of the `lzo` tool.
// 1 selects the fast single-pass compressor; 2..=9 select the high-effort
// compressor at that level.
// Can be overridden by the LZO_CLEVEL environment variable at runtime,
// or by the -# command-line flag.
pub const CLEVEL_DEFAULT: i32 = 1;

// Highest compression level accepted on the command line.
pub const CLEVEL_MAX: i32 = 9;

// Whether files given on the command line may be processed in parallel.
// Enabled by the `multithread` Cargo feature (on by default).
pub const MULTITHREAD: bool = cfg!(feature = "multithread");

// Default number of worker threads (0 = one per logical CPU).
// Can be overridden by the LZO_NBWORKERS environment variable,
// or by the -T# command-line flag.
pub const NB_WORKERS_DEFAULT: usize = 0;

// Maximum number of worker threads selectable at runtime.
pub const NB_WORKERS_MAX: usize = 200;

// Chunk size used when pulling compressed bytes from a reader.
pub const READ_CHUNK_SIZE: usize = 4096;

// Upper bound on the output capacity reserved up front from a declared
// decompressed size.  A hostile header cannot make the decoder allocate more
// than this before any data has actually been produced.
pub const EXPECTED_SIZE_PREALLOC_CAP: usize = 64 << 20;
