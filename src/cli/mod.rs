//! Command-line interface for the `lzo` binary.
//!
//! | Submodule     | Responsibility |
//! |---------------|---------------|
//! | [`constants`] | Program identity strings and the shared `DISPLAY_LEVEL` atomic with its display macros. |
//! | [`op_mode`]   | `OpMode` enum and environment-based defaults (`LZO_CLEVEL`, `LZO_NBWORKERS`). |
//! | [`args`]      | `clap` definition of the command line and its resolution into `ParsedArgs`. |
//!
//! Typical call sequence: `parse_args` → `ParsedArgs` → dispatch to [`crate::io`].

pub mod args;
pub mod constants;
pub mod op_mode;
