//! High-effort LZO1X compression (levels 1–9, `lzo1x_999` family).

pub mod api;
pub mod compress_hc;
pub mod dispatch;
pub mod search;
pub mod types;

// Re-export key public API items at the module level.
pub use api::{compress_best, compress_level, compress_with_params};
pub use dispatch::{compress, CompressionLevel};
pub use types::{get_level_params, CParams, HC_CLEVEL_DEFAULT, HC_CLEVEL_MAX, HC_CLEVEL_MIN};
