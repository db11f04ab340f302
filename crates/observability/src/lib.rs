//! Tracing/logging setup shared by the catalog binaries.

/// Initialize process-wide observability (tracing/logging).
///
/// Reads `RUST_LOG` and `SIMPLX_LOG_FORMAT`; safe to call multiple times.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use crate::tracing::LogFormat;
