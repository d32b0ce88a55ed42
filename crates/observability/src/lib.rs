//! Tracing/logging setup shared by embedding applications and test
//! harnesses.

pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, formatting).
pub mod tracing;
