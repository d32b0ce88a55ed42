//! File-backed persistence for the stock table.
//!
//! The codec is deliberately dumb: the whole table is written as one
//! pretty-printed JSON object and read back the same way. No versioning, no
//! schema metadata, no merging.

pub mod file;

pub use file::{DEFAULT_STORE_PATH, StockStore};
