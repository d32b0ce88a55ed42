//! `stockledger-core` — shared foundation for the stockledger crates.
//!
//! This crate contains the error taxonomy only (no IO, no storage concerns).

pub mod error;

pub use error::{StockError, StockResult};
