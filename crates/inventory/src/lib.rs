//! Inventory domain: the stock table and its validated operations.
//!
//! This crate contains pure in-memory logic (no IO); persistence lives in
//! `stockledger-store`.

pub mod boundary;
pub mod table;

pub use table::{DEFAULT_LOW_STOCK_THRESHOLD, StockTable};
