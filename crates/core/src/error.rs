//! Stock error model.

use thiserror::Error;

/// Result type used across the stockledger crates.
pub type StockResult<T> = Result<T, StockError>;

/// Failure taxonomy shared by table operations and the persistence codec.
///
/// Keep this focused on deterministic, caller-visible failures (bad input,
/// missing items, codec faults). Conditions treated as recoverable are
/// absorbed at the point of detection and never surface here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StockError {
    /// An argument's shape does not match the contract (e.g. a quantity
    /// that is not an integer at the dynamic input boundary).
    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    /// An argument has the right shape but an invalid value (blank item
    /// name, negative quantity).
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// An operation referenced an item absent from the table.
    #[error("item '{0}' not found in inventory")]
    NotFound(String),

    /// The persisted file could not be read or written.
    #[error("io failure: {0}")]
    Io(String),

    /// The persisted file's contents could not be deserialized.
    #[error("parse failure: {0}")]
    Parse(String),
}

impl StockError {
    pub fn type_mismatch(msg: impl Into<String>) -> Self {
        Self::TypeMismatch(msg.into())
    }

    pub fn invalid_value(msg: impl Into<String>) -> Self {
        Self::InvalidValue(msg.into())
    }

    pub fn not_found(item: impl Into<String>) -> Self {
        Self::NotFound(item.into())
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
