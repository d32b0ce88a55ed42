//! Loosely-typed input boundary.
//!
//! Inputs arriving from untyped sources (deserialized JSON, user-supplied
//! values) are validated here before they reach the typed table, so callers
//! can distinguish "wrong shape" ([`StockError::TypeMismatch`]) from "right
//! shape, bad value" ([`StockError::InvalidValue`]). Internal callers with
//! typed arguments go straight to [`StockTable`].

use serde_json::Value;

use stockledger_core::{StockError, StockResult};

use crate::table::StockTable;

/// Validate a loosely-typed item name. The name must be a JSON string.
pub fn item_name(value: &Value) -> StockResult<&str> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(StockError::type_mismatch(format!(
            "item must be a string, got {}",
            json_kind(other)
        ))),
    }
}

/// Validate a loosely-typed quantity.
///
/// The quantity must be a JSON integer; floats, strings, booleans and null
/// are all shape errors, never value errors.
pub fn quantity(value: &Value) -> StockResult<i64> {
    match value {
        Value::Number(n) => n.as_i64().ok_or_else(|| {
            StockError::type_mismatch(format!("quantity must be an integer, got {n}"))
        }),
        other => Err(StockError::type_mismatch(format!(
            "quantity must be an integer, got {}",
            json_kind(other)
        ))),
    }
}

/// Validated add from untyped input.
///
/// Checks run in a fixed order (item shape, item value, quantity shape,
/// quantity value); the table is not touched on any failure.
pub fn add_from_json(
    table: &mut StockTable,
    item: &Value,
    qty: &Value,
    audit: Option<&mut Vec<String>>,
) -> StockResult<()> {
    let item = item_name(item)?;
    if item.trim().is_empty() {
        return Err(StockError::invalid_value("item name cannot be empty"));
    }
    let qty = quantity(qty)?;
    table.add(item, qty, audit)
}

/// Validated remove from untyped input.
pub fn remove_from_json(table: &mut StockTable, item: &Value, qty: &Value) -> StockResult<()> {
    let item = item_name(item)?;
    let qty = quantity(qty)?;
    table.remove(item, qty)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
