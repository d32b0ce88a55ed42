use std::collections::BTreeMap;
use std::fmt::Write as _;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use stockledger_core::{StockError, StockResult};

/// Items with stock strictly below this count as low when no threshold is
/// given.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// Mapping from item name to quantity on hand.
///
/// Removal never leaves a zero or negative entry: taking an item's last
/// units deletes the entry entirely, so absence means zero stock. Keys are
/// non-empty after trimming whitespace (enforced at the mutation boundary).
///
/// A sorted map keeps iteration (reports, low-stock scans) and the
/// serialized form deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StockTable {
    stock: BTreeMap<String, i64>,
}

impl StockTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `qty` units of `item`, creating the entry if absent.
    ///
    /// When an audit sink is supplied, one timestamped entry describing the
    /// addition is appended to it. The sink is caller-owned and optional;
    /// no sink means no entry.
    pub fn add(
        &mut self,
        item: &str,
        qty: i64,
        audit: Option<&mut Vec<String>>,
    ) -> StockResult<()> {
        if item.trim().is_empty() {
            return Err(StockError::invalid_value("item name cannot be empty"));
        }
        if qty < 0 {
            return Err(StockError::invalid_value(format!(
                "quantity cannot be negative, got {qty}"
            )));
        }

        *self.stock.entry(item.to_string()).or_insert(0) += qty;

        if let Some(audit) = audit {
            audit.push(format!("{}: Added {qty} of {item}", Utc::now().to_rfc3339()));
        }

        Ok(())
    }

    /// Remove `qty` units of `item`.
    ///
    /// Dropping to zero or below deletes the entry entirely; the table never
    /// stores a zero or negative quantity.
    pub fn remove(&mut self, item: &str, qty: i64) -> StockResult<()> {
        if qty < 0 {
            return Err(StockError::invalid_value(format!(
                "quantity cannot be negative, got {qty}"
            )));
        }
        let Some(current) = self.stock.get_mut(item) else {
            return Err(StockError::not_found(item));
        };

        *current -= qty;
        if *current <= 0 {
            self.stock.remove(item);
        }
        Ok(())
    }

    /// Current quantity of `item`.
    pub fn quantity(&self, item: &str) -> StockResult<i64> {
        self.stock
            .get(item)
            .copied()
            .ok_or_else(|| StockError::not_found(item))
    }

    /// Names of items with stock strictly below `threshold`, in table order.
    pub fn low_stock(&self, threshold: i64) -> Vec<String> {
        self.stock
            .iter()
            .filter(|(_, qty)| **qty < threshold)
            .map(|(item, _)| item.clone())
            .collect()
    }

    /// [`low_stock`](Self::low_stock) at [`DEFAULT_LOW_STOCK_THRESHOLD`].
    pub fn low_stock_default(&self) -> Vec<String> {
        self.low_stock(DEFAULT_LOW_STOCK_THRESHOLD)
    }

    /// Render the items report.
    pub fn report(&self) -> String {
        let mut out = String::from("=== Items Report ===\n");
        if self.stock.is_empty() {
            out.push_str("Inventory is empty\n");
        } else {
            for (item, qty) in &self.stock {
                let _ = writeln!(out, "{item} -> {qty}");
            }
        }
        out.push_str("====================");
        out
    }

    /// Replace the table contents wholesale.
    pub fn replace(&mut self, stock: BTreeMap<String, i64>) {
        self.stock = stock;
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.stock.clear();
    }

    /// Iterate entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.stock.iter().map(|(item, qty)| (item.as_str(), *qty))
    }

    pub fn len(&self) -> usize {
        self.stock.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }
}
