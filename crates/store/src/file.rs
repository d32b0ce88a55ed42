use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use stockledger_core::{StockError, StockResult};
use stockledger_inventory::StockTable;

/// Default location of the persisted table, relative to the working
/// directory.
pub const DEFAULT_STORE_PATH: &str = "inventory.json";

/// JSON file codec for a [`StockTable`].
///
/// `save` writes the whole table as pretty-printed JSON with a 2-space
/// indent; combined with the table's sorted iteration this makes repeated
/// saves of identical data byte-identical. `load` replaces the table
/// wholesale with the file's contents.
#[derive(Debug, Clone)]
pub struct StockStore {
    path: PathBuf,
}

impl StockStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize the table to the store path.
    ///
    /// The in-memory table is never mutated; a failed write surfaces as
    /// [`StockError::Io`] carrying the path and cause.
    pub fn save(&self, table: &StockTable) -> StockResult<()> {
        let payload = serde_json::to_string_pretty(table)
            .map_err(|e| StockError::io(format!("failed to serialize stock table: {e}")))?;

        fs::write(&self.path, payload).map_err(|e| {
            tracing::error!(path = %self.path.display(), error = %e, "failed to save inventory");
            StockError::io(format!("failed to write '{}': {e}", self.path.display()))
        })
    }

    /// Replace the table with the file's contents.
    ///
    /// A missing file is tolerated: the table is reset to empty and the call
    /// succeeds. Malformed JSON fails with [`StockError::Parse`] and leaves
    /// the prior table state fully intact.
    pub fn load(&self, table: &mut StockTable) -> StockResult<()> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(
                    path = %self.path.display(),
                    "inventory file not found, starting with empty inventory"
                );
                table.clear();
                return Ok(());
            }
            Err(e) => {
                tracing::error!(path = %self.path.display(), error = %e, "failed to read inventory");
                return Err(StockError::io(format!(
                    "failed to read '{}': {e}",
                    self.path.display()
                )));
            }
        };

        // Deserialize fully before committing, so a malformed file cannot
        // leave the table partially overwritten.
        let loaded: BTreeMap<String, i64> = serde_json::from_str(&raw).map_err(|e| {
            tracing::error!(path = %self.path.display(), error = %e, "invalid JSON in inventory file");
            StockError::parse(format!("invalid JSON in '{}': {e}", self.path.display()))
        })?;

        table.replace(loaded);
        Ok(())
    }
}

impl Default for StockStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_PATH)
    }
}
