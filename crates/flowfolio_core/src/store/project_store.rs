//! Catalog blob persistence over a slot store.
//!
//! # Responsibility
//! - Serialize the full catalog to one JSON array blob under a fixed key.
//! - Fail soft on corrupt persisted data so callers can fall back to seeds.
//!
//! # Invariants
//! - `load` never raises on a malformed blob; it logs and reports absence.
//! - `save` overwrites the whole blob in one slot write.

use crate::model::project::Project;
use crate::store::{SlotStore, StoreError, StoreResult};
use log::warn;

/// Well-known slot key holding the serialized catalog.
pub const PROJECTS_SLOT_KEY: &str = "projects";

/// Durable read/write of the whole catalog on one device.
pub trait ProjectStore: Send + Sync {
    /// Loads the persisted catalog.
    ///
    /// Returns `Ok(None)` when no catalog was ever saved or when the stored
    /// blob is not a well-formed sequence of records (logged, not raised).
    /// Transport failures are real errors.
    fn load(&self) -> StoreResult<Option<Vec<Project>>>;

    /// Serializes and overwrites the persisted catalog.
    fn save(&self, catalog: &[Project]) -> StoreResult<()>;
}

/// JSON-blob catalog store over any slot backend.
pub struct JsonProjectStore<S: SlotStore> {
    slots: S,
}

impl<S: SlotStore> JsonProjectStore<S> {
    pub fn new(slots: S) -> Self {
        Self { slots }
    }

    /// Borrows the underlying slot backend, e.g. for session-flag storage
    /// sharing the same database handle.
    pub fn slots(&self) -> &S {
        &self.slots
    }
}

impl<S: SlotStore> ProjectStore for JsonProjectStore<S> {
    fn load(&self) -> StoreResult<Option<Vec<Project>>> {
        let Some(blob) = self.slots.read(PROJECTS_SLOT_KEY)? else {
            return Ok(None);
        };

        match serde_json::from_str::<Vec<Project>>(&blob) {
            Ok(catalog) => Ok(Some(catalog)),
            Err(err) => {
                warn!(
                    "event=catalog_load module=store status=recovered error_code=corrupt_blob error={err}"
                );
                Ok(None)
            }
        }
    }

    fn save(&self, catalog: &[Project]) -> StoreResult<()> {
        let blob = serde_json::to_string(catalog).map_err(StoreError::Serialize)?;
        self.slots.write(PROJECTS_SLOT_KEY, &blob)
    }
}
