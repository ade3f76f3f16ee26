//! Persistent slot storage for the catalog blob and session flags.
//!
//! # Responsibility
//! - Define the string-keyed slot contract backing all durable state.
//! - Persist the whole catalog as one JSON array blob under a fixed key.
//!
//! # Invariants
//! - A slot write is a single upsert; readers never observe a partial blob.
//! - A corrupt catalog blob is recovered by loading as absent, never raised.
//! - Saving a catalog notifies nobody; notification belongs to the catalog
//!   service.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod project_store;
mod slot_store;

pub use project_store::{JsonProjectStore, ProjectStore, PROJECTS_SLOT_KEY};
pub use slot_store::{SlotStore, SqliteSlotStore};

pub type StoreResult<T> = Result<T, StoreError>;

/// Transport-level storage error. Corrupt persisted data is not represented
/// here: it degrades to an absent catalog on load.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize catalog: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
