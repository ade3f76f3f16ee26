//! String-keyed slot persistence over SQLite.
//!
//! # Responsibility
//! - Provide read/write/clear access to one well-known slot table.
//! - Keep SQL details inside the storage boundary.
//!
//! # Invariants
//! - Writes are single upsert statements, atomic from a reader's view.
//! - The connection is serialized behind a mutex so one store handle can be
//!   shared across threads.

use crate::store::StoreResult;
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Device-scoped string-keyed slot storage.
pub trait SlotStore: Send + Sync {
    /// Reads the value stored under `key`, `None` when the slot is empty.
    fn read(&self, key: &str) -> StoreResult<Option<String>>;

    /// Overwrites the value stored under `key`.
    fn write(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Removes the slot under `key`. Clearing an absent slot is a no-op.
    fn clear(&self, key: &str) -> StoreResult<()>;
}

/// SQLite-backed slot store over the `slots` table.
pub struct SqliteSlotStore {
    conn: Mutex<Connection>,
}

impl SqliteSlotStore {
    /// Wraps an opened connection. The connection must have migrations
    /// applied; see `db::open_db`.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn conn(&self) -> MutexGuard<'_, Connection> {
        // A poisoned lock only means another thread panicked mid-statement;
        // the connection itself stays usable.
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SlotStore for SqliteSlotStore {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn()
            .query_row(
                "SELECT value FROM slots WHERE key = ?1;",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write(&self, key: &str, value: &str) -> StoreResult<()> {
        self.conn().execute(
            "INSERT INTO slots (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }

    fn clear(&self, key: &str) -> StoreResult<()> {
        self.conn()
            .execute("DELETE FROM slots WHERE key = ?1;", params![key])?;
        Ok(())
    }
}
