//! Cross-connection change detection via SQLite `data_version`.
//!
//! # Responsibility
//! - Observe commits made by other connections to the same database file.
//! - Republish them as regular change ticks on the shared bus.
//!
//! # Invariants
//! - The watcher uses its own polling connection and never writes.
//! - `PRAGMA data_version` moves on commits made by any other connection,
//!   including this process's own service connection, so an in-process
//!   mutation can surface twice on the bus (at-least-once delivery).
//! - Stopping the watcher joins the polling thread.

use crate::bus::ChangeBus;
use crate::db::{open_db, DbResult};
use log::{info, warn};
use rusqlite::Connection;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Polls one database file and publishes a change tick whenever another
/// connection committed to it.
pub struct StorageWatcher {
    stop: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl StorageWatcher {
    /// Starts watching `path` with the given poll interval.
    ///
    /// # Errors
    /// - Fails when the polling connection cannot be opened.
    pub fn spawn(
        path: impl AsRef<Path>,
        bus: Arc<ChangeBus>,
        poll_interval: Duration,
    ) -> DbResult<Self> {
        let conn = open_db(path)?;
        // Baseline before returning, so commits landing right after spawn
        // are never missed.
        let baseline = data_version(&conn)?;
        let stop = Arc::new(AtomicBool::new(false));

        let thread = thread::spawn({
            let stop = Arc::clone(&stop);
            move || watch_loop(&conn, &bus, baseline, poll_interval, &stop)
        });

        info!("event=watch_start module=bus status=ok poll_interval_ms={}", poll_interval.as_millis());
        Ok(Self {
            stop,
            thread: Some(thread),
        })
    }
}

impl Drop for StorageWatcher {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

fn watch_loop(
    conn: &Connection,
    bus: &ChangeBus,
    baseline: i64,
    poll_interval: Duration,
    stop: &AtomicBool,
) {
    let mut last_seen = baseline;

    while !stop.load(Ordering::Relaxed) {
        thread::sleep(poll_interval);
        if stop.load(Ordering::Relaxed) {
            break;
        }

        match data_version(conn) {
            Ok(version) if version != last_seen => {
                last_seen = version;
                bus.publish();
            }
            Ok(_) => {}
            Err(err) => {
                warn!("event=watch_poll module=bus status=error error_code=data_version_failed error={err}");
            }
        }
    }
}

fn data_version(conn: &Connection) -> rusqlite::Result<i64> {
    conn.query_row("PRAGMA data_version;", [], |row| row.get(0))
}
