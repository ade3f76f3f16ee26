//! Read-only display adapters over the catalog service.
//!
//! # Responsibility
//! - Hold a render-ready catalog snapshot per display surface.
//! - Refresh the snapshot through the service load path on every change
//!   tick, never through the raw store.
//!
//! # Invariants
//! - All concurrently attached views converge to identical contents after
//!   any mutation.
//! - A failed refresh keeps the previous snapshot and logs.
//! - Dropping a view unsubscribes it; no handler leaks past its lifetime.

use crate::bus::Subscription;
use crate::catalog::{CatalogResult, CatalogService};
use crate::model::project::Project;
use crate::store::ProjectStore;
use log::warn;
use std::sync::{Arc, Mutex, PoisonError};

/// One display surface's live view of the catalog (grid, carousel, row).
///
/// Rendering itself lives outside this crate; the view only guarantees a
/// current snapshot to render from.
pub struct CatalogView<P: ProjectStore + 'static> {
    snapshot: Arc<Mutex<Vec<Project>>>,
    _subscription: Subscription,
    // Keeps the service alive for the handler even if the caller drops its
    // own handle first.
    _service: Arc<CatalogService<P>>,
}

impl<P: ProjectStore + 'static> CatalogView<P> {
    /// Attaches a view: loads the current catalog once, then tracks change
    /// notifications until the view is dropped.
    pub fn attach(service: Arc<CatalogService<P>>) -> CatalogResult<Self> {
        let snapshot = Arc::new(Mutex::new(service.load_or_seed()?));

        let subscription = service.bus().subscribe({
            let service = Arc::clone(&service);
            let snapshot = Arc::clone(&snapshot);
            move || match service.load_or_seed() {
                Ok(catalog) => {
                    *snapshot.lock().unwrap_or_else(PoisonError::into_inner) = catalog;
                }
                Err(err) => {
                    warn!(
                        "event=view_refresh module=view status=error error_code=reload_failed error={err}"
                    );
                }
            }
        });

        Ok(Self {
            snapshot,
            _subscription: subscription,
            _service: service,
        })
    }

    /// Returns a copy of the current catalog snapshot.
    pub fn snapshot(&self) -> Vec<Project> {
        self.snapshot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
