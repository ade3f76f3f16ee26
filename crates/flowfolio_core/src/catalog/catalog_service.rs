//! Catalog use-case service.
//!
//! # Responsibility
//! - Provide the reconciling load/create/update/delete API consumed by the
//!   admin surface and every display view.
//! - Seed the store from the built-in catalog on first real access.
//!
//! # Invariants
//! - Every successful mutation runs read-modify-persist-publish to
//!   completion before the next mutation starts (single writer per process).
//! - Seeding is a plain save without notification; it precedes subscribers.
//! - Cross-context writers are not serialized: the last save wins and the
//!   earlier change is silently overwritten (accepted limitation).

use crate::bus::ChangeBus;
use crate::catalog::seed::seed_catalog;
use crate::model::project::{Project, ProjectDraft, ProjectId};
use crate::store::{ProjectStore, StoreError};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, Mutex, PoisonError};

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog operation error.
///
/// Corrupt persisted data never appears here; the load path recovers it by
/// falling back to the seed catalog.
#[derive(Debug)]
pub enum CatalogError {
    /// `update` targeted an id no live record carries. `delete` treats the
    /// same situation as a no-op success instead.
    NotFound(ProjectId),
    /// Persistence-layer failure.
    Store(StoreError),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "project not found: {id}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for CatalogError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Event-synchronized CRUD service over the persisted catalog.
///
/// Constructed explicitly with injected store and bus handles; owned by the
/// application's composition root for the process lifetime (or per test).
pub struct CatalogService<P: ProjectStore> {
    store: P,
    bus: Arc<ChangeBus>,
    write_lock: Mutex<()>,
}

impl<P: ProjectStore> CatalogService<P> {
    pub fn new(store: P, bus: Arc<ChangeBus>) -> Self {
        Self {
            store,
            bus,
            write_lock: Mutex::new(()),
        }
    }

    /// The bus this service publishes on; views subscribe here.
    pub fn bus(&self) -> &Arc<ChangeBus> {
        &self.bus
    }

    /// Returns the persisted catalog, seeding the store first when nothing
    /// usable is persisted.
    ///
    /// # Contract
    /// - A present, non-empty catalog is returned as stored.
    /// - An absent, corrupt, or empty catalog is replaced by the built-in
    ///   seed, which is saved and returned. No notification is published.
    /// - Idempotent: a second call returns the same data without re-seeding.
    pub fn load_or_seed(&self) -> CatalogResult<Vec<Project>> {
        if let Some(catalog) = self.store.load()? {
            if !catalog.is_empty() {
                return Ok(catalog);
            }
        }

        let seed = seed_catalog();
        self.store.save(&seed)?;
        info!(
            "event=catalog_seed module=catalog status=ok records={}",
            seed.len()
        );
        Ok(seed)
    }

    /// Creates a record from a partial draft and returns it.
    ///
    /// The id is `max(existing ids, 0) + 1` over the persisted catalog, so
    /// deleting the max-id record frees its id for the next create.
    pub fn create(&self, draft: &ProjectDraft) -> CatalogResult<Project> {
        let _guard = self.lock_writes();

        let mut catalog = self.persisted()?;
        let next_id = catalog.iter().map(|project| project.id).max().unwrap_or(0) + 1;
        let project = draft.normalize(next_id);

        catalog.push(project.clone());
        self.store.save(&catalog)?;
        self.bus.publish();
        info!(
            "event=catalog_create module=catalog status=ok id={} has_video={}",
            project.id,
            project.has_video()
        );
        Ok(project)
    }

    /// Merges a partial draft onto the record matching `id` and returns the
    /// merged record.
    ///
    /// # Errors
    /// - `CatalogError::NotFound` when no record carries `id`; persisted
    ///   state is left untouched.
    pub fn update(&self, id: ProjectId, draft: &ProjectDraft) -> CatalogResult<Project> {
        let _guard = self.lock_writes();

        let mut catalog = self.persisted()?;
        let Some(existing) = catalog.iter_mut().find(|project| project.id == id) else {
            return Err(CatalogError::NotFound(id));
        };

        let merged = existing.merged(draft);
        *existing = merged.clone();
        self.store.save(&catalog)?;
        self.bus.publish();
        info!("event=catalog_update module=catalog status=ok id={id}");
        Ok(merged)
    }

    /// Removes the record matching `id`.
    ///
    /// Idempotent: an absent id is a successful no-op and changes nothing.
    pub fn delete(&self, id: ProjectId) -> CatalogResult<()> {
        let _guard = self.lock_writes();

        let mut catalog = self.persisted()?;
        let before = catalog.len();
        catalog.retain(|project| project.id != id);
        if catalog.len() == before {
            debug!("event=catalog_delete module=catalog status=noop id={id}");
            return Ok(());
        }

        self.store.save(&catalog)?;
        self.bus.publish();
        info!("event=catalog_delete module=catalog status=ok id={id}");
        Ok(())
    }

    fn persisted(&self) -> CatalogResult<Vec<Project>> {
        Ok(self.store.load()?.unwrap_or_default())
    }

    fn lock_writes(&self) -> std::sync::MutexGuard<'_, ()> {
        self.write_lock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
