//! Catalog core for the flowfolio portfolio site.
//! This crate is the single source of truth for catalog invariants: durable
//! local persistence, change notification, and CRUD with fallback seeding.

pub mod auth;
pub mod bus;
pub mod catalog;
pub mod db;
pub mod logging;
pub mod model;
pub mod store;
pub mod video;
pub mod view;

pub use auth::AdminGate;
pub use bus::{ChangeBus, StorageWatcher, Subscription};
pub use catalog::{seed_catalog, CatalogError, CatalogResult, CatalogService};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::{Project, ProjectDraft, ProjectId, DEFAULT_CATEGORY, DEFAULT_TITLE};
pub use store::{
    JsonProjectStore, ProjectStore, SlotStore, SqliteSlotStore, StoreError, StoreResult,
    PROJECTS_SLOT_KEY,
};
pub use video::extract_video_id;
pub use view::CatalogView;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
