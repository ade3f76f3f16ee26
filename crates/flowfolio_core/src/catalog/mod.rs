//! Catalog use-case service and built-in seed data.
//!
//! # Responsibility
//! - Orchestrate store reads/writes into create/update/delete use-cases.
//! - Publish one change tick after every successful mutation.
//!
//! # Invariants
//! - Mutations never bypass the persistent store or the change bus.
//! - Seeding happens only on the read path and never publishes.

mod catalog_service;
mod seed;

pub use catalog_service::{CatalogError, CatalogResult, CatalogService};
pub use seed::seed_catalog;
