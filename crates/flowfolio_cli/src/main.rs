//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `flowfolio_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use flowfolio_core::db::open_db_in_memory;
use flowfolio_core::{CatalogService, ChangeBus, JsonProjectStore, SqliteSlotStore};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("flowfolio_cli error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("flowfolio_core version={}", flowfolio_core::core_version());

    // Why: an in-memory store exercises the whole seed path without touching
    // any on-device catalog.
    let conn = open_db_in_memory()?;
    let store = JsonProjectStore::new(SqliteSlotStore::new(conn));
    let service = CatalogService::new(store, std::sync::Arc::new(ChangeBus::new()));

    let catalog = service.load_or_seed()?;
    println!("seed_catalog records={}", catalog.len());
    for project in &catalog {
        println!("  id={} category={} title={}", project.id, project.category, project.title);
    }

    Ok(())
}
