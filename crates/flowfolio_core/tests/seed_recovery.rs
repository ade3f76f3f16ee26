use flowfolio_core::db::{open_db, open_db_in_memory};
use flowfolio_core::{
    seed_catalog, CatalogService, ChangeBus, JsonProjectStore, ProjectStore, SlotStore,
    SqliteSlotStore, PROJECTS_SLOT_KEY,
};
use std::path::Path;
use std::sync::Arc;

fn file_service(path: &Path) -> CatalogService<JsonProjectStore<SqliteSlotStore>> {
    let conn = open_db(path).expect("file db should open");
    let store = JsonProjectStore::new(SqliteSlotStore::new(conn));
    CatalogService::new(store, Arc::new(ChangeBus::new()))
}

#[test]
fn first_load_seeds_and_persists_the_default_catalog() {
    let conn = open_db_in_memory().expect("in-memory db should open");
    let store = JsonProjectStore::new(SqliteSlotStore::new(conn));
    let service = CatalogService::new(store, Arc::new(ChangeBus::new()));

    let catalog = service.load_or_seed().expect("load should succeed");
    assert_eq!(catalog, seed_catalog());
    assert_eq!(catalog.len(), 13);
}

#[test]
fn second_fresh_load_returns_persisted_data_without_re_seeding() {
    let dir = tempfile::tempdir().expect("temp dir should create");
    let db_path = dir.path().join("catalog.sqlite3");

    let first = file_service(&db_path);
    let seeded = first.load_or_seed().expect("first load should seed");
    assert_eq!(seeded.len(), 13);
    // Admin edit between loads proves the second load is not a re-seed.
    first.delete(13).expect("delete should succeed");
    drop(first);

    let second = file_service(&db_path);
    let reloaded = second.load_or_seed().expect("second load should succeed");
    assert_eq!(reloaded.len(), 12);
    assert!(reloaded.iter().all(|project| project.id != 13));
}

#[test]
fn corrupt_persisted_blob_recovers_to_the_seed_catalog() {
    let conn = open_db_in_memory().expect("in-memory db should open");
    let store = JsonProjectStore::new(SqliteSlotStore::new(conn));
    store
        .slots()
        .write(PROJECTS_SLOT_KEY, "][ not json at all")
        .expect("write should succeed");

    let service = CatalogService::new(store, Arc::new(ChangeBus::new()));
    let catalog = service.load_or_seed().expect("load should not raise");
    assert_eq!(catalog, seed_catalog());

    // The seed replaced the corrupt blob durably.
    let reloaded = service.load_or_seed().expect("reload should succeed");
    assert_eq!(reloaded, seed_catalog());
}

#[test]
fn empty_persisted_catalog_is_treated_as_absent_and_re_seeded() {
    let conn = open_db_in_memory().expect("in-memory db should open");
    let store = JsonProjectStore::new(SqliteSlotStore::new(conn));
    store.save(&[]).expect("save should succeed");

    let service = CatalogService::new(store, Arc::new(ChangeBus::new()));
    let catalog = service.load_or_seed().expect("load should succeed");
    assert_eq!(catalog.len(), 13);
}
