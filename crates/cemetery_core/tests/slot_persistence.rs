use cemetery_core::db::migrations::latest_version;
use cemetery_core::db::{open_db, open_db_in_memory};
use cemetery_core::{
    open_catalog, BurialSpaceKind, CatalogConfig, CatalogStore, InMemoryPersistence,
    NewBurialSpace, PersistError, PersistenceAdapter, Priority, SqliteSlotStore,
};
use rusqlite::Connection;

fn niche(name: &str) -> NewBurialSpace {
    NewBurialSpace::new(
        name,
        "standard",
        Priority::Low,
        BurialSpaceKind::Columbarium {
            niche_count: 12,
            indoor: false,
        },
    )
}

#[test]
fn sqlite_slot_round_trips_collection() {
    let adapter = SqliteSlotStore::try_new(open_db_in_memory().unwrap()).unwrap();
    let mut store = CatalogStore::open(adapter);
    let a = store.create(niche("North wall")).unwrap();
    let b = store.create(niche("South wall")).unwrap();
    let b = store.toggle_active(b.id).unwrap();

    let adapter = store.into_adapter();
    assert_eq!(adapter.slot(), "cemeteryItems");
    assert_eq!(adapter.load(), vec![a, b]);
}

#[test]
fn sqlite_slot_persists_across_connections() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("catalog.sqlite3");

    let created = {
        let adapter = SqliteSlotStore::try_new(open_db(&db_path).unwrap()).unwrap();
        let mut store = CatalogStore::open(adapter);
        store.create(niche("East wall")).unwrap()
    };

    let adapter = SqliteSlotStore::try_new(open_db(&db_path).unwrap()).unwrap();
    let store = CatalogStore::open(adapter);
    assert_eq!(store.find_by_id(created.id), Some(created));
}

#[test]
fn slots_are_isolated_by_name() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("catalog.sqlite3");

    let adapter = SqliteSlotStore::with_slot(open_db(&db_path).unwrap(), "archive").unwrap();
    let mut store = CatalogStore::open(adapter);
    store.create(niche("Archived")).unwrap();

    let default_slot = SqliteSlotStore::try_new(open_db(&db_path).unwrap()).unwrap();
    assert!(default_slot.load().is_empty());
    assert!(default_slot.raw_payload().unwrap().is_none());
}

#[test]
fn malformed_sqlite_payload_degrades_to_empty() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO storage_slots (slot_key, payload, updated_at) VALUES ('cemeteryItems', '{broken', 0);",
        [],
    )
    .unwrap();

    let store = CatalogStore::open(SqliteSlotStore::try_new(conn).unwrap());
    assert!(store.is_empty());
}

#[test]
fn malformed_in_memory_payload_degrades_to_empty() {
    let store = CatalogStore::open(InMemoryPersistence::with_raw_payload("not json at all"));
    assert!(store.is_empty());
    assert_eq!(store.stats().total, 0);
}

#[test]
fn writes_after_malformed_state_replace_the_payload() {
    let mut store = CatalogStore::open(InMemoryPersistence::with_raw_payload("[{]"));
    let created = store.create(niche("Fresh start")).unwrap();

    let reopened = CatalogStore::open(store.into_adapter());
    assert_eq!(reopened.list_all(), vec![created]);
}

#[test]
fn slot_store_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    match SqliteSlotStore::try_new(conn) {
        Err(PersistError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert_eq!(expected_version, latest_version()),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn open_catalog_uses_configured_path_and_slot() {
    let dir = tempfile::tempdir().unwrap();
    let config = CatalogConfig::default()
        .with_db_path(dir.path().join("config.sqlite3"))
        .with_storage_slot("demo");

    let created = {
        let mut store = open_catalog(&config).unwrap();
        store.create(niche("Configured")).unwrap()
    };

    let store = open_catalog(&config).unwrap();
    assert_eq!(store.adapter().slot(), "demo");
    assert_eq!(store.list_all(), vec![created]);
}
