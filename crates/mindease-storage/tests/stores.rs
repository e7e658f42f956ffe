use mindease_storage::KeyValueStore;
use mindease_storage::error::StorageError;
use mindease_storage::file::FileStore;
use mindease_storage::memory::MemoryStore;

#[test]
fn memory_store_get_set_remove() {
    let store = MemoryStore::new();
    assert_eq!(store.get("k").unwrap(), None);
    store.set("k", "v1").unwrap();
    store.set("k", "v2").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));
    assert_eq!(store.len(), 1);
    store.remove("k").unwrap();
    store.remove("k").unwrap();
    assert!(store.is_empty());
}

#[test]
fn memory_store_enforces_quota() {
    let store = MemoryStore::with_quota(10);
    store.set("ab", "cdef").unwrap();
    // Overwriting the same key only counts the new value.
    store.set("ab", "cdefghij").unwrap();
    let err = store.set("xy", "z").unwrap_err();
    assert!(matches!(
        err,
        StorageError::QuotaExceeded {
            needed: 3,
            available: 0,
            ..
        }
    ));
    assert_eq!(store.get("ab").unwrap().as_deref(), Some("cdefghij"));
}

#[test]
fn unavailable_memory_store_fails_everything() {
    let store = MemoryStore::unavailable();
    assert!(matches!(store.get("k"), Err(StorageError::Unavailable(_))));
    assert!(matches!(store.set("k", "v"), Err(StorageError::Unavailable(_))));
    assert!(matches!(store.remove("k"), Err(StorageError::Unavailable(_))));
}

#[test]
fn file_store_persists_across_instances() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("store.json");

    let store = FileStore::new(&path);
    assert_eq!(store.get("a").unwrap(), None);
    store.set("a", "1").unwrap();
    store.set("b", "{\"x\":2}").unwrap();

    let reopened = FileStore::new(&path);
    assert_eq!(reopened.get("a").unwrap().as_deref(), Some("1"));
    assert_eq!(reopened.get("b").unwrap().as_deref(), Some("{\"x\":2}"));

    reopened.remove("a").unwrap();
    assert_eq!(store.get("a").unwrap(), None);
    assert!(!path.with_extension("json.tmp").exists());
}

#[test]
fn file_store_reports_corrupt_file_then_replaces_it() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, "not json").unwrap();

    let store = FileStore::new(&path);
    assert!(matches!(store.get("a"), Err(StorageError::Corrupt { .. })));

    store.set("a", "1").unwrap();
    assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
    assert_eq!(store.get("b").unwrap(), None);
}

#[test]
fn removing_from_corrupt_file_resets_it() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, "{{{").unwrap();

    let store = FileStore::new(&path);
    store.remove("a").unwrap();
    assert_eq!(store.get("a").unwrap(), None);
}

#[test]
fn empty_file_is_an_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, "").unwrap();
    assert_eq!(FileStore::new(&path).get("a").unwrap(), None);
}
