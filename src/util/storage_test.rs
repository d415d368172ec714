use super::*;

#[test]
fn memory_store_starts_empty() {
    let store = MemoryStore::new();
    assert!(store.is_empty());
    assert_eq!(store.get("loginTimeout"), Ok(None));
}

#[test]
fn memory_store_set_overwrites() {
    let store = MemoryStore::new();
    store.set("k", "1").unwrap();
    store.set("k", "2").unwrap();
    assert_eq!(store.get("k"), Ok(Some("2".to_owned())));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_store_remove_missing_key_is_ok() {
    let store = MemoryStore::new();
    assert_eq!(store.remove("missing"), Ok(()));
}

#[test]
fn memory_store_remove_deletes_value() {
    let store = MemoryStore::new();
    store.set("k", "v").unwrap();
    store.remove("k").unwrap();
    assert_eq!(store.get("k"), Ok(None));
}

#[test]
fn memory_store_clones_share_entries() {
    let store = MemoryStore::new();
    let reloaded = store.clone();
    store.set("k", "v").unwrap();
    assert_eq!(reloaded.get("k"), Ok(Some("v".to_owned())));
    reloaded.remove("k").unwrap();
    assert!(store.is_empty());
}

#[test]
fn storage_error_messages() {
    assert_eq!(StorageError::Unavailable.to_string(), "storage is not available");
    assert_eq!(
        StorageError::Backend("quota".to_owned()).to_string(),
        "storage backend error: quota"
    );
}
