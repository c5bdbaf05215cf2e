use super::*;

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_round_trip() {
    let storage = MemoryStorage::default();
    assert!(storage.get(TOKEN_KEY).is_none());

    storage.set(TOKEN_KEY, "t-1");
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("t-1"));

    storage.set(TOKEN_KEY, "t-2");
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("t-2"));
}

#[test]
fn memory_storage_remove_is_idempotent() {
    let storage = MemoryStorage::default();
    storage.set(USER_KEY, "{}");
    storage.remove(USER_KEY);
    storage.remove(USER_KEY);
    assert!(storage.get(USER_KEY).is_none());
}

// =============================================================
// BrowserSessionStorage outside a browser
// =============================================================

#[test]
fn browser_storage_is_inert_off_wasm() {
    let storage = BrowserSessionStorage;
    storage.set(TOKEN_KEY, "t-1");
    assert!(storage.get(TOKEN_KEY).is_none());
    storage.remove(TOKEN_KEY);
}
