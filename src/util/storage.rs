//! Session-scoped key/value persistence.
//!
//! The session store mirrors its token and user profile here so a page
//! reload can re-hydrate authentication state. The browser implementation
//! wraps `window.sessionStorage`; tests use [`MemoryStorage`].

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the JSON-serialized user profile.
pub const USER_KEY: &str = "user";

/// Minimal string key/value store with session lifetime.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

impl<T: SessionStorage + ?Sized> SessionStorage for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value);
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }
}

/// `window.sessionStorage` backed implementation. Outside a browser every
/// operation is a no-op and reads return `None`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStorage;

impl SessionStorage for BrowserSessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window()?.session_storage().ok()??;
            storage.get_item(key).ok()?
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.session_storage()) {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.session_storage()) {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-memory store for tests and non-browser targets.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
