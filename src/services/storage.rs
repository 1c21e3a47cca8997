//! Key-value persistence behind the session service.
//!
//! Pages never touch storage directly; every persisted key is owned by
//! [`crate::services::session::SessionManager`], which goes through this
//! trait. The browser implementation wraps `window.localStorage`; the
//! in-memory one backs native builds and tests.

use std::collections::HashMap;
use std::sync::Mutex;

pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// HashMap-backed store for tests and non-wasm builds.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStore;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::KeyValueStore;

    /// `window.localStorage`. The handle is looked up per call (it is not
    /// `Send`); all failures — storage disabled, quota — read as missing
    /// data, matching how the browser app behaved.
    #[derive(Default)]
    pub struct BrowserStore;

    impl BrowserStore {
        pub fn new() -> Self {
            Self
        }

        fn storage() -> Option<web_sys::Storage> {
            web_sys::window().and_then(|window| window.local_storage().ok().flatten())
        }
    }

    impl KeyValueStore for BrowserStore {
        fn get(&self, key: &str) -> Option<String> {
            Self::storage().and_then(|storage| storage.get_item(key).ok().flatten())
        }

        fn set(&self, key: &str, value: &str) {
            match Self::storage() {
                Some(storage) => {
                    if storage.set_item(key, value).is_err() {
                        log::warn!("failed to persist {key}");
                    }
                }
                None => log::warn!("localStorage unavailable; {key} not persisted"),
            }
        }

        fn remove(&self, key: &str) {
            if let Some(storage) = Self::storage() {
                let _ = storage.remove_item(key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::default();
        assert_eq!(store.get("k"), None);
        store.set("k", "v");
        assert_eq!(store.get("k"), Some("v".into()));
        store.remove("k");
        assert_eq!(store.get("k"), None);
    }
}
