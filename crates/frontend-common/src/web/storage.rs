//! `sessionStorage` / `localStorage` backends

use super::js_error_message;
use biblioteca_core::{MemoryStorage, SessionStore, StorageBackend, StorageError};
use std::rc::Rc;
use tracing::warn;
use web_sys::Storage;

/// One of the window's web storage areas
pub struct WebStorage {
    storage: Storage,
}

impl WebStorage {
    /// The tab-scoped `sessionStorage`
    pub fn session() -> Option<Self> {
        web_sys::window()
            .and_then(|w| w.session_storage().ok().flatten())
            .map(|storage| Self { storage })
    }

    /// The persistent `localStorage`
    pub fn local() -> Option<Self> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .map(|storage| Self { storage })
    }
}

impl StorageBackend for WebStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|err| StorageError::new("get", key, js_error_message(&err)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|err| StorageError::new("set", key, js_error_message(&err)))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage
            .remove_item(key)
            .map_err(|err| StorageError::new("remove", key, js_error_message(&err)))
    }
}

/// Session store over `sessionStorage` and `localStorage`.
///
/// A storage area the browser refuses (private mode, disabled cookies) is
/// replaced by memory, so sessions last only as long as the page.
pub fn browser_session_store() -> SessionStore {
    let ephemeral: Rc<dyn StorageBackend> = match WebStorage::session() {
        Some(storage) => Rc::new(storage),
        None => {
            warn!("sessionStorage unavailable, keeping sessions in memory");
            Rc::new(MemoryStorage::new())
        }
    };
    let persistent: Rc<dyn StorageBackend> = match WebStorage::local() {
        Some(storage) => Rc::new(storage),
        None => {
            warn!("localStorage unavailable, keeping sessions in memory");
            Rc::new(MemoryStorage::new())
        }
    };
    SessionStore::new(ephemeral, persistent)
}
