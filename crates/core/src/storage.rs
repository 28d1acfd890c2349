//! Key/value storage backends

use crate::error::StorageError;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// A string key/value store with browser-storage semantics.
///
/// Two instances back a [`SessionStore`](crate::SessionStore): one ephemeral,
/// one persistent. Removing a missing key succeeds.
pub trait StorageBackend {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory backend used natively and in tests
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
    read_only: Cell<bool>,
}

impl MemoryStorage {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every `set` and `remove`, like a browser with storage disabled
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.set(read_only);
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether nothing is stored
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    fn check_writable(&self, operation: &'static str, key: &str) -> Result<(), StorageError> {
        if self.read_only.get() {
            return Err(StorageError::new(operation, key, "storage is read-only"));
        }
        Ok(())
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check_writable("set", key)?;
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.check_writable("remove", key)?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::StorageBackendTestSuite;

    #[test]
    fn test_memory_storage_conformance() {
        StorageBackendTestSuite::new(MemoryStorage::new()).run_all_tests();
    }

    #[test]
    fn test_read_only_rejects_writes() {
        let storage = MemoryStorage::new();
        storage.set("k", "v").unwrap();
        storage.set_read_only(true);

        let err = storage.set("k", "w").unwrap_err();
        assert_eq!(err.operation, "set");
        assert!(storage.remove("k").is_err());
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
    }
}
