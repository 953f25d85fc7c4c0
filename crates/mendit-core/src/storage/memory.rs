//! In-process `KvStore`.
//!
//! Backs tests and any front end that does not need persistence across runs.
//! An optional byte quota mimics the write failures of a full browser store.

use std::collections::HashMap;
use std::sync::Mutex;

use mendit_types::error::StorageError;

use super::kv_store::KvStore;

/// `KvStore` backed by a `HashMap` behind a mutex.
#[derive(Debug, Default)]
pub struct MemoryKvStore {
    entries: Mutex<HashMap<String, String>>,
    quota_bytes: Option<usize>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that rejects writes once the total value size would exceed
    /// `quota_bytes`.
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            quota_bytes: Some(quota_bytes),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StorageError> {
        self.entries
            .lock()
            .map_err(|e| StorageError::Read(format!("memory store poisoned: {e}")))
    }
}

impl KvStore for MemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock()?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.lock()?;
        if let Some(quota) = self.quota_bytes {
            let others: usize = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(_, v)| v.len())
                .sum();
            if others + value.len() > quota {
                return Err(StorageError::Write(format!(
                    "quota of {quota} bytes exceeded"
                )));
            }
        }
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.lock()?.remove(key);
        Ok(())
    }

    async fn list_keys(&self) -> Result<Vec<String>, StorageError> {
        let mut keys: Vec<String> = self.lock()?.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_and_get() {
        let store = MemoryKvStore::new();
        store.set("theme", "dark").await.unwrap();
        assert_eq!(store.get("theme").await.unwrap().as_deref(), Some("dark"));
    }

    #[tokio::test]
    async fn test_get_missing() {
        let store = MemoryKvStore::new();
        assert!(store.get("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_remove_and_list() {
        let store = MemoryKvStore::new();
        store.set("b", "2").await.unwrap();
        store.set("a", "1").await.unwrap();
        assert_eq!(store.list_keys().await.unwrap(), vec!["a", "b"]);

        store.remove("a").await.unwrap();
        store.remove("missing").await.unwrap();
        assert_eq!(store.list_keys().await.unwrap(), vec!["b"]);
    }

    #[tokio::test]
    async fn test_quota_rejects_large_write() {
        let store = MemoryKvStore::with_quota(8);
        store.set("k", "12345678").await.unwrap();
        let err = store.set("other", "x").await.unwrap_err();
        assert!(matches!(err, StorageError::Write(_)));
        // Overwriting the same key only counts the new value.
        store.set("k", "1234").await.unwrap();
    }
}
