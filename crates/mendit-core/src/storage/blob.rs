//! JSON blob helpers over a `KvStore`.
//!
//! The `try_*` functions surface every failure. The plain variants are the
//! storage boundary used by the stores: failures are logged and converted to
//! a safe default (absent value / no-op), never propagated.

use serde::Serialize;
use serde::de::DeserializeOwned;

use mendit_types::error::StorageError;

use super::kv_store::KvStore;

/// Read and deserialize the value under `key`.
pub async fn try_read_json<S, T>(store: &S, key: &str) -> Result<Option<T>, StorageError>
where
    S: KvStore,
    T: DeserializeOwned,
{
    match store.get(key).await? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Serialize `value` and store it under `key`.
pub async fn try_write_json<S, T>(store: &S, key: &str, value: &T) -> Result<(), StorageError>
where
    S: KvStore,
    T: Serialize + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw).await
}

/// Read `key`, returning None when it is missing, unreadable or corrupt.
pub async fn read_json<S, T>(store: &S, key: &str) -> Option<T>
where
    S: KvStore,
    T: DeserializeOwned,
{
    match try_read_json(store, key).await {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(key, error = %err, "Error reading from storage");
            None
        }
    }
}

/// Write `key`, logging instead of failing. Returns whether the write landed.
pub async fn write_json<S, T>(store: &S, key: &str, value: &T) -> bool
where
    S: KvStore,
    T: Serialize + ?Sized,
{
    match try_write_json(store, key, value).await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(key, error = %err, "Error writing to storage");
            false
        }
    }
}

/// Remove `key`, logging instead of failing.
pub async fn remove(store: &impl KvStore, key: &str) -> bool {
    match store.remove(key).await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(key, error = %err, "Error removing from storage");
            false
        }
    }
}
