//! Key-value store trait.
//!
//! The persistence boundary of MendIt: string values (JSON blobs) stored by
//! string key, the same contract a browser's local storage offers.
//! Implementations live in mendit-infra (file-backed) and in
//! [`super::memory`] (in-process).

use std::sync::Arc;

use mendit_types::error::StorageError;

/// Trait for string-keyed persistent storage of string values.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
pub trait KvStore: Send + Sync {
    /// Get the raw value for a key. Returns None if the key does not exist.
    fn get(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<String>, StorageError>> + Send;

    /// Set the value for a key (upsert).
    fn set(
        &self,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = Result<(), StorageError>> + Send;

    /// Remove a key. No-op if the key does not exist.
    fn remove(&self, key: &str) -> impl std::future::Future<Output = Result<(), StorageError>> + Send;

    /// List every stored key.
    fn list_keys(&self) -> impl std::future::Future<Output = Result<Vec<String>, StorageError>> + Send;
}

impl<S: KvStore> KvStore for Arc<S> {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key).await
    }

    async fn list_keys(&self) -> Result<Vec<String>, StorageError> {
        (**self).list_keys().await
    }
}
