//! Local filesystem key-value store.
//!
//! Each key is one file, `{dir}/{sanitized-key}.json`. Writes go to a
//! temporary sibling first and are renamed into place, so a crash never
//! leaves a half-written value behind.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use mendit_core::storage::KvStore;
use mendit_types::error::StorageError;

const EXTENSION: &str = "json";

/// `KvStore` writing one JSON file per key.
#[derive(Debug, Clone)]
pub struct FileKvStore {
    dir: PathBuf,
}

impl FileKvStore {
    /// Store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`.
    pub fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.{EXTENSION}", sanitize_key(key)))
    }
}

/// Map a key to a safe file stem: ASCII alphanumerics, `-` and `_` are kept,
/// everything else becomes `_`.
fn sanitize_key(key: &str) -> String {
    let stem: String = key
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if stem.is_empty() { "_".to_string() } else { stem }
}

impl KvStore for FileKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.key_path(key);
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::Read(format!("{}: {err}", path.display()))),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let write_err = |err: std::io::Error| StorageError::Write(format!("{}: {err}", self.dir.display()));

        tokio::fs::create_dir_all(&self.dir).await.map_err(write_err)?;

        let path = self.key_path(key);
        let tmp = path.with_extension(format!("{EXTENSION}.tmp"));
        tokio::fs::write(&tmp, value).await.map_err(write_err)?;
        tokio::fs::rename(&tmp, &path).await.map_err(write_err)?;

        tracing::trace!(key, path = %path.display(), bytes = value.len(), "value stored");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.key_path(key);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StorageError::Write(format!("{}: {err}", path.display()))),
        }
    }

    async fn list_keys(&self) -> Result<Vec<String>, StorageError> {
        let read_err = |err: std::io::Error| StorageError::Read(format!("{}: {err}", self.dir.display()));

        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(read_err(err)),
        };

        let mut keys = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(read_err)? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                keys.push(stem.to_string());
            }
        }
        keys.sort();
        Ok(keys)
    }
}
