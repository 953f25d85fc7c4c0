//! Persistence of the mediation archive.

use mendit_types::config::DEFAULT_ARCHIVE_KEY;
use mendit_types::mediation::MediationResult;

use crate::storage::KvStore;
use crate::storage::blob::{remove, try_read_json, write_json};

/// What a read of the archive blob produced.
struct Loaded {
    results: Vec<MediationResult>,
    /// Records present in the blob that did not deserialize.
    skipped: usize,
    /// The blob itself could not be read or was not a JSON array.
    unreadable: bool,
}

/// Append-only list of mediation results stored under one key.
///
/// Storage failures never escape: reads degrade to an empty archive and
/// failed writes are logged and dropped.
pub struct ArchiveStore<S: KvStore> {
    store: S,
    key: String,
}

impl<S: KvStore> ArchiveStore<S> {
    /// Archive under the default `mediationArchive` key.
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_ARCHIVE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read the blob record by record, so one bad entry does not hide the
    /// rest of the archive.
    async fn load(&self) -> Loaded {
        let raw = match try_read_json::<_, Vec<serde_json::Value>>(&self.store, &self.key).await {
            Ok(raw) => raw.unwrap_or_default(),
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "Error reading from storage");
                return Loaded {
                    results: Vec::new(),
                    skipped: 0,
                    unreadable: true,
                };
            }
        };

        let mut results = Vec::with_capacity(raw.len());
        let mut skipped = 0;
        for (index, value) in raw.into_iter().enumerate() {
            match serde_json::from_value::<MediationResult>(value) {
                Ok(result) => results.push(result),
                Err(err) => {
                    skipped += 1;
                    tracing::warn!(key = %self.key, index, error = %err, "Skipping unreadable archive record");
                }
            }
        }

        Loaded {
            results,
            skipped,
            unreadable: false,
        }
    }

    /// Every readable stored result, in insertion order.
    pub async fn list(&self) -> Vec<MediationResult> {
        self.load().await.results
    }

    /// Add a result to the end of the archive.
    ///
    /// Returns whether the write landed. Unreadable records are dropped by
    /// the write; an unreadable archive is replaced by a list holding only
    /// `result`.
    pub async fn append(&self, result: MediationResult) -> bool {
        let Loaded {
            results: mut archive,
            skipped,
            unreadable,
        } = self.load().await;
        if skipped > 0 {
            tracing::warn!(key = %self.key, lost = skipped, "Archive rewrite drops unreadable records");
        }
        if unreadable {
            tracing::warn!(key = %self.key, "Archive unreadable, replacing it with a new list");
        }

        let id = result.id.clone();
        archive.push(result);

        let saved = write_json(&self.store, &self.key, &archive).await;
        if saved {
            tracing::info!(id = %id, total = archive.len(), "Mediation archived");
        }
        saved
    }

    pub async fn find(&self, id: &str) -> Option<MediationResult> {
        self.list().await.into_iter().find(|r| r.id == id)
    }

    /// Drop the whole archive.
    pub async fn clear(&self) -> bool {
        let removed = remove(&self.store, &self.key).await;
        if removed {
            tracing::info!(key = %self.key, "Archive cleared");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryKvStore;
    use chrono::{TimeZone, Utc};
    use mendit_types::mediation::HealingReflection;
    use mendit_types::person::Person;

    fn result(id: &str) -> MediationResult {
        let mut r = MediationResult::new(
            id,
            Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            "couple",
            "direct",
        );
        r.persons = Some(vec![Person::new("Ana", "busy"), Person::new("Ben", "job")]);
        r.summaries = Some(vec!["one".into(), "two".into()]);
        r.peace_plan = Some("plan".into());
        r
    }

    #[tokio::test]
    async fn test_empty_archive() {
        let archive = ArchiveStore::new(MemoryKvStore::new());
        assert!(archive.list().await.is_empty());
        assert!(archive.find("x").await.is_none());
    }

    #[tokio::test]
    async fn test_append_then_list_keeps_fields() {
        let archive = ArchiveStore::new(MemoryKvStore::new());
        let healed = result("a").healed(HealingReflection {
            journal: "we talked".into(),
            mood: "Peaceful".into(),
            mood_color: "from-green-400 to-blue-400".into(),
        });

        assert!(archive.append(healed.clone()).await);
        assert!(archive.append(result("b")).await);

        let listed = archive.list().await;
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0], healed);
        assert!(listed[0].is_healed());
        assert_eq!(listed[1].id, "b");
    }

    #[tokio::test]
    async fn test_invalid_json_reads_as_empty() {
        let store = MemoryKvStore::new();
        store.set(DEFAULT_ARCHIVE_KEY, "{not json").await.unwrap();
        let archive = ArchiveStore::new(store);
        assert!(archive.list().await.is_empty());

        // Appending over a corrupt archive starts a fresh one.
        assert!(archive.append(result("a")).await);
        assert_eq!(archive.list().await.len(), 1);
    }

    #[tokio::test]
    async fn test_bad_record_is_skipped_not_the_archive() {
        let store = MemoryKvStore::new();
        let good = serde_json::to_value(result("a")).unwrap();
        let mut bad = good.clone();
        bad["id"] = serde_json::json!("broken");
        bad["date"] = serde_json::json!("not a date");
        let blob = serde_json::to_string(&vec![good, bad]).unwrap();
        store.set(DEFAULT_ARCHIVE_KEY, &blob).await.unwrap();

        let archive = ArchiveStore::new(store);
        let listed = archive.list().await;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, "a");

        // The readable record survives the next write.
        assert!(archive.append(result("b")).await);
        let ids: Vec<String> = archive.list().await.into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_write_failure_is_swallowed() {
        let archive = ArchiveStore::new(MemoryKvStore::with_quota(16));
        assert!(!archive.append(result("a")).await);
        assert!(archive.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_find_and_clear() {
        let archive = ArchiveStore::with_key(MemoryKvStore::new(), "custom");
        archive.append(result("a")).await;
        archive.append(result("b")).await;

        assert_eq!(archive.find("b").await.map(|r| r.id), Some("b".to_string()));
        assert!(archive.store().get("custom").await.unwrap().is_some());

        assert!(archive.clear().await);
        assert!(archive.list().await.is_empty());
    }
}
