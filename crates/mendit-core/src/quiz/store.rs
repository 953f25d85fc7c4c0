//! Persistence of the last computed conflict style.

use mendit_types::config::DEFAULT_STYLE_KEY;
use mendit_types::quiz::ConflictStyle;

use crate::storage::KvStore;
use crate::storage::blob::{read_json, remove, write_json};

/// Stores a single `ConflictStyle` under one key. Same failure semantics as
/// the archive: reads fall back to `None`, writes log and continue.
pub struct StyleStore<S: KvStore> {
    store: S,
    key: String,
}

impl<S: KvStore> StyleStore<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_STYLE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub async fn load(&self) -> Option<ConflictStyle> {
        read_json(&self.store, &self.key).await
    }

    pub async fn save(&self, style: &ConflictStyle) -> bool {
        let saved = write_json(&self.store, &self.key, style).await;
        if saved {
            tracing::info!(style = %style.style, "Conflict style saved");
        }
        saved
    }

    pub async fn clear(&self) -> bool {
        remove(&self.store, &self.key).await
    }

    /// Tone suggested for new mediations, if a style has been saved.
    pub async fn recommended_tone(&self) -> Option<String> {
        self.load().await.map(|style| style.recommended_tone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::resolve::style_for;
    use crate::storage::MemoryKvStore;
    use mendit_types::quiz::QuizAnswer;

    #[tokio::test]
    async fn test_save_and_load() {
        let styles = StyleStore::new(MemoryKvStore::new());
        assert!(styles.load().await.is_none());

        let style = style_for(QuizAnswer::Collaborator);
        assert!(styles.save(&style).await);
        assert_eq!(styles.load().await, Some(style));
        assert_eq!(styles.recommended_tone().await.as_deref(), Some("formal"));
    }

    #[tokio::test]
    async fn test_corrupt_value_reads_as_none() {
        let store = MemoryKvStore::new();
        store.set(DEFAULT_STYLE_KEY, "[1, 2").await.unwrap();
        let styles = StyleStore::new(store);
        assert!(styles.load().await.is_none());
    }

    #[tokio::test]
    async fn test_clear() {
        let styles = StyleStore::new(MemoryKvStore::new());
        styles.save(&style_for(QuizAnswer::Direct)).await;
        assert!(styles.clear().await);
        assert!(styles.load().await.is_none());
    }
}
