//! Application state shared by the CLI commands.
//!
//! Pins the generic core services to the file-backed store from
//! `mendit-infra`.

use std::path::PathBuf;
use std::sync::Arc;

use mendit_core::archive::ArchiveStore;
use mendit_core::flow::MendFlow;
use mendit_core::mediation::MediationGenerator;
use mendit_core::quiz::StyleStore;
use mendit_core::session::{HostOptions, SessionEventBus};
use mendit_infra::config::load_config;
use mendit_infra::filesystem::{resolve_data_dir, storage_dir};
use mendit_infra::storage::FileKvStore;
use mendit_types::config::MenditConfig;

pub type Store = Arc<FileKvStore>;

/// Resolved data directory, configuration and storage backend.
#[derive(Clone)]
pub struct AppState {
    pub data_dir: PathBuf,
    pub config: MenditConfig,
    pub store: Store,
}

impl AppState {
    /// Resolve the data directory and load its configuration.
    pub async fn init() -> anyhow::Result<Self> {
        Self::with_data_dir(resolve_data_dir()).await
    }

    pub async fn with_data_dir(data_dir: PathBuf) -> anyhow::Result<Self> {
        tokio::fs::create_dir_all(&data_dir).await?;
        let config = load_config(&data_dir).await;
        let store = Arc::new(FileKvStore::new(storage_dir(&data_dir)));

        tracing::debug!(data_dir = %data_dir.display(), "application state ready");
        Ok(Self {
            data_dir,
            config,
            store,
        })
    }

    pub fn archive(&self) -> ArchiveStore<Store> {
        ArchiveStore::with_key(Arc::clone(&self.store), self.config.storage.archive_key.clone())
    }

    pub fn styles(&self) -> StyleStore<Store> {
        StyleStore::with_key(Arc::clone(&self.store), self.config.storage.style_key.clone())
    }

    /// Flow over the shared store, with the saved conflict style restored.
    pub async fn flow(&self) -> MendFlow<FileKvStore> {
        MendFlow::load(Arc::clone(&self.store), &self.config.storage).await
    }

    /// Session host dependencies built from config.
    pub fn host_options(&self) -> HostOptions {
        HostOptions {
            timings: self.config.session.clone(),
            generator: MediationGenerator::from_entropy(),
            events: SessionEventBus::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mendit_core::storage::KvStore;
    use mendit_types::mediation::MediationResult;

    #[tokio::test]
    async fn state_uses_configured_keys() {
        let tmp = tempfile::TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join("config.toml"),
            "[storage]\narchive_key = \"archive_v2\"\n",
        )
        .await
        .unwrap();

        let state = AppState::with_data_dir(tmp.path().to_path_buf()).await.unwrap();
        let result = MediationResult::new("r1", chrono::Utc::now(), "other", "formal");
        assert!(state.archive().append(result).await);

        assert!(state.store.get("archive_v2").await.unwrap().is_some());
        assert!(tmp.path().join("storage/archive_v2.json").exists());
        assert_eq!(state.flow().await.archive().list().await.len(), 1);
    }
}
