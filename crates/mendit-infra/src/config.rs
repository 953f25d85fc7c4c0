//! Configuration loader for MendIt.
//!
//! Reads `config.toml` from the data directory and deserializes it into
//! [`MenditConfig`]. Falls back to defaults when the file is missing or
//! malformed.

use std::path::Path;

use mendit_types::config::MenditConfig;

use crate::filesystem::config_path;

/// Load configuration from `{data_dir}/config.toml`.
///
/// - Missing file: [`MenditConfig::default()`].
/// - Unreadable or unparsable file: logs a warning and returns the default.
pub async fn load_config(data_dir: &Path) -> MenditConfig {
    let config_path = config_path(data_dir);

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return MenditConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return MenditConfig::default();
        }
    };

    match toml::from_str::<MenditConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            MenditConfig::default()
        }
    }
}
