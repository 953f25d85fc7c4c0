//! Data directory layout.

use std::path::{Path, PathBuf};

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "MENDIT_DATA_DIR";

/// Resolve the MendIt data directory.
///
/// `MENDIT_DATA_DIR` wins, then `~/.mendit`, then `./.mendit`.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".mendit");
    }

    PathBuf::from(".mendit")
}

/// Directory holding one JSON file per storage key.
pub fn storage_dir(data_dir: &Path) -> PathBuf {
    data_dir.join("storage")
}

pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        let base = Path::new("/tmp/mendit");
        assert_eq!(storage_dir(base), PathBuf::from("/tmp/mendit/storage"));
        assert_eq!(config_path(base), PathBuf::from("/tmp/mendit/config.toml"));
    }

    #[test]
    fn test_resolve_data_dir_is_not_empty() {
        assert!(!resolve_data_dir().as_os_str().is_empty());
    }
}
