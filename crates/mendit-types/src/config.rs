//! Configuration types for MendIt.
//!
//! `MenditConfig` represents the optional `config.toml` in the data
//! directory. Every field has a default matching the stock application.

use serde::{Deserialize, Serialize};

/// Storage key holding the mediation archive.
pub const DEFAULT_ARCHIVE_KEY: &str = "mediationArchive";

/// Storage key holding the last computed conflict style.
pub const DEFAULT_STYLE_KEY: &str = "conflictStyle";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenditConfig {
    #[serde(default)]
    pub storage: StorageKeys,

    #[serde(default)]
    pub session: SessionTimings,
}

/// Keys under which the two JSON blobs are stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageKeys {
    #[serde(default = "default_archive_key")]
    pub archive_key: String,

    #[serde(default = "default_style_key")]
    pub style_key: String,
}

fn default_archive_key() -> String {
    DEFAULT_ARCHIVE_KEY.to_string()
}

fn default_style_key() -> String {
    DEFAULT_STYLE_KEY.to_string()
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            archive_key: default_archive_key(),
            style_key: default_style_key(),
        }
    }
}

/// Delays and odds for the simulated mediator in live sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionTimings {
    /// Delay between joining a session and the clarifying questions starting.
    #[serde(default = "default_join_delay_ms")]
    pub join_delay_ms: u64,

    /// Spacing between clarifying questions (question N lands at N * interval).
    #[serde(default = "default_question_interval_ms")]
    pub question_interval_ms: u64,

    /// Delay before the mediator replies to a user message.
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,

    /// Idle time after which a typing indicator is cleared.
    #[serde(default = "default_typing_timeout_ms")]
    pub typing_timeout_ms: u64,

    /// A reply is scheduled when a uniform draw in `[0, 1)` exceeds this.
    #[serde(default = "default_reply_threshold")]
    pub reply_threshold: f64,
}

fn default_join_delay_ms() -> u64 {
    1_000
}

fn default_question_interval_ms() -> u64 {
    2_000
}

fn default_reply_delay_ms() -> u64 {
    1_500
}

fn default_typing_timeout_ms() -> u64 {
    1_000
}

fn default_reply_threshold() -> f64 {
    0.3
}

impl Default for SessionTimings {
    fn default() -> Self {
        Self {
            join_delay_ms: default_join_delay_ms(),
            question_interval_ms: default_question_interval_ms(),
            reply_delay_ms: default_reply_delay_ms(),
            typing_timeout_ms: default_typing_timeout_ms(),
            reply_threshold: default_reply_threshold(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = MenditConfig::default();
        assert_eq!(config.storage.archive_key, "mediationArchive");
        assert_eq!(config.storage.style_key, "conflictStyle");
        assert_eq!(config.session.join_delay_ms, 1_000);
        assert_eq!(config.session.reply_delay_ms, 1_500);
        assert!((config.session.reply_threshold - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_deserialize_empty_uses_defaults() {
        let config: MenditConfig = toml::from_str("").unwrap();
        assert_eq!(config.storage.archive_key, DEFAULT_ARCHIVE_KEY);
        assert_eq!(config.session.question_interval_ms, 2_000);
    }

    #[test]
    fn test_deserialize_partial_override() {
        let toml_str = r#"
[storage]
archive_key = "archive_v2"

[session]
reply_delay_ms = 10
reply_threshold = 0.0
"#;
        let config: MenditConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.storage.archive_key, "archive_v2");
        assert_eq!(config.storage.style_key, DEFAULT_STYLE_KEY);
        assert_eq!(config.session.reply_delay_ms, 10);
        assert_eq!(config.session.typing_timeout_ms, 1_000);
        assert!(config.session.reply_threshold.abs() < f64::EPSILON);
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = MenditConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: MenditConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.storage.archive_key, config.storage.archive_key);
        assert_eq!(parsed.session.typing_timeout_ms, config.session.typing_timeout_ms);
    }
}
