//! Application Configuration
//!
//! Storage key, removal behavior and log level, with defaults matching the
//! classic single-list page.

use serde::Deserialize;

/// Key the task snapshot lives under in `localStorage`
pub const DEFAULT_STORAGE_KEY: &str = "tasks";

/// What a row's "Remove" button takes out of the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalPolicy {
    /// Every task with the same text as the clicked row
    #[default]
    MatchingText,
    /// Only the clicked row
    SingleEntry,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TaskListConfig {
    pub storage_key: String,
    pub removal: RemovalPolicy,
    #[serde(with = "level_name")]
    pub log_level: log::LevelFilter,
}

impl Default for TaskListConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            removal: RemovalPolicy::default(),
            log_level: log::LevelFilter::Info,
        }
    }
}

impl TaskListConfig {
    /// Parse a (possibly partial) JSON override; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

mod level_name {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<log::LevelFilter, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TaskListConfig::default();
        assert_eq!(config.storage_key, "tasks");
        assert_eq!(config.removal, RemovalPolicy::MatchingText);
        assert_eq!(config.log_level, log::LevelFilter::Info);
    }

    #[test]
    fn test_partial_override() {
        let config = TaskListConfig::from_json(r#"{"removal":"single_entry","log_level":"debug"}"#)
            .expect("valid config");
        assert_eq!(config.storage_key, "tasks");
        assert_eq!(config.removal, RemovalPolicy::SingleEntry);
        assert_eq!(config.log_level, log::LevelFilter::Debug);
    }

    #[test]
    fn test_bad_level_rejected() {
        assert!(TaskListConfig::from_json(r#"{"log_level":"loud"}"#).is_err());
    }
}
