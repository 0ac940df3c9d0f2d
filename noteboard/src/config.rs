//! Engine configuration loaded with Figment
//!
//! Sources, later overriding earlier:
//! 1. Built-in defaults
//! 2. `noteboard.toml`
//! 3. `noteboard.yaml`
//! 4. `noteboard.json`
//!
//! All files are optional and looked up in a single directory.

use crate::error::{BoardError, Result};
use figment::{
    providers::{Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Base name of configuration files
pub const CONFIG_FILE_STEM: &str = "noteboard";

/// How the To Do lock is applied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LockPolicy {
    /// Lock status is reported for the UI; commands are not refused
    #[default]
    Advisory,
    /// Commands touching a locked To Do column are refused
    Enforced,
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Key the board snapshot is stored under
    pub storage_key: String,
    /// Directory used by the file store
    pub storage_dir: PathBuf,
    pub lock_policy: LockPolicy,
    /// Number of blank items a card gets when created without any
    pub default_item_count: usize,
    /// Most items a new card may have
    pub max_items: usize,
    /// chrono format string for completion dates
    pub timestamp_format: String,
    /// How many activity entries the engine keeps
    pub activity_limit: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_key: "noteAppData".to_string(),
            storage_dir: PathBuf::from(".noteboard"),
            lock_policy: LockPolicy::Advisory,
            default_item_count: 3,
            max_items: 5,
            timestamp_format: "%d.%m.%Y, %H:%M:%S".to_string(),
            activity_limit: 100,
        }
    }
}

impl BoardConfig {
    /// Load configuration from `dir`, falling back to defaults for anything
    /// not set there.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        debug!("Loading board configuration from {}", dir.display());

        let config: BoardConfig = Self::figment(dir).extract()?;
        config.validate()?;

        debug!(?config, "Loaded board configuration");
        Ok(config)
    }

    /// Build the figment with all sources in precedence order
    fn figment(dir: &Path) -> Figment {
        let toml = dir.join(format!("{}.toml", CONFIG_FILE_STEM));
        let yaml = dir.join(format!("{}.yaml", CONFIG_FILE_STEM));
        let json = dir.join(format!("{}.json", CONFIG_FILE_STEM));
        trace!(
            "Config candidates: {}, {}, {}",
            toml.display(),
            yaml.display(),
            json.display()
        );

        Figment::from(Serialized::defaults(BoardConfig::default()))
            .merge(Toml::file(toml))
            .merge(Yaml::file(yaml))
            .merge(Json::file(json))
    }

    /// Check values that would break board invariants
    pub fn validate(&self) -> Result<()> {
        if self.storage_key.trim().is_empty() {
            return Err(BoardError::invalid_value("storage_key", "must not be empty"));
        }
        if self.default_item_count > self.max_items {
            return Err(BoardError::invalid_value(
                "default_item_count",
                format!(
                    "{} exceeds max_items ({})",
                    self.default_item_count, self.max_items
                ),
            ));
        }
        if self.timestamp_format.trim().is_empty() {
            return Err(BoardError::invalid_value(
                "timestamp_format",
                "must not be empty",
            ));
        }
        Ok(())
    }

    pub fn with_lock_policy(mut self, policy: LockPolicy) -> Self {
        self.lock_policy = policy;
        self
    }

    pub fn with_storage_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage_dir = dir.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_files() {
        let temp = TempDir::new().unwrap();
        let config = BoardConfig::load(temp.path()).unwrap();
        assert_eq!(config, BoardConfig::default());
        assert_eq!(config.storage_key, "noteAppData");
        assert_eq!(config.lock_policy, LockPolicy::Advisory);
    }

    #[test]
    fn test_toml_overrides_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("noteboard.toml"),
            "lock_policy = \"enforced\"\nactivity_limit = 10\n",
        )
        .unwrap();

        let config = BoardConfig::load(temp.path()).unwrap();
        assert_eq!(config.lock_policy, LockPolicy::Enforced);
        assert_eq!(config.activity_limit, 10);
        assert_eq!(config.max_items, 5);
    }

    #[test]
    fn test_json_overrides_toml() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("noteboard.toml"), "storage_key = \"a\"\n").unwrap();
        fs::write(temp.path().join("noteboard.yaml"), "storage_key: b\n").unwrap();
        fs::write(
            temp.path().join("noteboard.json"),
            r#"{"storage_key": "c"}"#,
        )
        .unwrap();

        let config = BoardConfig::load(temp.path()).unwrap();
        assert_eq!(config.storage_key, "c");
    }

    #[test]
    fn test_validation_rejects_default_over_max() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("noteboard.toml"),
            "default_item_count = 6\nmax_items = 5\n",
        )
        .unwrap();

        let result = BoardConfig::load(temp.path());
        assert!(matches!(result, Err(BoardError::InvalidValue { .. })));
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("noteboard.toml"), "lock_policy = [").unwrap();

        let result = BoardConfig::load(temp.path());
        assert!(matches!(result, Err(BoardError::Config(_))));
    }
}
