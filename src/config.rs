//! Application configuration
//!
//! Read from `config.json` in the platform config directory
//! (e.g. ~/.config/linguacards/config.json). A missing file means defaults.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::flashcards::{FlashcardStorageError, FlashcardStore, ReviewOptions};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config directory not found")]
    ConfigDirNotFound,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Card file location. Defaults to the platform data directory.
    #[serde(default)]
    pub data_file: Option<PathBuf>,
    /// Persist after every review answer, not only at the end of a session
    #[serde(default)]
    pub save_after_each_answer: bool,
}

impl AppConfig {
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|p| p.join("linguacards").join("config.json"))
            .ok_or(ConfigError::ConfigDirNotFound)
    }

    /// Load from `path`, falling back to defaults when the file is absent
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No config at {:?}, using defaults", path);
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Resolve the card file, preferring an explicit override
    pub fn data_file(&self, override_path: Option<&Path>) -> Result<PathBuf, FlashcardStorageError> {
        match override_path.or(self.data_file.as_deref()) {
            Some(path) => Ok(path.to_path_buf()),
            None => FlashcardStore::default_path(),
        }
    }

    pub fn review_options(&self) -> ReviewOptions {
        ReviewOptions {
            save_after_each_answer: self.save_after_each_answer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_is_default() {
        let temp = TempDir::new().unwrap();
        let config = AppConfig::load(&temp.path().join("config.json")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(!config.review_options().save_after_each_answer);
    }

    #[test]
    fn test_load_camel_case_fields() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(
            &path,
            r#"{ "dataFile": "/tmp/cards.txt", "saveAfterEachAnswer": true }"#,
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.data_file, Some(PathBuf::from("/tmp/cards.txt")));
        assert!(config.review_options().save_after_each_answer);
    }

    #[test]
    fn test_partial_config_uses_field_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, "{}").unwrap();

        assert_eq!(AppConfig::load(&path).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(AppConfig::load(&path), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_data_file_override_wins() {
        let config = AppConfig {
            data_file: Some(PathBuf::from("/from/config.txt")),
            save_after_each_answer: false,
        };

        let resolved = config.data_file(Some(Path::new("/from/flag.txt"))).unwrap();
        assert_eq!(resolved, PathBuf::from("/from/flag.txt"));

        let resolved = config.data_file(None).unwrap();
        assert_eq!(resolved, PathBuf::from("/from/config.txt"));
    }
}
