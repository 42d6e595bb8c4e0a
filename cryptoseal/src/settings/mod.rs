use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::common::constants::{
    DEFAULT_PRIVATE_KEY_PATH, DEFAULT_PUBLIC_KEY_PATH, DEFAULT_WATCH_DIRECTORY,
};

/// Defines errors that can occur while loading or persisting the settings
/// record. All of them are fatal to the run: no crypto work starts
/// without a usable configuration.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// No settings file exists at the given path.
    #[error("Settings file not found at {0}")]
    Missing(PathBuf),

    /// The settings file exists but is not valid JSON for the record.
    #[error("Failed to parse settings file: {0}")]
    Malformed(#[from] serde_json::Error),

    /// An I/O error occurred while reading or writing the settings file.
    #[error("Settings file I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// The persisted configuration record (`settings.json`).
///
/// Key-path fields that are absent from the file deserialize to the
/// literal defaults, matching the behavior of earlier tooling that
/// back-filled them on first use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Root of the directory tree the batch processor operates on.
    #[serde(default = "default_watch_directory")]
    pub watch_directory: PathBuf,

    /// Ordered allow-set: literal lowercase extensions (".txt") or the
    /// wildcard ".*" which matches everything.
    #[serde(default)]
    pub allowed_extensions: Vec<String>,

    #[serde(default = "default_public_key_path")]
    pub public_key_path: PathBuf,

    #[serde(default = "default_private_key_path")]
    pub private_key_path: PathBuf,
}

fn default_watch_directory() -> PathBuf {
    PathBuf::from(DEFAULT_WATCH_DIRECTORY)
}

fn default_public_key_path() -> PathBuf {
    PathBuf::from(DEFAULT_PUBLIC_KEY_PATH)
}

fn default_private_key_path() -> PathBuf {
    PathBuf::from(DEFAULT_PRIVATE_KEY_PATH)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            watch_directory: default_watch_directory(),
            allowed_extensions: Vec::new(),
            public_key_path: default_public_key_path(),
            private_key_path: default_private_key_path(),
        }
    }
}

impl Settings {
    /// Loads the record from `path`.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        if !path.is_file() {
            return Err(SettingsError::Missing(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Persists the record back to `path` as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Loads the record, or writes and returns the defaults when no file
    /// exists yet.
    pub fn bootstrap(path: &Path) -> Result<Self, SettingsError> {
        if path.is_file() {
            return Self::load(path);
        }
        let settings = Self::default();
        settings.save(path)?;
        Ok(settings)
    }

    /// Substitutes the default key paths for empty ones. Returns whether
    /// anything changed, so the caller knows to persist the record.
    pub fn fill_default_key_paths(&mut self) -> bool {
        let mut changed = false;
        if self.public_key_path.as_os_str().is_empty() {
            self.public_key_path = default_public_key_path();
            changed = true;
        }
        if self.private_key_path.as_os_str().is_empty() {
            self.private_key_path = default_private_key_path();
            changed = true;
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"
        {
            "watch_directory": "/srv/drop",
            "allowed_extensions": [".txt", ".pdf"],
            "public_key_path": "keys/public_key.pem",
            "private_key_path": "keys/private_key.pem"
        }
        "#;
        let settings: Settings = serde_json::from_str(json).unwrap();

        assert_eq!(settings.watch_directory, PathBuf::from("/srv/drop"));
        assert_eq!(settings.allowed_extensions, vec![".txt", ".pdf"]);
        assert_eq!(settings.public_key_path, PathBuf::from("keys/public_key.pem"));
        assert_eq!(settings.private_key_path, PathBuf::from("keys/private_key.pem"));
    }

    #[test]
    fn test_missing_key_paths_default() {
        let json = r#"
        {
            "watch_directory": "watched",
            "allowed_extensions": [".*"]
        }
        "#;
        let settings: Settings = serde_json::from_str(json).unwrap();

        assert_eq!(settings.public_key_path, PathBuf::from("public_key.pem"));
        assert_eq!(settings.private_key_path, PathBuf::from("private_key.pem"));
    }

    #[test]
    fn test_fill_default_key_paths_on_empty_values() {
        let json = r#"
        {
            "watch_directory": ".",
            "allowed_extensions": [],
            "public_key_path": "",
            "private_key_path": ""
        }
        "#;
        let mut settings: Settings = serde_json::from_str(json).unwrap();

        assert!(settings.fill_default_key_paths());
        assert_eq!(settings.public_key_path, PathBuf::from("public_key.pem"));
        assert_eq!(settings.private_key_path, PathBuf::from("private_key.pem"));

        // A second pass finds nothing left to fill.
        assert!(!settings.fill_default_key_paths());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        assert!(matches!(
            Settings::load(&path).unwrap_err(),
            SettingsError::Missing(_)
        ));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            Settings::load(&path).unwrap_err(),
            SettingsError::Malformed(_)
        ));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut settings = Settings::default();
        settings.watch_directory = PathBuf::from("drop");
        settings.allowed_extensions = vec![".txt".to_string(), ".*".to_string()];
        settings.save(&path).unwrap();

        let reloaded = Settings::load(&path).unwrap();
        assert_eq!(reloaded.watch_directory, PathBuf::from("drop"));
        assert_eq!(reloaded.allowed_extensions, vec![".txt", ".*"]);
    }

    #[test]
    fn test_bootstrap_writes_defaults_once() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let first = Settings::bootstrap(&path).unwrap();
        assert!(path.is_file());
        assert_eq!(first.watch_directory, PathBuf::from("."));
        assert!(first.allowed_extensions.is_empty());

        // Bootstrapping again loads the same file instead of rewriting it.
        fs::write(
            &path,
            r#"{ "watch_directory": "other", "allowed_extensions": [] }"#,
        )
        .unwrap();
        let second = Settings::bootstrap(&path).unwrap();
        assert_eq!(second.watch_directory, PathBuf::from("other"));
    }
}
