//! Data directory layout
//!
//! Directory structure:
//! ~/.budgetcast/
//!   settings.yaml        # Session defaults (amounts, window, currency)
//!   budgetcast.log       # Application log

use std::fs;
use std::path::{Path, PathBuf};

use super::settings_data::Settings;

/// Error types for storage operations
#[derive(Debug)]
pub enum StorageError {
    Io(String),
    Parse(String),
    Serialize(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "IO error: {}", msg),
            StorageError::Parse(msg) => write!(f, "Parse error: {}", msg),
            StorageError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// Manages the data directory holding settings and logs
pub struct DataDirectory {
    root: PathBuf,
}

impl DataDirectory {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Get the default data directory path (~/.budgetcast/)
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".budgetcast")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn settings_path(&self) -> PathBuf {
        self.root.join("settings.yaml")
    }

    pub fn settings_exist(&self) -> bool {
        self.settings_path().exists()
    }

    /// Load settings, falling back to defaults when the file doesn't exist.
    ///
    /// A file that exists but can't be read or parsed is an error so the caller
    /// can report it instead of silently discarding the user's settings.
    pub fn load_settings(&self) -> Result<Settings, StorageError> {
        let path = self.settings_path();
        if !path.exists() {
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            StorageError::Io(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Settings::from_yaml(&content).map_err(|e| {
            StorageError::Parse(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Write settings, creating the directory if needed
    pub fn save_settings(&self, settings: &Settings) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root).map_err(|e| {
            StorageError::Io(format!("Failed to create {}: {}", self.root.display(), e))
        })?;

        let yaml = settings.to_yaml().map_err(|e| {
            StorageError::Serialize(format!("Failed to serialize settings: {}", e))
        })?;

        fs::write(self.settings_path(), yaml)
            .map_err(|e| StorageError::Io(format!("Failed to write settings: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::format::CurrencyPreset;

    #[test]
    fn test_missing_settings_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let storage = DataDirectory::new(dir.path().to_path_buf());

        assert!(!storage.settings_exist());
        assert_eq!(storage.load_settings().unwrap(), Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let storage = DataDirectory::new(dir.path().join("nested"));

        let settings = Settings {
            start_amount: 4_200.0,
            currency: CurrencyPreset::Usd,
            ..Settings::default()
        };
        storage.save_settings(&settings).unwrap();

        assert!(storage.settings_exist());
        assert_eq!(storage.load_settings().unwrap(), settings);
    }

    #[test]
    fn test_malformed_settings_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let storage = DataDirectory::new(dir.path().to_path_buf());
        fs::write(storage.settings_path(), "day_count: [not, a, number]\n").unwrap();

        assert!(matches!(
            storage.load_settings(),
            Err(StorageError::Parse(_))
        ));
    }
}
