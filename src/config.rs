use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use vitasync_core::{DocumentStore, VitaSyncData};

/// Source of a configuration value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigSource {
    Default,
    File,
    Environment,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Default => write!(f, "default"),
            ConfigSource::File => write!(f, "file"),
            ConfigSource::Environment => write!(f, "environment"),
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }
}

/// Application configuration with source tracking
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// Path to the JSON data document
    pub data_file: ConfigValue<PathBuf>,
    /// Name given to a freshly created data document
    pub profile_name: ConfigValue<String>,
    /// Config file path used (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<PathBuf>,
}

/// Internal struct for deserializing config file
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ConfigFile {
    data_file: Option<PathBuf>,
    profile_name: Option<String>,
}

impl Config {
    /// Load configuration with priority: env vars > config file > defaults
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let default_data_file = Self::default_data_dir().join(DocumentStore::DEFAULT_FILE_NAME);

        // Start with defaults
        let mut data_file = ConfigValue::new(default_data_file, ConfigSource::Default);
        let mut profile_name = ConfigValue::new(
            VitaSyncData::DEFAULT_NAME.to_string(),
            ConfigSource::Default,
        );
        let mut config_file = None;

        // Try to load from config file
        let path = config_path.unwrap_or_else(Self::default_config_path);
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| ConfigError::ReadError(path.clone(), e))?;
            let file_config: ConfigFile = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::ParseError(path.clone(), e))?;

            config_file = Some(path.clone());

            if let Some(file) = file_config.data_file {
                // Resolve relative paths against config file's directory
                let resolved = if file.is_relative() {
                    path.parent().map(|p| p.join(&file)).unwrap_or(file)
                } else {
                    file
                };
                data_file = ConfigValue::new(resolved, ConfigSource::File);
            }
            if let Some(name) = file_config.profile_name {
                profile_name = ConfigValue::new(name, ConfigSource::File);
            }
        }

        // Apply environment variable overrides
        if let Ok(file) = std::env::var("VITASYNC_DATA_FILE") {
            data_file = ConfigValue::new(PathBuf::from(file), ConfigSource::Environment);
        }
        if let Ok(name) = std::env::var("VITASYNC_PROFILE_NAME") {
            profile_name = ConfigValue::new(name, ConfigSource::Environment);
        }

        Ok(Self {
            data_file,
            profile_name,
            config_file,
        })
    }

    /// Default config directory (platform-specific):
    /// - Linux: ~/.config/vitasync/
    /// - macOS: ~/Library/Application Support/vitasync/
    /// - Windows: %APPDATA%/vitasync/
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("vitasync")
    }

    /// Default data directory (platform-specific):
    /// - Linux: ~/.local/share/vitasync/
    /// - macOS: ~/Library/Application Support/vitasync/
    /// - Windows: %APPDATA%/vitasync/
    pub fn default_data_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("vitasync")
    }

    /// Default config file path (platform-specific config dir + config.yaml)
    pub fn default_config_path() -> PathBuf {
        Self::default_config_dir().join("config.yaml")
    }

    /// Store for the configured data document.
    pub fn store(&self) -> DocumentStore {
        DocumentStore::new(self.data_file.value.clone())
    }
}

#[derive(Debug)]
pub enum ConfigError {
    ReadError(PathBuf, std::io::Error),
    ParseError(PathBuf, serde_yaml::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError(path, e) => {
                write!(f, "Failed to read config file '{}': {}", path.display(), e)
            }
            ConfigError::ParseError(path, e) => {
                write!(f, "Failed to parse config file '{}': {}", path.display(), e)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nonexistent.yaml");

        let config = Config::load(Some(config_path)).unwrap();
        assert!(config.data_file.value.ends_with("vitaSyncData.json"));
        assert_eq!(config.data_file.source, ConfigSource::Default);
        assert_eq!(config.profile_name.value, "My VitaSync Data");
        assert_eq!(config.profile_name.source, ConfigSource::Default);
        assert!(config.config_file.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "data_file: /custom/path/data.json").unwrap();
        writeln!(file, "profile_name: Gym Log").unwrap();

        let config = Config::load(Some(config_path.clone())).unwrap();
        assert_eq!(
            config.data_file.value,
            PathBuf::from("/custom/path/data.json")
        );
        assert_eq!(config.data_file.source, ConfigSource::File);
        assert_eq!(config.profile_name.value, "Gym Log");
        assert_eq!(config.profile_name.source, ConfigSource::File);
        assert_eq!(config.config_file, Some(config_path));
    }

    #[test]
    fn test_relative_data_file_resolves_against_config_dir() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::write(&config_path, "data_file: data/mine.json\n").unwrap();

        let config = Config::load(Some(config_path)).unwrap();
        assert_eq!(
            config.data_file.value,
            temp_dir.path().join("data/mine.json")
        );
    }

    #[test]
    #[ignore] // Run with --ignored; env vars can pollute parallel tests
    fn test_env_var_overrides_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "profile_name: fromfile").unwrap();

        std::env::set_var("VITASYNC_PROFILE_NAME", "fromenv");

        let config = Config::load(Some(config_path)).unwrap();
        assert_eq!(config.profile_name.value, "fromenv");
        assert_eq!(config.profile_name.source, ConfigSource::Environment);

        std::env::remove_var("VITASYNC_PROFILE_NAME");
    }

    #[test]
    fn test_invalid_yaml_error() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "invalid: yaml: content: [").unwrap();

        let result = Config::load(Some(config_path));
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_store_uses_data_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::write(&config_path, "data_file: doc.json\n").unwrap();

        let config = Config::load(Some(config_path)).unwrap();
        assert_eq!(config.store().path(), temp_dir.path().join("doc.json"));
    }
}
