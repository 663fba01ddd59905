//! Repository configuration file support.
//!
//! This module provides utilities for reading repository configuration from
//! TOML configuration files, with environment variables taking precedence.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::repository::RepositoryError;

/// Name of the configuration file searched for at startup.
pub const CONFIG_FILE_NAME: &str = "repository.toml";

/// Repository configuration from file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RepositoryConfig {
    #[serde(default)]
    pub repository: RepositorySettings,
    #[serde(default)]
    pub dataset: DatasetSettings,
}

/// Repository type settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositorySettings {
    #[serde(rename = "type", default = "default_repo_type")]
    pub repo_type: String,
}

impl Default for RepositorySettings {
    fn default() -> Self {
        Self {
            repo_type: default_repo_type(),
        }
    }
}

fn default_repo_type() -> String {
    "local".to_string()
}

/// Dataset seed settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasetSettings {
    /// JSON file with `customers`, `products`, and `purchases` arrays,
    /// loaded into the repository at startup.
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

impl RepositoryConfig {
    /// Parse repository configuration from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, RepositoryError> {
        toml::from_str(content).map_err(|e| {
            RepositoryError::configuration(format!("Failed to parse config file: {}", e))
        })
    }

    /// Load repository configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(RepositoryConfig)` if successful
    /// * `Err(RepositoryError)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            RepositoryError::configuration(format!("Failed to read config file: {}", e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Load repository configuration from the default location, falling back
    /// to defaults when no `repository.toml` is found.
    ///
    /// Searches the current directory, then its parent.
    pub fn load_default() -> Self {
        for dir in [Path::new("."), Path::new("..")] {
            let candidate = dir.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                if let Ok(config) = Self::from_file(&candidate) {
                    return config;
                }
            }
        }
        Self::default()
    }

    /// Resolve the dataset seed file, with `CPA_DATA_FILE` taking
    /// precedence over the config file.
    pub fn data_file(&self) -> Option<PathBuf> {
        if let Ok(path) = std::env::var("CPA_DATA_FILE") {
            if !path.is_empty() {
                return Some(PathBuf::from(path));
            }
        }
        self.dataset.data_file.clone()
    }
}
