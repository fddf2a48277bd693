use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Accepted names for the chain config file, in lookup order.
pub const FILE_NAMES: [&str; 2] = ["config.yml", "config.yaml"];

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {source}")]
    ParseError {
        #[source]
        source: serde_yaml::Error,
    },

    #[error("config is not valid: {message}")]
    ValidationError { message: String },

    #[error("Could not locate a config.yml in '{}'", root.display())]
    NotFound { root: PathBuf },
}

impl Config {
    /// Parses YAML, fills in default server addresses and validates.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let mut config: Config =
            serde_yaml::from_str(content).map_err(|source| ConfigError::ParseError { source })?;
        config.servers.fill_defaults();
        config.validate()?;
        Ok(config)
    }

    pub fn parse_reader(mut reader: impl Read) -> Result<Self, ConfigError> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .map_err(|source| ConfigError::ReadError {
                path: PathBuf::from("<reader>"),
                source,
            })?;
        Self::parse(&content)
    }

    /// Parses the config file at `path`.
    ///
    /// A missing or unreadable file is an error, never an empty config.
    pub fn parse_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "Loaded chain config");
        Self::parse(&content)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - At least one account is configured
    /// - The validator has a name
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.accounts.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "at least 1 account is needed".to_string(),
            });
        }

        if self.validator.name.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "validator is required".to_string(),
            });
        }

        Ok(())
    }
}

/// Finds the chain config file under `root`, trying [`FILE_NAMES`] in order.
pub fn locate(root: &Path) -> Result<PathBuf, ConfigError> {
    FILE_NAMES
        .iter()
        .map(|name| root.join(name))
        .find(|path| path.exists())
        .ok_or_else(|| ConfigError::NotFound {
            root: root.to_path_buf(),
        })
}
