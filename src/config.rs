//! Loading of `config.json`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

/// Default config file name, resolved against the working directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Settings for one report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub openai_model: String,
    pub repo_path: PathBuf,
    /// Branch to walk. When unset, `master` is tried, then `HEAD`.
    pub default_branch: Option<String>,
    /// Timeout for the report request. When unset, the request may wait indefinitely.
    pub request_timeout: Option<Duration>,
}

/// On-disk shape. Every field is optional here so a missing key can be
/// reported by name instead of as a generic serde error.
#[derive(Debug, Deserialize)]
struct RawConfig {
    openai_api_key: Option<String>,
    openai_base_url: Option<String>,
    openai_model: Option<String>,
    repo_path: Option<String>,
    default_branch: Option<String>,
    request_timeout_secs: Option<u64>,
}

impl Config {
    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let raw: RawConfig = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            openai_api_key: required(raw.openai_api_key, "openai_api_key")?,
            openai_base_url: required(raw.openai_base_url, "openai_base_url")?,
            openai_model: required(raw.openai_model, "openai_model")?,
            repo_path: PathBuf::from(required(raw.repo_path, "repo_path")?),
            default_branch: raw.default_branch.filter(|b| !b.trim().is_empty()),
            request_timeout: raw
                .request_timeout_secs
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
        })
    }
}

fn required(value: Option<String>, key: &'static str) -> Result<String, ConfigError> {
    value.ok_or(ConfigError::MissingKey(key))
}
