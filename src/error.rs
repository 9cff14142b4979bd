//! Error types for weekly-report modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading `config.json`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Config is missing required key '{0}'")]
    MissingKey(&'static str),
}

/// Errors from reading the local git repository.
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Failed to open repository at {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: git2::Error,
    },

    #[error("Failed to read git config: {0}")]
    ReadConfig(#[source] git2::Error),

    #[error("Git user.name is not set. Run: git config user.name \"Your Name\"")]
    MissingIdentity,

    #[error("Branch '{0}' not found: {1}")]
    BranchNotFound(String, #[source] git2::Error),

    #[error("Failed to resolve HEAD: {0}")]
    ResolveHead(#[source] git2::Error),

    #[error("Failed to walk commit history: {0}")]
    Walk(#[source] git2::Error),

    #[error("Failed to parse commit: {0}")]
    ParseCommit(#[source] git2::Error),

    #[error("Commit {hash} has invalid timestamp (seconds={seconds})")]
    InvalidTimestamp { hash: String, seconds: i64 },
}

/// Errors from generating or saving the report.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Request to report endpoint failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Failed to write report to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Any hard failure of a report run.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Report(#[from] ReportError),
}
