//! weekly-report - turn your last week of git commits into a status report.
//!
//! # Overview
//!
//! weekly-report reads the commits you authored in the last seven days,
//! groups their messages by date, asks an OpenAI-compatible chat-completion
//! endpoint to rewrite them as a manager-facing report, and saves the reply
//! to `周报_<date>.txt`.

pub mod app;
pub mod config;
pub mod error;
pub mod git;
pub mod llm;
pub mod report;

// Re-export commonly used types
pub use app::{RunContext, RunOutcome, run};
pub use config::Config;
pub use error::{AppError, ConfigError, ReportError, RepositoryError};
pub use git::{CommitRecord, IdentityResolver, TimeWindow};
pub use report::GroupedLog;
