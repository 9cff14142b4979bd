//! Git operations using git2-rs.

pub mod branch;
pub mod commits;
pub mod identity;

use std::path::Path;

use git2::Repository;
use tracing::debug;

use crate::error::RepositoryError;

pub use branch::{LEGACY_DEFAULT_BRANCH, ResolvedBranch, resolve_branch};
pub use commits::{CommitRecord, LOOKBACK_DAYS, TimeWindow, fetch_commits};
pub use identity::{FixedIdentity, IdentityResolver, RepoConfigIdentity};

/// Result of a collection pass.
#[derive(Debug, Clone)]
pub struct Collected {
    /// Author name the commits were filtered by.
    pub user_name: String,
    /// Branch that was walked, or `None` for a repository without commits.
    pub branch: Option<String>,
    /// Matching commits, newest first.
    pub commits: Vec<CommitRecord>,
}

/// Gathers the current user's commits from one repository.
pub struct CommitCollector<'a> {
    repo_path: &'a Path,
    branch: Option<&'a str>,
    identity: &'a dyn IdentityResolver,
    window: TimeWindow,
}

impl<'a> CommitCollector<'a> {
    pub fn new(repo_path: &'a Path, identity: &'a dyn IdentityResolver, window: TimeWindow) -> Self {
        Self {
            repo_path,
            branch: None,
            identity,
            window,
        }
    }

    /// Walk this branch instead of the `master`/`HEAD` fallback.
    pub fn with_branch(mut self, branch: Option<&'a str>) -> Self {
        self.branch = branch;
        self
    }

    pub fn collect(&self) -> Result<Collected, RepositoryError> {
        let repo = Repository::open(self.repo_path).map_err(|source| RepositoryError::Open {
            path: self.repo_path.to_path_buf(),
            source,
        })?;
        debug!("Opened repository at {}", self.repo_path.display());

        let user_name = self.identity.user_name(&repo)?;

        let Some(branch) = resolve_branch(&repo, self.branch)? else {
            return Ok(Collected {
                user_name,
                branch: None,
                commits: Vec::new(),
            });
        };
        debug!(
            "Walking '{}' from {} to {}",
            branch.name, self.window.start, self.window.end
        );

        let commits = fetch_commits(&repo, branch.tip, &self.window, &user_name)?;

        Ok(Collected {
            user_name,
            branch: Some(branch.name),
            commits,
        })
    }
}
