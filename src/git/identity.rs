//! Resolving who "the current user" is.

use git2::{ErrorCode, Repository};

use crate::error::RepositoryError;

/// Supplies the author name whose commits go into the report.
pub trait IdentityResolver {
    fn user_name(&self, repo: &Repository) -> Result<String, RepositoryError>;
}

/// Reads `user.name` from the repository's layered git config
/// (repository, then global, then system).
#[derive(Debug, Clone, Copy, Default)]
pub struct RepoConfigIdentity;

impl IdentityResolver for RepoConfigIdentity {
    fn user_name(&self, repo: &Repository) -> Result<String, RepositoryError> {
        let mut config = repo.config().map_err(RepositoryError::ReadConfig)?;
        let snapshot = config.snapshot().map_err(RepositoryError::ReadConfig)?;

        match snapshot.get_string("user.name") {
            Ok(name) if !name.is_empty() => Ok(name),
            Ok(_) => Err(RepositoryError::MissingIdentity),
            Err(e) if e.code() == ErrorCode::NotFound => Err(RepositoryError::MissingIdentity),
            Err(e) => Err(RepositoryError::ReadConfig(e)),
        }
    }
}

/// A fixed author name, independent of any git config.
#[derive(Debug, Clone)]
pub struct FixedIdentity(pub String);

impl FixedIdentity {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl IdentityResolver for FixedIdentity {
    fn user_name(&self, _repo: &Repository) -> Result<String, RepositoryError> {
        Ok(self.0.clone())
    }
}
