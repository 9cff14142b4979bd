//! Choosing which branch to walk.

use git2::{BranchType, ErrorCode, Oid, Repository};
use tracing::{debug, warn};

use crate::error::RepositoryError;

/// Branch walked when none is configured and it exists.
pub const LEGACY_DEFAULT_BRANCH: &str = "master";

/// A branch name and the commit its tip points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBranch {
    pub name: String,
    pub tip: Oid,
}

/// Resolve the branch whose history feeds the report.
///
/// - A configured branch must exist locally.
/// - Otherwise `master` is used if present.
/// - Otherwise whatever `HEAD` points at.
///
/// Returns `Ok(None)` for a repository with no commits yet.
pub fn resolve_branch(
    repo: &Repository,
    configured: Option<&str>,
) -> Result<Option<ResolvedBranch>, RepositoryError> {
    if let Some(name) = configured {
        return local_branch(repo, name)
            .map(Some)
            .map_err(|e| RepositoryError::BranchNotFound(name.to_string(), e));
    }

    if let Ok(branch) = local_branch(repo, LEGACY_DEFAULT_BRANCH) {
        return Ok(Some(branch));
    }

    let head = match repo.head() {
        Ok(head) => head,
        Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => {
            debug!("Repository has no commits yet");
            return Ok(None);
        }
        Err(e) => return Err(RepositoryError::ResolveHead(e)),
    };

    let tip = head
        .peel_to_commit()
        .map_err(RepositoryError::ResolveHead)?
        .id();
    let name = head.shorthand().unwrap_or("HEAD").to_string();

    warn!(
        "Branch '{}' not found, using '{}' instead. Set \"default_branch\" in config.json to choose explicitly.",
        LEGACY_DEFAULT_BRANCH, name
    );

    Ok(Some(ResolvedBranch { name, tip }))
}

fn local_branch(repo: &Repository, name: &str) -> Result<ResolvedBranch, git2::Error> {
    let branch = repo.find_branch(name, BranchType::Local)?;
    let tip = branch.get().peel_to_commit()?.id();
    Ok(ResolvedBranch {
        name: name.to_string(),
        tip,
    })
}
