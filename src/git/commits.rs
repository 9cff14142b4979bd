//! Commit fetching within a time window.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Offset, Utc};
use git2::{Commit, Oid, Repository, Sort};
use tracing::debug;

use crate::error::RepositoryError;

/// Number of days covered by a report.
pub const LOOKBACK_DAYS: i64 = 7;

/// Inclusive `[start, end]` range of commit times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// The `days` days leading up to and including `end`.
    pub fn last_days(end: DateTime<Utc>, days: i64) -> Self {
        Self {
            start: end - Duration::days(days),
            end,
        }
    }

    pub fn contains(&self, time: DateTime<Utc>) -> bool {
        self.start <= time && time <= self.end
    }
}

/// A commit as it appears in the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub author_name: String,
    /// Commit time in the committer's own UTC offset.
    pub committed_at: DateTime<FixedOffset>,
    /// Calendar date of `committed_at`, not converted to local time.
    pub committed_date: NaiveDate,
    /// Full message with surrounding whitespace trimmed.
    pub message: String,
}

impl CommitRecord {
    /// Create a CommitRecord from a git2 Commit.
    pub fn from_git2_commit(commit: &Commit) -> Result<Self, RepositoryError> {
        let committed_at = commit_time(commit)?;
        let author = commit.author();

        Ok(Self {
            author_name: String::from_utf8_lossy(author.name_bytes()).into_owned(),
            committed_at,
            committed_date: committed_at.date_naive(),
            message: String::from_utf8_lossy(commit.message_bytes())
                .trim()
                .to_string(),
        })
    }
}

/// Committer time of a commit, carrying the offset recorded in the commit.
fn commit_time(commit: &Commit) -> Result<DateTime<FixedOffset>, RepositoryError> {
    let time = commit.time();
    let invalid = || RepositoryError::InvalidTimestamp {
        hash: commit.id().to_string(),
        seconds: time.seconds(),
    };

    let utc = DateTime::from_timestamp(time.seconds(), 0).ok_or_else(invalid)?;
    let offset = FixedOffset::east_opt(time.offset_minutes() * 60)
        .unwrap_or_else(|| Utc.fix());

    Ok(utc.with_timezone(&offset))
}

/// True when the commit's author name is exactly `user_name`, byte for byte.
pub fn is_authored_by(commit: &Commit, user_name: &str) -> bool {
    commit.author().name_bytes() == user_name.as_bytes()
}

/// Fetch commits reachable from `tip` that were committed inside `window`
/// and authored by `user_name`.
///
/// Commits are returned in reverse chronological order (newest first).
pub fn fetch_commits(
    repo: &Repository,
    tip: Oid,
    window: &TimeWindow,
    user_name: &str,
) -> Result<Vec<CommitRecord>, RepositoryError> {
    let mut revwalk = repo.revwalk().map_err(RepositoryError::Walk)?;
    revwalk.set_sorting(Sort::TIME).map_err(RepositoryError::Walk)?;
    revwalk.push(tip).map_err(RepositoryError::Walk)?;

    let mut in_window = 0usize;
    let mut commits = Vec::new();

    for oid_result in revwalk {
        let oid = oid_result.map_err(RepositoryError::Walk)?;
        let commit = repo.find_commit(oid).map_err(RepositoryError::ParseCommit)?;

        let time = commit_time(&commit)?;
        if !window.contains(time.with_timezone(&Utc)) {
            continue;
        }
        in_window += 1;

        if is_authored_by(&commit, user_name) {
            commits.push(CommitRecord::from_git2_commit(&commit)?);
        }
    }

    debug!(
        "{} commit(s) in window, {} authored by '{}'",
        in_window,
        commits.len(),
        user_name
    );

    Ok(commits)
}
