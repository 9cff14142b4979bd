//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::Path;

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use git2::{Oid, Repository, Signature, Time};
use serde_json::json;

/// Name written to the test repository's `user.name`.
pub const USER_NAME: &str = "Test User";

/// Fixed "now" used by most tests: 2024-03-08 12:00:00 UTC.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 8, 12, 0, 0).unwrap()
}

/// A timestamp in UTC+8.
pub fn cst(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(8 * 3600)
        .unwrap()
        .with_ymd_and_hms(y, m, d, h, min, 0)
        .unwrap()
}

/// A test git repository builder for integration tests.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Create a new empty git repository on `master` with `user.name` set.
    pub fn new() -> Self {
        Self::with_branch("master")
    }

    /// Create a new empty git repository whose first commit lands on `branch`.
    pub fn with_branch(branch: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Repository::init(dir.path()).expect("Failed to init git repo");
        repo.set_head(&format!("refs/heads/{}", branch))
            .expect("Failed to set HEAD");
        repo.config()
            .expect("Failed to open config")
            .set_str("user.name", USER_NAME)
            .expect("Failed to set user.name");
        Self { dir, repo }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create a commit by `author` at `when` on the current branch.
    /// Author and committer are the same signature. Returns the commit OID.
    pub fn commit_as(&self, author: &str, message: &str, when: DateTime<FixedOffset>) -> Oid {
        let time = Time::new(when.timestamp(), when.offset().local_minus_utc() / 60);
        let sig = Signature::new(author, "test@example.com", &time)
            .expect("Failed to create signature");

        // Create or update a file to have something to commit
        let file_path = self.dir.path().join("test.txt");
        let content = format!("{}\n{}\n{}", author, message, when.to_rfc3339());
        std::fs::write(&file_path, content).expect("Failed to write test file");

        let mut index = self.repo.index().expect("Failed to get index");
        index
            .add_path(Path::new("test.txt"))
            .expect("Failed to add file");
        index.write().expect("Failed to write index");
        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");

        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Failed to create commit")
    }

    /// Create a commit by [`USER_NAME`] at `when`.
    pub fn commit(&self, message: &str, when: DateTime<FixedOffset>) -> Oid {
        self.commit_as(USER_NAME, message, when)
    }

    /// Create a branch pointing to the given OID.
    pub fn branch(&self, name: &str, oid: Oid) {
        let commit = self.repo.find_commit(oid).expect("Failed to find commit");
        self.repo
            .branch(name, &commit, false)
            .expect("Failed to create branch");
    }
}

/// Write a `config.json` into `dir`, omitting any key listed in `skip`.
pub fn write_config(dir: &Path, repo_path: &Path, base_url: &str, skip: &[&str]) {
    let mut config = json!({
        "openai_api_key": "sk-test",
        "openai_base_url": base_url,
        "openai_model": "gpt-4o-mini",
        "repo_path": repo_path.to_string_lossy(),
    });
    let object = config.as_object_mut().unwrap();
    for key in skip {
        object.remove(*key);
    }

    std::fs::write(dir.join("config.json"), config.to_string()).expect("Failed to write config");
}

/// Add or replace one key in the `config.json` written by [`write_config`].
pub fn set_config_key(dir: &Path, key: &str, value: serde_json::Value) {
    let path = dir.join("config.json");
    let content = std::fs::read_to_string(&path).expect("Failed to read config");
    let mut config: serde_json::Value = serde_json::from_str(&content).expect("Invalid config");
    config
        .as_object_mut()
        .unwrap()
        .insert(key.to_string(), value);

    std::fs::write(&path, config.to_string()).expect("Failed to write config");
}

/// A chat-completion body whose first choice says `content`.
pub fn completion_body(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [
            {
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            }
        ]
    })
}
