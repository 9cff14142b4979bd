//! Commit messages bucketed by calendar date.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::git::CommitRecord;

/// Line printed under each date block: 40 hyphens.
pub const BLOCK_SEPARATOR: &str = "----------------------------------------";

/// Messages per date. Dates iterate in ascending order; messages within a
/// date keep the order they were added in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedLog {
    by_date: BTreeMap<NaiveDate, Vec<String>>,
}

impl GroupedLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Group commits by `committed_date`, preserving traversal order.
    pub fn from_commits<'a>(commits: impl IntoIterator<Item = &'a CommitRecord>) -> Self {
        let mut log = Self::new();
        for commit in commits {
            log.push(commit.committed_date, commit.message.clone());
        }
        log
    }

    pub fn push(&mut self, date: NaiveDate, message: String) {
        self.by_date.entry(date).or_default().push(message);
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }

    /// Number of distinct dates.
    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    pub fn messages(&self, date: NaiveDate) -> Option<&[String]> {
        self.by_date.get(&date).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &Vec<String>)> {
        self.by_date.iter()
    }

    /// Render as the text block sent to the model.
    ///
    /// ```text
    /// 提交日期: 2024-03-04
    /// 提交信息: fix bug, add feature
    /// ----------------------------------------
    /// ```
    ///
    /// An empty log renders as the empty string.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (date, messages) in &self.by_date {
            out.push_str(&format!("提交日期: {}\n", date.format("%Y-%m-%d")));
            out.push_str(&format!("提交信息: {}\n", messages.join(", ")));
            out.push_str(BLOCK_SEPARATOR);
            out.push('\n');
        }
        out
    }
}
