//! Write the generated report to its dated file.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::ReportError;

/// File name for the report generated on `date`: `周报_YYYY-MM-DD.txt`.
pub fn report_file_name(date: NaiveDate) -> String {
    format!("周报_{}.txt", date.format("%Y-%m-%d"))
}

/// Write `text` to `dir/周报_<date>.txt`, replacing any existing report.
///
/// A new file gets the process's default permissions; an existing one keeps its own.
pub fn write_report(dir: &Path, date: NaiveDate, text: &str) -> Result<PathBuf, ReportError> {
    let path = dir.join(report_file_name(date));

    std::fs::write(&path, text).map_err(|source| ReportError::Write {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}
