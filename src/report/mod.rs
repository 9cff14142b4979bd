//! Grouping commits into a log and saving the generated report.

pub mod log;
pub mod prompt;
pub mod writer;

pub use log::GroupedLog;
pub use prompt::SYSTEM_PROMPT;
pub use writer::{report_file_name, write_report};
