//! The report pipeline: config, commits, model, file.

use std::path::PathBuf;

use chrono::{DateTime, Local, Utc};
use tracing::debug;

use crate::config::Config;
use crate::error::{AppError, ReportError};
use crate::git::{CommitCollector, IdentityResolver, LOOKBACK_DAYS, TimeWindow};
use crate::llm::{ChatTransport, ReportClient};
use crate::report::{GroupedLog, write_report};

/// Printed when the window holds no commits by the current user.
pub const NO_COMMITS_MESSAGE: &str = "没有获取到Git提交日志，是不是又摸鱼了(●'◡'●)";

/// Inputs for one run that do not come from `config.json`.
pub struct RunContext<'a> {
    pub config_path: PathBuf,
    /// Directory the report file is written to.
    pub output_dir: PathBuf,
    pub identity: &'a dyn IdentityResolver,
    /// End of the lookback window, and the date in the report file name.
    pub now: DateTime<Local>,
}

/// How a run ended when nothing failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// No commits in the window. Nothing was sent or written.
    NoCommits,
    /// The report was written to `path`.
    Written { path: PathBuf, report: String },
}

/// Run the pipeline once.
///
/// `connect` builds the transport from the loaded config. It is only called
/// when there is a non-empty log to send.
pub async fn run<T, F>(ctx: &RunContext<'_>, connect: F) -> Result<RunOutcome, AppError>
where
    T: ChatTransport,
    F: FnOnce(&Config) -> Result<T, ReportError>,
{
    let config = Config::load(&ctx.config_path)?;
    debug!("Loaded config from {}", ctx.config_path.display());

    let window = TimeWindow::last_days(ctx.now.with_timezone(&Utc), LOOKBACK_DAYS);
    let collected = CommitCollector::new(&config.repo_path, ctx.identity, window)
        .with_branch(config.default_branch.as_deref())
        .collect()?;
    println!("{}", user_name_line(&collected.user_name));

    let log = GroupedLog::from_commits(&collected.commits).render();
    if log.is_empty() {
        println!("{}", NO_COMMITS_MESSAGE);
        return Ok(RunOutcome::NoCommits);
    }
    println!("{}", log_line(&log));

    println!("开始生成周报_...");
    let transport = connect(&config)?;
    let report = ReportClient::from_config(&transport, &config)
        .generate(&log)
        .await?;

    let path = write_report(&ctx.output_dir, ctx.now.date_naive(), &report)?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    println!("生成成功，已保存到 '{}' 文件中", file_name);

    Ok(RunOutcome::Written { path, report })
}

fn user_name_line(user_name: &str) -> String {
    format!("当前用户的Git配置用户名： {}", user_name)
}

fn log_line(log: &str) -> String {
    format!("获取到Git提交日志： {}", log)
}
