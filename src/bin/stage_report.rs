//! Produces and dispatches the stage report for a configured repository.
//!
//! Usage:
//!
//! ```text
//! stage_report <config-path>
//! ```
//!
//! The JSON payload at `config-path` must serialize a [`RunPayload`]. A
//! representative payload is:
//!
//! ```json
//! {
//!   "board": {
//!     "project_id": 4207,
//!     "ignored_columns": ["Inbox", "Triage"],
//!     "stages": {
//!       "backlog": "Backlog",
//!       "development": "Development",
//!       "approved_for_test": "Approved for test",
//!       "deployed_to_test": "Deployed to test",
//!       "approved_for_prod": "Approved for prod"
//!     },
//!     "min_issue_number": 1500,
//!     "page_size": 50
//!   },
//!   "source": {
//!     "api_base": "https://api.github.com",
//!     "owner": "acme",
//!     "repo": "widgets",
//!     "token": null,
//!     "page_size": 50
//!   },
//!   "sink": {
//!     "output_dir": "/var/reports",
//!     "delimiter": ";"
//!   },
//!   "notifier": {
//!     "endpoint": "https://mail.internal/send",
//!     "sender": "reports@acme.example",
//!     "recipients": ["delivery-team@acme.example"],
//!     "subject": "Weekly stage report"
//!   }
//! }
//! ```

use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use mockable::DefaultClock;
use serde::Deserialize;
use stagecraft::board::adapters::{GithubIssueSource, GithubSourceSettings};
use stagecraft::board::domain::{BoardConfig, BoardConfigError, StageCatalog};
use stagecraft::board::ports::IssueSourceError;
use stagecraft::report::adapters::{DelimitedFileSink, MailGatewayNotifier, MailGatewaySettings};
use stagecraft::report::ports::NotifierError;
use stagecraft::report::services::{StageReportError, StageReportService};
use std::env;
use std::sync::Arc;
use thiserror::Error;
use tokio::runtime::Builder;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while running the report.
#[derive(Debug, Error)]
enum RunnerError {
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
    #[error("failed to read run config: {0}")]
    ConfigRead(#[source] std::io::Error),
    #[error("failed to parse run config: {0}")]
    ConfigParse(#[source] serde_json::Error),
    #[error("invalid board configuration: {0}")]
    BoardConfig(#[from] BoardConfigError),
    #[error("failed to open output directory: {0}")]
    OutputDir(#[source] std::io::Error),
    #[error("failed to construct issue source: {0}")]
    Source(#[from] IssueSourceError),
    #[error("failed to construct notifier: {0}")]
    Notifier(#[from] NotifierError),
    #[error("runtime init failed: {0}")]
    RuntimeInit(#[source] std::io::Error),
    #[error("report run failed: {0}")]
    Report(#[from] StageReportError),
}

/// Top-level run configuration payload.
#[derive(Debug, Deserialize)]
struct RunPayload {
    board: BoardSection,
    source: GithubSourceSettings,
    sink: SinkSection,
    notifier: MailGatewaySettings,
}

#[derive(Debug, Deserialize)]
struct BoardSection {
    project_id: u64,
    ignored_columns: Vec<String>,
    stages: StageSection,
    min_issue_number: u64,
    page_size: usize,
}

#[derive(Debug, Deserialize)]
struct StageSection {
    backlog: String,
    development: String,
    approved_for_test: String,
    deployed_to_test: String,
    approved_for_prod: String,
}

#[derive(Debug, Deserialize)]
struct SinkSection {
    output_dir: String,
    delimiter: char,
}

fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    run(env::args()).map_err(Into::into)
}

fn run(args: impl Iterator<Item = String>) -> Result<(), RunnerError> {
    let config_path = parse_args(args)?;
    let payload = load_payload(&config_path)?;

    let board = board_config(payload.board)?;
    let source = Arc::new(GithubIssueSource::new(payload.source)?);
    let output_dir = Dir::open_ambient_dir(&payload.sink.output_dir, ambient_authority())
        .map_err(RunnerError::OutputDir)?;
    let sink = Arc::new(DelimitedFileSink::new(output_dir, payload.sink.delimiter));
    let notifier = Arc::new(MailGatewayNotifier::new(payload.notifier)?);

    let service = StageReportService::new(source, sink, notifier, Arc::new(DefaultClock), board);
    let runtime = Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(RunnerError::RuntimeInit)?;
    let summary = runtime.block_on(service.run())?;
    info!(
        issues_seen = summary.issues_seen(),
        rows_written = summary.rows_written(),
        "report run finished"
    );
    Ok(())
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<String, RunnerError> {
    let program = args.next();
    let config_path = args.next().ok_or_else(|| {
        RunnerError::InvalidArgs(format!(
            "usage: {} <config-path>",
            program.as_deref().unwrap_or("stage_report")
        ))
    })?;
    if args.next().is_some() {
        return Err(RunnerError::InvalidArgs(
            "expected exactly one argument".to_owned(),
        ));
    }
    Ok(config_path)
}

fn load_payload(config_path: &str) -> Result<RunPayload, RunnerError> {
    let raw = std::fs::read_to_string(config_path).map_err(RunnerError::ConfigRead)?;
    serde_json::from_str(&raw).map_err(RunnerError::ConfigParse)
}

fn board_config(section: BoardSection) -> Result<BoardConfig, RunnerError> {
    let stages = StageCatalog::new(
        section.stages.backlog,
        section.stages.development,
        section.stages.approved_for_test,
        section.stages.deployed_to_test,
        section.stages.approved_for_prod,
    )?;
    Ok(BoardConfig::new(
        section.project_id,
        section.ignored_columns,
        stages,
        section.min_issue_number,
        section.page_size,
    )?)
}
