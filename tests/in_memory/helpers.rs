//! Shared test helpers for in-memory pipeline integration tests.

use chrono::{DateTime, NaiveDate, Utc};
use mockable::DefaultClock;
use rstest::fixture;
use stagecraft::board::{
    adapters::memory::InMemoryIssueSource,
    domain::{BoardConfig, Issue, ProjectCard, RawEvent, RawEventKind, StageCatalog},
};
use stagecraft::report::{
    adapters::memory::{InMemoryNotifier, InMemoryRecordSink},
    services::StageReportService,
};
use std::io;
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Project board identifier shared by all test events.
pub const PROJECT_ID: u64 = 4207;

/// Provides a tokio runtime for async operations in tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
#[fixture]
pub fn runtime() -> io::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Builds a board configuration over the standard stage catalog.
///
/// # Panics
///
/// Panics when the configuration is rejected; test inputs are fixed and
/// valid.
#[must_use]
pub fn board_config(min_issue_number: u64, page_size: usize) -> BoardConfig {
    BoardConfig::new(
        PROJECT_ID,
        vec!["Inbox".to_owned()],
        StageCatalog::standard(),
        min_issue_number,
        page_size,
    )
    .expect("valid board configuration")
}

/// Returns a fixed event timestamp on the given January 2024 day.
///
/// # Panics
///
/// Panics on out-of-range days; test inputs are fixed and valid.
#[must_use]
pub fn timestamp(day: u32) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(&format!("2024-01-{day:02}T09:30:00Z"))
        .expect("valid timestamp")
        .with_timezone(&Utc)
}

/// Returns the calendar date of [`timestamp`] for the same day.
#[must_use]
pub fn day(day: u32) -> NaiveDate {
    timestamp(day).date_naive()
}

/// Builds a board move event landing in `column` on the given day.
#[must_use]
pub fn moved_to(column: &str, previous: Option<&str>, day_of_month: u32) -> RawEvent {
    RawEvent::new(RawEventKind::MovedColumnsInProject, timestamp(day_of_month)).with_project_card(
        ProjectCard {
            project_id: Some(PROJECT_ID),
            column_name: Some(column.to_owned()),
            previous_column_name: previous.map(str::to_owned),
        },
    )
}

/// Builds a board addition event landing in `column` on the given day.
#[must_use]
pub fn added_to(column: &str, day_of_month: u32) -> RawEvent {
    RawEvent::new(RawEventKind::AddedToProject, timestamp(day_of_month)).with_project_card(
        ProjectCard {
            project_id: Some(PROJECT_ID),
            column_name: Some(column.to_owned()),
            previous_column_name: None,
        },
    )
}

/// Builds a closure event on the given day.
#[must_use]
pub fn closed_on(day_of_month: u32) -> RawEvent {
    RawEvent::new(RawEventKind::Closed, timestamp(day_of_month))
}

/// Wires a report service over the given in-memory collaborators.
#[must_use]
pub fn service(
    source: InMemoryIssueSource,
    sink: InMemoryRecordSink,
    notifier: InMemoryNotifier,
    config: BoardConfig,
) -> StageReportService<InMemoryIssueSource, InMemoryRecordSink, InMemoryNotifier, DefaultClock> {
    StageReportService::new(
        Arc::new(source),
        Arc::new(sink),
        Arc::new(notifier),
        Arc::new(DefaultClock),
        config,
    )
}

/// Builds an open issue that progressed from backlog into development.
#[must_use]
pub fn in_progress_issue(number: u64) -> Issue {
    Issue::new(number, format!("Issue {number}"))
        .with_label("enhancement")
        .with_events([
            added_to("Backlog", 2),
            moved_to("Development", Some("Backlog"), 5),
        ])
}
