//! Full pipeline runs over in-memory adapters.
//!
//! Covers row production, closure backfill, empty-timeline filtering, and
//! the fatal/non-fatal error split between the three collaborators.

use crate::in_memory::helpers::{
    added_to, board_config, closed_on, day, in_progress_issue, moved_to, runtime, service,
    timestamp,
};
use rstest::rstest;
use stagecraft::board::{
    adapters::memory::InMemoryIssueSource,
    domain::{Issue, RawEvent, RawEventKind, Stage},
};
use stagecraft::report::{
    adapters::memory::{InMemoryNotifier, InMemoryRecordSink},
    services::StageReportError,
};
use std::io;
use tokio::runtime::Runtime;

/// Tests that a tracked issue yields one row with its stage entry dates.
#[rstest]
fn tracked_issue_produces_a_row(runtime: io::Result<Runtime>) {
    let rt = runtime.expect("runtime creation");
    let source = InMemoryIssueSource::new([in_progress_issue(107)], 50);
    let sink = InMemoryRecordSink::new();
    let notifier = InMemoryNotifier::new();
    let service = service(source, sink.clone(), notifier, board_config(1, 50));

    let summary = rt.block_on(service.run()).expect("run succeeds");

    assert_eq!(summary.issues_seen(), 1);
    assert_eq!(summary.rows_written(), 1);
    let reports = sink.reports().expect("captured reports");
    let report = reports.first().expect("one report written");
    let row = report.rows.first().expect("one row");
    assert_eq!(row.number(), 107);
    assert_eq!(row.title(), "Issue 107");
    assert_eq!(row.label(), Some("enhancement"));
    assert_eq!(row.stage_date(Stage::Backlog), Some(day(2)));
    assert_eq!(row.stage_date(Stage::Development), Some(day(5)));
    // Open issue with no later-stage entries: nothing to backfill from.
    assert_eq!(row.stage_date(Stage::ApprovedForTest), None);
    assert_eq!(row.stage_date(Stage::DeployedToTest), None);
    assert_eq!(row.stage_date(Stage::ApprovedForProd), None);
}

/// Tests that closure stands in for the final stage and backfills the gap.
#[rstest]
fn closed_issue_backfills_skipped_stages_from_the_closure_date(runtime: io::Result<Runtime>) {
    let rt = runtime.expect("runtime creation");
    let issue = Issue::new(108, "Issue 108")
        .with_closed_date(day(9))
        .with_events([added_to("Backlog", 1), closed_on(9)]);
    let source = InMemoryIssueSource::new([issue], 50);
    let sink = InMemoryRecordSink::new();
    let notifier = InMemoryNotifier::new();
    let service = service(source, sink.clone(), notifier, board_config(1, 50));

    rt.block_on(service.run()).expect("run succeeds");

    let reports = sink.reports().expect("captured reports");
    let report = reports.first().expect("one report written");
    let row = report.rows.first().expect("one row");
    assert_eq!(row.stage_date(Stage::Backlog), Some(day(1)));
    assert_eq!(row.stage_date(Stage::Development), Some(day(9)));
    assert_eq!(row.stage_date(Stage::ApprovedForTest), Some(day(9)));
    assert_eq!(row.stage_date(Stage::DeployedToTest), Some(day(9)));
    assert_eq!(row.stage_date(Stage::ApprovedForProd), Some(day(9)));
}

/// Tests that issues with no board history are counted but produce no row.
#[rstest]
fn issues_without_board_history_produce_no_row(runtime: io::Result<Runtime>) {
    let rt = runtime.expect("runtime creation");
    let issue = Issue::new(110, "Issue 110")
        .with_events([RawEvent::new(RawEventKind::Other, timestamp(3))]);
    let source = InMemoryIssueSource::new([issue], 50);
    let sink = InMemoryRecordSink::new();
    let notifier = InMemoryNotifier::new();
    let service = service(source, sink.clone(), notifier, board_config(1, 50));

    let summary = rt.block_on(service.run()).expect("run succeeds");

    assert_eq!(summary.issues_seen(), 1);
    assert_eq!(summary.rows_written(), 0);
    let reports = sink.reports().expect("captured reports");
    let report = reports.first().expect("report still written");
    assert!(report.rows.is_empty());
}

/// Tests that a board reset wipes progress so the issue yields no row.
#[rstest]
fn removal_from_the_board_discards_the_issue(runtime: io::Result<Runtime>) {
    let rt = runtime.expect("runtime creation");
    let issue = Issue::new(111, "Issue 111").with_events([
        added_to("Backlog", 1),
        moved_to("Development", Some("Backlog"), 2),
        RawEvent::new(RawEventKind::RemovedFromProject, timestamp(3)),
    ]);
    let source = InMemoryIssueSource::new([issue], 50);
    let sink = InMemoryRecordSink::new();
    let notifier = InMemoryNotifier::new();
    let service = service(source, sink.clone(), notifier, board_config(1, 50));

    let summary = rt.block_on(service.run()).expect("run succeeds");

    assert_eq!(summary.rows_written(), 0);
}

/// Tests that iteration stops at the first issue below the threshold.
#[rstest]
fn iteration_stops_below_the_issue_number_threshold(runtime: io::Result<Runtime>) {
    let rt = runtime.expect("runtime creation");
    let source = InMemoryIssueSource::new(
        [
            in_progress_issue(210),
            in_progress_issue(205),
            in_progress_issue(199),
            in_progress_issue(198),
        ],
        2,
    );
    let sink = InMemoryRecordSink::new();
    let notifier = InMemoryNotifier::new();
    let service = service(source, sink.clone(), notifier, board_config(200, 2));

    let summary = rt.block_on(service.run()).expect("run succeeds");

    assert_eq!(summary.issues_seen(), 2);
    let reports = sink.reports().expect("captured reports");
    let report = reports.first().expect("one report written");
    let numbers: Vec<u64> = report.rows.iter().map(|row| row.number()).collect();
    assert_eq!(numbers, vec![210, 205]);
}

/// Tests that the notifier receives the artifact the sink produced.
#[rstest]
fn notifier_receives_the_written_artifact(runtime: io::Result<Runtime>) {
    let rt = runtime.expect("runtime creation");
    let source = InMemoryIssueSource::new([in_progress_issue(107)], 50);
    let sink = InMemoryRecordSink::new();
    let notifier = InMemoryNotifier::new();
    let service = service(source, sink, notifier.clone(), board_config(1, 50));

    let summary = rt.block_on(service.run()).expect("run succeeds");

    let delivered = notifier.delivered().expect("delivered artifacts");
    let announced = delivered.first().expect("one notification");
    let artifact = summary.artifact().expect("artifact produced");
    assert_eq!(announced, artifact);
    assert!(artifact.name().starts_with("stage-report-"));
    assert!(artifact.name().ends_with(".csv"));
    assert_eq!(artifact.rows(), 1);
}

/// Tests that a sink failure is absorbed and suppresses notification.
#[rstest]
fn sink_failure_is_absorbed_and_skips_notification(runtime: io::Result<Runtime>) {
    let rt = runtime.expect("runtime creation");
    let source = InMemoryIssueSource::new([in_progress_issue(107)], 50);
    let sink = InMemoryRecordSink::failing();
    let notifier = InMemoryNotifier::new();
    let service = service(source, sink, notifier.clone(), board_config(1, 50));

    let summary = rt.block_on(service.run()).expect("run still succeeds");

    assert_eq!(summary.issues_seen(), 1);
    assert_eq!(summary.rows_written(), 0);
    assert!(summary.artifact().is_none());
    let delivered = notifier.delivered().expect("delivered artifacts");
    assert!(delivered.is_empty());
}

/// Tests that a notifier failure leaves the artifact and summary intact.
#[rstest]
fn notifier_failure_leaves_the_artifact_intact(runtime: io::Result<Runtime>) {
    let rt = runtime.expect("runtime creation");
    let source = InMemoryIssueSource::new([in_progress_issue(107)], 50);
    let sink = InMemoryRecordSink::new();
    let notifier = InMemoryNotifier::failing();
    let service = service(source, sink.clone(), notifier, board_config(1, 50));

    let summary = rt.block_on(service.run()).expect("run still succeeds");

    assert_eq!(summary.rows_written(), 1);
    assert!(summary.artifact().is_some());
    let reports = sink.reports().expect("captured reports");
    assert_eq!(reports.len(), 1);
}

/// Tests that a source failure aborts the run with no artifact.
#[rstest]
fn source_failure_aborts_the_run(runtime: io::Result<Runtime>) {
    let rt = runtime.expect("runtime creation");
    let source = InMemoryIssueSource::failing();
    let sink = InMemoryRecordSink::new();
    let notifier = InMemoryNotifier::new();
    let service = service(source, sink.clone(), notifier.clone(), board_config(1, 50));

    let result = rt.block_on(service.run());

    assert!(matches!(result, Err(StageReportError::Source(_))));
    let reports = sink.reports().expect("captured reports");
    assert!(reports.is_empty());
    let delivered = notifier.delivered().expect("delivered artifacts");
    assert!(delivered.is_empty());
}
