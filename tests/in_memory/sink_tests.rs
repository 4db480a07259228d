//! Delimited file rendering tests for the directory-scoped sink.

use crate::in_memory::helpers::runtime;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use chrono::NaiveDate;
use rstest::rstest;
use stagecraft::board::domain::Stage;
use stagecraft::report::adapters::DelimitedFileSink;
use stagecraft::report::domain::StageRow;
use stagecraft::report::ports::RecordSink;
use std::io;
use tempfile::TempDir;
use tokio::runtime::Runtime;

fn scoped_dir(tmp: &TempDir) -> Dir {
    let path = tmp.path().to_str().expect("utf-8 temp path");
    Dir::open_ambient_dir(path, ambient_authority()).expect("open temp dir")
}

fn sample_row() -> StageRow {
    let mut row = StageRow::new(107, "Add retry logic", Some("enhancement".to_owned()));
    row.set_stage_date(
        Stage::Backlog,
        NaiveDate::from_ymd_opt(2024, 1, 2).expect("valid date"),
    );
    row.set_stage_date(
        Stage::Development,
        NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date"),
    );
    row
}

/// Tests that the sink writes a header line plus one line per row.
#[rstest]
fn report_renders_header_and_rows(runtime: io::Result<Runtime>) {
    let rt = runtime.expect("runtime creation");
    let tmp = TempDir::new().expect("temp dir");
    let sink = DelimitedFileSink::new(scoped_dir(&tmp), ';');

    let artifact = rt
        .block_on(sink.write_rows("report.csv", &[sample_row()]))
        .expect("write succeeds");

    assert_eq!(artifact.rows(), 1);
    let content = std::fs::read_to_string(tmp.path().join("report.csv")).expect("read back");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Number;Title;Label;Backlog;Development;ApprovedForTest;DeployedToTest;ApprovedForProd",
            "107;Add retry logic;enhancement;2024-01-02;2024-01-15;;;",
        ]
    );
}

/// Tests that delimiter and line-break characters in cells become spaces.
#[rstest]
fn cells_are_sanitized_against_structural_characters(runtime: io::Result<Runtime>) {
    let rt = runtime.expect("runtime creation");
    let tmp = TempDir::new().expect("temp dir");
    let sink = DelimitedFileSink::new(scoped_dir(&tmp), ';');
    let row = StageRow::new(5, "Fix; then\nretest", None);

    rt.block_on(sink.write_rows("report.csv", &[row]))
        .expect("write succeeds");

    let content = std::fs::read_to_string(tmp.path().join("report.csv")).expect("read back");
    let data_line = content.lines().nth(1).expect("data line present");
    assert_eq!(data_line, "5;Fix  then retest;;;;;;");
}

/// Tests that an empty run still produces an artifact with just the header.
#[rstest]
fn empty_report_still_carries_the_header(runtime: io::Result<Runtime>) {
    let rt = runtime.expect("runtime creation");
    let tmp = TempDir::new().expect("temp dir");
    let sink = DelimitedFileSink::new(scoped_dir(&tmp), ';');

    let artifact = rt
        .block_on(sink.write_rows("report.csv", &[]))
        .expect("write succeeds");

    assert_eq!(artifact.rows(), 0);
    let content = std::fs::read_to_string(tmp.path().join("report.csv")).expect("read back");
    assert_eq!(content.lines().count(), 1);
}
