//! Orchestration of the event-to-report pipeline for one run.

use crate::board::domain::{BoardConfig, EventFilter, Issue, TimelineBuilder};
use crate::board::ports::{IssueSource, IssueSourceError};
use crate::board::services::IssuePager;
use crate::report::domain::{ColumnProjector, StageRow, backfill};
use crate::report::ports::{Notifier, RecordSink, ReportArtifact};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info};

/// Outcome of one report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    issues_seen: usize,
    rows_written: usize,
    artifact: Option<ReportArtifact>,
}

impl ReportSummary {
    /// Returns how many issues were pulled from the source.
    #[must_use]
    pub const fn issues_seen(&self) -> usize {
        self.issues_seen
    }

    /// Returns how many rows made it into the artifact; zero when the sink
    /// failed.
    #[must_use]
    pub const fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Returns the produced artifact, when the sink succeeded.
    #[must_use]
    pub const fn artifact(&self) -> Option<&ReportArtifact> {
        self.artifact.as_ref()
    }
}

/// Service-level errors for report runs.
///
/// Only source failures abort a run; sink and notifier failures are logged
/// and absorbed.
#[derive(Debug, Error)]
pub enum StageReportError {
    /// The issue source failed; no partial result is salvaged.
    #[error(transparent)]
    Source(#[from] IssueSourceError),
}

/// Drives the full pipeline: issue iteration, per-issue timeline
/// reconstruction, projection, backfill, serialization, and notification.
#[derive(Clone)]
pub struct StageReportService<S, K, N, C>
where
    S: IssueSource,
    K: RecordSink,
    N: Notifier,
    C: Clock + Send + Sync,
{
    source: Arc<S>,
    sink: Arc<K>,
    notifier: Arc<N>,
    clock: Arc<C>,
    config: BoardConfig,
}

impl<S, K, N, C> StageReportService<S, K, N, C>
where
    S: IssueSource,
    K: RecordSink,
    N: Notifier,
    C: Clock + Send + Sync,
{
    /// Creates a report service over the given collaborators.
    #[must_use]
    pub const fn new(
        source: Arc<S>,
        sink: Arc<K>,
        notifier: Arc<N>,
        clock: Arc<C>,
        config: BoardConfig,
    ) -> Self {
        Self {
            source,
            sink,
            notifier,
            clock,
            config,
        }
    }

    /// Runs the pipeline once and returns a summary.
    ///
    /// Processing within an issue is strictly sequential; operation order
    /// determines correctness. Issues whose reconstructed timeline is empty
    /// produce no row.
    ///
    /// # Errors
    ///
    /// Returns [`StageReportError::Source`] when issue retrieval fails; the
    /// run aborts with no partial artifact.
    pub async fn run(&self) -> Result<ReportSummary, StageReportError> {
        let mut pager = IssuePager::new(
            self.source.as_ref(),
            self.config.page_size(),
            self.config.min_issue_number(),
        );

        let mut rows = Vec::new();
        let mut issues_seen = 0usize;
        while let Some(issue) = pager.next_issue().await? {
            issues_seen += 1;
            if let Some(row) = self.build_row(&issue) {
                rows.push(row);
            }
        }
        info!(issues_seen, rows = rows.len(), "timelines reconstructed");

        let artifact = self.write_report(&rows).await;
        if let Some(reference) = &artifact {
            self.announce(reference).await;
        }
        Ok(ReportSummary {
            issues_seen,
            rows_written: artifact.as_ref().map_or(0, ReportArtifact::rows),
            artifact,
        })
    }

    fn build_row(&self, issue: &Issue) -> Option<StageRow> {
        let filter = EventFilter::new(&self.config);
        let mut builder = TimelineBuilder::new(self.config.stages());
        for operation in filter.operations(issue.events()) {
            builder.apply(operation);
        }
        let timeline = builder.finish();
        if timeline.is_empty() {
            debug!(
                issue = issue.number(),
                "issue never entered the tracked pipeline"
            );
            return None;
        }
        let projector = ColumnProjector::new(self.config.stages());
        let mut row = projector.project(issue, &timeline);
        backfill(&mut row);
        Some(row)
    }

    async fn write_report(&self, rows: &[StageRow]) -> Option<ReportArtifact> {
        let artifact_name = format!(
            "stage-report-{}.csv",
            self.clock.utc().format("%Y-%m-%d")
        );
        match self.sink.write_rows(&artifact_name, rows).await {
            Ok(artifact) => {
                info!(
                    rows = artifact.rows(),
                    location = artifact.location(),
                    "stage report written"
                );
                Some(artifact)
            }
            Err(err) => {
                error!(error = %err, "record sink failed; run continues without an artifact");
                None
            }
        }
    }

    async fn announce(&self, artifact: &ReportArtifact) {
        if let Err(err) = self.notifier.notify(artifact).await {
            error!(error = %err, "notification failed; the report artifact remains valid");
        }
    }
}
