//! In-memory record sink for pipeline tests.

use crate::report::domain::StageRow;
use crate::report::ports::{RecordSink, RecordSinkError, RecordSinkResult, ReportArtifact};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// A report captured by the in-memory sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedReport {
    /// Artifact name the report was written under.
    pub name: String,
    /// The rows, in output order.
    pub rows: Vec<StageRow>,
}

/// Thread-safe recording sink.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordSink {
    reports: Arc<RwLock<Vec<CapturedReport>>>,
    fail: bool,
}

impl InMemoryRecordSink {
    /// Creates an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sink whose every write fails, for non-fatal error tests.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            reports: Arc::default(),
            fail: true,
        }
    }

    /// Returns the captured reports in write order.
    ///
    /// # Errors
    ///
    /// Returns [`RecordSinkError::Write`] when the recording lock is
    /// poisoned.
    pub fn reports(&self) -> RecordSinkResult<Vec<CapturedReport>> {
        let reports = self
            .reports
            .read()
            .map_err(|err| RecordSinkError::write(std::io::Error::other(err.to_string())))?;
        Ok(reports.clone())
    }
}

#[async_trait]
impl RecordSink for InMemoryRecordSink {
    async fn write_rows(
        &self,
        artifact_name: &str,
        rows: &[StageRow],
    ) -> RecordSinkResult<ReportArtifact> {
        if self.fail {
            return Err(RecordSinkError::write(std::io::Error::other(
                "simulated sink failure",
            )));
        }
        let mut reports = self
            .reports
            .write()
            .map_err(|err| RecordSinkError::write(std::io::Error::other(err.to_string())))?;
        reports.push(CapturedReport {
            name: artifact_name.to_owned(),
            rows: rows.to_vec(),
        });
        Ok(ReportArtifact::new(
            artifact_name,
            format!("memory://{artifact_name}"),
            rows.len(),
        ))
    }
}
