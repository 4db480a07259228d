//! Record sink port: delimited serialization of the finished report.

use crate::report::domain::StageRow;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for record sink operations.
pub type RecordSinkResult<T> = Result<T, RecordSinkError>;

/// Reference to a produced report artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportArtifact {
    name: String,
    location: String,
    rows: usize,
}

impl ReportArtifact {
    /// Creates an artifact reference.
    #[must_use]
    pub fn new(name: impl Into<String>, location: impl Into<String>, rows: usize) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            rows,
        }
    }

    /// Returns the artifact name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns where the artifact was written.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns the number of data rows the artifact holds.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }
}

/// Serialization contract for the finished report.
#[async_trait]
pub trait RecordSink: Send + Sync {
    /// Writes the ordered rows under the fixed report header.
    ///
    /// # Errors
    ///
    /// Returns [`RecordSinkError`] when the artifact cannot be produced.
    /// Sink failures are logged by the caller and never abort the run.
    async fn write_rows(
        &self,
        artifact_name: &str,
        rows: &[StageRow],
    ) -> RecordSinkResult<ReportArtifact>;
}

/// Errors returned by record sink implementations.
#[derive(Debug, Clone, Error)]
pub enum RecordSinkError {
    /// The artifact could not be written.
    #[error("failed to write report artifact: {0}")]
    Write(Arc<dyn std::error::Error + Send + Sync>),
}

impl RecordSinkError {
    /// Wraps a write failure.
    pub fn write(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Write(Arc::new(err))
    }
}
