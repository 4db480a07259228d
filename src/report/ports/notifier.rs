//! Notifier port: dispatching the produced report to its recipients.

use super::ReportArtifact;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for notifier operations.
pub type NotifierResult<T> = Result<T, NotifierError>;

/// Notification dispatch contract.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Announces the produced artifact to the fixed recipient set.
    ///
    /// # Errors
    ///
    /// Returns [`NotifierError`] when delivery fails. A failed notification
    /// is logged by the caller and never invalidates the artifact.
    async fn notify(&self, artifact: &ReportArtifact) -> NotifierResult<()>;
}

/// Errors returned by notifier implementations.
#[derive(Debug, Clone, Error)]
pub enum NotifierError {
    /// The notification body could not be rendered.
    #[error("failed to render notification body: {0}")]
    Render(String),

    /// The notification could not be delivered.
    #[error("notification delivery failed: {0}")]
    Delivery(Arc<dyn std::error::Error + Send + Sync>),

    /// The delivery channel rejected the notification.
    #[error("notification rejected with status {0}")]
    Rejected(u16),
}

impl NotifierError {
    /// Wraps a delivery failure.
    pub fn delivery(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Delivery(Arc::new(err))
    }
}
