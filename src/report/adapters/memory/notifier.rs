//! In-memory notifier for pipeline tests.

use crate::report::ports::{Notifier, NotifierError, NotifierResult, ReportArtifact};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// Thread-safe recording notifier.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNotifier {
    delivered: Arc<RwLock<Vec<ReportArtifact>>>,
    fail: bool,
}

impl InMemoryNotifier {
    /// Creates an empty recording notifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a notifier whose every dispatch fails, for non-fatal error
    /// tests.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            delivered: Arc::default(),
            fail: true,
        }
    }

    /// Returns the artifacts announced so far, in dispatch order.
    ///
    /// # Errors
    ///
    /// Returns [`NotifierError::Delivery`] when the recording lock is
    /// poisoned.
    pub fn delivered(&self) -> NotifierResult<Vec<ReportArtifact>> {
        let delivered = self
            .delivered
            .read()
            .map_err(|err| NotifierError::delivery(std::io::Error::other(err.to_string())))?;
        Ok(delivered.clone())
    }
}

#[async_trait]
impl Notifier for InMemoryNotifier {
    async fn notify(&self, artifact: &ReportArtifact) -> NotifierResult<()> {
        if self.fail {
            return Err(NotifierError::delivery(std::io::Error::other(
                "simulated delivery failure",
            )));
        }
        let mut delivered = self
            .delivered
            .write()
            .map_err(|err| NotifierError::delivery(std::io::Error::other(err.to_string())))?;
        delivered.push(artifact.clone());
        Ok(())
    }
}
