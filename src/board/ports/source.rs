//! Issue source port: paginated retrieval of issues with event histories.

use crate::board::domain::Issue;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for issue source operations.
pub type IssueSourceResult<T> = Result<T, IssueSourceError>;

/// Paginated issue retrieval contract.
///
/// Pages are numbered from 1 and served newest-first with a fixed page
/// size; a page shorter than the page size signals exhaustion. Each issue's
/// event history is pre-sorted ascending by timestamp.
#[async_trait]
pub trait IssueSource: Send + Sync {
    /// Returns one page of issues with their event histories.
    ///
    /// # Errors
    ///
    /// Returns [`IssueSourceError`] when the tracker cannot be reached or
    /// returns an unusable response. Source failures are fatal to the run;
    /// there is no per-issue retry.
    async fn issues_page(&self, page: u32) -> IssueSourceResult<Vec<Issue>>;
}

/// Errors returned by issue source implementations.
#[derive(Debug, Clone, Error)]
pub enum IssueSourceError {
    /// The tracker could not be reached.
    #[error("tracker request failed: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The tracker rejected the request.
    #[error("tracker rejected the request with status {0}")]
    Rejected(u16),

    /// The tracker response could not be decoded.
    #[error("tracker response could not be decoded: {0}")]
    Decode(Arc<dyn std::error::Error + Send + Sync>),
}

impl IssueSourceError {
    /// Wraps a transport failure.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Wraps a response decoding failure.
    pub fn decode(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Decode(Arc::new(err))
    }
}
