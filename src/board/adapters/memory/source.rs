//! In-memory issue source for pipeline tests.

use crate::board::domain::Issue;
use crate::board::ports::{IssueSource, IssueSourceError, IssueSourceResult};
use async_trait::async_trait;

/// Issue source serving a fixed issue list in pages.
///
/// Issues are served in the order given, which mirrors the tracker's
/// newest-first ordering when callers seed descending issue numbers.
#[derive(Debug, Clone, Default)]
pub struct InMemoryIssueSource {
    issues: Vec<Issue>,
    page_size: usize,
    fail: bool,
}

impl InMemoryIssueSource {
    /// Creates a source serving the given issues with the given page size.
    #[must_use]
    pub fn new(issues: impl IntoIterator<Item = Issue>, page_size: usize) -> Self {
        Self {
            issues: issues.into_iter().collect(),
            page_size,
            fail: false,
        }
    }

    /// Creates a source whose every request fails, for fatal-error tests.
    #[must_use]
    pub const fn failing() -> Self {
        Self {
            issues: Vec::new(),
            page_size: 1,
            fail: true,
        }
    }
}

#[async_trait]
impl IssueSource for InMemoryIssueSource {
    async fn issues_page(&self, page: u32) -> IssueSourceResult<Vec<Issue>> {
        if self.fail {
            return Err(IssueSourceError::transport(std::io::Error::other(
                "simulated tracker outage",
            )));
        }
        let start = usize::try_from(page.max(1) - 1)
            .unwrap_or(usize::MAX)
            .saturating_mul(self.page_size);
        Ok(self
            .issues
            .iter()
            .skip(start)
            .take(self.page_size)
            .cloned()
            .collect())
    }
}
