//! Lazy pull-based issue iteration with cooperative cancellation.

use crate::board::domain::Issue;
use crate::board::ports::{IssueSource, IssueSourceResult};
use std::collections::VecDeque;

/// Pull-based sequence of issues drawn from a paginated source.
///
/// The caller pulls one issue at a time; the pager fetches pages on demand
/// and stops — without error — at the first issue below the configured
/// number threshold or when the source serves a short page. Once stopped it
/// never requests another page, so cancellation needs no shared flag.
#[derive(Debug)]
pub struct IssuePager<'a, S>
where
    S: IssueSource,
{
    source: &'a S,
    page_size: usize,
    min_issue_number: u64,
    buffer: VecDeque<Issue>,
    next_page: u32,
    source_exhausted: bool,
    stopped: bool,
}

impl<'a, S> IssuePager<'a, S>
where
    S: IssueSource,
{
    /// Creates a pager over the source.
    #[must_use]
    pub const fn new(source: &'a S, page_size: usize, min_issue_number: u64) -> Self {
        Self {
            source,
            page_size,
            min_issue_number,
            buffer: VecDeque::new(),
            next_page: 1,
            source_exhausted: false,
            stopped: false,
        }
    }

    /// Returns the next issue, fetching a page when the buffer runs dry.
    ///
    /// Returns `Ok(None)` once the sequence is finished; further calls keep
    /// returning `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Propagates source failures unchanged; these are fatal to the run.
    pub async fn next_issue(&mut self) -> IssueSourceResult<Option<Issue>> {
        loop {
            if self.stopped {
                return Ok(None);
            }
            if let Some(issue) = self.buffer.pop_front() {
                if issue.number() < self.min_issue_number {
                    self.stopped = true;
                    self.buffer.clear();
                    return Ok(None);
                }
                return Ok(Some(issue));
            }
            if self.source_exhausted {
                self.stopped = true;
                return Ok(None);
            }
            let page = self.source.issues_page(self.next_page).await?;
            self.next_page += 1;
            if page.len() < self.page_size {
                self.source_exhausted = true;
            }
            self.buffer.extend(page);
        }
    }
}
