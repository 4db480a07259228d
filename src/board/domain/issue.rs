//! Issue identity paired with its raw event history.

use super::RawEvent;
use chrono::NaiveDate;

/// One tracked issue together with its chronologically-ascending event
/// history.
///
/// Read-only input to the pipeline; the core never mutates or re-fetches an
/// issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    number: u64,
    title: String,
    label: Option<String>,
    closed_date: Option<NaiveDate>,
    events: Vec<RawEvent>,
}

impl Issue {
    /// Creates an issue with no label, closure, or events.
    #[must_use]
    pub fn new(number: u64, title: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
            label: None,
            closed_date: None,
            events: Vec::new(),
        }
    }

    /// Sets the issue label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the date the issue was closed.
    #[must_use]
    pub const fn with_closed_date(mut self, closed_date: NaiveDate) -> Self {
        self.closed_date = Some(closed_date);
        self
    }

    /// Sets the raw event history, assumed pre-sorted ascending by
    /// timestamp.
    #[must_use]
    pub fn with_events(mut self, events: impl IntoIterator<Item = RawEvent>) -> Self {
        self.events = events.into_iter().collect();
        self
    }

    /// Returns the tracker-assigned issue number.
    #[must_use]
    pub const fn number(&self) -> u64 {
        self.number
    }

    /// Returns the issue title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the issue label, if any.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the date the issue was closed, if it has been.
    #[must_use]
    pub const fn closed_date(&self) -> Option<NaiveDate> {
        self.closed_date
    }

    /// Returns the raw event history.
    #[must_use]
    pub fn events(&self) -> &[RawEvent] {
        &self.events
    }
}
