//! Timeline reconstruction: the per-issue stage-entry state machine.

use super::{BoardOperation, StageCatalog};
use chrono::NaiveDate;

/// A dated record of an issue entering a board column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnEntry {
    column: String,
    date: NaiveDate,
}

impl ColumnEntry {
    /// Creates an entry for a column reached on a date.
    #[must_use]
    pub fn new(column: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            column: column.into(),
            date,
        }
    }

    /// Returns the column name.
    #[must_use]
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Returns the date the column was entered.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }
}

/// An issue's reconstructed column history, in arrival order.
///
/// Holds at most one entry per column name. Arrival order is preserved; it
/// is not necessarily the canonical stage order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Timeline {
    entries: Vec<ColumnEntry>,
}

impl Timeline {
    /// Returns the entries in arrival order.
    #[must_use]
    pub fn entries(&self) -> &[ColumnEntry] {
        &self.entries
    }

    /// Whether the issue never meaningfully entered the tracked pipeline.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether an entry exists for the given column name.
    #[must_use]
    pub fn contains_column(&self, column: &str) -> bool {
        self.entries.iter().any(|entry| entry.column == column)
    }

    /// Returns the entry for a column name, if present.
    #[must_use]
    pub fn entry(&self, column: &str) -> Option<&ColumnEntry> {
        self.entries.iter().find(|entry| entry.column == column)
    }
}

/// State machine folding board operations into a [`Timeline`].
///
/// Operations must be applied strictly in the upstream chronological order;
/// the builder trusts that order and never re-sorts by timestamp.
#[derive(Debug, Clone)]
pub struct TimelineBuilder<'a> {
    catalog: &'a StageCatalog,
    timeline: Timeline,
}

impl<'a> TimelineBuilder<'a> {
    /// Creates a builder with an empty timeline.
    #[must_use]
    pub const fn new(catalog: &'a StageCatalog) -> Self {
        Self {
            catalog,
            timeline: Timeline {
                entries: Vec::new(),
            },
        }
    }

    /// Applies one board operation.
    pub fn apply(&mut self, operation: BoardOperation) {
        match operation {
            BoardOperation::Reset => self.timeline.entries.clear(),
            BoardOperation::Closed { date } => self.apply_closed(date),
            BoardOperation::Enter {
                column,
                previous_column,
                date,
            } => self.apply_enter(&column, previous_column.as_deref(), date),
        }
    }

    /// Consumes the builder and returns the final timeline.
    #[must_use]
    pub fn finish(self) -> Timeline {
        self.timeline
    }

    /// Closure appends a final-stage entry, but only when the issue has
    /// board history and has not already reached the final stage. A closure
    /// with no prior history never fabricates one.
    fn apply_closed(&mut self, date: NaiveDate) {
        if self.timeline.is_empty() {
            return;
        }
        let last_label = self.catalog.last_label();
        if self.timeline.contains_column(last_label) {
            return;
        }
        self.timeline
            .entries
            .push(ColumnEntry::new(last_label, date));
    }

    fn apply_enter(&mut self, column: &str, previous_column: Option<&str>, date: NaiveDate) {
        if !self.timeline.contains_column(column) {
            self.timeline.entries.push(ColumnEntry::new(column, date));
            return;
        }

        // Re-entering a previously occupied column: the card moved backward
        // and returned. Progress recorded beyond `column`, up through the
        // column it came back from, is no longer valid.
        let Some(origin) = previous_column.and_then(|previous| self.catalog.stage_of(previous))
        else {
            return;
        };

        // The removal range starts strictly after `column`, so the existing
        // entry for `column` survives with its original date; the new date
        // is discarded.
        let reentered = self.catalog.stage_of(column);
        let invalidated: Vec<String> = self
            .catalog
            .labels_between(reentered, origin)
            .map(str::to_owned)
            .collect();
        self.timeline
            .entries
            .retain(|entry| !invalidated.iter().any(|label| label == &entry.column));
    }
}
