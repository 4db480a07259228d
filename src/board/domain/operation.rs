//! Normalized board operations consumed by the timeline state machine.

use chrono::NaiveDate;

/// A board-relevant operation derived from one raw tracker event.
///
/// Produced by the event filter and consumed immediately by the timeline
/// builder; never retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardOperation {
    /// The issue entered a tracked board column.
    Enter {
        /// Column the issue entered.
        column: String,
        /// Column the issue came from, if any.
        previous_column: Option<String>,
        /// Date the move was recorded.
        date: NaiveDate,
    },
    /// The issue left the tracked board entirely; all recorded progress is
    /// discarded.
    Reset,
    /// The issue was closed.
    Closed {
        /// Date the closure was recorded.
        date: NaiveDate,
    },
}
