//! Raw tracker events as recorded in an issue's per-issue history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind tag of a raw tracker event.
///
/// Only the variants below are board-relevant; every other kind the tracker
/// emits deserializes to [`RawEventKind::Other`] and is ignored by the
/// filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RawEventKind {
    /// The issue was added to a project board.
    AddedToProject,
    /// The issue was moved between project board columns.
    MovedColumnsInProject,
    /// A board note was converted into this issue.
    ConvertedNoteToIssue,
    /// The issue was removed from a project board.
    RemovedFromProject,
    /// The issue was closed.
    Closed,
    /// Any event kind not tracked by the board pipeline.
    #[serde(other)]
    Other,
}

/// Project-card payload attached to board events.
///
/// The tracker omits sub-fields freely; a payload missing the pieces a rule
/// needs is treated as non-matching, never as an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProjectCard {
    /// Identifier of the project board the card belongs to.
    pub project_id: Option<u64>,
    /// Column the card sits in after the event.
    pub column_name: Option<String>,
    /// Column the card sat in before the event, if any.
    pub previous_column_name: Option<String>,
}

/// One raw event from the tracker's per-issue history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEvent {
    /// Kind tag of the event.
    pub event: RawEventKind,
    /// When the event was recorded.
    pub created_at: DateTime<Utc>,
    /// Project-card payload, present only on board events.
    pub project_card: Option<ProjectCard>,
}

impl RawEvent {
    /// Creates an event without a project-card payload.
    #[must_use]
    pub const fn new(event: RawEventKind, created_at: DateTime<Utc>) -> Self {
        Self {
            event,
            created_at,
            project_card: None,
        }
    }

    /// Attaches a project-card payload.
    #[must_use]
    pub fn with_project_card(mut self, card: ProjectCard) -> Self {
        self.project_card = Some(card);
        self
    }
}
