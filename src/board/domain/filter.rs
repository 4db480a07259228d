//! Normalization of raw tracker events into board operations.

use super::{BoardConfig, BoardOperation, ProjectCard, RawEvent, RawEventKind};

/// Pure filter mapping one issue's raw event history onto board operations.
///
/// First matching rule wins; events that match no rule — including board
/// events with malformed or partially-absent payloads — are dropped
/// silently. The filter never errors and has no side effects.
#[derive(Debug, Clone, Copy)]
pub struct EventFilter<'a> {
    config: &'a BoardConfig,
}

impl<'a> EventFilter<'a> {
    /// Creates a filter for the configured project board.
    #[must_use]
    pub const fn new(config: &'a BoardConfig) -> Self {
        Self { config }
    }

    /// Maps a chronologically-ascending event sequence onto board
    /// operations, preserving order.
    #[must_use]
    pub fn operations(&self, events: &[RawEvent]) -> Vec<BoardOperation> {
        events
            .iter()
            .filter_map(|event| self.map_event(event))
            .collect()
    }

    fn map_event(&self, event: &RawEvent) -> Option<BoardOperation> {
        let date = event.created_at.date_naive();
        match event.event {
            RawEventKind::AddedToProject
            | RawEventKind::MovedColumnsInProject
            | RawEventKind::ConvertedNoteToIssue => {
                self.map_board_event(event.project_card.as_ref()?, date)
            }
            RawEventKind::RemovedFromProject => Some(BoardOperation::Reset),
            RawEventKind::Closed => Some(BoardOperation::Closed { date }),
            RawEventKind::Other => None,
        }
    }

    fn map_board_event(
        &self,
        card: &ProjectCard,
        date: chrono::NaiveDate,
    ) -> Option<BoardOperation> {
        if card.project_id? != self.config.project_id() {
            return None;
        }
        let column = card.column_name.as_ref()?;
        if self.config.is_ignored(column) {
            return Some(BoardOperation::Reset);
        }
        Some(BoardOperation::Enter {
            column: column.clone(),
            previous_column: card.previous_column_name.clone(),
            date,
        })
    }
}
