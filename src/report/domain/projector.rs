//! Projection of a finished timeline onto the fixed report row.

use super::StageRow;
use crate::board::domain::{Issue, Stage, StageCatalog, Timeline};

/// Maps a finished timeline, plus the issue's closed date, onto a
/// [`StageRow`].
#[derive(Debug, Clone, Copy)]
pub struct ColumnProjector<'a> {
    catalog: &'a StageCatalog,
}

impl<'a> ColumnProjector<'a> {
    /// Creates a projector over the configured stage catalog.
    #[must_use]
    pub const fn new(catalog: &'a StageCatalog) -> Self {
        Self { catalog }
    }

    /// Projects the timeline onto a row.
    ///
    /// Each entry is tested against every stage's match rule independently,
    /// with later entries overwriting earlier ones on the same field. When
    /// the issue is closed and no entry reached the final stage, the closed
    /// date stands in for it: closure is a fallback signal of "reached
    /// production".
    #[must_use]
    pub fn project(&self, issue: &Issue, timeline: &Timeline) -> StageRow {
        let mut row = StageRow::new(
            issue.number(),
            issue.title(),
            issue.label().map(str::to_owned),
        );
        for entry in timeline.entries() {
            for stage in Stage::ALL {
                if self.catalog.matches(stage, entry.column()) {
                    row.set_stage_date(stage, entry.date());
                }
            }
        }
        if let Some(closed_date) = issue.closed_date()
            && row.stage_date(Stage::ApprovedForProd).is_none()
        {
            row.set_stage_date(Stage::ApprovedForProd, closed_date);
        }
        row
    }
}
