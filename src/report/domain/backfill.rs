//! Backward propagation of stage dates across skipped stages.

use super::StageRow;
use crate::board::domain::Stage;

/// Stage pairs evaluated in order, latest first; each rule re-reads the row
/// so a single pass cascades all the way back.
const BACKFILL_RULES: [(Stage, Stage); 4] = [
    (Stage::ApprovedForProd, Stage::DeployedToTest),
    (Stage::DeployedToTest, Stage::ApprovedForTest),
    (Stage::ApprovedForTest, Stage::Development),
    (Stage::Development, Stage::Backlog),
];

/// Fills empty earlier-stage dates from populated later-stage dates.
///
/// A ticket that reached a later stage must have passed through the earlier
/// ones even when no discrete event recorded the transition. Propagation is
/// strictly backward: populated fields are never overwritten and earlier
/// dates never flow forward.
pub fn backfill(row: &mut StageRow) {
    for (later, earlier) in BACKFILL_RULES {
        if row.stage_date(earlier).is_none()
            && let Some(date) = row.stage_date(later)
        {
            row.set_stage_date(earlier, date);
        }
    }
}
